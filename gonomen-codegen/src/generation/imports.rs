//! Import collection utilities.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Tracks import paths for one generated unit and deduplicates them.
///
/// Maintains insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use gonomen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("strings");
/// imports.add("time");
/// imports.add("strings");
///
/// assert_eq!(imports.to_vec(), vec!["strings", "time"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCollector {
    paths: IndexSet<String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import path. Returns `false` if it was already present.
    pub fn add(&mut self, path: &str) -> bool {
        if self.paths.contains(path) {
            return false;
        }
        self.paths.insert(path.to_string())
    }

    /// Drop every path starting with `prefix`.
    ///
    /// Used to remove imports of the unit's own package.
    pub fn remove_prefixed(&mut self, prefix: &str) {
        if prefix.is_empty() {
            return;
        }
        self.paths.retain(|path| !path.starts_with(prefix));
    }

    /// Replace every path found in the table by its alternatives.
    ///
    /// Order follows the original insertion order; alternatives take the
    /// slot of the path they replace. Duplicates are suppressed.
    pub fn substitute(&self, table: &ImportSubstitutions) -> ImportCollector {
        let mut expanded = ImportCollector::new();
        for path in &self.paths {
            match table.get(path) {
                Some(alternatives) => {
                    for alternative in alternatives {
                        expanded.add(alternative);
                    }
                }
                None => {
                    expanded.add(path);
                }
            }
        }
        expanded
    }

    /// Collect the paths into a vector.
    pub fn to_vec(&self) -> Vec<String> {
        self.paths.iter().cloned().collect()
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Get the number of paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

/// Static table mapping one import path to the concrete paths satisfying it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportSubstitutions {
    table: IndexMap<String, Vec<String>>,
}

impl ImportSubstitutions {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the alternatives for a path.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        alternatives: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.table.insert(
            path.into(),
            alternatives.into_iter().map(Into::into).collect(),
        );
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(
        mut self,
        path: impl Into<String>,
        alternatives: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.insert(path, alternatives);
        self
    }

    /// Get the alternatives for a path.
    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.table.get(path).map(Vec::as_slice)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
