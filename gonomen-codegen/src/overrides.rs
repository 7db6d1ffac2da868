//! User-supplied name overrides.

use gonomen_core::{Error, IdentifierCategory, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Explicit name → name tables supplied by the user.
///
/// An entry takes absolute precedence over every computed naming rule and
/// bypasses sanitization and reserved-word handling. Callers are
/// responsible for the legality of the replacement, except that it may not
/// be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOverrides {
    /// Field/variable names (`nameMappings`).
    #[serde(default)]
    pub variables: IndexMap<String, String>,
    /// Operation parameter names.
    #[serde(default)]
    pub parameters: IndexMap<String, String>,
    /// Model names, also applied before computing model file names.
    #[serde(default)]
    pub models: IndexMap<String, String>,
    /// Enum constant and enum type names.
    #[serde(default)]
    pub enum_constants: IndexMap<String, String>,
    /// Replacement for reserved words; keys become reserved.
    #[serde(default)]
    pub reserved_words: IndexMap<String, String>,
}

impl NameOverrides {
    /// Create an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject entries that map to an empty identifier.
    pub fn validate(&self) -> Result<()> {
        let tables = [
            ("variable", &self.variables),
            ("parameter", &self.parameters),
            ("model", &self.models),
            ("enum", &self.enum_constants),
            ("reserved word", &self.reserved_words),
        ];
        for (table, entries) in tables {
            if let Some((name, _)) = entries.iter().find(|(_, v)| v.trim().is_empty()) {
                return Err(Error::EmptyOverride {
                    table,
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }

    /// The table consulted for a category, if any.
    ///
    /// File names and operations have no table of their own; model file
    /// names go through the model table.
    pub fn table(&self, category: IdentifierCategory) -> Option<&IndexMap<String, String>> {
        match category {
            IdentifierCategory::Variable => Some(&self.variables),
            IdentifierCategory::Parameter => Some(&self.parameters),
            IdentifierCategory::ModelName | IdentifierCategory::ModelFileName => {
                Some(&self.models)
            }
            IdentifierCategory::EnumConstant | IdentifierCategory::EnumTypeName => {
                Some(&self.enum_constants)
            }
            IdentifierCategory::OperationFileName
            | IdentifierCategory::OperationTestFileName
            | IdentifierCategory::Operation => None,
        }
    }

    /// Look up an override for a key in a category's table.
    pub fn lookup(&self, category: IdentifierCategory, key: &str) -> Option<&str> {
        self.table(category)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Builder-style insert into a category's table.
    ///
    /// Categories without a table are ignored.
    pub fn with(
        mut self,
        category: IdentifierCategory,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let table = match category {
            IdentifierCategory::Variable => &mut self.variables,
            IdentifierCategory::Parameter => &mut self.parameters,
            IdentifierCategory::ModelName | IdentifierCategory::ModelFileName => &mut self.models,
            IdentifierCategory::EnumConstant | IdentifierCategory::EnumTypeName => {
                &mut self.enum_constants
            }
            _ => return self,
        };
        table.insert(key.into(), value.into());
        self
    }

    /// Builder-style insert into the reserved-word table.
    pub fn with_reserved_word(mut self, word: impl Into<String>, value: impl Into<String>) -> Self {
        self.reserved_words.insert(word.into(), value.into());
        self
    }
}
