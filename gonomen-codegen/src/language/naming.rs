//! Naming conventions and reserved-word tables for target languages.

use std::collections::HashSet;

use gonomen_core::{Error, Result};
use indexmap::IndexMap;

/// Language-specific naming conventions.
///
/// Defines the reserved words of a language, how a colliding name is
/// escaped, and which file-name suffixes carry meaning for its build tool.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Keywords, predeclared types and words reserved for generator ergonomics.
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "import" -> "Import_" in Go)
    pub escape_reserved: fn(&str) -> String,
    /// Last `_`-separated file name segments the build tool interprets.
    pub reserved_file_suffixes: &'static [&'static str],
    /// Marker appended to a file name whose suffix is reserved.
    pub file_suffix_marker: char,
    /// Spelled-out names for symbol-only values (e.g., "$" -> "Dollar").
    pub symbol_names: &'static [(&'static str, &'static str)],
}

impl NamingConvention {
    /// Check if a file name ends in a build-significant suffix.
    pub fn is_reserved_file_name(&self, name: &str) -> bool {
        let suffix = name.rsplit('_').next().unwrap_or(name);
        self.reserved_file_suffixes.contains(&suffix)
    }

    /// Make a file name safe, appending the marker when its suffix is reserved.
    pub fn safe_file_name(&self, name: &str) -> String {
        if self.is_reserved_file_name(name) {
            format!("{}{}", name, self.file_suffix_marker)
        } else {
            name.to_string()
        }
    }

    /// Look up the spelled-out name of a symbol-only value.
    pub fn symbol_name(&self, value: &str) -> Option<&'static str> {
        self.symbol_names
            .iter()
            .find(|(symbol, _)| *symbol == value)
            .map(|(_, name)| *name)
    }
}

/// Frozen reserved-word table for one generation run.
///
/// Built once from a [`NamingConvention`] plus the user's reserved-word
/// mappings, then only read. Construction verifies that escaping any
/// reserved word never yields another reserved word.
#[derive(Debug, Clone)]
pub struct ReservedWords {
    /// Lower-cased language words; membership is case-insensitive.
    words: HashSet<String>,
    /// Reserved word -> replacement; membership is exact.
    mappings: IndexMap<String, String>,
    escape: fn(&str) -> String,
}

impl ReservedWords {
    /// Build and validate the table.
    pub fn new(convention: &NamingConvention, mappings: IndexMap<String, String>) -> Result<Self> {
        let table = Self {
            words: convention
                .reserved_words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            mappings,
            escape: convention.escape_reserved,
        };
        table.verify()?;
        Ok(table)
    }

    fn verify(&self) -> Result<()> {
        let mut words: Vec<&String> = self.words.iter().collect();
        words.sort();
        for word in words.into_iter().chain(self.mappings.keys()) {
            let escaped = self.escape(word);
            if escaped.is_empty() {
                return Err(Error::EmptyOverride {
                    table: "reserved word",
                    name: word.clone(),
                });
            }
            if self.is_reserved(&escaped) {
                return Err(Error::EscapeCollision {
                    name: word.clone(),
                    escaped,
                });
            }
        }
        Ok(())
    }

    /// Check if a name collides with a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.mappings.contains_key(name) || self.words.contains(&name.to_lowercase())
    }

    /// Escape a reserved word, preferring the user's mapping.
    pub fn escape(&self, name: &str) -> String {
        match self.mappings.get(name) {
            Some(mapped) => mapped.clone(),
            None => (self.escape)(name),
        }
    }

    /// Number of language words in the table (mappings excluded).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table has no language words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix_escape(name: &str) -> String {
        format!("{}_", name)
    }

    fn prefix_escape(name: &str) -> String {
        format!("_{}", name)
    }

    const TEST_NAMING: NamingConvention = NamingConvention {
        reserved_words: &["if", "type", "Error"],
        escape_reserved: suffix_escape,
        reserved_file_suffixes: &["test", "linux"],
        file_suffix_marker: '_',
        symbol_names: &[("$", "Dollar"), ("#", "Hash")],
    };

    #[test]
    fn test_reserved_is_case_insensitive() {
        let table = ReservedWords::new(&TEST_NAMING, IndexMap::new()).unwrap();
        assert!(table.is_reserved("type"));
        assert!(table.is_reserved("Type"));
        assert!(table.is_reserved("error"));
        assert!(!table.is_reserved("type_"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_mapping_keys_are_reserved_and_take_precedence() {
        let mut mappings = IndexMap::new();
        mappings.insert("type".to_string(), "kind".to_string());
        mappings.insert("Client".to_string(), "ApiClient".to_string());
        let table = ReservedWords::new(&TEST_NAMING, mappings).unwrap();

        assert!(table.is_reserved("Client"));
        assert!(!table.is_reserved("client"));
        assert_eq!(table.escape("type"), "kind");
        assert_eq!(table.escape("if"), "if_");
        assert_eq!(table.escape("Client"), "ApiClient");
        assert!(!table.is_reserved("hello"));
    }

    #[test]
    fn test_escape_collision_rejected() {
        let colliding = NamingConvention {
            reserved_words: &["if", "_if"],
            escape_reserved: prefix_escape,
            ..TEST_NAMING
        };
        let err = ReservedWords::new(&colliding, IndexMap::new()).unwrap_err();
        assert_eq!(
            err,
            Error::EscapeCollision {
                name: "if".to_string(),
                escaped: "_if".to_string(),
            }
        );
    }

    #[test]
    fn test_mapping_onto_reserved_word_rejected() {
        let mut mappings = IndexMap::new();
        mappings.insert("kind".to_string(), "type".to_string());
        let err = ReservedWords::new(&TEST_NAMING, mappings).unwrap_err();
        assert_eq!(err.name(), "kind");
    }

    #[test]
    fn test_reserved_file_names() {
        assert!(TEST_NAMING.is_reserved_file_name("api_pet_test"));
        assert!(TEST_NAMING.is_reserved_file_name("model_linux"));
        assert!(!TEST_NAMING.is_reserved_file_name("model_pet"));
        assert_eq!(TEST_NAMING.safe_file_name("model_linux"), "model_linux_");
        assert_eq!(TEST_NAMING.safe_file_name("model_linux_"), "model_linux_");
    }

    #[test]
    fn test_symbol_names() {
        assert_eq!(TEST_NAMING.symbol_name("$"), Some("Dollar"));
        assert_eq!(TEST_NAMING.symbol_name("%"), None);
    }
}
