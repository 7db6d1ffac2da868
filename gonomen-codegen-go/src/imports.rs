//! Per-unit import aggregation.

use gonomen_codegen::generation::{ImportCollector, ImportSubstitutions};
use tracing::debug;

use crate::type_mapper::package_of;

/// Imports required by one generated unit (a model file or an API file).
///
/// Each trigger fires at most once; the final list keeps first-seen order.
#[derive(Debug, Clone, Default)]
pub struct UnitImports {
    collected: ImportCollector,
}

impl UnitImports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the package a declared type lives in, if any.
    pub fn add_type(&mut self, data_type: &str) -> bool {
        match package_of(data_type) {
            Some(package) => self.collected.add(package),
            None => false,
        }
    }

    /// Record an explicit import path.
    pub fn require(&mut self, path: &str) -> bool {
        self.collected.add(path)
    }

    /// Drop imports of the unit's own package and apply substitutions.
    pub fn finish(mut self, own_package: &str, substitutions: &ImportSubstitutions) -> Vec<String> {
        self.collected.remove_prefixed(own_package);
        debug!(imports = self.collected.len(), "collected unit imports");
        if self.collected.is_empty() || substitutions.is_empty() {
            return self.collected.to_vec();
        }
        self.collected.substitute(substitutions).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_trigger_once() {
        let mut imports = UnitImports::new();
        assert!(imports.add_type("time.Time"));
        assert!(!imports.add_type("[]time.Time"));
        assert!(!imports.add_type("int32"));
        assert!(imports.add_type("*os.File"));
        assert!(imports.require("strings"));
        assert!(!imports.require("strings"));

        assert_eq!(
            imports.finish("", &ImportSubstitutions::new()),
            vec!["time", "os", "strings"]
        );
    }

    #[test]
    fn test_finish_removes_own_package_and_substitutes() {
        let mut imports = UnitImports::new();
        imports.require("github.com/acme/pets/models");
        imports.require("time");
        imports.require("uuid");

        let table = ImportSubstitutions::new().with("uuid", ["github.com/google/uuid"]);
        assert_eq!(
            imports.finish("github.com/acme/pets", &table),
            vec!["time", "github.com/google/uuid"]
        );
    }
}
