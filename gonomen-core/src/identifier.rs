//! Identifier categories and naming requests.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The syntactic role a generated identifier plays.
///
/// Each category has its own casing, escaping and override table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierCategory {
    Variable,
    Parameter,
    ModelName,
    ModelFileName,
    OperationFileName,
    OperationTestFileName,
    EnumConstant,
    EnumTypeName,
    Operation,
}

impl IdentifierCategory {
    /// All categories, in declaration order.
    pub const ALL: [IdentifierCategory; 9] = [
        IdentifierCategory::Variable,
        IdentifierCategory::Parameter,
        IdentifierCategory::ModelName,
        IdentifierCategory::ModelFileName,
        IdentifierCategory::OperationFileName,
        IdentifierCategory::OperationTestFileName,
        IdentifierCategory::EnumConstant,
        IdentifierCategory::EnumTypeName,
        IdentifierCategory::Operation,
    ];

    /// Get the category name as used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierCategory::Variable => "variable",
            IdentifierCategory::Parameter => "parameter",
            IdentifierCategory::ModelName => "model_name",
            IdentifierCategory::ModelFileName => "model_file_name",
            IdentifierCategory::OperationFileName => "operation_file_name",
            IdentifierCategory::OperationTestFileName => "operation_test_file_name",
            IdentifierCategory::EnumConstant => "enum_constant",
            IdentifierCategory::EnumTypeName => "enum_type_name",
            IdentifierCategory::Operation => "operation",
        }
    }
}

impl fmt::Display for IdentifierCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('-', "_");
        IdentifierCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| {
                let valid: Vec<&str> = IdentifierCategory::ALL.iter().map(|c| c.as_str()).collect();
                format!(
                    "unknown identifier category '{}', expected one of: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}

/// A request to name something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRequest {
    /// The raw name as it appears in the schema.
    pub raw: String,
    pub category: IdentifierCategory,
    /// Key to look up in the override tables instead of `raw`.
    pub override_key: Option<String>,
    /// Data type backing an enum constant. Ignored by other categories.
    pub backing_type: Option<String>,
}

impl IdentifierRequest {
    /// Create a request for the given raw name and category.
    pub fn new(raw: impl Into<String>, category: IdentifierCategory) -> Self {
        Self {
            raw: raw.into(),
            category,
            override_key: None,
            backing_type: None,
        }
    }

    /// Look up overrides under a different key.
    pub fn with_override_key(mut self, key: impl Into<String>) -> Self {
        self.override_key = Some(key.into());
        self
    }

    /// Set the enum backing data type.
    pub fn with_backing_type(mut self, ty: impl Into<String>) -> Self {
        self.backing_type = Some(ty.into());
        self
    }

    /// The key used for override lookups.
    pub fn lookup_key(&self) -> &str {
        self.override_key.as_deref().unwrap_or(&self.raw)
    }
}
