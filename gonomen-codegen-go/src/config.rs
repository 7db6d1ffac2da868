//! Go generator options.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Options recognised by the Go engine.
///
/// Mirrors the `[generator]` table of `gonomen.toml`. Every field has a
/// default so an empty table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoConfig {
    /// Emit `xml:"..."` struct tags.
    #[serde(default)]
    pub with_xml: bool,
    /// Rule emitted as `validate:"<rule>"`; validation tags are off when absent.
    #[serde(default)]
    pub validate: Option<String>,
    /// Models get a custom `MarshalJSON`.
    #[serde(default = "default_true")]
    pub generate_marshal_json: bool,
    /// Models get a custom `UnmarshalJSON`.
    #[serde(default = "default_true")]
    pub generate_unmarshal_json: bool,
    /// Enum model templates format values with `fmt`.
    #[serde(default = "default_true")]
    pub enum_fmt_import: bool,
    #[serde(default)]
    pub model_name_prefix: String,
    #[serde(default)]
    pub model_name_suffix: String,
    /// Import path of the generated models package.
    #[serde(default)]
    pub model_package: String,
    /// Import path of the generated API package.
    #[serde(default)]
    pub api_package: String,
    /// Formatter command run on every generated Go file.
    #[serde(default)]
    pub post_process: Option<Vec<String>>,
}

impl Default for GoConfig {
    fn default() -> Self {
        Self {
            with_xml: false,
            validate: None,
            generate_marshal_json: true,
            generate_unmarshal_json: true,
            enum_fmt_import: true,
            model_name_prefix: String::new(),
            model_name_suffix: String::new(),
            model_package: String::new(),
            api_package: String::new(),
            post_process: None,
        }
    }
}

impl GoConfig {
    /// Whether validation tags are emitted.
    pub fn validation_enabled(&self) -> bool {
        self.validate.as_deref().is_some_and(|rule| !rule.is_empty())
    }
}
