//! Planned names, types and tags handed to templates.

use gonomen_core::ParameterLocation;
use serde::Serialize;

/// One struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPlan {
    pub name: String,
    /// Property name on the wire.
    pub base_name: String,
    pub data_type: String,
    /// Tag literal with its leading space, e.g. `` `json:"id"` ``.
    pub tag: String,
    pub is_container_like: bool,
    /// Go spelling of the schema default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// One constant of an enum model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumVariantPlan {
    pub name: String,
    /// Go literal of the value.
    pub value: String,
}

/// Everything decided about one model file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelPlan {
    pub name: String,
    pub file_name: String,
    pub fields: Vec<FieldPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_type_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_variants: Vec<EnumVariantPlan>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<String>,
    /// A `null` member was dropped from the composition.
    pub nullable: bool,
    pub generate_marshal_json: bool,
    pub generate_unmarshal_json: bool,
    pub imports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterPlan {
    pub name: String,
    pub export_name: String,
    pub data_type: String,
    pub location: ParameterLocation,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationPlan {
    pub name: String,
    pub http_method: String,
    pub parameters: Vec<ParameterPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

/// Everything decided about one API file and its test file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationsPlan {
    pub file_name: String,
    pub test_file_name: String,
    pub operations: Vec<OperationPlan>,
    pub imports: Vec<String>,
}
