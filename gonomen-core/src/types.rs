//! Inputs describing one generated unit.
//!
//! A unit is either a single model or the set of operations sharing one
//! API file. The host pipeline builds these from its parsed document.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{CompositionKind, SchemaType};

/// A property of an object model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInput {
    /// Wire name of the property.
    pub name: String,
    pub schema: SchemaType,
    #[serde(default)]
    pub required: bool,
    /// Validation pattern, possibly wrapped in `/` delimiters.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Serialize as an XML attribute instead of an element.
    #[serde(default)]
    pub xml_attribute: bool,
    /// Extra struct tag fragment supplied by the schema author.
    #[serde(default)]
    pub custom_tag: Option<String>,
    /// Schema `default`, in its source spelling.
    #[serde(default)]
    pub default: Option<String>,
}

impl PropertyInput {
    /// Create an optional property without pattern or custom tag.
    pub fn new(name: impl Into<String>, schema: SchemaType) -> Self {
        Self {
            name: name.into(),
            schema,
            required: false,
            pattern: None,
            xml_attribute: false,
            custom_tag: None,
            default: None,
        }
    }

    /// Mark the property as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set a validation pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set a custom tag fragment.
    pub fn with_custom_tag(mut self, tag: impl Into<String>) -> Self {
        self.custom_tag = Some(tag.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A composition declared by a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionInput {
    pub kind: CompositionKind,
    pub members: Vec<SchemaType>,
}

/// An enumeration declared by a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumInput {
    /// Primitive type token backing the values (e.g. `string`, `integer`).
    pub backing: String,
    pub values: Vec<String>,
}

/// A named model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInput {
    /// Schema name as registered under components/definitions.
    pub name: String,
    #[serde(default)]
    pub properties: Vec<PropertyInput>,
    #[serde(default)]
    pub composition: Option<CompositionInput>,
    #[serde(default, rename = "enum")]
    pub enumeration: Option<EnumInput>,
}

impl ModelInput {
    /// Create an object model with no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            composition: None,
            enumeration: None,
        }
    }

    /// Add a property.
    pub fn with_property(mut self, property: PropertyInput) -> Self {
        self.properties.push(property);
        self
    }

    /// Declare a composition.
    pub fn with_composition(mut self, kind: CompositionKind, members: Vec<SchemaType>) -> Self {
        self.composition = Some(CompositionInput { kind, members });
        self
    }

    /// Declare an enumeration.
    pub fn with_enum(mut self, backing: impl Into<String>, values: &[&str]) -> Self {
        self.enumeration = Some(EnumInput {
            backing: backing.into(),
            values: values.iter().map(|v| v.to_string()).collect(),
        });
        self
    }
}

/// Where an operation parameter is carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterLocation {
    Path,
    #[default]
    Query,
    Header,
    Cookie,
    Form,
    Body,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
            ParameterLocation::Form => "form",
            ParameterLocation::Body => "body",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInput {
    pub name: String,
    pub schema: SchemaType,
    #[serde(default)]
    pub location: ParameterLocation,
    #[serde(default)]
    pub required: bool,
    /// `collectionFormat: multi` / `explode: true` array parameter.
    #[serde(default)]
    pub collection_format_multi: bool,
}

impl ParameterInput {
    /// Create an optional parameter at the given location.
    pub fn new(name: impl Into<String>, schema: SchemaType, location: ParameterLocation) -> Self {
        Self {
            name: name.into(),
            schema,
            location,
            required: location == ParameterLocation::Path,
            collection_format_multi: false,
        }
    }

    /// Mark the parameter as collection format multi.
    pub fn multi(mut self) -> Self {
        self.collection_format_multi = true;
        self
    }
}

/// An API operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationInput {
    pub operation_id: String,
    pub http_method: String,
    #[serde(default)]
    pub parameters: Vec<ParameterInput>,
    #[serde(default)]
    pub return_type: Option<SchemaType>,
}

impl OperationInput {
    /// Create an operation with no parameters and no return type.
    pub fn new(operation_id: impl Into<String>, http_method: impl Into<String>) -> Self {
        Self {
            operation_id: operation_id.into(),
            http_method: http_method.into(),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    /// Add a parameter.
    pub fn with_parameter(mut self, parameter: ParameterInput) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the return type.
    pub fn returning(mut self, ty: SchemaType) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Whether any parameter is carried in the path.
    pub fn has_path_params(&self) -> bool {
        self.parameters
            .iter()
            .any(|p| p.location == ParameterLocation::Path)
    }
}
