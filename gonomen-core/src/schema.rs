//! Language-neutral description of API data shapes.
//!
//! These types are what the host pipeline hands to the engine after it has
//! parsed an API description document. They carry no target-language
//! knowledge; resolvers turn them into concrete declarations.

use serde::{Deserialize, Serialize};

/// Prefix of an OpenAPI 3 component reference.
pub const COMPONENTS_REF_PREFIX: &str = "#/components/schemas/";
/// Prefix of a Swagger 2 definition reference.
pub const DEFINITIONS_REF_PREFIX: &str = "#/definitions/";

/// An abstract schema type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaType {
    /// A primitive type token such as `integer`, `string` or `DateTime`.
    Primitive { name: String },
    /// An ordered list. `items` may be absent (OAS 3.1).
    Array {
        #[serde(default)]
        items: Option<Box<SchemaType>>,
        #[serde(default)]
        nullable_items: bool,
    },
    /// A string-keyed map, optionally spelled through a named container.
    Map {
        values: Box<SchemaType>,
        #[serde(default)]
        container: Option<String>,
    },
    /// A `$ref` to a named schema.
    Reference { reference: String },
    /// An object without declared properties.
    FreeForm,
    /// A single unconstrained value.
    Any,
    /// An enumeration of literal values over a primitive backing type.
    Enum {
        backing: String,
        #[serde(default)]
        values: Vec<String>,
    },
    /// A oneOf/anyOf/allOf composition.
    Composed {
        composition: CompositionKind,
        members: Vec<SchemaType>,
    },
}

impl SchemaType {
    /// Shorthand for a primitive type.
    pub fn primitive(name: impl Into<String>) -> Self {
        SchemaType::Primitive { name: name.into() }
    }

    /// Shorthand for an array with non-nullable items.
    pub fn array(items: SchemaType) -> Self {
        SchemaType::Array {
            items: Some(Box::new(items)),
            nullable_items: false,
        }
    }

    /// Shorthand for an array whose items may be null.
    pub fn nullable_array(items: SchemaType) -> Self {
        SchemaType::Array {
            items: Some(Box::new(items)),
            nullable_items: true,
        }
    }

    /// Shorthand for a plain `map` container.
    pub fn map(values: SchemaType) -> Self {
        SchemaType::Map {
            values: Box::new(values),
            container: None,
        }
    }

    /// Shorthand for a reference to `#/components/schemas/{name}`.
    pub fn component(name: &str) -> Self {
        SchemaType::Reference {
            reference: format!("{COMPONENTS_REF_PREFIX}{name}"),
        }
    }

    /// Whether this is the literal `null` type.
    pub fn is_null(&self) -> bool {
        matches!(self, SchemaType::Primitive { name } if name == "null")
    }

    /// Whether this is a `$ref`.
    pub fn is_reference(&self) -> bool {
        matches!(self, SchemaType::Reference { .. })
    }
}

/// The kind of a composed schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionKind {
    AnyOf,
    OneOf,
    AllOf,
}

impl CompositionKind {
    /// Whether a literal `null` member makes the owning model nullable.
    pub fn absorbs_null(&self) -> bool {
        matches!(self, CompositionKind::AnyOf | CompositionKind::OneOf)
    }
}

/// Name of the schema a reference points at.
///
/// Direct component/definition references yield the bare schema name; any
/// other reference yields its final path segment.
///
/// ```
/// use gonomen_core::reference_name;
///
/// assert_eq!(reference_name("#/components/schemas/Pet"), ("Pet", true));
/// assert_eq!(reference_name("#/definitions/Pet"), ("Pet", true));
/// assert_eq!(reference_name("./common.yaml#/Error"), ("Error", false));
/// ```
pub fn reference_name(reference: &str) -> (&str, bool) {
    for prefix in [COMPONENTS_REF_PREFIX, DEFINITIONS_REF_PREFIX] {
        match reference.strip_prefix(prefix) {
            Some(name) if !name.is_empty() && !name.contains('/') => return (name, true),
            _ => {}
        }
    }
    let last = reference.rsplit('/').next().unwrap_or(reference);
    (last.rsplit('#').next().unwrap_or(last), false)
}
