//! Schema type to Go declaration resolution.

use gonomen_codegen::TypeMapper;
use gonomen_core::{CompositionKind, Error, Result, SchemaType, reference_name};
use indexmap::IndexSet;
use tracing::debug;

use crate::{naming::GoNaming, type_mapper::GoTypeMapper};

/// Names of the models known to a run.
///
/// Direct component references must point at a registered model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelRegistry {
    names: IndexSet<String>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw schema name. Returns `false` if it was already known.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for ModelRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A composition with its `null` members removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedComposition {
    pub kind: CompositionKind,
    pub members: Vec<SchemaType>,
    /// A `null` member was absorbed; the owning model is nullable.
    pub nullable: bool,
}

/// Strip literal `null` members from a oneOf/anyOf.
///
/// allOf members are returned untouched.
pub fn normalize_composition(kind: CompositionKind, members: &[SchemaType]) -> NormalizedComposition {
    if !kind.absorbs_null() {
        return NormalizedComposition {
            kind,
            members: members.to_vec(),
            nullable: false,
        };
    }

    let kept: Vec<SchemaType> = members.iter().filter(|m| !m.is_null()).cloned().collect();
    let nullable = kept.len() != members.len();
    NormalizedComposition {
        kind,
        members: kept,
        nullable,
    }
}

/// Whether a schema type is rendered as a container (slice, map or `interface{}`).
pub fn is_container_like(schema: &SchemaType) -> bool {
    match schema {
        SchemaType::Array { .. }
        | SchemaType::Map { .. }
        | SchemaType::FreeForm
        | SchemaType::Any => true,
        SchemaType::Primitive { name } => name == "object" || name == "AnyType",
        _ => false,
    }
}

/// Resolves schema types to Go declarations.
#[derive(Debug, Clone, Copy)]
pub struct GoTypeResolver<'a> {
    naming: &'a GoNaming,
    models: &'a ModelRegistry,
    mapper: GoTypeMapper,
}

impl<'a> GoTypeResolver<'a> {
    pub fn new(naming: &'a GoNaming, models: &'a ModelRegistry) -> Self {
        Self {
            naming,
            models,
            mapper: GoTypeMapper,
        }
    }

    /// Resolve a schema type to a Go type declaration.
    ///
    /// Fails only on a direct component reference to an unregistered model.
    pub fn resolve(&self, schema: &SchemaType) -> Result<String> {
        match schema {
            SchemaType::Primitive { name } => Ok(self.primitive(name)),
            SchemaType::Array {
                items,
                nullable_items,
            } => {
                let inner = match items {
                    Some(items) => self.resolve(items)?,
                    None => self.mapper.any_type().to_string(),
                };
                let inner = if *nullable_items {
                    self.mapper.map_nullable(&inner)
                } else {
                    inner
                };
                Ok(self.mapper.map_array(&inner))
            }
            SchemaType::Map { values, container } => {
                let value = self.resolve(values)?;
                let container = container.as_deref().map(|hint| {
                    if hint == "map" || self.mapper.is_language_type(hint) {
                        hint.to_string()
                    } else {
                        self.naming.model_name(hint)
                    }
                });
                Ok(self.mapper.map_map(container.as_deref(), &value))
            }
            SchemaType::Reference { reference } => self.reference(reference),
            SchemaType::FreeForm => Ok(self.mapper.free_form_type().to_string()),
            SchemaType::Any => Ok(self.mapper.any_type().to_string()),
            SchemaType::Enum { backing, .. } => Ok(self.primitive(backing)),
            SchemaType::Composed { members, .. } => {
                let mut concrete = members.iter().filter(|m| !m.is_null());
                match (concrete.next(), concrete.next()) {
                    (Some(single), None) => self.resolve(single),
                    _ => Ok(self.mapper.any_type().to_string()),
                }
            }
        }
    }

    fn primitive(&self, token: &str) -> String {
        if let Some(go) = self.mapper.map_primitive(token) {
            return go.to_string();
        }
        if self.mapper.is_language_type(token) {
            return token.to_string();
        }
        debug!(token, "unknown primitive, treating as a model");
        self.naming.model_name(token)
    }

    fn reference(&self, reference: &str) -> Result<String> {
        let (name, direct) = reference_name(reference);
        if direct && !self.models.contains(name) {
            return Err(Error::DanglingReference {
                reference: reference.to_string(),
                name: name.to_string(),
            });
        }
        Ok(self.naming.model_name(name))
    }
}

#[cfg(test)]
mod tests {
    use gonomen_core::ErrorKind;

    use super::*;

    fn resolve(schema: &SchemaType) -> Result<String> {
        let naming = GoNaming::standard().unwrap();
        let models: ModelRegistry = ["Pet", "200Response", "Category"].into_iter().collect();
        GoTypeResolver::new(&naming, &models).resolve(schema)
    }

    #[test]
    fn test_resolve_primitives() {
        assert_eq!(resolve(&SchemaType::primitive("integer")).unwrap(), "int32");
        assert_eq!(resolve(&SchemaType::primitive("DateTime")).unwrap(), "time.Time");
        assert_eq!(resolve(&SchemaType::primitive("binary")).unwrap(), "io.ReadCloser");
        assert_eq!(resolve(&SchemaType::primitive("int64")).unwrap(), "int64");
        assert_eq!(resolve(&SchemaType::primitive("object")).unwrap(), "map[string]interface{}");
        assert_eq!(resolve(&SchemaType::primitive("pet_tag")).unwrap(), "PetTag");
    }

    #[test]
    fn test_resolve_containers() {
        assert_eq!(
            resolve(&SchemaType::array(SchemaType::primitive("integer"))).unwrap(),
            "[]int32"
        );
        assert_eq!(
            resolve(&SchemaType::nullable_array(SchemaType::component("Pet"))).unwrap(),
            "[]*Pet"
        );
        assert_eq!(
            resolve(&SchemaType::Array {
                items: None,
                nullable_items: false
            })
            .unwrap(),
            "[]interface{}"
        );
        assert_eq!(
            resolve(&SchemaType::map(SchemaType::array(SchemaType::primitive("string")))).unwrap(),
            "map[string][]string"
        );
        assert_eq!(
            resolve(&SchemaType::Map {
                values: Box::new(SchemaType::primitive("string")),
                container: Some("labels".to_string()),
            })
            .unwrap(),
            "Labels[string]string"
        );
    }

    #[test]
    fn test_resolve_references() {
        assert_eq!(resolve(&SchemaType::component("200Response")).unwrap(), "Model200Response");
        assert_eq!(
            resolve(&SchemaType::Reference {
                reference: "#/definitions/Category".to_string()
            })
            .unwrap(),
            "Category"
        );
        assert_eq!(
            resolve(&SchemaType::Reference {
                reference: "./common.yaml#/components/schemas/Problem".to_string()
            })
            .unwrap(),
            "Problem"
        );
    }

    #[test]
    fn test_dangling_reference() {
        let err = resolve(&SchemaType::array(SchemaType::component("Ghost"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMapping);
        assert_eq!(err.name(), "Ghost");
    }

    #[test]
    fn test_resolve_enum_and_any() {
        let status = SchemaType::Enum {
            backing: "string".to_string(),
            values: vec!["sold".to_string()],
        };
        assert_eq!(resolve(&status).unwrap(), "string");
        assert_eq!(resolve(&SchemaType::Any).unwrap(), "interface{}");
        assert_eq!(resolve(&SchemaType::FreeForm).unwrap(), "map[string]interface{}");
    }

    #[test]
    fn test_resolve_composed() {
        let nullable_pet = SchemaType::Composed {
            composition: CompositionKind::OneOf,
            members: vec![SchemaType::component("Pet"), SchemaType::primitive("null")],
        };
        assert_eq!(resolve(&nullable_pet).unwrap(), "Pet");

        let either = SchemaType::Composed {
            composition: CompositionKind::AnyOf,
            members: vec![SchemaType::component("Pet"), SchemaType::component("Category")],
        };
        assert_eq!(resolve(&either).unwrap(), "interface{}");
    }

    #[test]
    fn test_normalize_composition() {
        let members = vec![
            SchemaType::component("Pet"),
            SchemaType::primitive("null"),
            SchemaType::primitive("string"),
        ];

        let one_of = normalize_composition(CompositionKind::OneOf, &members);
        assert!(one_of.nullable);
        assert_eq!(one_of.members.len(), 2);

        let all_of = normalize_composition(CompositionKind::AllOf, &members);
        assert!(!all_of.nullable);
        assert_eq!(all_of.members.len(), 3);

        let plain = normalize_composition(CompositionKind::AnyOf, &members[..1]);
        assert!(!plain.nullable);
    }

    #[test]
    fn test_container_like() {
        assert!(is_container_like(&SchemaType::array(SchemaType::primitive("string"))));
        assert!(is_container_like(&SchemaType::FreeForm));
        assert!(is_container_like(&SchemaType::primitive("AnyType")));
        assert!(!is_container_like(&SchemaType::component("Pet")));
        assert!(!is_container_like(&SchemaType::primitive("string")));
    }
}
