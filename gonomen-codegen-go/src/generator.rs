use gonomen_codegen::{NameOverrides, generation::ImportSubstitutions};
use gonomen_core::{
    CompositionKind, ModelInput, OperationInput, PropertyInput, Result, SchemaType,
};
use tracing::debug;

use crate::{
    config::GoConfig,
    imports::UnitImports,
    naming::GoNaming,
    plan::{EnumVariantPlan, FieldPlan, ModelPlan, OperationPlan, OperationsPlan, ParameterPlan},
    resolver::{GoTypeResolver, ModelRegistry, is_container_like, normalize_composition},
    tag::{FieldDescriptor, TagComposer},
    text::{enum_value, escape_quotation_mark},
};

const VALIDATOR_IMPORT: &str = "gopkg.in/validator.v2";

/// Plans the names, types, tags and imports of Go models and API files.
///
/// Holds the frozen tables for one run; planning never mutates them.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GoConfig,
    naming: GoNaming,
    models: ModelRegistry,
    tags: TagComposer,
    substitutions: ImportSubstitutions,
}

impl Generator {
    /// Validate the overrides and build the tables for a run.
    pub fn new(config: GoConfig, overrides: NameOverrides) -> Result<Self> {
        let naming = GoNaming::new(&config, overrides)?;
        let tags = TagComposer::new(&config);
        Ok(Self {
            config,
            naming,
            models: ModelRegistry::new(),
            tags,
            substitutions: ImportSubstitutions::new(),
        })
    }

    /// Register the raw names of the models references may point at.
    pub fn with_models<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.models.register(name);
        }
        self
    }

    pub fn with_import_substitutions(mut self, substitutions: ImportSubstitutions) -> Self {
        self.substitutions = substitutions;
        self
    }

    pub fn config(&self) -> &GoConfig {
        &self.config
    }

    pub fn naming(&self) -> &GoNaming {
        &self.naming
    }

    pub fn models(&self) -> &ModelRegistry {
        &self.models
    }

    pub fn resolver(&self) -> GoTypeResolver<'_> {
        GoTypeResolver::new(&self.naming, &self.models)
    }

    /// Plan one struct field.
    pub fn plan_field(&self, property: &PropertyInput) -> Result<FieldPlan> {
        let data_type = self.resolver().resolve(&property.schema)?;
        let descriptor = FieldDescriptor {
            base_name: property.name.clone(),
            required: property.required,
            xml_attribute: property.xml_attribute,
            pattern: property.pattern.clone(),
            custom_tag: property.custom_tag.clone(),
            data_type,
        };
        let tag = self.tags.compose(&descriptor);
        let default_value = self.default_value(property, &descriptor.data_type);

        Ok(FieldPlan {
            name: self.naming.variable(&property.name),
            base_name: descriptor.base_name,
            data_type: descriptor.data_type,
            tag,
            is_container_like: is_container_like(&property.schema),
            default_value,
        })
    }

    /// Go spelling of a property's default.
    ///
    /// An inline enum default names its constant; anything else is kept as
    /// written, with double quotes dropped.
    fn default_value(&self, property: &PropertyInput, data_type: &str) -> Option<String> {
        let default = property.default.as_deref()?;
        match &property.schema {
            SchemaType::Enum { .. } => {
                let constant = self.naming.enum_constant(default, data_type);
                let enum_type = self.naming.enum_type_name(&property.name);
                Some(self.naming.enum_default_value(&constant, &enum_type))
            }
            _ => Some(escape_quotation_mark(default)),
        }
    }

    /// Plan a model file.
    pub fn plan_model(&self, model: &ModelInput) -> Result<ModelPlan> {
        debug!(model = %model.name, "planning model");
        let resolver = self.resolver();
        let mut imports = UnitImports::new();

        let mut fields = Vec::with_capacity(model.properties.len());
        for property in &model.properties {
            let field = self.plan_field(property)?;
            imports.add_type(&field.data_type);
            fields.push(field);
        }

        let mut plan = ModelPlan {
            name: self.naming.model_name(&model.name),
            file_name: self.naming.model_file_name(&model.name),
            fields,
            enum_type_name: None,
            enum_variants: Vec::new(),
            one_of: Vec::new(),
            any_of: Vec::new(),
            all_of: Vec::new(),
            nullable: false,
            generate_marshal_json: self.config.generate_marshal_json,
            generate_unmarshal_json: self.config.generate_unmarshal_json,
            imports: Vec::new(),
        };

        if let Some(composition) = &model.composition {
            let normalized = normalize_composition(composition.kind, &composition.members);
            let mut members = Vec::with_capacity(normalized.members.len());
            for member in &normalized.members {
                let data_type = resolver.resolve(member)?;
                imports.add_type(&data_type);
                members.push(data_type);
            }
            plan.nullable = normalized.nullable;
            match normalized.kind {
                CompositionKind::OneOf => plan.one_of = members,
                CompositionKind::AnyOf => plan.any_of = members,
                CompositionKind::AllOf => plan.all_of = members,
            }
        }

        if let Some(enumeration) = &model.enumeration {
            let data_type = resolver.resolve(&SchemaType::primitive(&enumeration.backing))?;
            plan.enum_type_name = Some(self.naming.enum_type_name(&model.name));
            plan.enum_variants = enumeration
                .values
                .iter()
                .map(|value| EnumVariantPlan {
                    name: self.naming.enum_constant(value, &data_type),
                    value: enum_value(value, &data_type),
                })
                .collect();
            if self.config.enum_fmt_import {
                imports.require("fmt");
            }
        }

        if !plan.one_of.is_empty() && self.config.generate_unmarshal_json {
            imports.require(VALIDATOR_IMPORT);
        }

        plan.imports = imports.finish(&self.config.model_package, &self.substitutions);
        Ok(plan)
    }

    /// Plan the API file of one operation group.
    pub fn plan_operations(&self, group: &str, operations: &[OperationInput]) -> Result<OperationsPlan> {
        debug!(group, operations = operations.len(), "planning operations");
        let resolver = self.resolver();
        let mut imports = UnitImports::new();
        let mut planned = Vec::with_capacity(operations.len());

        for operation in operations {
            if operation.has_path_params() {
                imports.require("strings");
            }

            let mut parameters = Vec::with_capacity(operation.parameters.len());
            for parameter in &operation.parameters {
                let data_type = resolver.resolve(&parameter.schema)?;
                imports.add_type(&data_type);
                if parameter.collection_format_multi {
                    imports.require("reflect");
                }
                parameters.push(ParameterPlan {
                    name: self.naming.parameter(&parameter.name),
                    export_name: self.naming.export_parameter(&parameter.name),
                    data_type,
                    location: parameter.location,
                    required: parameter.required,
                });
            }

            let return_type = match &operation.return_type {
                Some(schema) => {
                    let data_type = resolver.resolve(schema)?;
                    imports.add_type(&data_type);
                    Some(data_type)
                }
                None => None,
            };

            planned.push(OperationPlan {
                name: self.naming.operation_name(&operation.operation_id),
                http_method: self.naming.http_method(&operation.http_method),
                parameters,
                return_type,
            });
        }

        Ok(OperationsPlan {
            file_name: self.naming.api_file_name(group),
            test_file_name: self.naming.api_test_file_name(group),
            operations: planned,
            imports: imports.finish(&self.config.api_package, &self.substitutions),
        })
    }
}

#[cfg(test)]
mod tests {
    use gonomen_core::{ErrorKind, ParameterInput, ParameterLocation};

    use super::*;

    fn generator(config: GoConfig) -> Generator {
        Generator::new(config, NameOverrides::new())
            .unwrap()
            .with_models(["Pet", "Category", "Tag"])
    }

    #[test]
    fn test_plan_field() {
        let generator = generator(GoConfig::default());
        let field = generator
            .plan_field(&PropertyInput::new("email", SchemaType::primitive("string")).required())
            .unwrap();

        assert_eq!(field.name, "Email");
        assert_eq!(field.data_type, "string");
        assert_eq!(field.tag, " `json:\"email\"`");
        assert!(!field.is_container_like);
        assert_eq!(field.default_value, None);
    }

    #[test]
    fn test_plan_field_defaults() {
        let generator = generator(GoConfig::default());

        let status = PropertyInput::new(
            "status",
            SchemaType::Enum {
                backing: "string".to_string(),
                values: vec!["available".to_string(), "sold".to_string()],
            },
        )
        .with_default("available");
        let field = generator.plan_field(&status).unwrap();
        assert_eq!(field.default_value.as_deref(), Some("STATUS_AVAILABLE"));

        let level = PropertyInput::new(
            "level",
            SchemaType::Enum {
                backing: "integer".to_string(),
                values: vec!["1".to_string(), "2".to_string()],
            },
        )
        .with_default("2");
        let field = generator.plan_field(&level).unwrap();
        assert_eq!(field.default_value.as_deref(), Some("LEVEL__2"));

        let name = PropertyInput::new("name", SchemaType::primitive("string"))
            .with_default(r#"doggie"); panic("x"#);
        let field = generator.plan_field(&name).unwrap();
        assert_eq!(field.default_value.as_deref(), Some("doggie); panic(x"));

        let count = PropertyInput::new("count", SchemaType::primitive("integer")).with_default("10");
        let field = generator.plan_field(&count).unwrap();
        assert_eq!(field.default_value.as_deref(), Some("10"));
    }

    #[test]
    fn test_plan_model_imports() {
        let generator = generator(GoConfig::default());
        let model = ModelInput::new("Order")
            .with_property(PropertyInput::new("ship-date", SchemaType::primitive("DateTime")))
            .with_property(PropertyInput::new(
                "history",
                SchemaType::array(SchemaType::primitive("DateTime")),
            ))
            .with_property(PropertyInput::new("pet", SchemaType::component("Pet")));

        let plan = generator.plan_model(&model).unwrap();
        assert_eq!(plan.name, "Order");
        assert_eq!(plan.file_name, "model_order");
        assert_eq!(plan.fields[0].name, "ShipDate");
        assert_eq!(plan.fields[1].data_type, "[]time.Time");
        assert!(plan.fields[1].is_container_like);
        assert_eq!(plan.imports, vec!["time"]);
    }

    #[test]
    fn test_plan_enum_model() {
        let generator = generator(GoConfig::default());
        let plan = generator
            .plan_model(&ModelInput::new("PetStatus").with_enum("string", &["available", "sold"]))
            .unwrap();

        assert_eq!(plan.enum_type_name.as_deref(), Some("PET_STATUS"));
        assert_eq!(plan.enum_variants[0].name, "AVAILABLE");
        assert_eq!(plan.enum_variants[1].value, "\"sold\"");
        assert_eq!(plan.imports, vec!["fmt"]);

        let quiet = self::generator(GoConfig {
            enum_fmt_import: false,
            ..GoConfig::default()
        });
        let plan = quiet
            .plan_model(&ModelInput::new("Level").with_enum("integer", &["1", "-2"]))
            .unwrap();
        assert_eq!(plan.enum_variants[0].name, "_1");
        assert_eq!(plan.enum_variants[1].name, "_MINUS_2");
        assert_eq!(plan.enum_variants[1].value, "-2");
        assert!(plan.imports.is_empty());
    }

    #[test]
    fn test_plan_one_of_model() {
        let generator = generator(GoConfig::default());
        let model = ModelInput::new("PetOrTag").with_composition(
            CompositionKind::OneOf,
            vec![
                SchemaType::component("Pet"),
                SchemaType::component("Tag"),
                SchemaType::primitive("null"),
            ],
        );

        let plan = generator.plan_model(&model).unwrap();
        assert_eq!(plan.one_of, vec!["Pet", "Tag"]);
        assert!(plan.nullable);
        assert_eq!(plan.imports, vec![VALIDATOR_IMPORT]);

        let no_unmarshal = self::generator(GoConfig {
            generate_unmarshal_json: false,
            ..GoConfig::default()
        });
        let plan = no_unmarshal.plan_model(&model).unwrap();
        assert!(plan.imports.is_empty());
        assert!(!plan.generate_unmarshal_json);
    }

    #[test]
    fn test_plan_model_dangling_reference() {
        let generator = generator(GoConfig::default());
        let model = ModelInput::new("Owner")
            .with_property(PropertyInput::new("pet", SchemaType::component("Ghost")));
        let err = generator.plan_model(&model).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMapping);
    }

    #[test]
    fn test_plan_operations() {
        let generator = generator(GoConfig {
            api_package: "github.com/acme/pets".to_string(),
            ..GoConfig::default()
        });
        let operations = vec![
            OperationInput::new("getPetById", "GET")
                .with_parameter(ParameterInput::new(
                    "pet_id",
                    SchemaType::primitive("long"),
                    ParameterLocation::Path,
                ))
                .returning(SchemaType::component("Pet")),
            OperationInput::new("findPetsByTags", "GET")
                .with_parameter(
                    ParameterInput::new(
                        "tags",
                        SchemaType::array(SchemaType::primitive("string")),
                        ParameterLocation::Query,
                    )
                    .multi(),
                )
                .with_parameter(ParameterInput::new(
                    "since",
                    SchemaType::primitive("date"),
                    ParameterLocation::Query,
                )),
            OperationInput::new("uploadFile", "POST").with_parameter(ParameterInput::new(
                "file",
                SchemaType::primitive("binary"),
                ParameterLocation::Form,
            )),
        ];

        let plan = generator.plan_operations("Pet", &operations).unwrap();
        assert_eq!(plan.file_name, "api_pet");
        assert_eq!(plan.test_file_name, "api_pet_test");
        assert_eq!(plan.imports, vec!["strings", "reflect", "time", "io"]);

        let get = &plan.operations[0];
        assert_eq!(get.name, "GetPetById");
        assert_eq!(get.http_method, "Get");
        assert_eq!(get.parameters[0].name, "petId");
        assert_eq!(get.parameters[0].export_name, "PetId");
        assert_eq!(get.parameters[0].data_type, "int64");
        assert!(get.parameters[0].required);
        assert_eq!(get.return_type.as_deref(), Some("Pet"));

        assert_eq!(plan.operations[2].http_method, "Post");
        assert_eq!(plan.operations[2].parameters[0].data_type, "io.ReadCloser");
    }

    #[test]
    fn test_plan_serializes_without_empty_sections() {
        let generator = generator(GoConfig::default());
        let plan = generator
            .plan_model(&ModelInput::new("Tag").with_property(
                PropertyInput::new("name", SchemaType::primitive("string")).required(),
            ))
            .unwrap();

        insta::assert_json_snapshot!(plan, @r#"
        {
          "name": "Tag",
          "file_name": "model_tag",
          "fields": [
            {
              "name": "Name",
              "base_name": "name",
              "data_type": "string",
              "tag": " `json:\"name\"`",
              "is_container_like": false
            }
          ],
          "nullable": false,
          "generate_marshal_json": true,
          "generate_unmarshal_json": true,
          "imports": []
        }
        "#);
    }
}
