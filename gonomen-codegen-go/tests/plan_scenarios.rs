//! End-to-end planning scenarios over a small pet store.

use gonomen_codegen::{NameOverrides, generation::ImportSubstitutions};
use gonomen_codegen_go::{GoConfig, Generator};
use gonomen_core::{
    CompositionKind, IdentifierCategory, ModelInput, OperationInput, ParameterInput,
    ParameterLocation, PropertyInput, SchemaType,
};

fn petstore() -> Generator {
    Generator::new(GoConfig::default(), NameOverrides::new())
        .unwrap()
        .with_models(["Pet", "Category", "Tag", "200Response"])
}

#[test]
fn test_basic_scenarios() {
    let generator = petstore();
    let naming = generator.naming();

    assert_eq!(naming.variable("created-at"), "CreatedAt");
    assert_eq!(naming.variable("import"), "Import_");
    assert_eq!(naming.model_name("200Response"), "Model200Response");
    assert_eq!(
        generator
            .resolver()
            .resolve(&SchemaType::array(SchemaType::primitive("integer")))
            .unwrap(),
        "[]int32"
    );

    let email = generator
        .plan_field(&PropertyInput::new("email", SchemaType::primitive("string")).required())
        .unwrap();
    assert_eq!(email.tag, " `json:\"email\"`");
}

#[test]
fn test_pet_model_plan() {
    let generator = petstore();
    let pet = ModelInput::new("Pet")
        .with_property(PropertyInput::new("id", SchemaType::primitive("long")))
        .with_property(PropertyInput::new("category", SchemaType::component("Category")))
        .with_property(PropertyInput::new("name", SchemaType::primitive("string")).required())
        .with_property(
            PropertyInput::new("photoUrls", SchemaType::array(SchemaType::primitive("string")))
                .required(),
        )
        .with_property(PropertyInput::new(
            "tags",
            SchemaType::array(SchemaType::component("Tag")),
        ))
        .with_property(PropertyInput::new(
            "status",
            SchemaType::Enum {
                backing: "string".to_string(),
                values: vec!["available".to_string(), "sold".to_string()],
            },
        ))
        .with_property(PropertyInput::new("updated", SchemaType::primitive("DateTime")));

    let plan = generator.plan_model(&pet).unwrap();
    let summary: Vec<String> = plan
        .fields
        .iter()
        .map(|f| format!("{} {}{}", f.name, f.data_type, f.tag))
        .collect();

    insta::assert_snapshot!(summary.join("\n"), @r#"
    Id int64 `json:"id,omitempty"`
    Category Category `json:"category,omitempty"`
    Name string `json:"name"`
    PhotoUrls []string `json:"photoUrls"`
    Tags []Tag `json:"tags,omitempty"`
    Status string `json:"status,omitempty"`
    Updated time.Time `json:"updated,omitempty"`
    "#);
    assert_eq!(plan.file_name, "model_pet");
    assert_eq!(plan.imports, vec!["time"]);
}

#[test]
fn test_xml_and_validation_tags() {
    let generator = Generator::new(
        GoConfig {
            with_xml: true,
            validate: Some("required".to_string()),
            ..GoConfig::default()
        },
        NameOverrides::new(),
    )
    .unwrap();

    let mut id = PropertyInput::new("id", SchemaType::primitive("integer"))
        .required()
        .with_pattern("/^[1-9][0-9]*$/");
    id.xml_attribute = true;

    let field = generator.plan_field(&id).unwrap();
    assert_eq!(
        field.tag,
        r#" `json:"id" xml:"id,attr" validate:"required" validate:"regexp=^[1-9][0-9]*$"`"#
    );
}

#[test]
fn test_overrides_and_substitutions() {
    let overrides = NameOverrides::new()
        .with(IdentifierCategory::ModelName, "Category", "Kind")
        .with(IdentifierCategory::Variable, "photoUrls", "Photos")
        .with(IdentifierCategory::Parameter, "api_key", "apiKey");
    let config = GoConfig {
        model_package: "github.com/acme/petstore".to_string(),
        ..GoConfig::default()
    };
    let substitutions = ImportSubstitutions::new().with("time", ["time", "github.com/acme/clock"]);
    let generator = Generator::new(config, overrides)
        .unwrap()
        .with_models(["Category"])
        .with_import_substitutions(substitutions);

    let model = ModelInput::new("Album")
        .with_property(PropertyInput::new("category", SchemaType::component("Category")))
        .with_property(PropertyInput::new(
            "photoUrls",
            SchemaType::array(SchemaType::primitive("string")),
        ))
        .with_property(PropertyInput::new("taken", SchemaType::primitive("date")));

    let plan = generator.plan_model(&model).unwrap();
    assert_eq!(plan.fields[0].data_type, "Kind");
    assert_eq!(plan.fields[1].name, "Photos");
    assert_eq!(plan.imports, vec!["time", "github.com/acme/clock"]);

    let ops = generator
        .plan_operations(
            "pet",
            &[OperationInput::new("deletePet", "DELETE").with_parameter(ParameterInput::new(
                "api_key",
                SchemaType::primitive("string"),
                ParameterLocation::Header,
            ))],
        )
        .unwrap();
    assert_eq!(ops.operations[0].parameters[0].name, "apiKey");
    assert_eq!(ops.operations[0].parameters[0].export_name, "ApiKey");
}

#[test]
fn test_any_of_with_null_is_nullable() {
    let generator = petstore();
    let model = ModelInput::new("MaybePet").with_composition(
        CompositionKind::AnyOf,
        vec![SchemaType::primitive("null"), SchemaType::component("Pet")],
    );

    let plan = generator.plan_model(&model).unwrap();
    assert!(plan.nullable);
    assert_eq!(plan.any_of, vec!["Pet"]);
    assert!(plan.one_of.is_empty());
    assert!(plan.imports.is_empty());
}

#[test]
fn test_planning_is_deterministic() {
    let generator = petstore();
    let operations = vec![
        OperationInput::new("getInventory", "GET")
            .returning(SchemaType::map(SchemaType::primitive("integer"))),
        OperationInput::new("getOrderById", "GET")
            .with_parameter(ParameterInput::new(
                "orderId",
                SchemaType::primitive("long"),
                ParameterLocation::Path,
            ))
            .returning(SchemaType::primitive("DateTime")),
        OperationInput::new("placeOrder", "POST").returning(SchemaType::primitive("DateTime")),
    ];

    let first = generator.plan_operations("store", &operations).unwrap();
    let second = generator.plan_operations("store", &operations).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.imports, vec!["strings", "time"]);
    assert_eq!(first.operations[0].return_type.as_deref(), Some("map[string]int32"));
    assert_eq!(first.file_name, "api_store");
}
