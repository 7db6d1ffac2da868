//! The `gonomen.toml` document.

mod load;
mod validate;

use gonomen_codegen::{NameOverrides, generation::ImportSubstitutions};
use gonomen_codegen_go::{GoConfig, Generator, ModelPlan, OperationsPlan};
use gonomen_core::{
    CompositionInput, EnumInput, ModelInput, OperationInput, ParameterInput, ParameterLocation,
    PropertyInput, SchemaType,
};
use indexmap::IndexMap;
pub use load::{MANIFEST_FILE, locate, parse_manifest};
use serde::{Deserialize, Serialize};

/// Tag of operations that do not name one.
pub const DEFAULT_TAG: &str = "default";

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

/// Root of `gonomen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Engine options.
    #[serde(default)]
    pub generator: GoConfig,

    /// Field/variable name overrides.
    #[serde(default)]
    pub name_mapping: IndexMap<String, String>,
    #[serde(default)]
    pub parameter_name_mapping: IndexMap<String, String>,
    #[serde(default)]
    pub model_name_mapping: IndexMap<String, String>,
    /// Enum constant and enum type name overrides.
    #[serde(default)]
    pub enum_name_mapping: IndexMap<String, String>,
    /// Extra reserved words and their replacements.
    #[serde(default)]
    pub reserved_words_mapping: IndexMap<String, String>,

    /// Import path substitutions.
    #[serde(default)]
    pub import_mapping: ImportSubstitutions,

    /// Models keyed by schema name, in declaration order.
    #[serde(default)]
    pub models: IndexMap<String, ModelTable>,

    #[serde(default)]
    pub operations: Vec<OperationEntry>,
}

/// A `[models.<name>]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelTable {
    #[serde(default)]
    pub properties: Vec<PropertyInput>,
    #[serde(default)]
    pub composition: Option<CompositionInput>,
    #[serde(default, rename = "enum")]
    pub enumeration: Option<EnumInput>,
}

/// An `[[operations]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperationEntry {
    /// API file the operation is grouped into.
    #[serde(default = "default_tag")]
    pub tag: String,
    pub operation_id: String,
    pub http_method: String,
    #[serde(default)]
    pub parameters: Vec<ParameterInput>,
    #[serde(default)]
    pub return_type: Option<SchemaType>,
}

impl OperationEntry {
    /// Engine input for this entry. Path parameters are always required.
    pub fn to_input(&self) -> OperationInput {
        let parameters = self
            .parameters
            .iter()
            .cloned()
            .map(|mut p| {
                p.required |= p.location == ParameterLocation::Path;
                p
            })
            .collect();
        OperationInput {
            operation_id: self.operation_id.clone(),
            http_method: self.http_method.clone(),
            parameters,
            return_type: self.return_type.clone(),
        }
    }
}

/// Everything planned from one manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestPlan {
    pub models: Vec<ModelPlan>,
    pub operations: Vec<OperationsPlan>,
}

impl Manifest {
    /// Collect the mapping tables into engine overrides.
    pub fn overrides(&self) -> NameOverrides {
        NameOverrides {
            variables: self.name_mapping.clone(),
            parameters: self.parameter_name_mapping.clone(),
            models: self.model_name_mapping.clone(),
            enum_constants: self.enum_name_mapping.clone(),
            reserved_words: self.reserved_words_mapping.clone(),
        }
    }

    /// Declared models as engine inputs.
    pub fn model_inputs(&self) -> impl Iterator<Item = ModelInput> + '_ {
        self.models.iter().map(|(name, table)| ModelInput {
            name: name.clone(),
            properties: table.properties.clone(),
            composition: table.composition.clone(),
            enumeration: table.enumeration.clone(),
        })
    }

    /// Operations grouped by tag, groups in first-seen order.
    pub fn operation_groups(&self) -> IndexMap<&str, Vec<OperationInput>> {
        let mut groups: IndexMap<&str, Vec<OperationInput>> = IndexMap::new();
        for entry in &self.operations {
            groups
                .entry(entry.tag.as_str())
                .or_default()
                .push(entry.to_input());
        }
        groups
    }

    /// Build a generator with every declared model registered.
    pub fn generator(&self) -> gonomen_core::Result<Generator> {
        Ok(Generator::new(self.generator.clone(), self.overrides())?
            .with_models(self.models.keys())
            .with_import_substitutions(self.import_mapping.clone()))
    }

    /// Plan every model and operation group.
    pub fn plan(&self) -> gonomen_core::Result<ManifestPlan> {
        let generator = self.generator()?;
        let models = self
            .model_inputs()
            .map(|model| generator.plan_model(&model))
            .collect::<gonomen_core::Result<Vec<_>>>()?;
        let operations = self
            .operation_groups()
            .iter()
            .map(|(tag, operations)| generator.plan_operations(tag, operations))
            .collect::<gonomen_core::Result<Vec<_>>>()?;
        Ok(ManifestPlan { models, operations })
    }
}
