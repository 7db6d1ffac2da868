//! Go identifier naming.

use gonomen_codegen::{NameOverrides, ReservedWords, TypeMapper};
use gonomen_core::{
    IdentifierCategory, IdentifierRequest, Result, camelize, camelize_lower, is_upper_snake,
    sanitize_name, starts_with_digit, underscore, upper_first,
};
use tracing::{debug, warn};

use crate::{
    config::GoConfig,
    keywords::{GO_NAMING, is_number_type},
    type_mapper::GoTypeMapper,
};

const EMPTY_VARIABLE: &str = "Empty";
const EMPTY_ENUM_CONSTANT: &str = "EMPTY";
const MODEL_MARKER: &str = "model_";
const API_MARKER: &str = "api_";
const TEST_SUFFIX: &str = "_test";
const CALL_MARKER: &str = "call_";

/// Naming strategy for Go output.
///
/// Built once per run from the generator options and the user's override
/// tables. Every category is idempotent: feeding a produced name back in
/// yields the same name.
#[derive(Debug, Clone)]
pub struct GoNaming {
    overrides: NameOverrides,
    reserved: ReservedWords,
    model_prefix: String,
    model_suffix: String,
}

impl GoNaming {
    /// Validate the override tables and freeze the reserved-word table.
    pub fn new(config: &GoConfig, overrides: NameOverrides) -> Result<Self> {
        overrides.validate()?;
        let reserved = ReservedWords::new(&GO_NAMING, overrides.reserved_words.clone())?;
        debug!(reserved = reserved.len(), "reserved word table frozen");
        Ok(Self {
            overrides,
            reserved,
            model_prefix: config.model_name_prefix.clone(),
            model_suffix: config.model_name_suffix.clone(),
        })
    }

    /// Naming with default options and no overrides.
    pub fn standard() -> Result<Self> {
        Self::new(&GoConfig::default(), NameOverrides::new())
    }

    pub fn reserved_words(&self) -> &ReservedWords {
        &self.reserved
    }

    pub fn overrides(&self) -> &NameOverrides {
        &self.overrides
    }

    /// Produce the identifier for a request.
    pub fn resolve(&self, request: &IdentifierRequest) -> String {
        let key = request.lookup_key();
        match request.category {
            IdentifierCategory::Variable => self.var_name(key, &request.raw),
            IdentifierCategory::Parameter => self.param_name(key, &request.raw),
            IdentifierCategory::ModelName => self.model_name_for(key, &request.raw),
            IdentifierCategory::ModelFileName => self.model_file_name_for(key, &request.raw),
            IdentifierCategory::OperationFileName => self.api_file_name(&request.raw),
            IdentifierCategory::OperationTestFileName => self.api_test_file_name(&request.raw),
            IdentifierCategory::EnumConstant => self.enum_constant_for(
                key,
                &request.raw,
                request.backing_type.as_deref().unwrap_or("string"),
            ),
            IdentifierCategory::EnumTypeName => self.enum_type_name_for(key, &request.raw),
            IdentifierCategory::Operation => self.operation_name(&request.raw),
        }
    }

    /// Shorthand for resolving a raw name without an override key.
    pub fn name(&self, raw: &str, category: IdentifierCategory) -> String {
        self.resolve(&IdentifierRequest::new(raw, category))
    }

    fn lookup(&self, category: IdentifierCategory, key: &str) -> Option<String> {
        self.overrides.lookup(category, key).map(str::to_string)
    }

    // Variables

    /// Struct field name (`created-at` -> `CreatedAt`).
    pub fn variable(&self, raw: &str) -> String {
        self.var_name(raw, raw)
    }

    fn var_name(&self, key: &str, raw: &str) -> String {
        if let Some(name) = self.lookup(IdentifierCategory::Variable, key) {
            return name;
        }
        self.compute_var_name(raw)
    }

    fn compute_var_name(&self, raw: &str) -> String {
        let sanitized = sanitize_name(raw);
        if !has_alphanumeric(&sanitized) {
            return EMPTY_VARIABLE.to_string();
        }

        // Already in upper-snake form (`PET_ID`); leave the shape alone.
        if is_upper_snake(&sanitized) {
            if self.reserved.is_reserved(&sanitized) {
                let escaped = self.reserved.escape(&sanitized);
                warn!(name = raw, escaped = %escaped, "reserved word cannot be used as a field name");
                return escaped;
            }
            return sanitized;
        }

        let mut name = camelize(&sanitized);
        if self.reserved.is_reserved(&name) {
            let escaped = self.reserved.escape(&name);
            warn!(name = raw, escaped = %escaped, "reserved word cannot be used as a field name");
            name = escaped;
        }
        if starts_with_digit(&name) {
            name = format!("Var{}", name);
        }
        if name == "AdditionalProperties" {
            name = "AdditionalPropertiesField".to_string();
        }
        name
    }

    // Parameters

    /// Operation parameter name (`pet_id` -> `petId`).
    pub fn parameter(&self, raw: &str) -> String {
        self.param_name(raw, raw)
    }

    fn param_name(&self, key: &str, raw: &str) -> String {
        if let Some(name) = self.lookup(IdentifierCategory::Parameter, key) {
            return name;
        }
        let name = camelize_lower(&self.compute_var_name(raw));
        if self.reserved.is_reserved(&name) {
            let escaped = format!("{}_", name);
            warn!(name = raw, escaped = %escaped, "reserved word cannot be used as a parameter name");
            return escaped;
        }
        name
    }

    /// Exported form of a parameter name, used for options struct fields.
    pub fn export_parameter(&self, raw: &str) -> String {
        upper_first(&self.parameter(raw))
    }

    // Models

    /// Snake-case model name with prefix and suffix applied.
    ///
    /// An affix counts as present only as a whole snake-case word, so with
    /// prefix `api` the name `apiary` still gets one.
    pub fn to_model(&self, raw: &str) -> String {
        let mut name = sanitize_name(raw);
        let snake = underscore(&name);

        if !self.model_prefix.is_empty() {
            let marker = format!("{}_", underscore(&self.model_prefix));
            if !snake.starts_with(&marker) {
                name = format!("{}_{}", self.model_prefix, name);
            }
        }
        if !self.model_suffix.is_empty() {
            let marker = format!("_{}", underscore(&self.model_suffix));
            if !snake.trim_end_matches('_').ends_with(&marker) {
                name = format!("{}_{}", name, self.model_suffix);
            }
        }

        let mut name = sanitize_name(&name);
        if !has_alphanumeric(&name) {
            return "empty".to_string();
        }
        if self.reserved.is_reserved(&name) {
            name = format!("{MODEL_MARKER}{name}");
            warn!(name = raw, renamed = %name, "reserved word cannot be used as a model name");
        }
        if starts_with_digit(&name) {
            name = format!("{MODEL_MARKER}{name}");
            warn!(name = raw, renamed = %name, "model name cannot start with a number");
        }
        underscore(&name)
    }

    /// Go type name of a model (`200Response` -> `Model200Response`).
    pub fn model_name(&self, raw: &str) -> String {
        self.model_name_for(raw, raw)
    }

    fn model_name_for(&self, key: &str, raw: &str) -> String {
        if let Some(name) = self.lookup(IdentifierCategory::ModelName, key) {
            return name;
        }
        if self.is_canonical_model_name(raw) {
            return raw.to_string();
        }

        let snake = self.to_model(raw);
        let name = camelize(&snake);
        if self.reserved.is_reserved(&name) || starts_with_digit(&name) {
            return camelize(&format!("{MODEL_MARKER}{snake}"));
        }
        name
    }

    /// A name already shaped like a Go type (`HTTPServer`) is kept as is.
    fn is_canonical_model_name(&self, name: &str) -> bool {
        let body = name.strip_suffix('_').unwrap_or(name);
        let mut chars = body.chars();
        let shaped = chars.next().is_some_and(|c| c.is_ascii_uppercase())
            && chars.all(|c| c.is_ascii_alphanumeric());
        shaped && !self.reserved.is_reserved(name) && self.carries_affixes(body)
    }

    /// Whether a camel-case body already has the prefix and suffix as whole
    /// words. `Apiary` does not carry the prefix `api`; `ApiAry` and `Api2` do.
    fn carries_affixes(&self, body: &str) -> bool {
        let prefix = camelize(&underscore(&self.model_prefix));
        let suffix = camelize(&underscore(&self.model_suffix));

        let rest = if prefix.is_empty() {
            body
        } else {
            let word_start = |c: char| c.is_ascii_uppercase() || c.is_ascii_digit();
            match body.strip_prefix(prefix.as_str()) {
                Some(rest) if rest.starts_with(word_start) => rest,
                _ => return false,
            }
        };
        suffix.is_empty()
            || rest
                .strip_suffix(suffix.as_str())
                .is_some_and(|stem| !stem.is_empty())
    }

    /// File name of a model (`Pet` -> `model_pet`).
    pub fn model_file_name(&self, raw: &str) -> String {
        self.model_file_name_for(raw, raw)
    }

    fn model_file_name_for(&self, key: &str, raw: &str) -> String {
        let name = self
            .lookup(IdentifierCategory::ModelFileName, key)
            .unwrap_or_else(|| raw.to_string());
        self.marked_file_name(&name, MODEL_MARKER)
    }

    // Operations

    /// File name of an API group (`PetApi` -> `api_pet_api`).
    pub fn api_file_name(&self, raw: &str) -> String {
        self.marked_file_name(raw, API_MARKER)
    }

    /// Test file name of an API group (`Pet` -> `api_pet_test`).
    pub fn api_test_file_name(&self, raw: &str) -> String {
        let base = raw.strip_suffix(TEST_SUFFIX).unwrap_or(raw);
        format!("{}{}", self.api_file_name(base), TEST_SUFFIX)
    }

    fn marked_file_name(&self, name: &str, marker: &str) -> String {
        let mut snake = underscore(&sanitize_name(name));
        if !has_alphanumeric(&snake) {
            snake = "empty".to_string();
        }
        let base = match snake.strip_prefix(marker) {
            Some(rest) if !rest.is_empty() => snake,
            _ => format!("{}{}", marker, snake),
        };

        let file_name = GO_NAMING.safe_file_name(&base);
        if file_name != base {
            warn!(name = name, renamed = %file_name, "file name ends with a reserved suffix");
        }
        file_name
    }

    /// Method name for an operation (`return` -> `CallReturn`).
    pub fn operation_name(&self, raw: &str) -> String {
        let sanitized = sanitize_name(raw);
        if !has_alphanumeric(&sanitized) {
            return EMPTY_VARIABLE.to_string();
        }

        let camel = camelize(&sanitized);
        let reserved = self.reserved.is_reserved(&sanitized) || self.reserved.is_reserved(&camel);
        if reserved || starts_with_digit(&sanitized) || starts_with_digit(&camel) {
            let renamed = camelize(&format!("{CALL_MARKER}{sanitized}"));
            warn!(name = raw, renamed = %renamed, "operation id cannot be used as a method name");
            return renamed;
        }
        camel
    }

    /// Go spelling of an HTTP method (`PUT` -> `Put`).
    pub fn http_method(&self, method: &str) -> String {
        camelize(&method.to_ascii_lowercase())
    }

    // Enums

    /// Constant name for an enum value of the given Go backing type.
    pub fn enum_constant(&self, value: &str, backing_type: &str) -> String {
        self.enum_constant_for(value, value, backing_type)
    }

    fn enum_constant_for(&self, key: &str, value: &str, backing_type: &str) -> String {
        if let Some(name) = self.lookup(IdentifierCategory::EnumConstant, key) {
            return name;
        }
        if value.is_empty() {
            return EMPTY_ENUM_CONSTANT.to_string();
        }

        let data_type = GoTypeMapper.map_primitive(backing_type).unwrap_or(backing_type);
        if is_number_type(data_type) || data_type == "bool" {
            return self.marked_enum_constant(value);
        }

        if let Some(symbol) = GO_NAMING.symbol_name(value) {
            return underscore(symbol).to_uppercase();
        }

        let upper = if value.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_') {
            value.to_string()
        } else {
            underscore(value).to_uppercase()
        };
        let name = sanitize_name(&upper).trim_matches('_').to_string();
        if name.is_empty() {
            return EMPTY_ENUM_CONSTANT.to_string();
        }
        if self.reserved.is_reserved(&name) {
            return self.reserved.escape(&name);
        }
        if starts_with_digit(&name) {
            return format!("_{}", name);
        }
        name
    }

    /// Numeric and boolean constants always carry a leading `_`.
    fn marked_enum_constant(&self, value: &str) -> String {
        let body = match GO_NAMING.symbol_name(value) {
            Some(symbol) => symbol.to_uppercase(),
            None => {
                let spelled = value
                    .replace('-', "MINUS_")
                    .replace('+', "PLUS_")
                    .replace('.', "_DOT_");
                let sanitized = sanitize_name(&spelled);
                if has_alphanumeric(&sanitized) {
                    sanitized
                } else {
                    EMPTY_ENUM_CONSTANT.to_string()
                }
            }
        };
        if body.starts_with('_') {
            body
        } else {
            format!("_{}", body)
        }
    }

    /// Default value of an enum-typed field: the constant qualified by its
    /// enum type (`STATUS`, `AVAILABLE` -> `STATUS_AVAILABLE`).
    pub fn enum_default_value(&self, constant: &str, enum_type: &str) -> String {
        format!("{}_{}", enum_type, constant)
    }

    /// Type name of an inline enum (`status` -> `STATUS`).
    pub fn enum_type_name(&self, raw: &str) -> String {
        self.enum_type_name_for(raw, raw)
    }

    fn enum_type_name_for(&self, key: &str, raw: &str) -> String {
        if let Some(name) = self.lookup(IdentifierCategory::EnumTypeName, key) {
            return name;
        }
        if self.is_canonical_enum_type_name(raw) {
            return raw.to_string();
        }
        self.compute_enum_type_name(raw)
    }

    fn compute_enum_type_name(&self, raw: &str) -> String {
        let name = underscore(&self.model_name(raw))
            .to_uppercase()
            .replace("[]", "");
        if starts_with_digit(&name) {
            return format!("_{}", name);
        }
        name
    }

    /// An upper-snake name is kept when resolving its camel-case spelling
    /// leads back to it (`API0` with prefix `api` reads as `Api0`).
    fn is_canonical_enum_type_name(&self, name: &str) -> bool {
        let shaped = has_alphanumeric(name)
            && !starts_with_digit(name)
            && name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        if !shaped || self.reserved.is_reserved(name) {
            return false;
        }
        self.compute_enum_type_name(&camelize(&name.to_ascii_lowercase())) == name
    }
}

fn has_alphanumeric(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_alphanumeric())
}
