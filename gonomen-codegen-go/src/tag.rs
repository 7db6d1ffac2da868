//! Struct tag composition.

use serde::Serialize;

use crate::config::GoConfig;

/// What the tag composer needs to know about one struct field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Name of the property on the wire.
    pub base_name: String,
    pub required: bool,
    pub xml_attribute: bool,
    pub pattern: Option<String>,
    /// Extra tag fragment appended verbatim.
    pub custom_tag: Option<String>,
    /// Resolved Go declaration of the field.
    pub data_type: String,
}

impl FieldDescriptor {
    pub fn new(base_name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            data_type: data_type.into(),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn xml_attribute(mut self) -> Self {
        self.xml_attribute = true;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_custom_tag(mut self, tag: impl Into<String>) -> Self {
        self.custom_tag = Some(tag.into());
        self
    }
}

/// Builds the struct tag literal of a field, leading space included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagComposer {
    with_xml: bool,
    validate: Option<String>,
}

impl TagComposer {
    pub fn new(config: &GoConfig) -> Self {
        Self {
            with_xml: config.with_xml,
            validate: config
                .validation_enabled()
                .then(|| config.validate.clone())
                .flatten(),
        }
    }

    /// Compose the tag for a field.
    ///
    /// The body is wrapped in backticks unless it contains one, in which
    /// case it becomes an interpreted string literal.
    pub fn compose(&self, field: &FieldDescriptor) -> String {
        let mut parts = Vec::with_capacity(5);

        let omit = if field.required { "" } else { ",omitempty" };
        parts.push(format!("json:\"{}{}\"", field.base_name, omit));

        if self.with_xml {
            let attr = if field.xml_attribute { ",attr" } else { "" };
            parts.push(format!("xml:\"{}{}\"", field.base_name, attr));
        }

        if let Some(rule) = &self.validate {
            parts.push(format!("validate:\"{}\"", rule));
        }

        if let Some(pattern) = &field.pattern {
            parts.push(format!("validate:\"regexp={}\"", pattern_rule(pattern)));
        }

        if let Some(custom) = field.custom_tag.as_deref().filter(|t| !t.is_empty()) {
            parts.push(custom.to_string());
        }

        wrap(&parts.join(" "))
    }
}

/// Backslashes doubled, one leading and one trailing `/` removed.
fn pattern_rule(pattern: &str) -> String {
    let trimmed = pattern.strip_prefix('/').unwrap_or(pattern);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    trimmed.replace('\\', "\\\\")
}

fn wrap(body: &str) -> String {
    if !body.contains('`') {
        return format!(" `{}`", body);
    }

    let mut quoted = String::with_capacity(body.len() + 8);
    for c in body.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            c => quoted.push(c),
        }
    }
    format!(" \"{}\"", quoted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer(with_xml: bool, validate: Option<&str>) -> TagComposer {
        TagComposer::new(&GoConfig {
            with_xml,
            validate: validate.map(str::to_string),
            ..GoConfig::default()
        })
    }

    #[test]
    fn test_json_tag() {
        let tags = composer(false, None);
        assert_eq!(
            tags.compose(&FieldDescriptor::new("email", "string").required()),
            " `json:\"email\"`"
        );
        assert_eq!(
            tags.compose(&FieldDescriptor::new("nickname", "string")),
            " `json:\"nickname,omitempty\"`"
        );
    }

    #[test]
    fn test_full_tag_order() {
        let tags = composer(true, Some("required"));
        let field = FieldDescriptor::new("id", "int64")
            .required()
            .xml_attribute()
            .with_pattern("/^[0-9]+$/")
            .with_custom_tag("db:\"id\"");

        insta::assert_snapshot!(
            tags.compose(&field).trim_start(),
            @r#"`json:"id" xml:"id,attr" validate:"required" validate:"regexp=^[0-9]+$" db:"id"`"#
        );
    }

    #[test]
    fn test_pattern_escaping() {
        assert_eq!(pattern_rule(r"/^\d{3}$/"), r"^\\d{3}$");
        assert_eq!(pattern_rule("//a//"), "/a/");
        assert_eq!(pattern_rule("abc"), "abc");
    }

    #[test]
    fn test_backtick_wraps_in_quotes() {
        let tags = composer(false, None);
        let field = FieldDescriptor::new("raw", "string")
            .required()
            .with_custom_tag("doc:\"a`b\"");
        assert_eq!(
            tags.compose(&field),
            r#" "json:\"raw\" doc:\"a`b\"""#
        );

        let field = FieldDescriptor::new("code", "string")
            .required()
            .with_pattern(r"^\w`$");
        assert_eq!(
            tags.compose(&field),
            r#" "json:\"code\" validate:\"regexp=^\\\\w`$\"""#
        );
    }

    #[test]
    fn test_empty_validate_rule_disables_tag() {
        let tags = composer(false, Some(""));
        assert_eq!(
            tags.compose(&FieldDescriptor::new("a", "string").required()),
            " `json:\"a\"`"
        );
    }
}
