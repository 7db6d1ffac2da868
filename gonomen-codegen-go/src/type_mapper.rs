//! Go type mapper implementation.

use gonomen_codegen::TypeMapper;

use crate::keywords::{GO_LANGUAGE_PRIMITIVES, GO_TYPE_MAPPING};

/// Go type mapper implementation.
///
/// Maps schema tokens and container shapes to Go type syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn map_primitive(&self, token: &str) -> Option<&'static str> {
        GO_TYPE_MAPPING
            .iter()
            .find(|(schema, _)| *schema == token)
            .map(|(_, go)| *go)
    }

    fn is_language_type(&self, token: &str) -> bool {
        GO_LANGUAGE_PRIMITIVES.contains(&token)
            || GO_TYPE_MAPPING.iter().any(|(_, go)| *go == token)
    }

    fn any_type(&self) -> &'static str {
        "interface{}"
    }

    fn free_form_type(&self) -> &'static str {
        "map[string]interface{}"
    }

    fn map_array(&self, inner: &str) -> String {
        format!("[]{}", inner)
    }

    fn map_map(&self, container: Option<&str>, value: &str) -> String {
        format!("{}[string]{}", container.unwrap_or("map"), value)
    }

    fn map_nullable(&self, inner: &str) -> String {
        format!("*{}", inner)
    }
}

/// Package qualifier a declared type depends on, if any.
///
/// Container and pointer syntax is peeled off first, so `[]*time.Time`,
/// `map[string]time.Time` and a named container such as
/// `Labels[string]time.Time` all yield `time`.
pub fn package_of(data_type: &str) -> Option<&str> {
    let mut ty = data_type;
    loop {
        if let Some(rest) = ty.strip_prefix("[]") {
            ty = rest;
        } else if let Some(rest) = ty.strip_prefix('*') {
            ty = rest;
        } else if let Some(rest) = strip_map_head(ty) {
            ty = rest;
        } else {
            break;
        }
    }

    let (package, name) = ty.split_once('.')?;
    (is_ident(package) && is_ident(name)).then_some(package)
}

/// Strip a `map[string]` or `Name[string]` head.
fn strip_map_head(ty: &str) -> Option<&str> {
    let (head, rest) = ty.split_once("[string]")?;
    is_ident(head).then_some(rest)
}

fn is_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
