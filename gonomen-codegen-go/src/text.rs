//! Text escaping for Go source.

use crate::keywords::is_number_type;

/// Escape schema-supplied text for use inside a Go comment or string literal.
///
/// Line breaks and tabs collapse to spaces; comment delimiters are broken
/// up so the text cannot close a block comment.
pub fn escape_text(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\t' | '\n' | '\r' => escaped.push(' '),
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            c => escaped.push(c),
        }
    }
    escape_unsafe_characters(&escaped)
}

/// Drop double quotes from text spliced into generated code.
pub fn escape_quotation_mark(input: &str) -> String {
    input.replace('"', "")
}

/// Break up `*/` and `/*` so the text is safe inside a block comment.
pub fn escape_unsafe_characters(input: &str) -> String {
    input.replace("*/", "*_/").replace("/*", "/_*")
}

/// Go literal for an enum value of the given Go data type.
pub fn enum_value(value: &str, data_type: &str) -> String {
    if is_number_type(data_type) || data_type == "bool" {
        value.to_string()
    } else {
        format!("\"{}\"", escape_text(value))
    }
}
