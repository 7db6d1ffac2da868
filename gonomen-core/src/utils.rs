//! Shared string utilities for identifier generation.

/// Turn an arbitrary schema-supplied string into a bare identifier body.
///
/// Separators become `_`, brackets and parentheses are flattened, and any
/// character outside `[A-Za-z0-9_]` is dropped. Casing is left untouched.
///
/// ```
/// use gonomen_core::sanitize_name;
///
/// assert_eq!(sanitize_name("created-at"), "created_at");
/// assert_eq!(sanitize_name("input[a][b]"), "input_a_b");
/// assert_eq!(sanitize_name("/api/films/get"), "_api_films_get");
/// ```
pub fn sanitize_name(name: &str) -> String {
    if name == "$" {
        return "value".to_string();
    }

    let name = name.replace("[]", "");
    let mut result = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '[' | '(' | '.' | '-' | '|' | ' ' | '/' | '\\' => result.push('_'),
            ']' | ')' => {}
            c if c.is_ascii_alphanumeric() || c == '_' => result.push(c),
            _ => {}
        }
    }
    result
}

/// Convert a string to UpperCamelCase (e.g., "pet_id" -> "PetId").
///
/// Separators (`_`, `-`, `.`, `/`, space) are removed and the following
/// character is upper-cased. A trailing `_` is kept so that escaped names
/// such as `Import_` survive another pass.
pub fn camelize(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();
    let mut upper_next = true;

    while let Some(c) = chars.next() {
        if is_separator(c) {
            if chars.peek().is_some() {
                upper_next = true;
                continue;
            }
            if c == '_' {
                result.push('_');
            }
            break;
        }

        if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a string to lowerCamelCase (e.g., "pet_id" -> "petId").
///
/// Everything up to and including the first ASCII letter is lower-cased.
pub fn camelize_lower(word: &str) -> String {
    let camel = camelize(word);
    match camel.char_indices().find(|(_, c)| c.is_ascii_alphabetic()) {
        Some((i, c)) => {
            let split = i + c.len_utf8();
            format!(
                "{}{}",
                camel[..split].to_ascii_lowercase(),
                &camel[split..]
            )
        }
        None => camel.to_ascii_lowercase(),
    }
}

/// Convert a string to snake_case (e.g., "PetId" -> "pet_id").
///
/// Runs of capitals are kept together except for the last one when it
/// starts a new word (`HTTPServer` -> `http_server`).
pub fn underscore(word: &str) -> String {
    let word = word.replace('.', "/").replace('$', "__");

    // ([A-Z]+)([A-Z][a-z][a-z]+) -> $1_$2
    let chars: Vec<char> = word.chars().collect();
    let mut split_runs = String::with_capacity(word.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        let starts_word = i > 0
            && c.is_ascii_uppercase()
            && chars[i - 1].is_ascii_uppercase()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase())
            && chars.get(i + 2).is_some_and(|n| n.is_ascii_lowercase());
        if starts_word {
            split_runs.push('_');
        }
        split_runs.push(c);
    }

    // ([a-z\d])([A-Z]) -> $1_$2
    let mut result = String::with_capacity(split_runs.len() + 4);
    let mut prev: Option<char> = None;
    for c in split_runs.chars() {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            result.push('_');
        }
        result.push(c);
        prev = Some(c);
    }

    result.replace(['-', ' '], "_").to_lowercase()
}

/// Whether the name begins with an ASCII digit.
pub fn starts_with_digit(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Whether the name consists only of capitals and underscores (`^[A-Z_]*$`).
pub fn is_upper_snake(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

/// Upper-case the first character (e.g., "petId" -> "PetId").
pub fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | '.' | '/' | ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("created-at"), "created_at");
        assert_eq!(sanitize_name("input[]"), "input");
        assert_eq!(sanitize_name("input(a)(b)"), "input_a_b");
        assert_eq!(sanitize_name("input.name"), "input_name");
        assert_eq!(sanitize_name("a|b"), "a_b");
        assert_eq!(sanitize_name("input name and age"), "input_name_and_age");
        assert_eq!(sanitize_name("\\api\\films"), "_api_films");
        assert_eq!(sanitize_name("$php_variable"), "php_variable");
        assert_eq!(sanitize_name("$"), "value");
        assert_eq!(sanitize_name("héllo"), "hllo");
        assert_eq!(sanitize_name(""), "");
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("pet_id"), "PetId");
        assert_eq!(camelize("created_at"), "CreatedAt");
        assert_eq!(camelize("CreatedAt"), "CreatedAt");
        assert_eq!(camelize("model_200_response"), "Model200Response");
        assert_eq!(camelize("_foo"), "Foo");
        assert_eq!(camelize("__x"), "X");
        assert_eq!(camelize("Import_"), "Import_");
        assert_eq!(camelize("hello-world"), "HelloWorld");
        assert_eq!(camelize("UPPER"), "UPPER");
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn test_camelize_lower() {
        assert_eq!(camelize_lower("pet_id"), "petId");
        assert_eq!(camelize_lower("PetId"), "petId");
        assert_eq!(camelize_lower("Import_"), "import_");
        assert_eq!(camelize_lower("Var1st"), "var1st");
        assert_eq!(camelize_lower("_1abc"), "1abc");
        assert_eq!(camelize_lower(""), "");
    }

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("PetId"), "pet_id");
        assert_eq!(underscore("HTTPServer"), "http_server");
        assert_eq!(underscore("model_200Response"), "model_200_response");
        assert_eq!(underscore("pet-store"), "pet_store");
        assert_eq!(underscore("already_snake"), "already_snake");
        assert_eq!(underscore("model_linux_"), "model_linux_");
        assert_eq!(underscore(""), "");
    }

    #[test]
    fn test_predicates() {
        assert!(starts_with_digit("200Response"));
        assert!(!starts_with_digit("Response200"));
        assert!(!starts_with_digit(""));
        assert!(is_upper_snake("HELLO_WORLD"));
        assert!(is_upper_snake(""));
        assert!(!is_upper_snake("Hello"));
        assert_eq!(upper_first("petId"), "PetId");
        assert_eq!(upper_first(""), "");
    }
}
