//! Language-agnostic type mapping trait.

/// Trait for mapping schema types to language-specific type strings.
///
/// Implement this trait for each target language. Resolvers compose these
/// building blocks recursively, so every method must be total.
pub trait TypeMapper {
    /// Map a schema primitive token (e.g. `integer`, `DateTime`) to a type.
    fn map_primitive(&self, token: &str) -> Option<&'static str>;

    /// Whether the token already names a type of the target language.
    fn is_language_type(&self, token: &str) -> bool;

    /// The type of a single unconstrained value.
    fn any_type(&self) -> &'static str;

    /// The type of an object without declared properties.
    fn free_form_type(&self) -> &'static str;

    /// Wrap an element type in the language's list container.
    fn map_array(&self, inner: &str) -> String;

    /// Wrap a value type in a string-keyed map container.
    ///
    /// `container` is the spelling of a named container type when the
    /// schema carries one; otherwise the language default is used.
    fn map_map(&self, container: Option<&str>, value: &str) -> String;

    /// Mark a type as nullable (e.g., `*T` in Go, `Option<T>` in Rust).
    fn map_nullable(&self, inner: &str) -> String;
}
