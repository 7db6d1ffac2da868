//! Go language tables.

use gonomen_codegen::NamingConvention;
use gonomen_core::camelize;

/// Reserved words: predeclared types, keywords, plus `error` and `nil`.
///
/// `error` is not a keyword but shows up so often that shadowing it breaks
/// generated code in practice.
pub const GO_RESERVED_WORDS: &[&str] = &[
    // data types
    "string", "bool", "uint", "uint8", "uint16", "uint32", "uint64", "int", "int8", "int16",
    "int32", "int64", "float32", "float64", "complex64", "complex128", "rune", "byte", "uintptr",
    // keywords
    "break", "default", "func", "interface", "select", "case", "defer", "go", "map", "struct",
    "chan", "else", "goto", "package", "switch", "const", "fallthrough", "if", "range", "type",
    "continue", "for", "import", "return", "var",
    // ergonomics
    "error", "nil",
];

/// File name suffixes the Go toolchain interprets (`_test`, `$GOOS`, `$GOARCH`).
pub const GO_RESERVED_FILE_SUFFIXES: &[&str] = &[
    // test
    "test",
    // $GOOS
    "aix", "android", "darwin", "dragonfly", "freebsd", "illumos", "js", "linux", "netbsd",
    "openbsd", "plan9", "solaris", "windows",
    // $GOARCH
    "386", "amd64", "arm", "arm64", "mips", "mips64", "mips64le", "mipsle", "ppc64", "ppc64le",
    "s390x", "wasm",
];

/// Spelled-out names for enum values made only of symbols.
pub const SYMBOL_NAMES: &[(&str, &str)] = &[
    ("$", "Dollar"),
    ("^", "Caret"),
    ("|", "Pipe"),
    ("=", "Equal"),
    ("*", "Star"),
    ("-", "Minus"),
    ("&", "Ampersand"),
    ("%", "Percent"),
    ("#", "Hash"),
    ("@", "At"),
    ("!", "Exclamation"),
    ("+", "Plus"),
    (":", "Colon"),
    (";", "Semicolon"),
    (">", "Greater_Than"),
    ("<", "Less_Than"),
    (".", "Period"),
    ("_", "Underscore"),
    ("?", "Question_Mark"),
    (",", "Comma"),
    ("'", "Quote"),
    ("\"", "Double_Quote"),
    ("/", "Slash"),
    ("\\", "Back_Slash"),
    ("(", "Left_Parenthesis"),
    (")", "Right_Parenthesis"),
    ("{", "Left_Curly_Bracket"),
    ("}", "Right_Curly_Bracket"),
    ("~", "Tilde"),
    ("[", "Left_Square_Bracket"),
    ("]", "Right_Square_Bracket"),
    ("`", "Backtick"),
    ("<=", "Less_Than_Or_Equal_To"),
    (">=", "Greater_Than_Or_Equal_To"),
    ("!=", "Not_Equal"),
    ("<>", "Not_Equal"),
    ("~=", "Tilde_Equal"),
    ("==", "Double_Equal"),
];

/// Schema primitive token -> Go type.
pub const GO_TYPE_MAPPING: &[(&str, &str)] = &[
    ("integer", "int32"),
    ("long", "int64"),
    ("number", "float32"),
    ("float", "float32"),
    ("double", "float64"),
    ("decimal", "float64"),
    ("boolean", "bool"),
    ("string", "string"),
    ("UUID", "string"),
    ("URI", "string"),
    ("date", "time.Time"),
    ("DateTime", "time.Time"),
    ("password", "string"),
    ("File", "io.ReadCloser"),
    ("file", "io.ReadCloser"),
    ("binary", "io.ReadCloser"),
    ("ByteArray", "string"),
    ("null", "nil"),
    // A free-form object is "an unordered set of properties mapping a
    // string to an instance"; an arbitrary type is a single value.
    ("object", "map[string]interface{}"),
    ("AnyType", "interface{}"),
];

/// Types that are already Go and pass through unchanged.
pub const GO_LANGUAGE_PRIMITIVES: &[&str] = &[
    "string",
    "bool",
    "uint",
    "uint32",
    "uint64",
    "int",
    "int32",
    "int64",
    "float32",
    "float64",
    "complex64",
    "complex128",
    "rune",
    "byte",
    "map[string]interface{}",
    "interface{}",
];

/// Numeric Go types; enums backed by these get marker-prefixed constants.
pub const GO_NUMBER_TYPES: &[&str] = &[
    "uint", "uint8", "uint16", "uint32", "uint64", "int", "int8", "int16", "int32", "int64",
    "float32", "float64",
];

fn escape_go_reserved(name: &str) -> String {
    // Go fields must start with a capital to be exported, so the marker
    // goes at the end.
    format!("{}_", camelize(name))
}

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    reserved_words: GO_RESERVED_WORDS,
    escape_reserved: escape_go_reserved,
    reserved_file_suffixes: GO_RESERVED_FILE_SUFFIXES,
    file_suffix_marker: '_',
    symbol_names: SYMBOL_NAMES,
};

/// Whether a Go type is numeric.
pub fn is_number_type(data_type: &str) -> bool {
    GO_NUMBER_TYPES.contains(&data_type)
}
