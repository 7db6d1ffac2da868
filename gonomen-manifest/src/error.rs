use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "gonomen.toml");
/// ctx.validation_error("operation id cannot be empty");
/// ctx.engine_error(err, span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error pointing at an optional span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Attach source context to an engine error.
    pub fn engine_error(&self, error: gonomen_core::Error, span: Option<SourceSpan>) -> Box<Error> {
        let src = self.named_source();
        Box::new(match error {
            gonomen_core::Error::EmptyOverride { table, name } => Error::EmptyOverride {
                src,
                span,
                table,
                name,
            },
            gonomen_core::Error::EscapeCollision { name, escaped } => Error::EscapeCollision {
                src,
                span,
                name,
                escaped,
            },
            gonomen_core::Error::DanglingReference { reference, name } => {
                Error::DanglingReference {
                    src,
                    span,
                    reference,
                    name,
                }
            }
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest path with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse gonomen.toml")]
    #[diagnostic(code(gonomen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{table} override for '{name}' maps to an empty identifier")]
    #[diagnostic(
        code(gonomen::invalid_mapping),
        help("remove the entry or map '{name}' to a non-empty identifier")
    )]
    EmptyOverride {
        #[source_code]
        src: NamedSource<String>,
        #[label("empty replacement")]
        span: Option<SourceSpan>,
        table: &'static str,
        name: String,
    },

    #[error("reserved word '{name}' escapes to '{escaped}', which is itself reserved")]
    #[diagnostic(
        code(gonomen::invalid_mapping),
        help("give '{name}' a replacement in [reserved_words_mapping] that is not reserved")
    )]
    EscapeCollision {
        #[source_code]
        src: NamedSource<String>,
        #[label("escapes to a reserved word")]
        span: Option<SourceSpan>,
        name: String,
        escaped: String,
    },

    #[error("reference '{reference}' points at model '{name}', which was never declared")]
    #[diagnostic(
        code(gonomen::dangling_reference),
        help("declare the model with a [models.{name}] table")
    )]
    DanglingReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown model")]
        span: Option<SourceSpan>,
        reference: String,
        name: String,
    },

    #[error("{message}")]
    #[diagnostic(code(gonomen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        message: String,
    },
}
