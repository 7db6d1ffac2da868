use thiserror::Error;

/// Result type for naming and type-resolution operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of engine errors.
///
/// Callers match on the kind to decide whether to abort a run or
/// substitute a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A mapping table entry or reference that cannot produce a legal name.
    InvalidMapping,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{table} override for '{name}' maps to an empty identifier")]
    EmptyOverride { table: &'static str, name: String },

    #[error("reserved word '{name}' escapes to '{escaped}', which is itself reserved")]
    EscapeCollision { name: String, escaped: String },

    #[error("reference '{reference}' points at model '{name}', which was never registered")]
    DanglingReference { reference: String, name: String },
}

impl Error {
    /// The classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyOverride { .. }
            | Error::EscapeCollision { .. }
            | Error::DanglingReference { .. } => ErrorKind::InvalidMapping,
        }
    }

    /// The raw name that caused the error.
    pub fn name(&self) -> &str {
        match self {
            Error::EmptyOverride { name, .. }
            | Error::EscapeCollision { name, .. }
            | Error::DanglingReference { name, .. } => name,
        }
    }
}
