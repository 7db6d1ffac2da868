//! Core types and utilities for gonomen.
//!
//! This crate provides the language-neutral schema model, identifier
//! categories, casing helpers and the error type shared by every
//! gonomen crate.

mod error;
mod identifier;
mod schema;
mod types;
mod utils;

pub use error::{Error, ErrorKind, Result};
pub use identifier::{IdentifierCategory, IdentifierRequest};
pub use schema::{
    COMPONENTS_REF_PREFIX, CompositionKind, DEFINITIONS_REF_PREFIX, SchemaType, reference_name,
};
pub use types::{
    CompositionInput, EnumInput, ModelInput, OperationInput, ParameterInput, ParameterLocation,
    PropertyInput,
};
pub use utils::{
    camelize, camelize_lower, is_upper_snake, sanitize_name, starts_with_digit, underscore,
    upper_first,
};
