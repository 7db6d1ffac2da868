//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`ReservedWords`] - Frozen, validated reserved-word table for a run
//! - [`TypeMapper`] - Trait for mapping schema types to language types

mod naming;
mod traits;

pub use naming::{NamingConvention, ReservedWords};
pub use traits::TypeMapper;
