//! Shared code generation utilities for gonomen.
//!
//! This crate provides language-agnostic abstractions used by
//! language-specific engines (e.g., `gonomen-codegen-go`).
//!
//! # Module Organization
//!
//! - [`generation`] - Output management (ImportCollector, ImportSubstitutions)
//! - [`language`] - Language-specific abstractions (NamingConvention, ReservedWords, TypeMapper)
//! - [`overrides`] - User-supplied name overrides

pub mod generation;
pub mod language;
pub mod overrides;

pub use language::{NamingConvention, ReservedWords, TypeMapper};
pub use overrides::NameOverrides;
