//! `gonomen.toml` parsing and validation.
//!
//! The manifest carries the engine options, the name and import mapping
//! tables, and the models and operations to plan. Errors are reported as
//! [`miette`] diagnostics pointing into the source file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_TAG, MANIFEST_FILE, Manifest, ManifestPlan, ModelTable, OperationEntry, locate,
    parse_manifest,
};
