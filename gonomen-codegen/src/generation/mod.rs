//! Code generation outputs.
//!
//! - [`ImportCollector`] - Per-unit import tracking and deduplication
//! - [`ImportSubstitutions`] - Static path -> alternatives expansion table

mod imports;

pub use imports::{ImportCollector, ImportSubstitutions};
