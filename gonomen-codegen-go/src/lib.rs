//! Go naming and type-mapping engine.
//!
//! Turns language-neutral schema descriptions into Go identifiers, type
//! declarations, struct tags and per-file import lists. The entry point is
//! [`Generator`], which owns the frozen tables of one run and produces
//! [`ModelPlan`]s and [`OperationsPlan`]s.
//!
//! ```
//! use gonomen_codegen_go::{GoConfig, Generator};
//! use gonomen_codegen::NameOverrides;
//! use gonomen_core::{PropertyInput, SchemaType};
//!
//! let generator = Generator::new(GoConfig::default(), NameOverrides::new()).unwrap();
//! let field = generator
//!     .plan_field(&PropertyInput::new("created-at", SchemaType::primitive("DateTime")))
//!     .unwrap();
//!
//! assert_eq!(field.name, "CreatedAt");
//! assert_eq!(field.data_type, "time.Time");
//! assert_eq!(field.tag, " `json:\"created-at,omitempty\"`");
//! ```

mod config;
mod generator;
mod imports;
mod keywords;
mod naming;
mod plan;
mod post_process;
mod resolver;
mod tag;
mod text;
mod type_mapper;

pub use config::GoConfig;
pub use generator::Generator;
pub use imports::UnitImports;
pub use keywords::{GO_NAMING, GO_RESERVED_WORDS, GO_TYPE_MAPPING, is_number_type};
pub use naming::GoNaming;
pub use plan::{
    EnumVariantPlan, FieldPlan, ModelPlan, OperationPlan, OperationsPlan, ParameterPlan,
};
pub use post_process::{FileKind, PostProcessor};
pub use resolver::{
    GoTypeResolver, ModelRegistry, NormalizedComposition, is_container_like, normalize_composition,
};
pub use tag::{FieldDescriptor, TagComposer};
pub use text::{enum_value, escape_quotation_mark, escape_text, escape_unsafe_characters};
pub use type_mapper::{GoTypeMapper, package_of};
