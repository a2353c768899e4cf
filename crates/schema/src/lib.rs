//! Attribute schemas for manifest data sources
//!
//! Describes configuration attributes (type, optionality, validators), checks a
//! configuration value against them and reports problems as diagnostics.

pub mod attribute;
pub mod conform;
pub mod diagnostics;
pub mod path;
pub mod validate;
pub mod validators;

pub use attribute::{Attribute, AttributeType, Attributes, ElementType, Schema, SchemaObject};
pub use conform::conform_config;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use path::{AttributePath, PathStep};
pub use validate::validate_config;
pub use validators::Validator;
