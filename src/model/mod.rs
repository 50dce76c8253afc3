//! Constant set data model
//!
//! - `constant_set.rs` - `ConstantSet`, its builder and validation
//! - `errors.rs` - `GenerateError`, the fatal error taxonomy shared with the backend

pub mod constant_set;
pub mod errors;

pub use constant_set::{ConstantSet, ConstantSetBuilder, QualifiedName};
pub use errors::GenerateError;
