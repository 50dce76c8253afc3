//! Provide the shared, pure vocabulary for the buildconst generator.
//!
//! This crate is intentionally small and dependency-light. It holds the deterministic pieces that decide *what* a
//! constant looks like in generated Java source, independent of where the file ends up:
//! - the value model ([`ConstantValue`]) and its Java type/literal rendering,
//! - the access level of the generated class ([`SourceAccess`]),
//! - the reserved constant names and Java keyword tables ([`lang`]),
//! - UTC build-date formatting ([`time`]).
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no generator-specific types.
//! - Rendering here never escapes text. Names and string values are assumed to be plain identifier-safe text; see
//!   [`lang::java_keywords::needs_escaping`] for detecting values that break that assumption.

pub mod lang;
pub mod time;
pub mod values;

pub use values::{ConstantValue, SourceAccess};
