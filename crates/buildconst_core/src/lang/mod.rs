//! Java-facing vocabulary for the generated constants class.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no IO, no side effects.
//! - The generator decides what to do with a match (reject, warn); these modules only answer questions about names.

pub mod java_keywords;
pub mod reserved;
