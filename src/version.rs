//! buildconst version information.
//!
//! This module exposes the tool name and version as constants so all subsystems (CLI, generated file header)
//! agree on the same value.
//!
//! ## Notes
//!
//! - The version is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - The version is deliberately not written into generated files: upgrading the tool must not change their bytes.

/// The buildconst version string (for example, `0.1.0`).
pub const BUILDCONST_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name as it appears in the generated file header.
pub const GENERATOR_NAME: &str = "buildconst";
