//! buildconst Backend
//!
//! This module turns a validated `ConstantSet` into a Java source file.
//!
//! The pipeline is:
//! 1. `ConstantSet` → `ConstantFileGenerator::render` → Java source text
//! 2. Compute `output_root/<package>/<SimpleName>.java` and create its directories
//! 3. Write the file; report the `StalenessContract` to the host build system
//!
//! ## Module Organization
//!
//! - `java_emitter.rs` - Low-level Java code string builder
//! - `generator.rs` - Rendering, path computation and writing
//! - `staleness.rs` - Declared inputs/outputs for incremental builds

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]

pub mod generator;
pub mod java_emitter;
pub mod staleness;

pub use generator::ConstantFileGenerator;
pub use java_emitter::JavaEmitter;
pub use staleness::StalenessContract;
