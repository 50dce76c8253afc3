#![forbid(unsafe_code)]
//! buildconst - build metadata as Java constants
//!
//! buildconst generates a small, immutable Java class exposing a project's build metadata (name, version, group,
//! build time and arbitrary extra constants), so application code can reference build provenance without runtime
//! I/O. This crate provides the data model (`model`), the deterministic generator (`backend`), and the host layer
//! that a build pipeline drives (configuration and CLI).
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Example
//!
//! ```rust,no_run
//! use buildconst::{ConstantFileGenerator, ConstantSet};
//!
//! let set = ConstantSet::builder("org.example.BuildConstants")
//!     .project_name("example")
//!     .project_version("1.0.0")
//!     .constant("BUILD_NUMBER", 42)
//!     .build()?;
//! let path = ConstantFileGenerator::new("build/generated-src").generate(&set)?;
//! println!("wrote {}", path.display());
//! # Ok::<(), buildconst::GenerateError>(())
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod model;
pub mod version;

pub use backend::{ConstantFileGenerator, StalenessContract};
pub use model::{ConstantSet, ConstantSetBuilder, GenerateError, QualifiedName};

pub use buildconst_core::{ConstantValue, SourceAccess};
