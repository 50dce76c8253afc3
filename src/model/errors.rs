//! Define error types for constant-set validation and file generation.
//!
//! Every variant is fatal. Validation errors (`MissingPackage`, `ReservedName`, `InvalidBuildTime`) are raised before
//! the filesystem is touched; `DirectoryCreation` and `Write` abort generation immediately.
//!
//! ## Notes
//!
//! - Prefer actionable messages: users should know which setting to fix.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error while validating a constant set or writing the generated class.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error("'{name}' is not a fully-qualified class name")]
    #[diagnostic(
        code(buildconst::missing_package),
        help("use <package>.<ClassName>, for example `org.example.BuildConstants`")
    )]
    MissingPackage { name: String },

    #[error("additional constants use reserved name(s): {}", .names.join(", "))]
    #[diagnostic(
        code(buildconst::reserved_name),
        help("the standard PROJECT_* and BUILD_* constants are always generated; rename the custom constant")
    )]
    ReservedName { names: Vec<String> },

    #[error("build time {millis} ms cannot be formatted as a date")]
    #[diagnostic(code(buildconst::invalid_build_time), help("build time is milliseconds since the Unix epoch"))]
    InvalidBuildTime { millis: i64 },

    #[error("could not create directories {}", .path.display())]
    #[diagnostic(code(buildconst::directory_creation))]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}", .path.display())]
    #[diagnostic(code(buildconst::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
