//! CLI module for buildconst
//!
//! This module provides the command-line interface for the generator.
//!
//! ## Commands
//!
//! - `generate` - Write the constants class (and optionally the staleness contract)
//! - `render` - Print the constants class without writing anything
//! - `contract` - Print the staleness contract as JSON
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use buildconst_core::{ConstantValue, SourceAccess};
use clap::{Args, Parser, Subcommand};

use crate::config::{BuildConstantsConfig, parse_constant_arg};
use crate::version::BUILDCONST_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Render a diagnostic (with code and help) as a failure.
    pub fn diagnostic(err: impl miette::Diagnostic + Send + Sync + 'static) -> Self {
        Self::failure(format!("{:?}", miette::Report::new(err)))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate a Java source file with constants describing the build
#[derive(Parser, Debug)]
#[command(name = "buildconst")]
#[command(version = BUILDCONST_VERSION)]
#[command(about = "Generate a Java source file with constants describing the build", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the constants class below the output directory
    Generate {
        #[command(flatten)]
        task: TaskArgs,
        /// Also write the staleness contract as JSON to this file
        #[arg(long, value_name = "FILE")]
        contract: Option<PathBuf>,
    },

    /// Print the constants class to stdout without writing files
    Render {
        #[command(flatten)]
        task: TaskArgs,
    },

    /// Print the staleness contract (declared inputs and output directory) as JSON
    Contract {
        #[command(flatten)]
        task: TaskArgs,
    },
}

/// Settings shared by every command. Flags override the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct TaskArgs {
    /// Project directory; relative paths and conventions are resolved against it
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Configuration file (default: <project-dir>/buildconst.toml, if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fully-qualified name of the generated class (e.g. org.example.BuildConstants)
    #[arg(long, value_name = "NAME")]
    pub classname: Option<String>,

    /// Root of the generated source tree
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Access modifier for the class and its constants: public or package
    #[arg(long, value_name = "ACCESS", value_parser = parse_access)]
    pub access: Option<SourceAccess>,

    #[arg(long, value_name = "NAME")]
    pub project_name: Option<String>,

    #[arg(long, value_name = "VERSION")]
    pub project_version: Option<String>,

    #[arg(long, value_name = "GROUP")]
    pub project_group: Option<String>,

    /// Build time in milliseconds since the Unix epoch (default: now)
    #[arg(long, value_name = "MILLIS", allow_negative_numbers = true)]
    pub build_time: Option<i64>,

    /// Additional constant NAME=VALUE (17 int, 17L long, true/false, anything else a string; NAME= omits it)
    #[arg(short = 'D', long = "constant", value_name = "NAME=VALUE", value_parser = parse_constant)]
    pub constants: Vec<(String, Option<ConstantValue>)>,

    /// Additional file whose changes should trigger regeneration
    #[arg(short, long = "input", value_name = "FILE")]
    pub inputs: Vec<PathBuf>,
}

impl TaskArgs {
    /// The flag values as a configuration layer.
    pub fn to_overrides(&self) -> BuildConstantsConfig {
        BuildConstantsConfig {
            classname: self.classname.clone(),
            output_dir: self.output_dir.clone(),
            source_access: self.access,
            project_name: self.project_name.clone(),
            project_version: self.project_version.clone(),
            project_group: self.project_group.clone(),
            build_time: self.build_time,
            additional_constants: self.constants.iter().cloned().collect(),
            inputs: self.inputs.clone(),
        }
    }
}

fn parse_access(value: &str) -> Result<SourceAccess, String> {
    SourceAccess::parse(value).ok_or_else(|| format!("expected 'public' or 'package', got '{value}'"))
}

fn parse_constant(value: &str) -> Result<(String, Option<ConstantValue>), String> {
    parse_constant_arg(value).map_err(|e| e.to_string())
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate { task, contract } => commands::generate(&task, contract.as_deref()),
        Command::Render { task } => commands::render(&task),
        Command::Contract { task } => commands::contract(&task),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from([
            "buildconst",
            "generate",
            "--classname",
            "org.cthing.test.Constants",
            "--contract",
            "contract.json",
        ])
        .unwrap();
        if let Command::Generate { task, contract } = cli.command {
            assert_eq!(task.classname.as_deref(), Some("org.cthing.test.Constants"));
            assert_eq!(task.project_dir, PathBuf::from("."));
            assert_eq!(contract, Some(PathBuf::from("contract.json")));
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parse_constants() {
        let cli = Cli::try_parse_from([
            "buildconst",
            "render",
            "-D",
            "xyz=17",
            "--constant",
            "tuv=2300L",
            "-D",
            "gone=",
        ])
        .unwrap();
        let Command::Render { task } = cli.command else {
            panic!("Expected Render command");
        };
        assert_eq!(
            task.constants,
            vec![
                ("xyz".to_string(), Some(ConstantValue::Int(17))),
                ("tuv".to_string(), Some(ConstantValue::Long(2300))),
                ("gone".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_cli_parse_access() {
        let cli = Cli::try_parse_from(["buildconst", "contract", "--access", "package"]).unwrap();
        let Command::Contract { task } = cli.command else {
            panic!("Expected Contract command");
        };
        assert_eq!(task.access, Some(SourceAccess::Package));

        assert!(Cli::try_parse_from(["buildconst", "contract", "--access", "private"]).is_err());
    }

    #[test]
    fn test_cli_rejects_bad_constant() {
        assert!(Cli::try_parse_from(["buildconst", "render", "-D", "novalue"]).is_err());
    }

    #[test]
    fn test_cli_negative_build_time() {
        let cli = Cli::try_parse_from(["buildconst", "render", "--build-time", "-1000"]).unwrap();
        let Command::Render { task } = cli.command else {
            panic!("Expected Render command");
        };
        assert_eq!(task.build_time, Some(-1000));
    }

    #[test]
    fn test_overrides_from_flags() {
        let cli = Cli::try_parse_from([
            "buildconst",
            "render",
            "--project-version",
            "1.2.3",
            "-D",
            "A=1",
            "-i",
            "build.gradle.kts",
        ])
        .unwrap();
        let Command::Render { task } = cli.command else {
            panic!("Expected Render command");
        };
        let overrides = task.to_overrides();
        assert_eq!(overrides.project_version.as_deref(), Some("1.2.3"));
        assert_eq!(overrides.additional_constants["A"], Some(ConstantValue::Int(1)));
        assert_eq!(overrides.inputs, vec![PathBuf::from("build.gradle.kts")]);
        assert!(overrides.classname.is_none());
    }
}
