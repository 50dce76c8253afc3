//! Task configuration for buildconst
//!
//! A generation is configured from a TOML file (`buildconst.toml` by default) and/or command-line overrides, then
//! resolved against host conventions into a [`GenerationRequest`]. Defaulting happens here, never in the engine.
//!
//! ```toml
//! classname = "org.cthing.test.Constants"
//! source_access = "PUBLIC"
//! project_version = "1.2.3"
//! build_time = 1718946725000
//! inputs = ["build.gradle.kts"]
//!
//! [additional_constants]
//! xyz = 17                # int
//! tuv = { long = 2300 }   # long
//! CUSTOM3 = true          # boolean
//! ABC = "def"             # String
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use buildconst_core::{ConstantValue, SourceAccess};
use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::backend::StalenessContract;
use crate::model::{ConstantSet, GenerateError};

/// Configuration file looked up in the project directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "buildconst.toml";

/// Output root used when none is configured, relative to the project directory.
pub const DEFAULT_OUTPUT_DIR: &str = "build/generated-src/build-constants/main";

/// Optional files that contribute to the build information when present.
pub const CONVENTIONAL_INPUTS: &[&str] = &["gradle.properties", "gradle/libs.versions.toml"];

/// Errors while loading or resolving configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("could not read configuration {}", .path.display())]
    #[diagnostic(code(buildconst::config_read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration {}", .path.display())]
    #[diagnostic(code(buildconst::config_parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid constant '{spec}': {reason}")]
    #[diagnostic(
        code(buildconst::invalid_constant),
        help("constants are written as NAME=VALUE, e.g. `BUILD_NUMBER=42`")
    )]
    InvalidConstant { spec: String, reason: String },

    #[error("no class name configured")]
    #[diagnostic(
        code(buildconst::missing_classname),
        help("set `classname` in the configuration file or pass --classname")
    )]
    MissingClassname,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Generate(#[from] GenerateError),
}

/// A scalar as written in TOML (additional constants, project version and group).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Datetime(toml::value::Datetime),
    /// `{ long = N }` forces a `long` even for small values
    Long { long: i64 },
}

impl From<ConfigValue> for ConstantValue {
    fn from(value: ConfigValue) -> Self {
        match value {
            ConfigValue::Bool(b) => ConstantValue::Bool(b),
            ConfigValue::Integer(n) => match i32::try_from(n) {
                Ok(int) => ConstantValue::Int(int),
                Err(_) => ConstantValue::Long(n),
            },
            ConfigValue::Float(f) => ConstantValue::text(f),
            ConfigValue::Text(s) => ConstantValue::Text(s),
            ConfigValue::Datetime(dt) => ConstantValue::text(dt),
            ConfigValue::Long { long } => ConstantValue::Long(long),
        }
    }
}

/// Raw configuration; every field is optional so files and flags can be layered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConstantsConfig {
    /// Fully-qualified name of the generated class
    pub classname: Option<String>,
    /// Root of the generated source tree
    pub output_dir: Option<PathBuf>,
    pub source_access: Option<SourceAccess>,
    pub project_name: Option<String>,
    /// Any scalar; written as its text form
    #[serde(deserialize_with = "deserialize_text_form")]
    pub project_version: Option<String>,
    #[serde(deserialize_with = "deserialize_text_form")]
    pub project_group: Option<String>,
    /// Milliseconds since the Unix epoch
    pub build_time: Option<i64>,
    /// `None` values are declared but not written
    #[serde(deserialize_with = "deserialize_constants")]
    pub additional_constants: BTreeMap<String, Option<ConstantValue>>,
    /// Extra files whose changes should trigger regeneration
    pub inputs: Vec<PathBuf>,
}

fn deserialize_constants<'de, D>(deserializer: D) -> Result<BTreeMap<String, Option<ConstantValue>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = BTreeMap::<String, ConfigValue>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k, Some(v.into()))).collect())
}

fn deserialize_text_form<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<ConfigValue>::deserialize(deserializer)?;
    Ok(raw.map(|v| ConstantValue::from(v).to_string()))
}

impl BuildConstantsConfig {
    /// Parse configuration text; `path` is only used for error messages.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Layer `overrides` on top of `self`: set fields win, constants are merged key by key, inputs are appended.
    pub fn merge(mut self, overrides: BuildConstantsConfig) -> Self {
        self.classname = overrides.classname.or(self.classname);
        self.output_dir = overrides.output_dir.or(self.output_dir);
        self.source_access = overrides.source_access.or(self.source_access);
        self.project_name = overrides.project_name.or(self.project_name);
        self.project_version = overrides.project_version.or(self.project_version);
        self.project_group = overrides.project_group.or(self.project_group);
        self.build_time = overrides.build_time.or(self.build_time);
        self.additional_constants.extend(overrides.additional_constants);
        self.inputs.extend(overrides.inputs);
        self
    }

    /// Apply host conventions and validate into a ready-to-run request.
    ///
    /// `config_file` is the configuration file that was read (if any); it is declared as an input.
    pub fn resolve(
        self,
        conventions: &ProjectConventions,
        config_file: Option<&Path>,
    ) -> Result<GenerationRequest, ConfigError> {
        let classname = self.classname.ok_or(ConfigError::MissingClassname)?;

        let mut builder = ConstantSet::builder(classname)
            .access(self.source_access.unwrap_or_default())
            .project_name(self.project_name.unwrap_or_else(|| conventions.project_name()))
            .project_version(self.project_version.unwrap_or_else(|| conventions.project_version()))
            .project_group(self.project_group.unwrap_or_else(|| conventions.project_group()))
            .constants(self.additional_constants);
        if let Some(millis) = self.build_time {
            builder = builder.build_time_millis(millis);
        }
        let set = builder.build()?;

        let output_dir = self.output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let output_root = conventions.resolve_path(output_dir);

        let mut inputs = conventions.conventional_inputs();
        inputs.extend(config_file.map(Path::to_path_buf));
        inputs.extend(self.inputs.into_iter().map(|p| conventions.resolve_path(p)));
        let contract = StalenessContract::new(&output_root, inputs);

        Ok(GenerationRequest {
            set,
            output_root,
            contract,
        })
    }
}

/// Parse a `NAME=VALUE` constant given on the command line.
///
/// Values use Java literal conventions: `17` is an `int` (or a `long` when it does not fit), `17L` is a `long`,
/// `true`/`false` are booleans, `"17"` forces a string, and anything else is a string. An empty value (`NAME=`)
/// declares the constant without writing it.
pub fn parse_constant_arg(spec: &str) -> Result<(String, Option<ConstantValue>), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidConstant {
        spec: spec.to_string(),
        reason: reason.to_string(),
    };

    let (name, raw) = spec.split_once('=').ok_or_else(|| invalid("missing '='"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid("empty name"));
    }
    Ok((name.to_string(), parse_literal(raw)))
}

fn parse_literal(raw: &str) -> Option<ConstantValue> {
    if raw.is_empty() {
        return None;
    }
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return Some(ConstantValue::Text(raw[1..raw.len() - 1].to_string()));
    }
    let value = match raw {
        "true" => ConstantValue::Bool(true),
        "false" => ConstantValue::Bool(false),
        _ => {
            if let Some(long) = raw.strip_suffix(['L', 'l']).and_then(|digits| digits.parse::<i64>().ok()) {
                ConstantValue::Long(long)
            } else if let Ok(int) = raw.parse::<i32>() {
                ConstantValue::Int(int)
            } else if let Ok(long) = raw.parse::<i64>() {
                ConstantValue::Long(long)
            } else {
                ConstantValue::Text(raw.to_string())
            }
        }
    };
    Some(value)
}

/// Host-side defaults for a project rooted at a directory.
///
/// These mirror the conventions of a Gradle root project: the name is the directory name, the version is
/// `unspecified` and the group is empty.
#[derive(Debug, Clone)]
pub struct ProjectConventions {
    project_dir: PathBuf,
}

impl ProjectConventions {
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            project_dir: project_dir.as_ref().to_path_buf(),
        }
    }

    /// Name of the project directory (after resolving `.` and symlinks where possible)
    pub fn project_name(&self) -> String {
        let dir = fs::canonicalize(&self.project_dir).unwrap_or_else(|_| self.project_dir.clone());
        dir.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn project_version(&self) -> String {
        crate::model::constant_set::DEFAULT_PROJECT_VERSION.to_string()
    }

    pub fn project_group(&self) -> String {
        String::new()
    }

    /// Resolve a relative path against the project directory
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_dir.join(path)
        }
    }

    /// The default configuration file for this project
    pub fn default_config_file(&self) -> PathBuf {
        self.project_dir.join(DEFAULT_CONFIG_FILE)
    }

    /// Optional files that always count as inputs (filtered later if missing)
    pub fn conventional_inputs(&self) -> Vec<PathBuf> {
        CONVENTIONAL_INPUTS.iter().map(|p| self.project_dir.join(p)).collect()
    }
}

/// A fully resolved generation: what to write, where, and what it depends on.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub set: ConstantSet,
    pub output_root: PathBuf,
    pub contract: StalenessContract,
}
