//! The validated set of constants consumed by the generator.
//!
//! A `ConstantSet` is assembled once per generation through [`ConstantSetBuilder`], validated in
//! [`ConstantSetBuilder::build`], and is immutable afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use buildconst_core::lang::{java_keywords, reserved};
use buildconst_core::time::format_build_date;
use buildconst_core::{ConstantValue, SourceAccess};

use super::errors::GenerateError;

/// Version used when the host does not supply one.
pub const DEFAULT_PROJECT_VERSION: &str = "unspecified";

/// A fully-qualified Java class name split into package and simple name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    package: String,
    simple_name: String,
}

impl QualifiedName {
    /// Split a dotted name on its last `.`.
    ///
    /// ## Errors
    ///
    /// `MissingPackage` when there is no `.` or any dotted segment is empty.
    pub fn parse(name: &str) -> Result<Self, GenerateError> {
        let missing = || GenerateError::MissingPackage { name: name.to_string() };
        let (package, simple_name) = name.rsplit_once('.').ok_or_else(missing)?;
        if simple_name.is_empty() || package.split('.').any(str::is_empty) {
            return Err(missing());
        }
        Ok(Self {
            package: package.to_string(),
            simple_name: simple_name.to_string(),
        })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Path of the source file relative to an output root (`org/cthing/test/Constants.java`).
    pub fn source_path(&self) -> PathBuf {
        let mut path: PathBuf = self.package.split('.').collect();
        path.push(format!("{}.java", self.simple_name));
        path
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.package, self.simple_name)
    }
}

/// Validated, immutable build metadata for one generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantSet {
    name: QualifiedName,
    access: SourceAccess,
    project_name: String,
    project_version: String,
    project_group: String,
    build_time_millis: i64,
    build_date: String,
    additional: BTreeMap<String, Option<ConstantValue>>,
}

impl ConstantSet {
    /// Start building a set for the given fully-qualified class name.
    pub fn builder(fully_qualified_name: impl Into<String>) -> ConstantSetBuilder {
        ConstantSetBuilder::new(fully_qualified_name)
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn access(&self) -> SourceAccess {
        self.access
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_version(&self) -> &str {
        &self.project_version
    }

    pub fn project_group(&self) -> &str {
        &self.project_group
    }

    pub fn build_time_millis(&self) -> i64 {
        self.build_time_millis
    }

    /// `BUILD_DATE` value, formatted in UTC during validation.
    pub fn build_date(&self) -> &str {
        &self.build_date
    }

    /// Additional constants that will be emitted, in ascending key order.
    ///
    /// Entries whose value is absent are skipped.
    pub fn additional_constants(&self) -> impl Iterator<Item = (&str, &ConstantValue)> {
        self.additional
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key.as_str(), v)))
    }
}

/// Builder for [`ConstantSet`].
///
/// Defaults: public access, empty project name and group, version `unspecified`, and the current time as the build
/// time (captured when the builder is created).
#[derive(Debug, Clone)]
pub struct ConstantSetBuilder {
    fully_qualified_name: String,
    access: SourceAccess,
    project_name: String,
    project_version: String,
    project_group: String,
    build_time_millis: i64,
    additional: BTreeMap<String, Option<ConstantValue>>,
}

impl ConstantSetBuilder {
    pub fn new(fully_qualified_name: impl Into<String>) -> Self {
        Self {
            fully_qualified_name: fully_qualified_name.into(),
            access: SourceAccess::default(),
            project_name: String::new(),
            project_version: DEFAULT_PROJECT_VERSION.to_string(),
            project_group: String::new(),
            build_time_millis: chrono::Utc::now().timestamp_millis(),
            additional: BTreeMap::new(),
        }
    }

    /// Set the access modifier for the class and its constants
    pub fn access(mut self, access: SourceAccess) -> Self {
        self.access = access;
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    /// Set the project version from anything with a text form
    pub fn project_version(mut self, version: impl fmt::Display) -> Self {
        self.project_version = version.to_string();
        self
    }

    /// Set the project group from anything with a text form
    pub fn project_group(mut self, group: impl fmt::Display) -> Self {
        self.project_group = group.to_string();
        self
    }

    /// Set the build time in milliseconds since the Unix epoch
    pub fn build_time_millis(mut self, millis: i64) -> Self {
        self.build_time_millis = millis;
        self
    }

    /// Add a custom constant. A later value for the same key replaces the earlier one.
    pub fn constant(mut self, name: impl Into<String>, value: impl Into<ConstantValue>) -> Self {
        self.additional.insert(name.into(), Some(value.into()));
        self
    }

    /// Add a custom constant that may be absent; absent constants are not written.
    pub fn optional_constant(mut self, name: impl Into<String>, value: Option<ConstantValue>) -> Self {
        self.additional.insert(name.into(), value);
        self
    }

    /// Add several custom constants at once
    pub fn constants<K, I>(mut self, constants: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Option<ConstantValue>)>,
    {
        self.additional
            .extend(constants.into_iter().map(|(key, value)| (key.into(), value)));
        self
    }

    /// Validate and freeze the set.
    ///
    /// ## Errors
    ///
    /// - `MissingPackage` if the class name has no package.
    /// - `ReservedName` naming every custom key that collides with a standard constant.
    /// - `InvalidBuildTime` if the build time cannot be formatted as a date.
    pub fn build(self) -> Result<ConstantSet, GenerateError> {
        let name = QualifiedName::parse(&self.fully_qualified_name)?;

        // Keys come out of the BTreeMap sorted, so the error lists them in a stable order.
        let collisions: Vec<String> = self
            .additional
            .keys()
            .filter(|key| reserved::is_reserved(key))
            .cloned()
            .collect();
        if !collisions.is_empty() {
            return Err(GenerateError::ReservedName { names: collisions });
        }

        let build_date = format_build_date(self.build_time_millis).ok_or(GenerateError::InvalidBuildTime {
            millis: self.build_time_millis,
        })?;

        let set = ConstantSet {
            name,
            access: self.access,
            project_name: self.project_name,
            project_version: self.project_version,
            project_group: self.project_group,
            build_time_millis: self.build_time_millis,
            build_date,
            additional: self.additional,
        };
        warn_unrepresentable(&set);
        Ok(set)
    }
}

/// Report names and values the generator will emit verbatim even though they do not form valid Java.
fn warn_unrepresentable(set: &ConstantSet) {
    if !java_keywords::is_identifier(set.name.simple_name()) {
        tracing::warn!(class = set.name.simple_name(), "class name is not a valid Java identifier");
    }
    let standard = [
        (reserved::PROJECT_NAME, set.project_name.as_str()),
        (reserved::PROJECT_VERSION, set.project_version.as_str()),
        (reserved::PROJECT_GROUP, set.project_group.as_str()),
    ];
    for (name, value) in standard {
        if java_keywords::needs_escaping(value) {
            tracing::warn!(constant = name, "value contains characters that are not escaped in the generated source");
        }
    }
    for (name, value) in set.additional_constants() {
        if !java_keywords::is_identifier(name) {
            tracing::warn!(constant = name, "constant name is not a valid Java identifier");
        }
        if let ConstantValue::Text(text) = value {
            if java_keywords::needs_escaping(text) {
                tracing::warn!(
                    constant = name,
                    "value contains characters that are not escaped in the generated source"
                );
            }
        }
    }
}
