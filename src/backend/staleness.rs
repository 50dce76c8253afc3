//! Staleness contract - what the host build system should watch
//!
//! The generator does no up-to-date checking itself. It only declares which files feed a generation (any change
//! to them should trigger a rerun) and which directory it writes into. The host build system compares these
//! declarations against its own cache.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Declared inputs and output of one generation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StalenessContract {
    /// Existing input files, de-duplicated and sorted
    inputs: BTreeSet<PathBuf>,
    /// The directory the generated source tree is written below
    output_dir: PathBuf,
}

impl StalenessContract {
    /// Declare a contract. Inputs that do not exist (or are not regular files) are silently dropped, so optional
    /// files such as a properties file can be declared unconditionally.
    pub fn new<I, P>(output_dir: impl AsRef<Path>, inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let inputs: BTreeSet<PathBuf> = inputs
            .into_iter()
            .map(|p| p.as_ref().to_path_buf())
            .filter(|p| {
                let exists = p.is_file();
                if !exists {
                    tracing::debug!(path = %p.display(), "dropping missing input");
                }
                exists
            })
            .collect();

        Self {
            inputs,
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Declared input files in sorted order
    pub fn inputs(&self) -> impl Iterator<Item = &Path> {
        self.inputs.iter().map(PathBuf::as_path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Pretty JSON form for the host build system
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_inputs_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("build.gradle.kts");
        let b = dir.path().join("gradle.properties");
        let missing = dir.path().join("gradle/libs.versions.toml");
        fs::write(&a, "").unwrap();
        fs::write(&b, "").unwrap();

        let contract = StalenessContract::new(dir.path().join("out"), [&a, &b, &missing]);
        let inputs: Vec<&Path> = contract.inputs().collect();
        assert_eq!(inputs, vec![a.as_path(), b.as_path()]);
        assert_eq!(contract.output_dir(), dir.path().join("out"));
    }

    #[test]
    fn test_duplicates_collapsed() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.toml");
        fs::write(&a, "").unwrap();
        let contract = StalenessContract::new("out", [&a, &a]);
        assert_eq!(contract.inputs().count(), 1);
    }

    #[test]
    fn test_directories_are_not_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let contract = StalenessContract::new("out", [dir.path()]);
        assert_eq!(contract.inputs().count(), 0);
    }

    #[test]
    fn test_no_inputs() {
        let contract = StalenessContract::new("out", Vec::<PathBuf>::new());
        assert_eq!(contract.inputs().count(), 0);
        assert_eq!(contract.output_dir(), Path::new("out"));
    }

    #[test]
    fn test_json_shape() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.toml");
        fs::write(&a, "").unwrap();
        let contract = StalenessContract::new("out", [&a]);
        let json: serde_json::Value = serde_json::from_str(&contract.to_json().unwrap()).unwrap();
        assert_eq!(json["output_dir"], "out");
        assert_eq!(json["inputs"][0], &*a.to_string_lossy());
    }
}
