//! Constant file generator - renders a `ConstantSet` as a Java class and writes it
//!
//! Layout of the generated file:
//! - "DO NOT EDIT" header comment naming the originating tool
//! - package declaration
//! - `@SuppressWarnings("all")`, since nothing else references the constants
//! - `[public ]final class <SimpleName> {`
//! - `PROJECT_NAME`, `PROJECT_VERSION`, `PROJECT_GROUP`, `BUILD_TIME`, `BUILD_DATE`
//! - additional constants in ascending key order
//! - private constructor, closing brace

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use buildconst_core::lang::reserved;

use super::java_emitter::JavaEmitter;
use crate::model::{ConstantSet, GenerateError};
use crate::version::GENERATOR_NAME;

/// Writes one constants class below an output root.
#[derive(Debug, Clone)]
pub struct ConstantFileGenerator {
    /// Root of the generated source tree
    output_root: PathBuf,
    /// Who generated the file, as named in the header comment
    origin: String,
}

impl ConstantFileGenerator {
    pub fn new(output_root: impl AsRef<Path>) -> Self {
        Self {
            output_root: output_root.as_ref().to_path_buf(),
            origin: format!("the {GENERATOR_NAME} tool"),
        }
    }

    /// Name a different originator in the header ("File generated by <origin>.")
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// `output_root/<package dirs>/<SimpleName>.java`
    pub fn output_path(&self, set: &ConstantSet) -> PathBuf {
        self.output_root.join(set.name().source_path())
    }

    /// Render the class text. Pure and deterministic: equal sets always produce equal bytes.
    pub fn render(&self, set: &ConstantSet) -> String {
        let modifier = set.access().modifier();
        let class_name = set.name().simple_name();

        let mut e = JavaEmitter::new();
        e.comment("");
        e.comment(&format!("DO NOT EDIT - File generated by {}.", self.origin));
        e.comment("");
        e.blank_line();
        e.package_decl(set.name().package());
        e.blank_line();
        e.annotation("SuppressWarnings(\"all\")");
        e.block(&format!("{modifier}final class {class_name}"), |e| {
            e.blank_line();
            e.constant_field(modifier, "String", reserved::PROJECT_NAME, &quoted(set.project_name()));
            e.constant_field(modifier, "String", reserved::PROJECT_VERSION, &quoted(set.project_version()));
            e.constant_field(modifier, "String", reserved::PROJECT_GROUP, &quoted(set.project_group()));
            e.constant_field(
                modifier,
                "long",
                reserved::BUILD_TIME,
                &format!("{}L", set.build_time_millis()),
            );
            e.constant_field(modifier, "String", reserved::BUILD_DATE, &quoted(set.build_date()));

            for (name, value) in set.additional_constants() {
                e.constant_field(modifier, value.java_type(), name, &value.java_literal());
            }

            e.blank_line();
            e.private_constructor(class_name);
        });
        e.finish()
    }

    /// Render the set and write it to [`Self::output_path`], creating parent directories.
    ///
    /// The text is written to a sibling temporary file and renamed into place, so a failed write never leaves a
    /// truncated class at the output path.
    ///
    /// ## Errors
    ///
    /// - `DirectoryCreation` if the package directories cannot be created.
    /// - `Write` if the file cannot be written or moved into place.
    #[tracing::instrument(skip_all, fields(class = %set.name()))]
    pub fn generate(&self, set: &ConstantSet) -> Result<PathBuf, GenerateError> {
        let path = self.output_path(set);
        let text = self.render(set);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| GenerateError::DirectoryCreation {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        tracing::info!(
            "Writing constants class {}.{}",
            set.name().package(),
            set.name().simple_name()
        );
        write_atomically(&path, text.as_bytes())?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "constants class written");
        Ok(path)
    }
}

fn quoted(text: &str) -> String {
    format!("\"{text}\"")
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), GenerateError> {
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let result = fs::File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(contents)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp_path, path));

    if let Err(source) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(GenerateError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}
