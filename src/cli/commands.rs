//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::{ConstantFileGenerator, StalenessContract};
use crate::config::{BuildConstantsConfig, GenerationRequest, ProjectConventions};

use super::{CliError, CliResult, ExitCode, TaskArgs};

// ============================================================================
// Request preparation (shared by all commands)
// ============================================================================

/// Load the configuration file (explicit, or the conventional one if present), layer the flags on top, and
/// resolve against the project conventions.
pub fn prepare_request(task: &TaskArgs) -> CliResult<GenerationRequest> {
    let conventions = ProjectConventions::new(&task.project_dir);

    let config_file: Option<PathBuf> = match &task.config {
        Some(path) => Some(conventions.resolve_path(path)),
        None => Some(conventions.default_config_file()).filter(|p| p.is_file()),
    };

    let base = match &config_file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            BuildConstantsConfig::load(path).map_err(CliError::diagnostic)?
        }
        None => BuildConstantsConfig::default(),
    };

    base.merge(task.to_overrides())
        .resolve(&conventions, config_file.as_deref())
        .map_err(CliError::diagnostic)
}

// ============================================================================
// Commands
// ============================================================================

/// Write the constants class and print its path.
pub fn generate(task: &TaskArgs, contract_file: Option<&Path>) -> CliResult<ExitCode> {
    let request = prepare_request(task)?;
    tracing::info!(
        "Generating constants for the {} project build",
        request.set.project_name()
    );

    let generator = ConstantFileGenerator::new(&request.output_root);
    let path = generator.generate(&request.set).map_err(CliError::diagnostic)?;

    if let Some(contract_file) = contract_file {
        write_contract(&request.contract, contract_file)?;
    }

    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}

/// Print the constants class to stdout.
pub fn render(task: &TaskArgs) -> CliResult<ExitCode> {
    let request = prepare_request(task)?;
    let text = ConstantFileGenerator::new(&request.output_root).render(&request.set);
    print!("{text}");
    Ok(ExitCode::SUCCESS)
}

/// Print the staleness contract as JSON.
pub fn contract(task: &TaskArgs) -> CliResult<ExitCode> {
    let request = prepare_request(task)?;
    println!("{}", contract_json(&request.contract)?);
    Ok(ExitCode::SUCCESS)
}

fn contract_json(contract: &StalenessContract) -> CliResult<String> {
    contract
        .to_json()
        .map_err(|e| CliError::failure(format!("Error serializing staleness contract: {}", e)))
}

fn write_contract(contract: &StalenessContract, path: &Path) -> CliResult<()> {
    let json = contract_json(contract)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| CliError::failure(format!("Cannot create directory '{}': {}", parent.display(), e)))?;
    }
    fs::write(path, format!("{json}\n"))
        .map_err(|e| CliError::failure(format!("Error writing contract '{}': {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "staleness contract written");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn task_in(dir: &Path) -> TaskArgs {
        TaskArgs {
            project_dir: dir.to_path_buf(),
            classname: Some("org.cthing.test.Constants".to_string()),
            build_time: Some(1718946725000),
            ..Default::default()
        }
    }

    #[test]
    fn test_prepare_uses_conventional_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("buildconst.toml"), "project_version = \"1.2.3\"\n").unwrap();
        let request = prepare_request(&task_in(dir.path())).unwrap();
        assert_eq!(request.set.project_version(), "1.2.3");
        let inputs: Vec<&Path> = request.contract.inputs().collect();
        assert_eq!(inputs, vec![dir.path().join("buildconst.toml").as_path()]);
    }

    #[test]
    fn test_prepare_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("buildconst.toml"), "project_version = \"1.2.3\"\n").unwrap();
        let task = TaskArgs {
            project_version: Some("2.0.0".to_string()),
            ..task_in(dir.path())
        };
        assert_eq!(prepare_request(&task).unwrap().set.project_version(), "2.0.0");
    }

    #[test]
    fn test_prepare_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let task = TaskArgs {
            config: Some(PathBuf::from("nope.toml")),
            ..task_in(dir.path())
        };
        let err = prepare_request(&task).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("nope.toml"));
    }

    #[test]
    fn test_generate_writes_class_and_contract() {
        let dir = tempfile::tempdir().unwrap();
        let contract_file = dir.path().join("reports/contract.json");
        let code = generate(&task_in(dir.path()), Some(&contract_file)).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(
            dir.path()
                .join("build/generated-src/build-constants/main/org/cthing/test/Constants.java")
                .is_file()
        );
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(contract_file).unwrap()).unwrap();
        assert!(json["output_dir"].as_str().unwrap().ends_with("build/generated-src/build-constants/main"));
    }

    #[test]
    fn test_generate_reserved_name_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let task = TaskArgs {
            constants: vec![("BUILD_DATE".to_string(), Some("x".into()))],
            ..task_in(dir.path())
        };
        let err = generate(&task, None).unwrap_err();
        assert!(err.message.contains("BUILD_DATE"));
        assert!(!dir.path().join("build").exists());
    }
}
