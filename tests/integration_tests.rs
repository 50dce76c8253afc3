//! End-to-end generation tests
//!
//! Each fixture under `tests/fixtures/<case>/` is a small project: a `buildconst.toml` and the `Constants.java`
//! the generator is expected to write for it. The project is copied into a temporary directory, generated through
//! the same path the CLI uses, and the written file is compared byte for byte.

use std::fs;
use std::path::{Path, PathBuf};

use buildconst::cli::commands;
use buildconst::cli::{ExitCode, TaskArgs};
use buildconst::config::{BuildConstantsConfig, ProjectConventions};
use buildconst::{ConstantFileGenerator, ConstantSet, GenerateError, StalenessContract};

const GENERATED: &str = "build/generated-src/build-constants/main/org/cthing/test/Constants.java";

/// Copy a fixture project into a fresh temporary directory named `testProject`
fn copy_project(case: &str) -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let project = tmp.path().join("testProject");
    fs::create_dir_all(&project).expect("create project dir");
    let source = Path::new("tests/fixtures").join(case).join("buildconst.toml");
    fs::copy(&source, project.join("buildconst.toml"))
        .unwrap_or_else(|_| panic!("Failed to copy fixture: {}", source.display()));
    (tmp, project)
}

fn expected_source(case: &str) -> String {
    let path = Path::new("tests/fixtures").join(case).join("Constants.java");
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read expected source: {}", path.display()))
}

fn generate_project(case: &str) -> String {
    let (_tmp, project) = copy_project(case);
    let task = TaskArgs {
        project_dir: project.clone(),
        ..Default::default()
    };
    let code = commands::generate(&task, None).expect("generation failed");
    assert_eq!(code, ExitCode::SUCCESS);

    let actual = project.join(GENERATED);
    assert!(actual.is_file(), "missing {}", actual.display());
    fs::read_to_string(actual).expect("read generated source")
}

#[test]
fn test_generate_public() {
    assert_eq!(generate_project("public-access"), expected_source("public-access"));
}

#[test]
fn test_generate_package() {
    assert_eq!(generate_project("package-access"), expected_source("package-access"));
}

#[test]
fn test_configured_values() {
    assert_eq!(generate_project("configured-values"), expected_source("configured-values"));
}

#[test]
fn test_additional_constants() {
    assert_eq!(
        generate_project("additional-constants"),
        expected_source("additional-constants")
    );
}

#[test]
fn test_default_project_name_is_directory_name() {
    let (_tmp, project) = copy_project("public-access");
    fs::write(
        project.join("buildconst.toml"),
        "classname = \"org.cthing.test.Constants\"\nbuild_time = 1718946725000\n",
    )
    .unwrap();
    let config = BuildConstantsConfig::load(&project.join("buildconst.toml")).unwrap();
    let request = config.resolve(&ProjectConventions::new(&project), None).unwrap();
    assert_eq!(request.set.project_name(), "testProject");
    assert_eq!(request.set.project_version(), "unspecified");
    assert_eq!(request.set.project_group(), "");
}

#[test]
fn test_regeneration_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let set = ConstantSet::builder("org.cthing.test.Constants")
        .project_name("testProject")
        .build_time_millis(1718946725000)
        .constant("xyz", 17)
        .constant("ABC", "def")
        .build()
        .unwrap();
    let generator = ConstantFileGenerator::new(tmp.path());

    let path = generator.generate(&set).unwrap();
    let first = fs::read(&path).unwrap();
    generator.generate(&set).unwrap();
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_reserved_names_write_nothing() {
    for name in ["PROJECT_NAME", "PROJECT_VERSION", "PROJECT_GROUP", "BUILD_TIME", "BUILD_DATE"] {
        let tmp = tempfile::tempdir().unwrap();
        let result = ConstantSet::builder("org.cthing.test.Constants")
            .constant(name, "custom")
            .build()
            .and_then(|set| ConstantFileGenerator::new(tmp.path()).generate(&set));

        match result {
            Err(GenerateError::ReservedName { names }) => assert_eq!(names, vec![name.to_string()]),
            other => panic!("expected ReservedName for {name}, got {other:?}"),
        }
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0, "{name} left files behind");
    }
}

#[test]
fn test_missing_package_writes_nothing() {
    let (_tmp, project) = copy_project("public-access");
    let task = TaskArgs {
        project_dir: project.clone(),
        classname: Some("Constants".to_string()),
        ..Default::default()
    };
    let err = commands::generate(&task, None).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(!project.join("build").exists());
}

#[test]
fn test_missing_inputs_are_filtered() {
    let tmp = tempfile::tempdir().unwrap();
    let present_a = tmp.path().join("build.gradle.kts");
    let present_b = tmp.path().join("gradle.properties");
    let missing = tmp.path().join("gradle/libs.versions.toml");
    fs::write(&present_a, "").unwrap();
    fs::write(&present_b, "").unwrap();

    let contract = StalenessContract::new(tmp.path().join("out"), [&present_a, &missing, &present_b]);
    let inputs: Vec<&Path> = contract.inputs().collect();
    assert_eq!(inputs, vec![present_a.as_path(), present_b.as_path()]);
}

#[test]
fn test_contract_declares_config_and_declared_inputs() {
    let (_tmp, project) = copy_project("public-access");
    fs::write(project.join("build.gradle.kts"), "").unwrap();
    let contract_file = project.join("contract.json");
    let task = TaskArgs {
        project_dir: project.clone(),
        inputs: vec![PathBuf::from("build.gradle.kts"), PathBuf::from("absent.properties")],
        ..Default::default()
    };
    commands::generate(&task, Some(&contract_file)).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(contract_file).unwrap()).unwrap();
    let inputs: Vec<String> = json["inputs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert_eq!(inputs.len(), 2);
    assert!(inputs[0].ends_with("build.gradle.kts"));
    assert!(inputs[1].ends_with("buildconst.toml"));
}
