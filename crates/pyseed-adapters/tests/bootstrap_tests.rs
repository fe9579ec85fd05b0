//! End-to-end bootstrap runs against real and in-memory adapters.

use std::fs;
use std::path::Path;

use pyseed_adapters::{LocalFilesystem, MemoryFilesystem, RecordingCommandRunner};
use pyseed_core::{
    application::{ApplicationError, services::HOOKS_ADVISORY},
    prelude::*,
};
use tempfile::TempDir;

const COMMIT: &str = r#"git commit -m "Initial commit from cookiecutter-python-windsurf""#;

fn demo() -> ProjectContext {
    ProjectContext::new("demo_pkg", "Demo Project", "demo-project").unwrap()
}

fn local_service(root: &Path, runner: &RecordingCommandRunner) -> BootstrapService {
    BootstrapService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(runner.clone()),
        root,
        BootstrapSettings::default(),
    )
}

#[test]
fn creates_empty_markers_then_runs_tools_in_order() {
    let tmp = TempDir::new().unwrap();
    let runner = RecordingCommandRunner::new();

    let report = local_service(tmp.path(), &runner).run(&demo()).unwrap();

    for marker in [
        "src/demo_pkg/__init__.py",
        "tests/__init__.py",
        "tests/test_example.py",
    ] {
        let path = tmp.path().join(marker);
        assert!(path.is_file(), "{marker} missing");
        assert_eq!(fs::metadata(&path).unwrap().len(), 0, "{marker} not empty");
    }

    assert_eq!(
        runner.command_lines(),
        vec![
            "git init",
            "git add .",
            "git config commit.gpgsign false",
            COMMIT,
            "pre-commit install",
            "pre-commit autoupdate",
        ]
    );
    assert!(runner.calls().iter().all(|(_, dir)| dir == tmp.path()));
    assert_eq!(report.hooks, HookStatus::Installed);
}

#[test]
fn existing_content_survives_and_rerun_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let tests_dir = tmp.path().join("tests");
    fs::create_dir_all(&tests_dir).unwrap();
    let templated = "def test_example_initialization():\n    assert True\n";
    fs::write(tests_dir.join("test_example.py"), templated).unwrap();

    let runner = RecordingCommandRunner::new();
    let service = local_service(tmp.path(), &runner);
    service.run(&demo()).unwrap();
    service.run(&demo()).unwrap();

    assert_eq!(
        fs::read_to_string(tests_dir.join("test_example.py")).unwrap(),
        templated
    );
    // the second run re-invokes init; its status is the tool's business
    assert_eq!(
        runner
            .command_lines()
            .iter()
            .filter(|l| *l == "git init")
            .count(),
        2
    );
}

#[test]
fn file_in_place_of_package_dir_aborts_before_vcs() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("src")).unwrap();
    fs::write(tmp.path().join("src").join("demo_pkg"), "oops").unwrap();

    let runner = RecordingCommandRunner::new();
    let err = local_service(tmp.path(), &runner)
        .run(&demo())
        .unwrap_err();

    assert!(matches!(
        err,
        PyseedError::Application(ApplicationError::FilesystemError { .. })
    ));
    assert!(runner.command_lines().is_empty());
}

#[test]
fn each_vcs_failure_blocks_later_steps() {
    for failing in [
        "git init",
        "git add .",
        "git config commit.gpgsign false",
        COMMIT,
    ] {
        let tmp = TempDir::new().unwrap();
        let runner = RecordingCommandRunner::new().with_failure(failing, Some(1));

        let err = local_service(tmp.path(), &runner)
            .run(&demo())
            .unwrap_err();

        assert_eq!(err.tool_exit_code(), Some(1), "{failing}");
        assert_eq!(runner.command_lines().last().map(String::as_str), Some(failing));
        assert!(!runner.attempted("pre-commit"), "{failing}");
    }
}

#[test]
fn missing_vcs_binary_fails_the_run() {
    let tmp = TempDir::new().unwrap();
    let runner = RecordingCommandRunner::new().with_missing_program("git");

    let err = local_service(tmp.path(), &runner)
        .run(&demo())
        .unwrap_err();

    assert!(matches!(
        err,
        PyseedError::Application(ApplicationError::CommandNotFound { .. })
    ));
    assert_eq!(runner.command_lines(), vec!["git init"]);
}

#[test]
fn missing_hook_manager_still_succeeds() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingCommandRunner::new().with_missing_program("pre-commit");
    let service = BootstrapService::new(
        Box::new(fs.clone()),
        Box::new(runner.clone()),
        "/work/demo-project",
        BootstrapSettings::default(),
    );

    let report = service.run(&demo()).unwrap();

    assert_eq!(report.hooks.advisory(), Some(HOOKS_ADVISORY));
    assert!(!runner.command_lines().contains(&"pre-commit autoupdate".to_string()));
    assert!(fs.is_dir(Path::new("/work/demo-project/src/demo_pkg")));
    assert_eq!(
        fs.read_file(Path::new("/work/demo-project/tests/__init__.py"))
            .as_deref(),
        Some("")
    );
}

#[test]
fn completion_report_for_demo_project() {
    let runner = RecordingCommandRunner::new();
    let service = BootstrapService::new(
        Box::new(MemoryFilesystem::new()),
        Box::new(runner),
        "/work/demo-project",
        BootstrapSettings::default(),
    );

    let report = service.run(&demo()).unwrap();

    assert!(report.completion.contains("Demo Project"));
    assert!(report.completion.contains("cd demo-project"));
    assert!(report.completion.contains("task ci"));
}
