//! Scriptable command runner for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use pyseed_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::ProcessInvocation,
    error::PyseedResult,
};

/// Records every invocation and answers from a script.
///
/// Unscripted invocations succeed. Clones share the history.
#[derive(Debug, Clone, Default)]
pub struct RecordingCommandRunner {
    inner: Arc<RwLock<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    calls: Vec<(ProcessInvocation, PathBuf)>,
    missing_programs: Vec<String>,
    failures: HashMap<String, Option<i32>>,
}

impl RecordingCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every invocation of `program` reports `CommandNotFound`.
    pub fn with_missing_program(self, program: impl Into<String>) -> Self {
        self.inner
            .write()
            .unwrap()
            .missing_programs
            .push(program.into());
        self
    }

    /// The invocation whose `command_line()` equals `command` exits with `code`.
    pub fn with_failure(self, command: impl Into<String>, code: Option<i32>) -> Self {
        self.inner
            .write()
            .unwrap()
            .failures
            .insert(command.into(), code);
        self
    }

    /// Command lines in the order they were attempted.
    pub fn command_lines(&self) -> Vec<String> {
        let inner = self.inner.read().unwrap();
        inner.calls.iter().map(|(inv, _)| inv.command_line()).collect()
    }

    pub fn calls(&self) -> Vec<(ProcessInvocation, PathBuf)> {
        self.inner.read().unwrap().calls.clone()
    }

    /// `true` if any attempted invocation ran `program`.
    pub fn attempted(&self, program: &str) -> bool {
        let inner = self.inner.read().unwrap();
        inner.calls.iter().any(|(inv, _)| inv.program() == program)
    }
}

impl CommandRunner for RecordingCommandRunner {
    fn run(&self, invocation: &ProcessInvocation, working_dir: &Path) -> PyseedResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner
            .calls
            .push((invocation.clone(), working_dir.to_path_buf()));

        if inner
            .missing_programs
            .iter()
            .any(|p| p == invocation.program())
        {
            return Err(ApplicationError::CommandNotFound {
                program: invocation.program().to_string(),
            }
            .into());
        }

        let command = invocation.command_line();
        if let Some(code) = inner.failures.get(&command) {
            return Err(ApplicationError::CommandFailed {
                command,
                code: *code,
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_and_succeeds_by_default() {
        let runner = RecordingCommandRunner::new();
        runner
            .run(&ProcessInvocation::fatal("git").arg("init"), Path::new("/p"))
            .unwrap();
        runner
            .run(&ProcessInvocation::fatal("git").args(["add", "."]), Path::new("/p"))
            .unwrap();

        assert_eq!(runner.command_lines(), vec!["git init", "git add ."]);
        assert_eq!(runner.calls()[0].1, PathBuf::from("/p"));
    }

    #[test]
    fn scripted_failures_are_reported() {
        let runner = RecordingCommandRunner::new()
            .with_missing_program("pre-commit")
            .with_failure("git add .", Some(128));

        let missing = runner
            .run(&ProcessInvocation::warn("pre-commit").arg("install"), Path::new("."))
            .unwrap_err();
        assert!(missing.to_string().contains("not found"));

        let failed = runner
            .run(&ProcessInvocation::fatal("git").args(["add", "."]), Path::new("."))
            .unwrap_err();
        assert_eq!(failed.tool_exit_code(), Some(128));

        assert!(runner.attempted("pre-commit"));
    }
}
