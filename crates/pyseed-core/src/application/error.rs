//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the outside
//! world (filesystem, external tools). Rule violations are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while bootstrapping a project directory.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The program could not be found on `PATH`.
    #[error("Command not found: {program}")]
    CommandNotFound { program: String },

    /// The program started but could not be waited on, or failed to spawn for
    /// a reason other than being absent.
    #[error("Failed to run '{command}': {reason}")]
    CommandSpawnFailed { command: String, reason: String },

    /// The program ran and exited unsuccessfully.
    #[error("Command '{command}' failed with {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// The template engine's context payload could not be read.
    #[error("Could not load project context: {reason}")]
    ContextUnavailable { reason: String },

    /// Shared adapter state is unusable (lock poisoned, etc.).
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no file sits where a directory is expected".into(),
            ],
            Self::CommandNotFound { program } => vec![
                format!("'{}' is not installed or not on PATH", program),
                "Install it and re-run the bootstrap".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("'{}' did not succeed", command),
                "Check the command output above for details".into(),
            ],
            Self::ContextUnavailable { .. } => vec![
                "Pass --package-name, --project-name and --project-slug".into(),
                "Or provide the template variables as JSON with --context / --stdin".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::CommandNotFound { .. } => ErrorCategory::NotFound,
            Self::CommandSpawnFailed { .. } | Self::CommandFailed { .. } => {
                ErrorCategory::ExternalTool
            }
            Self::ContextUnavailable { .. } => ErrorCategory::Validation,
        }
    }

    /// Exit code reported by the external tool, if this error carries one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}
