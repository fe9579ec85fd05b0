//! Process adapter backed by `std::process::Command`.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use pyseed_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::ProcessInvocation,
    error::PyseedResult,
};

/// Production command runner.
///
/// Children inherit stdin, stdout and stderr so the user sees the tools' own
/// output. Calls block until the child exits; there is no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %invocation, dir = %working_dir.display()))]
    fn run(&self, invocation: &ProcessInvocation, working_dir: &Path) -> PyseedResult<()> {
        // a missing cwd surfaces as NotFound from spawn; keep it apart from a missing program
        if !working_dir.is_dir() {
            return Err(ApplicationError::CommandSpawnFailed {
                command: invocation.command_line(),
                reason: format!("working directory '{}' does not exist", working_dir.display()),
            }
            .into());
        }

        let status = Command::new(invocation.program())
            .args(invocation.arguments())
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| map_spawn_error(invocation, e))?;

        debug!(%status, "Command exited");

        if !status.success() {
            return Err(ApplicationError::CommandFailed {
                command: invocation.command_line(),
                code: status.code(),
            }
            .into());
        }

        Ok(())
    }
}

fn map_spawn_error(invocation: &ProcessInvocation, e: io::Error) -> pyseed_core::error::PyseedError {
    if e.kind() == io::ErrorKind::NotFound {
        ApplicationError::CommandNotFound {
            program: invocation.program().to_string(),
        }
        .into()
    } else {
        ApplicationError::CommandSpawnFailed {
            command: invocation.command_line(),
            reason: e.to_string(),
        }
        .into()
    }
}
