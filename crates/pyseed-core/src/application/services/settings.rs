//! Knobs the bootstrap service needs from configuration.
//!
//! The CLI owns configuration files and environment variables; it hands the
//! resolved values to the core as a plain [`BootstrapSettings`].

/// Message used for the single commit recording the generated skeleton.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit from cookiecutter-python-windsurf";

/// Command the generated project's task runner uses for its CI pipeline.
pub const DEFAULT_CI_COMMAND: &str = "task ci";

pub const DEFAULT_VCS_PROGRAM: &str = "git";

pub const DEFAULT_HOOK_PROGRAM: &str = "pre-commit";

/// Printed once when hook installation is skipped after a failure.
pub const HOOKS_ADVISORY: &str = "Skipping pre-commit initialization. Please run 'pip install pre-commit && pre-commit install' after setting up your virtual environment.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSettings {
    pub vcs_program: String,
    pub commit_message: String,
    /// Run `config commit.gpgsign false` before committing.
    pub disable_signing: bool,
    pub hooks_enabled: bool,
    pub hook_program: String,
    /// Run `autoupdate` after `install`.
    pub hook_autoupdate: bool,
    pub ci_command: String,
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        Self {
            vcs_program: DEFAULT_VCS_PROGRAM.into(),
            commit_message: DEFAULT_COMMIT_MESSAGE.into(),
            disable_signing: true,
            hooks_enabled: true,
            hook_program: DEFAULT_HOOK_PROGRAM.into(),
            hook_autoupdate: true,
            ci_command: DEFAULT_CI_COMMAND.into(),
        }
    }
}
