//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`BootstrapSettings`] derived from it.
//!
//! # Resolution order (lowest priority first)
//!
//! 1. Built-in defaults
//! 2. User config file ([`AppConfig::config_path`]), if present
//! 3. `.pyseed.toml` in the current directory, if present
//! 4. The file passed with `--config` (must exist)
//! 5. Environment variables: `PYSEED_<SECTION>__<KEY>`, e.g.
//!    `PYSEED_HOOKS__PROGRAM=pre-commit`
//!
//! CLI flags such as `--skip-hooks` are applied afterwards by the commands.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use pyseed_core::application::services::{
    BootstrapSettings, DEFAULT_CI_COMMAND, DEFAULT_COMMIT_MESSAGE, DEFAULT_HOOK_PROGRAM,
    DEFAULT_VCS_PROGRAM,
};

/// File name of the per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".pyseed.toml";

const ENV_PREFIX: &str = "PYSEED";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Version control step.
    pub vcs: VcsConfig,
    /// Hook manager step.
    pub hooks: HooksConfig,
    /// Completion report.
    pub report: ReportConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VcsConfig {
    pub program: String,
    pub commit_message: String,
    pub disable_signing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HooksConfig {
    pub enabled: bool,
    pub program: String,
    pub autoupdate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub ci_command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_VCS_PROGRAM.into(),
            commit_message: DEFAULT_COMMIT_MESSAGE.into(),
            disable_signing: true,
        }
    }
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: DEFAULT_HOOK_PROGRAM.into(),
            autoupdate: true,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            ci_command: DEFAULT_CI_COMMAND.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// `config_file` is the path passed via `--config`; unlike the implicit
    /// files it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path(), Path::new(LOCAL_CONFIG_FILE), config_file)
    }

    fn load_from(
        user_file: &Path,
        local_file: &Path,
        config_file: Option<&PathBuf>,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("invalid built-in defaults")?)
            .add_source(File::from(user_file).required(false))
            .add_source(File::from(local_file).required(false));

        if let Some(path) = config_file {
            debug!(path = %path.display(), "Using explicit config file");
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to [`LOCAL_CONFIG_FILE`] in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "pyseed", "pyseed")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Settings for the bootstrap service.
    pub fn to_settings(&self) -> BootstrapSettings {
        BootstrapSettings {
            vcs_program: self.vcs.program.clone(),
            commit_message: self.vcs.commit_message.clone(),
            disable_signing: self.vcs.disable_signing,
            hooks_enabled: self.hooks.enabled,
            hook_program: self.hooks.program.clone(),
            hook_autoupdate: self.hooks.autoupdate,
            ci_command: self.report.ci_command.clone(),
        }
    }

    /// Look up a dotted key such as `hooks.program`.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let tree = serde_json::to_value(self).ok()?;
        let pointer = format!("/{}", key.replace('.', "/"));
        tree.pointer(&pointer).cloned()
    }

    /// Render as TOML, the format of the config files.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to serialise configuration")
    }
}
