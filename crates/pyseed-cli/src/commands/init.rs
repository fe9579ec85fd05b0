//! `pyseed init`: write a default configuration file.

use std::path::{Path, PathBuf};

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default pyseed configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };

    let written = write_default(&config_path, args.force)?;
    output.success(&format!("Configuration created at {}", written.display()))?;

    Ok(())
}

fn write_default(config_path: &Path, force: bool) -> CliResult<PathBuf> {
    if config_path.exists() && !force {
        return Err(CliError::ConfigExists {
            path: config_path.to_path_buf(),
        });
    }

    let toml = AppConfig::default()
        .to_toml()
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(config_path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    Ok(config_path.to_path_buf())
}
