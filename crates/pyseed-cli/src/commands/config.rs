//! `pyseed config`: inspect the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.print(&get_config_value(&config, &key)?)?;
        }

        ConfigCommands::List => {
            let serialised = config
                .to_toml()
                .with_cli_context(|| "Failed to serialise config")?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Scalar values print bare; sections print as JSON.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match config.get(key) {
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(value) => Ok(value.to_string()),
        None => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
