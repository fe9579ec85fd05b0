//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pyseed",
    bin_name = "pyseed",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Finish a freshly generated Python project",
    long_about = "pyseed runs after a template engine has generated a Python \
                  project: it creates the package and test markers, makes the \
                  initial git commit and installs pre-commit hooks.",
    after_help = "EXAMPLES:\n\
        \x20 pyseed bootstrap --package-name demo_pkg --project-name 'Demo Project' --project-slug demo-project\n\
        \x20 pyseed bootstrap --stdin < context.json\n\
        \x20 pyseed bootstrap --context context.json --dir ./demo-project --skip-hooks\n\
        \x20 pyseed completions bash > /usr/share/bash-completion/completions/pyseed",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bootstrap a generated project directory.
    #[command(
        visible_alias = "b",
        about = "Bootstrap a generated project",
        after_help = "EXAMPLES:\n\
            \x20 pyseed bootstrap --package-name demo_pkg --project-name 'Demo Project' --project-slug demo-project\n\
            \x20 pyseed bootstrap --stdin --dry-run < hook-payload.json"
    )]
    Bootstrap(BootstrapArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pyseed init           # user config directory\n\
            \x20 pyseed init --local   # .pyseed.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pyseed completions bash > ~/.local/share/bash-completion/completions/pyseed\n\
            \x20 pyseed completions zsh  > ~/.zfunc/_pyseed\n\
            \x20 pyseed completions fish > ~/.config/fish/completions/pyseed.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pyseed config get vcs.program\n\
            \x20 pyseed config list\n\
            \x20 pyseed config path"
    )]
    Config(ConfigCommands),
}

// ── bootstrap ─────────────────────────────────────────────────────────────────

/// Arguments for `pyseed bootstrap`.
#[derive(Debug, Args)]
pub struct BootstrapArgs {
    /// Directory the template engine generated.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Generated project directory"
    )]
    pub dir: PathBuf,

    /// Python import name; becomes `src/<package_name>`.
    #[arg(long = "package-name", value_name = "NAME")]
    pub package_name: Option<String>,

    /// Human-readable project name used in the completion report.
    #[arg(long = "project-name", value_name = "NAME")]
    pub project_name: Option<String>,

    /// Directory name of the project, used in the `cd` instruction.
    #[arg(long = "project-slug", value_name = "SLUG")]
    pub project_slug: Option<String>,

    /// Read template variables from a JSON file.
    #[arg(
        long = "context",
        value_name = "FILE",
        conflicts_with = "stdin",
        help = "JSON file with template variables"
    )]
    pub context: Option<PathBuf>,

    /// Read template variables as JSON from stdin (hook payloads accepted).
    #[arg(long = "stdin", help = "Read JSON template variables from stdin")]
    pub stdin: bool,

    /// Do not run the hook manager at all.
    #[arg(long = "skip-hooks", help = "Skip pre-commit installation")]
    pub skip_hooks: bool,

    /// Show what would happen without changing anything.
    #[arg(long = "dry-run", help = "Print the plan and exit")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pyseed init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.pyseed.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pyseed completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pyseed config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `hooks.program`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
