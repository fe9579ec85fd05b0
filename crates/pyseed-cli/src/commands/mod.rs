//! Command handlers, one module per subcommand.

pub mod bootstrap;
pub mod completions;
pub mod config;
pub mod init;
