//! Application layer for pyseed.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (BootstrapService, run_step)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; the rules about what
//! a valid context or skeleton is live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BootstrapPlan, BootstrapReport, BootstrapService, BootstrapSettings, HookStatus, run_step,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem};

pub use error::ApplicationError;
