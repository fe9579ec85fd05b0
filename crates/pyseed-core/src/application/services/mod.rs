//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "bootstrap a generated project".

pub mod bootstrap_service;
pub mod settings;
pub mod step;

pub use bootstrap_service::{BootstrapPlan, BootstrapReport, BootstrapService, HookStatus};
pub use settings::{
    BootstrapSettings, DEFAULT_CI_COMMAND, DEFAULT_COMMIT_MESSAGE, DEFAULT_HOOK_PROGRAM,
    DEFAULT_VCS_PROGRAM, HOOKS_ADVISORY,
};
pub use step::run_step;
