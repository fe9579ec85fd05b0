//! pyseed Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the pyseed
//! post-generation bootstrapper, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pyseed-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (BootstrapService, run_step)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Commands)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     pyseed-adapters (Infrastructure)    │
//! │ (LocalFilesystem, SystemCommandRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectContext, SkeletonPlan, Invoc.)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pyseed_core::prelude::*;
//! # fn adapters() -> (Box<dyn Filesystem>, Box<dyn CommandRunner>) { unimplemented!() }
//!
//! let (filesystem, runner) = adapters();
//! let context = ProjectContext::new("demo_pkg", "Demo Project", "demo-project").unwrap();
//!
//! let service = BootstrapService::new(filesystem, runner, ".", BootstrapSettings::default());
//! let report = service.run(&context).unwrap();
//! println!("{}", report.completion);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BootstrapPlan, BootstrapReport, BootstrapService, BootstrapSettings, HookStatus,
        ports::{CommandRunner, Filesystem},
    };
    pub use crate::domain::{
        FailurePolicy, ProcessInvocation, ProjectContext, ProjectContextBuilder, SkeletonEntry,
        SkeletonPlan, StepOutcome,
    };
    pub use crate::error::{PyseedError, PyseedResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
