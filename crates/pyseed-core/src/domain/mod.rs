//! Core domain layer for pyseed.
//!
//! This module contains pure data and rules with no I/O. Filesystem access
//! and process execution are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
pub mod entities;
pub mod error;

mod validation;

pub use entities::{
    context::{ProjectContext, ProjectContextBuilder},
    invocation::{FailurePolicy, ProcessInvocation, StepOutcome},
    skeleton::{EXAMPLE_TEST, INIT_MARKER, SkeletonEntry, SkeletonPlan, TESTS_DIR},
};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;
