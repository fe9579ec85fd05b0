pub mod context;
pub mod invocation;
pub mod skeleton;

pub use crate::domain::DomainError;
pub use context::{ProjectContext, ProjectContextBuilder};
pub use invocation::{FailurePolicy, ProcessInvocation, StepOutcome};
pub use skeleton::{SkeletonEntry, SkeletonPlan};
