use crate::domain::{
    entities::{ProcessInvocation, ProjectContext, SkeletonPlan},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_context(context: &ProjectContext) -> Result<(), DomainError> {
        context.validate()
    }

    pub fn validate_skeleton(plan: &SkeletonPlan) -> Result<(), DomainError> {
        plan.validate()
    }

    pub fn validate_invocations(invocations: &[ProcessInvocation]) -> Result<(), DomainError> {
        invocations.iter().try_for_each(ProcessInvocation::validate)
    }
}
