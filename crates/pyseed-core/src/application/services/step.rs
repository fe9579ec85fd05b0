//! The single place where a [`FailurePolicy`] is turned into control flow.

use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::CommandRunner,
    domain::{FailurePolicy, ProcessInvocation, StepOutcome},
    error::PyseedResult,
};

/// Run `invocations` in order, stopping at the first failure.
///
/// What happens on failure is decided by the failing invocation's policy:
/// `Fatal` propagates the error, `Warn` logs it and returns
/// [`StepOutcome::Skipped`]. Invocations after the failing one never run.
#[instrument(skip_all, fields(step = step, count = invocations.len()))]
pub fn run_step(
    runner: &dyn CommandRunner,
    working_dir: &Path,
    step: &str,
    invocations: &[ProcessInvocation],
) -> PyseedResult<StepOutcome> {
    for invocation in invocations {
        debug!(command = %invocation, policy = %invocation.policy(), "Running");

        if let Err(e) = runner.run(invocation, working_dir) {
            match invocation.policy() {
                FailurePolicy::Fatal => return Err(e),
                FailurePolicy::Warn => {
                    warn!(command = %invocation, error = %e, "Step skipped");
                    return Ok(StepOutcome::Skipped {
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    Ok(StepOutcome::Completed)
}
