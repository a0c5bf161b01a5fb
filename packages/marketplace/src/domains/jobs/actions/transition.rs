use tracing::warn;

use crate::common::JobId;
use crate::domains::jobs::models::{JobAction, JobError, JobStatus, JobTransition};

/// Validate a status change before asking the store for it.
///
/// The core never writes a status itself; it only produces the request.
pub fn request_transition(
    job_id: JobId,
    current: JobStatus,
    action: JobAction,
) -> Result<JobTransition, JobError> {
    let to = current.apply(action).map_err(|err| {
        warn!(job_id = %job_id, from = %current, action = %action, "Rejected job transition");
        err
    })?;

    Ok(JobTransition {
        job_id,
        action,
        from: current,
        to,
    })
}
