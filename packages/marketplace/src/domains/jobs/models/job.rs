use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::common::{CustomerId, JobId, WorkerId};
use crate::domains::catalog::CategoryId;

/// Job lifecycle.
///
/// Pending → Accepted → Completed, or Pending → Canceled. Completed and
/// Canceled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Pending,
    Accepted,
    Completed,
    Canceled,
}

impl JobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }

    /// Status after `action`, if the lifecycle allows it
    pub fn apply(self, action: JobAction) -> Result<JobStatus, JobError> {
        match (self, action) {
            (Self::Pending, JobAction::Accept) => Ok(Self::Accepted),
            (Self::Pending, JobAction::Cancel) => Ok(Self::Canceled),
            (Self::Accepted, JobAction::Complete) => Ok(Self::Completed),
            (from, action) => Err(JobError::InvalidTransition { from, action }),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Completed => "Completed",
            Self::Canceled => "Canceled",
        };
        f.write_str(label)
    }
}

/// Status change a worker or customer can ask the job store for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobAction {
    Accept,
    Complete,
    Cancel,
}

impl fmt::Display for JobAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Accept => "accept",
            Self::Complete => "complete",
            Self::Cancel => "cancel",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobError {
    #[error("Cannot {action} a job that is {from}")]
    InvalidTransition { from: JobStatus, action: JobAction },

    #[error("Job not found: {0}")]
    NotFound(JobId),
}

/// Job creation request. The store assigns the id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub customer_id: CustomerId,
    pub worker_id: WorkerId,
    pub category: CategoryId,
    pub description: String,
    pub status: JobStatus,
}

/// Validated status-transition request for an existing job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTransition {
    pub job_id: JobId,
    pub action: JobAction,
    pub from: JobStatus,
    pub to: JobStatus,
}

/// A job as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub customer_id: CustomerId,
    pub worker_id: WorkerId,
    pub category: CategoryId,
    pub description: String,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Materialize a request the way the store does on insert
    pub fn from_request(request: JobRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: JobId::new(),
            customer_id: request.customer_id,
            worker_id: request.worker_id,
            category: request.category,
            description: request.description,
            status: request.status,
            created_at: now,
            updated_at: now,
        }
    }
}
