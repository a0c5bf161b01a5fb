// Trait definitions for the external document store
//
// These are INFRASTRUCTURE traits only - no business logic.
// Intake, matching and booking are pure domain functions; these traits are
// how their results reach the store.
//
// Naming convention: Base* for trait names (e.g., BaseJobSink)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::WorkerId;
use crate::domains::jobs::{Job, JobRequest, JobTransition};
use crate::domains::workers::WorkerProfile;

// =============================================================================
// Job Sink Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseJobSink: Send + Sync {
    /// Insert a new job; the store assigns id and timestamps
    async fn create_job(&self, request: JobRequest) -> Result<Job>;

    /// Apply a validated status transition to an existing job
    async fn transition_job(&self, transition: JobTransition) -> Result<Job>;
}

// =============================================================================
// Profile Store Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseProfileStore: Send + Sync {
    async fn get_profile(&self, worker_id: WorkerId) -> Result<Option<WorkerProfile>>;

    /// Flip a worker's availability flag
    async fn set_availability(&self, worker_id: WorkerId, available: bool) -> Result<()>;
}
