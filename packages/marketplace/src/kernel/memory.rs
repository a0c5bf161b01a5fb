//! In-process document store.
//!
//! Stands in for the real-time backend in local runs and tests: it keeps the
//! roster sorted the way the backend does, assigns job ids and timestamps,
//! and republishes the roster and job list after every write.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{watch, RwLock};
use tracing::{debug, instrument};

use super::{BaseJobSink, BaseProfileStore};
use crate::common::WorkerId;
use crate::domains::jobs::{Job, JobError, JobRequest, JobTransition};
use crate::domains::workers::{sort_roster, RosterFeed, RosterReader, WorkerProfile};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Worker not found: {0}")]
    WorkerNotFound(WorkerId),

    #[error(transparent)]
    Job(#[from] JobError),
}

/// Latest job list as published by the store
pub type JobList = Arc<Vec<Job>>;

pub struct InMemoryStore {
    workers: RwLock<Vec<WorkerProfile>>,
    jobs: RwLock<Vec<Job>>,
    roster: RosterFeed,
    jobs_tx: watch::Sender<JobList>,
}

impl InMemoryStore {
    pub fn new(mut workers: Vec<WorkerProfile>) -> Self {
        sort_roster(&mut workers);
        let roster = RosterFeed::new();
        roster.publish(workers.clone());
        let (jobs_tx, _) = watch::channel(Arc::new(Vec::new()));

        Self {
            workers: RwLock::new(workers),
            jobs: RwLock::new(Vec::new()),
            roster,
            jobs_tx,
        }
    }

    pub fn roster(&self) -> RosterReader {
        self.roster.subscribe()
    }

    pub fn job_updates(&self) -> watch::Receiver<JobList> {
        self.jobs_tx.subscribe()
    }

    pub async fn jobs(&self) -> Vec<Job> {
        self.jobs.read().await.clone()
    }

    /// Insert or replace a worker and republish the roster
    pub async fn upsert_worker(&self, profile: WorkerProfile) {
        let mut workers = self.workers.write().await;
        match workers.iter_mut().find(|w| w.id == profile.id) {
            Some(existing) => *existing = profile,
            None => workers.push(profile),
        }
        self.publish_roster(&mut workers);
    }

    fn publish_roster(&self, workers: &mut Vec<WorkerProfile>) {
        sort_roster(workers);
        self.roster.publish(workers.clone());
    }

    fn publish_jobs(&self, jobs: &[Job]) {
        self.jobs_tx.send_replace(Arc::new(jobs.to_vec()));
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl BaseJobSink for InMemoryStore {
    #[instrument(skip(self, request), fields(worker_id = %request.worker_id))]
    async fn create_job(&self, request: JobRequest) -> Result<Job> {
        let job = Job::from_request(request, Utc::now());
        debug!(job_id = %job.id, "Storing job");

        let mut jobs = self.jobs.write().await;
        jobs.push(job.clone());
        self.publish_jobs(&jobs);
        Ok(job)
    }

    #[instrument(skip(self), fields(job_id = %transition.job_id))]
    async fn transition_job(&self, transition: JobTransition) -> Result<Job> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .iter_mut()
            .find(|job| job.id == transition.job_id)
            .ok_or(StoreError::Job(JobError::NotFound(transition.job_id)))?;

        // Re-check against the stored status; the request may be stale
        job.status = job.status.apply(transition.action).map_err(StoreError::from)?;
        job.updated_at = Utc::now();
        let updated = job.clone();

        self.publish_jobs(&jobs);
        Ok(updated)
    }
}

#[async_trait]
impl BaseProfileStore for InMemoryStore {
    async fn get_profile(&self, worker_id: WorkerId) -> Result<Option<WorkerProfile>> {
        Ok(self
            .workers
            .read()
            .await
            .iter()
            .find(|w| w.id == worker_id)
            .cloned())
    }

    #[instrument(skip(self))]
    async fn set_availability(&self, worker_id: WorkerId, available: bool) -> Result<()> {
        let mut workers = self.workers.write().await;
        let worker = workers
            .iter_mut()
            .find(|w| w.id == worker_id)
            .ok_or(StoreError::WorkerNotFound(worker_id))?;
        worker.available = available;

        self.publish_roster(&mut workers);
        Ok(())
    }
}
