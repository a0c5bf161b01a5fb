//! In-process harness: a seeded store with a running dispatch worker.

use anyhow::{Context, Result};
use marketplace_core::common::CustomerId;
use marketplace_core::domains::intake::IntakeSession;
use marketplace_core::domains::workers::{RosterSnapshot, WorkerProfile};
use marketplace_core::kernel::{
    spawn_dispatch_worker, Dispatcher, InMemoryStore, JobList, MarketplaceDeps,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

const WAIT_TIMEOUT: Duration = Duration::from_secs(2);

pub struct TestHarness {
    pub store: Arc<InMemoryStore>,
    pub dispatcher: Dispatcher,
    _worker: JoinHandle<()>,
}

impl TestHarness {
    /// Must be called from inside a tokio runtime
    pub fn new(workers: Vec<WorkerProfile>) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let store = Arc::new(InMemoryStore::new(workers));
        let deps = MarketplaceDeps::new(store.clone(), store.clone());
        let (dispatcher, rx) = Dispatcher::channel();
        let worker = spawn_dispatch_worker(rx, deps);

        Self {
            store,
            dispatcher,
            _worker: worker,
        }
    }

    pub fn session(&self, customer_id: CustomerId) -> IntakeSession {
        IntakeSession::new(customer_id, self.store.roster(), self.dispatcher.clone())
    }

    /// Wait until the store has published at least `count` jobs
    pub async fn wait_for_jobs(&self, count: usize) -> Result<JobList> {
        let mut updates = self.store.job_updates();
        let jobs = tokio::time::timeout(WAIT_TIMEOUT, updates.wait_for(|jobs| jobs.len() >= count))
            .await
            .context("Timed out waiting for jobs")?
            .context("Job feed closed")?
            .clone();
        Ok(jobs)
    }

    /// Wait until a published roster satisfies `done`
    pub async fn wait_for_roster(
        &self,
        done: impl Fn(&RosterSnapshot) -> bool,
    ) -> Result<RosterSnapshot> {
        let mut roster = self.store.roster();
        let mut snapshot = roster.latest();
        while !done(&snapshot) {
            snapshot = tokio::time::timeout(WAIT_TIMEOUT, roster.changed())
                .await
                .context("Timed out waiting for roster")??;
        }
        Ok(snapshot)
    }
}
