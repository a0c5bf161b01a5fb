//! Fire-and-forget dispatch of store writes.
//!
//! The intake never waits on the store. Bookings, status changes and
//! availability toggles are pushed onto an unbounded queue and the caller
//! moves on; a background worker drains the queue into the collaborators.
//! Failures are logged here and otherwise surface through the store's own
//! notifications.
//!
//! ```text
//! IntakeSession ──submit──► queue ──► run_dispatch_worker ──► BaseJobSink
//!                                                        └──► BaseProfileStore
//! ```

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use crate::common::WorkerId;
use crate::domains::jobs::{JobRequest, JobTransition};
use crate::kernel::MarketplaceDeps;

/// A write headed for the document store
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchRequest {
    CreateJob(JobRequest),
    TransitionJob(JobTransition),
    SetAvailability { worker_id: WorkerId, available: bool },
}

/// Sending side of the dispatch queue. Cheap to clone.
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<DispatchRequest>,
}

impl Dispatcher {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DispatchRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue a request without waiting for it to be written
    pub fn submit(&self, request: DispatchRequest) {
        debug!(?request, "Dispatching store write");
        if let Err(err) = self.tx.send(request) {
            warn!(request = ?err.0, "Dispatch worker has stopped; request dropped");
        }
    }
}

/// Drain the queue until every `Dispatcher` is dropped
pub async fn run_dispatch_worker(
    mut rx: mpsc::UnboundedReceiver<DispatchRequest>,
    deps: MarketplaceDeps,
) {
    info!("Dispatch worker started");
    while let Some(request) = rx.recv().await {
        handle_request(request, &deps).await;
    }
    info!("Dispatch worker stopped");
}

pub fn spawn_dispatch_worker(
    rx: mpsc::UnboundedReceiver<DispatchRequest>,
    deps: MarketplaceDeps,
) -> JoinHandle<()> {
    tokio::spawn(run_dispatch_worker(rx, deps))
}

#[instrument(skip(deps))]
async fn handle_request(request: DispatchRequest, deps: &MarketplaceDeps) {
    match request {
        DispatchRequest::CreateJob(job_request) => {
            match deps.job_sink.create_job(job_request).await {
                Ok(job) => info!(job_id = %job.id, worker_id = %job.worker_id, "Job created"),
                Err(e) => error!(error = %e, "Failed to create job"),
            }
        }
        DispatchRequest::TransitionJob(transition) => {
            match deps.job_sink.transition_job(transition).await {
                Ok(job) => info!(job_id = %job.id, status = %job.status, "Job status updated"),
                Err(e) => error!(error = %e, job_id = %transition.job_id, "Failed to update job status"),
            }
        }
        DispatchRequest::SetAvailability {
            worker_id,
            available,
        } => match deps.profile_store.set_availability(worker_id, available).await {
            Ok(()) => info!(worker_id = %worker_id, available, "Availability updated"),
            Err(e) => error!(error = %e, worker_id = %worker_id, "Failed to update availability"),
        },
    }
}
