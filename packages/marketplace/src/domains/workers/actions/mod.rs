//! Worker-listing actions that skip the intake.

use anyhow::{Context, Result};
use tracing::info;

use crate::common::{CustomerId, WorkerId};
use crate::domains::jobs::{quick_book, JobRequest};
use crate::domains::workers::WorkerProfile;
use crate::kernel::{BaseProfileStore, DispatchRequest, Dispatcher};

/// Book a worker straight from the listing.
///
/// Reads the worker's current profile, then fires the job request without
/// waiting for the store to confirm it.
pub async fn quick_book_worker(
    customer_id: CustomerId,
    worker_id: WorkerId,
    profiles: &dyn BaseProfileStore,
    dispatcher: &Dispatcher,
) -> Result<JobRequest> {
    let worker = profiles
        .get_profile(worker_id)
        .await?
        .with_context(|| format!("Worker {} not found", worker_id))?;

    let request = quick_book(customer_id, &worker);
    info!(worker_id = %worker_id, category = %request.category, "Quick booking dispatched");
    dispatcher.submit(DispatchRequest::CreateJob(request.clone()));

    Ok(request)
}

/// Flip a worker's availability. Returns the value that was requested.
pub fn toggle_availability(worker: &WorkerProfile, dispatcher: &Dispatcher) -> bool {
    let available = !worker.available;
    info!(worker_id = %worker.id, available, "Availability toggle dispatched");
    dispatcher.submit(DispatchRequest::SetAvailability {
        worker_id: worker.id,
        available,
    });
    available
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::CategoryId;
    use crate::kernel::test_dependencies::MockProfileStore;

    fn electrician() -> WorkerProfile {
        WorkerProfile::builder()
            .name("Lee")
            .specialty(CategoryId::Electrician)
            .build()
    }

    #[tokio::test]
    async fn quick_booking_reads_profile_and_fires() {
        let worker = electrician();
        let profiles = MockProfileStore::new().with_profile(worker.clone());
        let (dispatcher, mut rx) = Dispatcher::channel();

        let request = quick_book_worker(CustomerId::new(), worker.id, &profiles, &dispatcher)
            .await
            .unwrap();

        assert_eq!(request.category, CategoryId::Electrician);
        assert_eq!(rx.try_recv().unwrap(), DispatchRequest::CreateJob(request));
    }

    #[tokio::test]
    async fn quick_booking_unknown_worker_fails_without_dispatch() {
        let profiles = MockProfileStore::new();
        let (dispatcher, mut rx) = Dispatcher::channel();

        let result = quick_book_worker(CustomerId::new(), WorkerId::new(), &profiles, &dispatcher).await;

        assert!(result.is_err());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn toggle_requests_the_opposite() {
        let worker = electrician();
        let (dispatcher, mut rx) = Dispatcher::channel();

        assert!(!toggle_availability(&worker, &dispatcher));
        assert_eq!(
            rx.try_recv().unwrap(),
            DispatchRequest::SetAvailability {
                worker_id: worker.id,
                available: false
            }
        );
    }
}
