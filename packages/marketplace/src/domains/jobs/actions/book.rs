//! Booking emitter: turns a chosen worker into a Pending job request.
//!
//! Pure; sending the request to the store is the dispatcher's job.

use tracing::debug;

use crate::common::CustomerId;
use crate::domains::catalog::CategoryId;
use crate::domains::intake::models::IntakeAnswers;
use crate::domains::jobs::models::{JobRequest, JobStatus};
use crate::domains::workers::WorkerProfile;

/// Separator between the problem text and each answer in a job description
pub const DESCRIPTION_DELIMITER: &str = " | ";

/// Problem text followed by each `key: value` answer, in answer order
pub fn build_description(problem: &str, answers: &IntakeAnswers) -> String {
    std::iter::once(problem.to_string())
        .chain(
            answers
                .iter()
                .map(|(faq_id, value)| format!("{}: {}", faq_id, value)),
        )
        .collect::<Vec<_>>()
        .join(DESCRIPTION_DELIMITER)
}

pub fn book(
    customer_id: CustomerId,
    worker: &WorkerProfile,
    category: CategoryId,
    problem: &str,
    answers: &IntakeAnswers,
) -> JobRequest {
    debug!(worker_id = %worker.id, category = %category, answers = answers.len(), "Building job request");

    JobRequest {
        customer_id,
        worker_id: worker.id,
        category,
        description: build_description(problem, answers),
        status: JobStatus::Pending,
    }
}

/// Book straight from a worker listing, without an intake
pub fn quick_book(customer_id: CustomerId, worker: &WorkerProfile) -> JobRequest {
    debug!(worker_id = %worker.id, "Building quick booking request");

    JobRequest {
        customer_id,
        worker_id: worker.id,
        category: worker.specialty,
        description: format!("Quick booking request for {}", worker.name),
        status: JobStatus::Pending,
    }
}
