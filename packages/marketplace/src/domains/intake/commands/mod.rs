use crate::domains::catalog::CategoryId;
use crate::domains::intake::models::IntakeAnswers;
use crate::domains::workers::WorkerProfile;

/// Work the intake machine asks its driver to do
#[derive(Debug, Clone)]
pub enum IntakeCommand {
    /// Rank the latest roster snapshot for the finished questionnaire
    RankCandidates {
        category: CategoryId,
        answers: IntakeAnswers,
    },

    /// Turn the chosen worker into a job request and send it off
    EmitBooking {
        worker: WorkerProfile,
        category: CategoryId,
        problem: String,
        answers: IntakeAnswers,
    },
}
