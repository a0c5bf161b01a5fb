use crate::common::WorkerId;
use crate::domains::intake::models::AnswerValue;
use crate::domains::workers::WorkerProfile;

/// Intake events: user actions plus the results of executed commands
#[derive(Debug, Clone)]
pub enum IntakeEvent {
    // User actions
    Opened,
    ProblemSubmitted {
        text: String,
    },
    AnswerGiven {
        value: AnswerValue,
    },
    /// `draft` is the free-text input box content, if the question has one
    AdvanceRequested {
        draft: Option<String>,
    },
    RetreatRequested,
    WorkerSelected {
        worker_id: WorkerId,
    },
    Closed,

    // Fact events (from executed commands)
    CandidatesRanked {
        ranked: Vec<WorkerProfile>,
    },
}
