//! Intake session driver.
//!
//! Feeds user actions into the `IntakeMachine` and executes the commands it
//! emits: ranking runs inline against the newest roster snapshot, bookings
//! are handed to the dispatcher and never awaited.

use tracing::info;

use crate::common::{CustomerId, WorkerId};
use crate::domains::intake::{
    commands::IntakeCommand,
    events::IntakeEvent,
    machines::IntakeMachine,
    models::AnswerValue,
    state::ChatState,
};
use crate::domains::jobs::{book, JobRequest};
use crate::domains::matching::{rank_with_scores, WorkerScore};
use crate::domains::workers::{RosterReader, WorkerProfile};
use crate::kernel::{DispatchRequest, Dispatcher, Machine};

pub struct IntakeSession {
    machine: IntakeMachine,
    customer_id: CustomerId,
    roster: RosterReader,
    dispatcher: Dispatcher,
    /// Score breakdown for the current recommendations, same order as `ranked`
    scores: Vec<WorkerScore>,
}

impl IntakeSession {
    pub fn new(customer_id: CustomerId, roster: RosterReader, dispatcher: Dispatcher) -> Self {
        Self {
            machine: IntakeMachine::new(),
            customer_id,
            roster,
            dispatcher,
            scores: Vec::new(),
        }
    }

    pub fn state(&self) -> &ChatState {
        self.machine.state()
    }

    pub fn scores(&self) -> &[WorkerScore] {
        &self.scores
    }

    /// Start a fresh intake, discarding any previous one
    pub fn open(&mut self) {
        self.dispatch(IntakeEvent::Opened);
    }

    pub fn close(&mut self) {
        self.dispatch(IntakeEvent::Closed);
    }

    pub fn submit_problem(&mut self, text: &str) {
        self.dispatch(IntakeEvent::ProblemSubmitted {
            text: text.to_string(),
        });
    }

    pub fn answer(&mut self, value: impl Into<AnswerValue>) {
        self.dispatch(IntakeEvent::AnswerGiven {
            value: value.into(),
        });
    }

    /// Move to the next question, or to the recommendations after the last one.
    ///
    /// `draft` is the free-text input for text questions.
    pub fn advance(&mut self, draft: Option<&str>) {
        self.dispatch(IntakeEvent::AdvanceRequested {
            draft: draft.map(str::to_string),
        });
    }

    pub fn retreat(&mut self) {
        self.dispatch(IntakeEvent::RetreatRequested);
    }

    /// Book one of the recommended workers and close the intake.
    ///
    /// Returns the request that was fired, or `None` if the worker is not
    /// among the current recommendations.
    pub fn select_worker(&mut self, worker_id: WorkerId) -> Option<JobRequest> {
        self.dispatch(IntakeEvent::WorkerSelected { worker_id })
    }

    fn dispatch(&mut self, event: IntakeEvent) -> Option<JobRequest> {
        let mut next = Some(event);
        let mut booked = None;

        while let Some(event) = next.take() {
            if matches!(event, IntakeEvent::Opened | IntakeEvent::Closed) {
                self.scores.clear();
            }
            if let Some(command) = self.machine.decide(&event) {
                next = self.execute(command, &mut booked);
            }
        }

        booked
    }

    fn execute(
        &mut self,
        command: IntakeCommand,
        booked: &mut Option<JobRequest>,
    ) -> Option<IntakeEvent> {
        match command {
            IntakeCommand::RankCandidates { category, answers } => {
                let snapshot = self.roster.latest();
                let (ranked, scores): (Vec<WorkerProfile>, Vec<WorkerScore>) =
                    rank_with_scores(&snapshot, category, &answers)
                        .into_iter()
                        .unzip();
                self.scores = scores;
                Some(IntakeEvent::CandidatesRanked { ranked })
            }

            IntakeCommand::EmitBooking {
                worker,
                category,
                problem,
                answers,
            } => {
                let request = book(self.customer_id, &worker, category, &problem, &answers);
                info!(worker_id = %worker.id, category = %category, "Booking dispatched");

                self.dispatcher
                    .submit(DispatchRequest::CreateJob(request.clone()));
                self.scores.clear();
                *booked = Some(request);
                None
            }
        }
    }
}
