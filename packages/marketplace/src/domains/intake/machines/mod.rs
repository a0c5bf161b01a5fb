use tracing::{debug, info};

use crate::domains::intake::{
    commands::IntakeCommand,
    events::IntakeEvent,
    models::AnswerValue,
    state::{current_faq, ChatState, ChatStep},
    utils::classify,
};
use crate::domains::matching::MAX_RECOMMENDATIONS;
use crate::kernel::Machine;

/// Intake state machine - pure decision logic
///
/// Owns the `ChatState` of one open intake. Ranking and booking need the
/// roster and the store, so they leave the machine as commands.
#[derive(Debug, Default)]
pub struct IntakeMachine {
    state: ChatState,
}

impl IntakeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    fn ignore(&self, event: &IntakeEvent) -> Option<IntakeCommand> {
        debug!(step = ?self.state.step, open = self.state.open, ?event, "Event does not apply; ignored");
        None
    }

    fn submit_problem(&mut self, text: &str) -> Option<IntakeCommand> {
        let problem = text.trim();
        if problem.is_empty() {
            debug!("Blank problem description; staying on problem step");
            return None;
        }

        let category = classify(problem);
        info!(category = %category, "Problem classified");

        self.state.category = category;
        self.state.problem = problem.to_string();
        self.state.faq_index = 0;
        self.state.answers.clear();
        self.state.step = ChatStep::AnsweringFaqs;
        None
    }

    fn advance(&mut self, draft: Option<&str>) -> Option<IntakeCommand> {
        let faq = current_faq(&self.state);

        if faq.kind.is_free_text() {
            if let Some(text) = draft.map(str::trim).filter(|text| !text.is_empty()) {
                self.state
                    .answers
                    .record(faq.id, AnswerValue::Text(text.to_string()));
            }

            let answered = self
                .state
                .answers
                .get(faq.id)
                .is_some_and(AnswerValue::is_filled);
            if !answered {
                debug!(faq_id = faq.id, "Free-text question unanswered; not advancing");
                return None;
            }
        }

        if self.state.is_last_faq() {
            debug!(answers = self.state.answers.len(), "Questionnaire finished; ranking");
            return Some(IntakeCommand::RankCandidates {
                category: self.state.category,
                answers: self.state.answers.clone(),
            });
        }

        self.state.faq_index += 1;
        None
    }
}

impl Machine for IntakeMachine {
    type Event = IntakeEvent;
    type Command = IntakeCommand;

    fn decide(&mut self, event: &IntakeEvent) -> Option<IntakeCommand> {
        match (self.state.step, event) {
            // Opening always starts over
            (_, IntakeEvent::Opened) => {
                self.state = ChatState::opened();
                info!("Intake opened");
                None
            }

            // Closing discards everything collected so far
            (_, IntakeEvent::Closed) => {
                if self.state.open {
                    info!(step = ?self.state.step, "Intake closed");
                }
                self.state = ChatState::default();
                None
            }

            _ if !self.state.open => self.ignore(event),

            (ChatStep::CollectingProblem, IntakeEvent::ProblemSubmitted { text }) => {
                self.submit_problem(text)
            }

            (ChatStep::AnsweringFaqs, IntakeEvent::AnswerGiven { value }) => {
                let faq = current_faq(&self.state);
                debug!(faq_id = faq.id, "Answer recorded");
                self.state.answers.record(faq.id, value.clone());
                None
            }

            (ChatStep::AnsweringFaqs, IntakeEvent::AdvanceRequested { draft }) => {
                self.advance(draft.as_deref())
            }

            (ChatStep::AnsweringFaqs, IntakeEvent::RetreatRequested) => {
                self.state.faq_index = self.state.faq_index.saturating_sub(1);
                None
            }

            // Ranking result for the final question → show recommendations
            (ChatStep::AnsweringFaqs, IntakeEvent::CandidatesRanked { ranked })
                if self.state.is_last_faq() =>
            {
                let mut ranked = ranked.clone();
                ranked.truncate(MAX_RECOMMENDATIONS);
                info!(recommended = ranked.len(), "Showing recommendations");

                self.state.ranked = ranked;
                self.state.step = ChatStep::ShowingResults;
                None
            }

            // Worker picked → book and close
            (ChatStep::ShowingResults, IntakeEvent::WorkerSelected { worker_id }) => {
                let Some(worker) = self.state.ranked.iter().find(|w| w.id == *worker_id).cloned()
                else {
                    return self.ignore(event);
                };
                info!(worker_id = %worker_id, "Worker selected; booking");

                let closed = std::mem::take(&mut self.state);
                Some(IntakeCommand::EmitBooking {
                    worker,
                    category: closed.category,
                    problem: closed.problem,
                    answers: closed.answers,
                })
            }

            _ => self.ignore(event),
        }
    }
}
