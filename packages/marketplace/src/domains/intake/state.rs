//! Transient intake session state and its derived views.

use serde::Serialize;

use crate::domains::catalog::{self, CategoryDefinition, CategoryId, FaqItem};
use crate::domains::intake::models::IntakeAnswers;
use crate::domains::workers::WorkerProfile;

/// Where the intake conversation currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatStep {
    #[default]
    CollectingProblem,
    AnsweringFaqs,
    ShowingResults,
}

/// Everything one open intake holds. Never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatState {
    pub open: bool,
    pub step: ChatStep,
    pub category: CategoryId,
    pub problem: String,
    /// Always a valid index into the active category's FAQs
    pub faq_index: usize,
    pub answers: IntakeAnswers,
    /// Filled only in `ShowingResults`; at most three, best first
    pub ranked: Vec<WorkerProfile>,
}

impl ChatState {
    /// Fresh state for a newly opened intake
    pub fn opened() -> Self {
        Self {
            open: true,
            ..Self::default()
        }
    }

    pub fn is_last_faq(&self) -> bool {
        self.faq_index >= category_def(self).last_faq_index()
    }
}

pub fn category_def(state: &ChatState) -> &'static CategoryDefinition {
    catalog::lookup(state.category)
}

pub fn current_faq(state: &ChatState) -> &'static FaqItem {
    let faqs = category_def(state).faqs;
    &faqs[state.faq_index.min(faqs.len() - 1)]
}

/// 1-based question position and total, for progress displays
pub fn faq_progress(state: &ChatState) -> (usize, usize) {
    (state.faq_index + 1, category_def(state).faqs.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opened_state_starts_collecting() {
        let state = ChatState::opened();
        assert!(state.open);
        assert_eq!(state.step, ChatStep::CollectingProblem);
        assert_eq!(state.faq_index, 0);
        assert!(state.answers.is_empty());
        assert!(state.ranked.is_empty());
    }

    #[test]
    fn derivations_follow_category_and_index() {
        let mut state = ChatState::opened();
        state.category = CategoryId::Plumber;
        state.faq_index = 2;

        assert_eq!(category_def(&state).title, "Plumber");
        assert_eq!(current_faq(&state).id, "shutoff");
        assert_eq!(faq_progress(&state), (3, 4));
        assert!(!state.is_last_faq());

        state.faq_index = 3;
        assert!(state.is_last_faq());
    }
}
