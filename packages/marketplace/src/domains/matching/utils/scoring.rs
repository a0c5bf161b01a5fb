//! Pure worker ranking for a finished intake.
//!
//! score = skill_matches * 3 + specialty_boost + rating * 1.2 + availability_bonus
//!
//! Keywords come from the category definition plus every word of every text
//! answer. Yes/no answers add nothing.

use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domains::catalog::{self, CategoryId};
use crate::domains::intake::models::IntakeAnswers;
use crate::domains::matching::models::WorkerScore;
use crate::domains::workers::WorkerProfile;

/// Recommendations shown to the customer
pub const MAX_RECOMMENDATIONS: usize = 3;

pub const SKILL_MATCH_WEIGHT: f64 = 3.0;
pub const RATING_WEIGHT: f64 = 1.2;
pub const SPECIALTY_BOOST: f64 = 2.0;
pub const AVAILABILITY_BONUS: f64 = 2.0;

lazy_static! {
    /// ASCII word boundaries: letters outside A-Z split a word ("café" -> "caf")
    static ref NON_WORD: Regex = Regex::new(r"[^0-9A-Za-z_]+").expect("static regex");
}

/// Lowercase keyword set for a category and its collected answers
pub fn keyword_set(category: CategoryId, answers: &IntakeAnswers) -> HashSet<String> {
    let mut keywords: HashSet<String> = catalog::lookup(category)
        .keywords
        .iter()
        .map(|keyword| keyword.to_string())
        .collect();

    for text in answers.iter().filter_map(|(_, value)| value.as_text()) {
        keywords.extend(
            NON_WORD
                .split(text)
                .filter(|word| !word.is_empty())
                .map(str::to_lowercase),
        );
    }

    keywords
}

pub fn score_worker(
    worker: &WorkerProfile,
    category: CategoryId,
    keywords: &HashSet<String>,
) -> WorkerScore {
    let skill_matches = worker
        .skills
        .iter()
        .filter(|skill| keywords.contains(&skill.to_lowercase()))
        .count();

    WorkerScore {
        worker_id: worker.id,
        skill_matches,
        specialty_boost: if worker.specialty == category {
            SPECIALTY_BOOST
        } else {
            0.0
        },
        rating_score: worker.rating,
        availability_bonus: if worker.available {
            AVAILABILITY_BONUS
        } else {
            0.0
        },
    }
}

/// Score every candidate and return the top recommendations with their scores.
///
/// Stable: equal scores keep the roster's order.
pub fn rank_with_scores(
    candidates: &[WorkerProfile],
    category: CategoryId,
    answers: &IntakeAnswers,
) -> Vec<(WorkerProfile, WorkerScore)> {
    let keywords = keyword_set(category, answers);

    let mut scored: Vec<(WorkerProfile, WorkerScore)> = candidates
        .iter()
        .map(|worker| (worker.clone(), score_worker(worker, category, &keywords)))
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.total().partial_cmp(&a.total()).unwrap_or(Ordering::Equal));
    scored.truncate(MAX_RECOMMENDATIONS);
    scored
}

pub fn rank(
    candidates: &[WorkerProfile],
    category: CategoryId,
    answers: &IntakeAnswers,
) -> Vec<WorkerProfile> {
    rank_with_scores(candidates, category, answers)
        .into_iter()
        .map(|(worker, _)| worker)
        .collect()
}
