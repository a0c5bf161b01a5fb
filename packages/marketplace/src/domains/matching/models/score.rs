use serde::Serialize;

use crate::common::WorkerId;
use crate::domains::matching::utils::{RATING_WEIGHT, SKILL_MATCH_WEIGHT};

/// Per-worker breakdown of the ranking score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerScore {
    pub worker_id: WorkerId,
    pub skill_matches: usize,
    pub specialty_boost: f64,
    pub rating_score: f64,
    pub availability_bonus: f64,
}

impl WorkerScore {
    pub fn total(&self) -> f64 {
        self.skill_matches as f64 * SKILL_MATCH_WEIGHT
            + self.specialty_boost
            + self.rating_score * RATING_WEIGHT
            + self.availability_bonus
    }
}
