pub mod scoring;

pub use scoring::{
    keyword_set, rank, rank_with_scores, score_worker, AVAILABILITY_BONUS, MAX_RECOMMENDATIONS,
    RATING_WEIGHT, SKILL_MATCH_WEIGHT, SPECIALTY_BOOST,
};
