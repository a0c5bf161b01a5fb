pub mod models;
pub mod utils;

// Re-export commonly used types
pub use models::WorkerScore;
pub use utils::{rank, rank_with_scores, score_worker, MAX_RECOMMENDATIONS};
