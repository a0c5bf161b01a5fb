pub mod actions;
pub mod models;

// Re-export commonly used types
pub use actions::{book, build_description, quick_book, request_transition};
pub use models::{Job, JobAction, JobError, JobRequest, JobStatus, JobTransition};
