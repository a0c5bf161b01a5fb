pub mod job;

pub use job::{Job, JobAction, JobError, JobRequest, JobStatus, JobTransition};
