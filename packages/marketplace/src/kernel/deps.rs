//! Collaborator dependencies (using traits for testability)

use std::sync::Arc;

use crate::kernel::{BaseJobSink, BaseProfileStore};

/// Store collaborators the dispatch worker talks to
#[derive(Clone)]
pub struct MarketplaceDeps {
    pub job_sink: Arc<dyn BaseJobSink>,
    pub profile_store: Arc<dyn BaseProfileStore>,
}

impl MarketplaceDeps {
    pub fn new(job_sink: Arc<dyn BaseJobSink>, profile_store: Arc<dyn BaseProfileStore>) -> Self {
        Self {
            job_sink,
            profile_store,
        }
    }
}
