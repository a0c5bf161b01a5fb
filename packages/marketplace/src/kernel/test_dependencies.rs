// Mock collaborators for testing
//
// Record every call so tests can assert on what the core sent to the store.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseJobSink, BaseProfileStore};
use crate::common::WorkerId;
use crate::domains::jobs::{Job, JobRequest, JobTransition};
use crate::domains::workers::WorkerProfile;

// =============================================================================
// Mock Job Sink
// =============================================================================

pub struct MockJobSink {
    created: Arc<Mutex<Vec<JobRequest>>>,
    transitions: Arc<Mutex<Vec<JobTransition>>>,
    fail: bool,
}

impl MockJobSink {
    pub fn new() -> Self {
        Self {
            created: Arc::new(Mutex::new(Vec::new())),
            transitions: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Every call is recorded, then rejected
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// All job requests received, in order
    pub fn created(&self) -> Vec<JobRequest> {
        self.created.lock().unwrap().clone()
    }

    pub fn transitions(&self) -> Vec<JobTransition> {
        self.transitions.lock().unwrap().clone()
    }
}

impl Default for MockJobSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseJobSink for MockJobSink {
    async fn create_job(&self, request: JobRequest) -> Result<Job> {
        self.created.lock().unwrap().push(request.clone());

        if self.fail {
            return Err(anyhow!("mock job sink rejected create_job"));
        }
        Ok(Job::from_request(request, Utc::now()))
    }

    async fn transition_job(&self, transition: JobTransition) -> Result<Job> {
        self.transitions.lock().unwrap().push(transition);

        if self.fail {
            return Err(anyhow!("mock job sink rejected transition_job"));
        }
        let now = Utc::now();
        Ok(Job {
            id: transition.job_id,
            customer_id: Default::default(),
            worker_id: Default::default(),
            category: Default::default(),
            description: String::new(),
            status: transition.to,
            created_at: now,
            updated_at: now,
        })
    }
}

// =============================================================================
// Mock Profile Store
// =============================================================================

pub struct MockProfileStore {
    profiles: Arc<Mutex<HashMap<WorkerId, WorkerProfile>>>,
    availability_calls: Arc<Mutex<Vec<(WorkerId, bool)>>>,
}

impl MockProfileStore {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(Mutex::new(HashMap::new())),
            availability_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_profile(self, profile: WorkerProfile) -> Self {
        self.profiles.lock().unwrap().insert(profile.id, profile);
        self
    }

    pub fn availability_calls(&self) -> Vec<(WorkerId, bool)> {
        self.availability_calls.lock().unwrap().clone()
    }
}

impl Default for MockProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseProfileStore for MockProfileStore {
    async fn get_profile(&self, worker_id: WorkerId) -> Result<Option<WorkerProfile>> {
        Ok(self.profiles.lock().unwrap().get(&worker_id).cloned())
    }

    async fn set_availability(&self, worker_id: WorkerId, available: bool) -> Result<()> {
        self.availability_calls
            .lock()
            .unwrap()
            .push((worker_id, available));

        if let Some(profile) = self.profiles.lock().unwrap().get_mut(&worker_id) {
            profile.available = available;
        }
        Ok(())
    }
}
