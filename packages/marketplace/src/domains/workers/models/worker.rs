use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;
use typed_builder::TypedBuilder;

use crate::common::WorkerId;
use crate::domains::catalog::{CategoryId, FALLBACK_CATEGORY};

/// Rating assumed when a worker document carries none (mid-range of 0–5)
pub const DEFAULT_RATING: f64 = 2.5;

pub const MAX_RATING: f64 = 5.0;

/// Hourly rate assumed when a document's rate is missing or not positive
pub const DEFAULT_HOURLY_RATE: f64 = 25.0;

/// Worker profile snapshot as the intake sees it.
///
/// Owned by the profile store; the core only ever reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct WorkerProfile {
    #[builder(default)]
    pub id: WorkerId,
    #[builder(setter(into))]
    pub name: String,
    #[builder(default, setter(into))]
    pub location: String,
    pub specialty: CategoryId,
    #[builder(default, setter(into))]
    pub bio: String,
    /// 0.0–5.0
    #[builder(default = DEFAULT_RATING)]
    pub rating: f64,
    #[builder(default)]
    pub completed_jobs: u32,
    #[builder(default = true)]
    pub available: bool,
    /// Free-text tags, matched case-insensitively
    #[builder(default, setter(transform = |skills: &[&str]| skills.iter().map(|s| s.to_string()).collect()))]
    pub skills: Vec<String>,
    #[builder(default = DEFAULT_HOURLY_RATE)]
    pub hourly_rate: f64,
}

/// Worker record as it arrives from the document store.
///
/// Every field is optional and a field of the wrong type reads as missing;
/// `into_profile` fills the gaps so ranking never fails on a partial document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkerDocument {
    /// Raw store id; not every store hands out UUIDs
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(alias = "displayName", deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub specialty: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub bio: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub rating: Option<f64>,
    #[serde(alias = "jobsCompleted", deserialize_with = "lenient")]
    pub completed_jobs: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub available: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub skills: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub hourly_rate: Option<f64>,
}

/// Read a field as `None` when it has the wrong type instead of failing the document
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl WorkerDocument {
    pub fn into_profile(self) -> WorkerProfile {
        let id = match self.id.as_deref() {
            Some(raw) => WorkerId::parse(raw.trim()).unwrap_or_else(|_| {
                let fresh = WorkerId::new();
                warn!(external_id = raw, worker_id = %fresh, "Worker id is not a UUID; assigned a fresh one");
                fresh
            }),
            None => WorkerId::new(),
        };

        let specialty = self
            .specialty
            .as_deref()
            .and_then(|raw| raw.parse::<CategoryId>().ok())
            .unwrap_or(FALLBACK_CATEGORY);

        let rating = self
            .rating
            .filter(|r| r.is_finite())
            .map(|r| r.clamp(0.0, MAX_RATING))
            .unwrap_or(DEFAULT_RATING);

        let hourly_rate = self
            .hourly_rate
            .filter(|rate| rate.is_finite() && *rate > 0.0)
            .unwrap_or(DEFAULT_HOURLY_RATE);

        WorkerProfile {
            id,
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            specialty,
            bio: self.bio.unwrap_or_default(),
            rating,
            completed_jobs: self.completed_jobs.unwrap_or(0),
            available: self.available.unwrap_or(true),
            skills: self.skills.unwrap_or_default(),
            hourly_rate,
        }
    }
}

impl From<WorkerDocument> for WorkerProfile {
    fn from(doc: WorkerDocument) -> Self {
        doc.into_profile()
    }
}
