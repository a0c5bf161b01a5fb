//! Live worker roster.
//!
//! The store pushes whole roster snapshots, possibly out of order relative to
//! other notifications. Readers only ever see the most recently published one;
//! a `watch` channel keeps exactly that value and nothing older.

use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domains::workers::models::{WorkerDocument, WorkerProfile};

/// Immutable roster snapshot shared between readers
pub type RosterSnapshot = Arc<Vec<WorkerProfile>>;

/// Publishing side of the roster feed
pub struct RosterFeed {
    tx: watch::Sender<RosterSnapshot>,
}

impl RosterFeed {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(Vec::new()));
        Self { tx }
    }

    /// Replace the current snapshot. Never fails, even with no readers.
    pub fn publish(&self, workers: Vec<WorkerProfile>) {
        debug!(workers = workers.len(), "Roster snapshot published");
        self.tx.send_replace(Arc::new(workers));
    }

    pub fn subscribe(&self) -> RosterReader {
        RosterReader {
            rx: self.tx.subscribe(),
        }
    }

    pub fn latest(&self) -> RosterSnapshot {
        self.tx.borrow().clone()
    }
}

impl Default for RosterFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Reading side of the roster feed. Cheap to clone.
#[derive(Clone)]
pub struct RosterReader {
    rx: watch::Receiver<RosterSnapshot>,
}

impl RosterReader {
    /// The snapshot most recently published
    pub fn latest(&self) -> RosterSnapshot {
        self.rx.borrow().clone()
    }

    /// Wait for the next published snapshot
    pub async fn changed(&mut self) -> Result<RosterSnapshot> {
        self.rx
            .changed()
            .await
            .context("Roster feed closed")?;
        Ok(self.rx.borrow_and_update().clone())
    }
}

/// Store-side roster order: available workers first, then by rating, highest first.
pub fn sort_roster(workers: &mut [WorkerProfile]) {
    workers.sort_by(|a, b| {
        b.available
            .cmp(&a.available)
            .then_with(|| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal))
    });
}

/// Decode a JSON array of worker documents, defaulting missing fields.
///
/// Documents are decoded one at a time; an element that is not an object at
/// all is skipped with a warning and the rest of the roster is kept.
pub fn parse_roster(json: &str) -> Result<Vec<WorkerProfile>> {
    let documents: Vec<serde_json::Value> =
        serde_json::from_str(json).context("Roster is not a JSON array")?;

    let workers = documents
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            match serde_json::from_value::<WorkerDocument>(value) {
                Ok(document) => Some(document.into_profile()),
                Err(e) => {
                    warn!(index, error = %e, "Skipping unreadable worker document");
                    None
                }
            }
        })
        .collect();

    Ok(workers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::CategoryId;
    use crate::domains::workers::models::DEFAULT_RATING;

    fn worker(name: &str, rating: f64, available: bool) -> WorkerProfile {
        WorkerProfile::builder()
            .name(name)
            .specialty(CategoryId::General)
            .rating(rating)
            .available(available)
            .build()
    }

    #[test]
    fn reader_sees_latest_snapshot() {
        let feed = RosterFeed::new();
        let reader = feed.subscribe();
        assert!(reader.latest().is_empty());

        feed.publish(vec![worker("a", 3.0, true)]);
        feed.publish(vec![worker("b", 4.0, true), worker("c", 1.0, false)]);

        let latest = reader.latest();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].name, "b");
    }

    #[test]
    fn publish_without_readers_is_kept() {
        let feed = RosterFeed::new();
        feed.publish(vec![worker("solo", 3.0, true)]);

        assert_eq!(feed.latest().len(), 1);
        assert_eq!(feed.subscribe().latest()[0].name, "solo");
    }

    #[tokio::test]
    async fn changed_resolves_on_publish() {
        let feed = RosterFeed::new();
        let mut reader = feed.subscribe();

        feed.publish(vec![worker("fresh", 4.0, true)]);
        let snapshot = reader.changed().await.unwrap();

        assert_eq!(snapshot[0].name, "fresh");
    }

    #[test]
    fn sort_puts_available_first_then_rating() {
        let mut workers = vec![
            worker("busy-star", 5.0, false),
            worker("ok", 3.5, true),
            worker("great", 4.8, true),
        ];
        sort_roster(&mut workers);

        let names: Vec<_> = workers.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["great", "ok", "busy-star"]);
    }

    #[test]
    fn parse_roster_defaults_partial_documents() {
        let workers = parse_roster(r#"[{"name": "Ana"}, {"name": "Bo", "rating": 4.1}]"#).unwrap();

        assert_eq!(workers.len(), 2);
        assert!(workers[0].available);
        assert_eq!(workers[1].rating, 4.1);
        assert!(parse_roster("{}").is_err());
    }

    #[test]
    fn one_bad_document_does_not_sink_the_roster() {
        let workers = parse_roster(
            r#"[{"id": "Xk3pQ9firebaseUid", "name": "Ana", "rating": 4.1}, {"name": "Bo"}]"#,
        )
        .unwrap();
        assert_eq!(workers.len(), 2);
        assert_eq!(workers[0].name, "Ana");
        assert_eq!(workers[0].rating, 4.1);
        assert_eq!(workers[1].name, "Bo");

        let workers =
            parse_roster(r#"[{"name": "Ana", "rating": "4.5"}, {"name": "Bo", "completedJobs": 3.0}]"#)
                .unwrap();
        assert_eq!(workers.len(), 2);
        assert_eq!(workers[0].rating, DEFAULT_RATING);
        assert_eq!(workers[1].name, "Bo");
    }

    #[test]
    fn non_object_elements_are_skipped() {
        let workers = parse_roster(r#"["not a worker", 42, {"name": "Bo"}]"#).unwrap();

        assert_eq!(workers.len(), 1);
        assert_eq!(workers[0].name, "Bo");
    }
}
