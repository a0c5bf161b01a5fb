//! End-to-end intake tests: classify, questionnaire, ranking and booking
//! against an in-process store with a live dispatch worker.

mod common;

use crate::common::{driver, electrician, plumber, sample_roster, TestHarness};
use marketplace_core::common::CustomerId;
use marketplace_core::domains::catalog::CategoryId;
use marketplace_core::domains::intake::{faq_progress, ChatStep, IntakeSession};
use marketplace_core::domains::jobs::JobStatus;

// =============================================================================
// Full intake
// =============================================================================

/// Leaking kitchen sink ends in a Pending plumbing job for the best plumber.
#[tokio::test]
async fn kitchen_sink_leak_books_the_plumber() {
    let harness = TestHarness::new(vec![electrician(), plumber()]);
    let customer = CustomerId::new();
    let mut session = harness.session(customer);

    session.open();
    session.submit_problem("My kitchen sink is leaking badly");
    assert_eq!(session.state().category, CategoryId::Plumber);
    assert_eq!(faq_progress(session.state()), (1, 4));

    session.answer("Kitchen");
    session.advance(None);
    session.answer("Flooding");
    session.advance(None);
    session.answer(true);
    session.advance(None);
    session.answer("1-3 years");
    session.advance(None);

    let state = session.state();
    assert_eq!(state.step, ChatStep::ShowingResults);
    assert_eq!(state.ranked[0].name, "Rosa Alvarez");
    assert_eq!(state.ranked[1].name, "Sam Okafor");

    let scores = session.scores();
    assert!((scores[0].total() - 12.76).abs() < 1e-9);
    assert!((scores[1].total() - 7.88).abs() < 1e-9);

    let rosa = state.ranked[0].id;
    let request = session.select_worker(rosa).expect("plumber is recommended");
    assert!(!session.state().open);

    let jobs = harness.wait_for_jobs(1).await.unwrap();
    let job = &jobs[0];
    assert_eq!(job.worker_id, rosa);
    assert_eq!(job.customer_id, customer);
    assert_eq!(job.category, CategoryId::Plumber);
    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.description, request.description);
    assert_eq!(
        job.description,
        "My kitchen sink is leaking badly | location: Kitchen | severity: Flooding | shutoff: Yes | age: 1-3 years"
    );
}

/// Recommendations never exceed three, however large the roster.
#[tokio::test]
async fn at_most_three_recommendations() {
    let harness = TestHarness::new(sample_roster());
    let mut session = harness.session(CustomerId::new());

    session.open();
    session.submit_problem("Ceiling needs a fresh coat of paint");
    session.answer("Ceiling");
    session.advance(None);
    session.advance(Some("living room"));
    session.answer(false);
    session.advance(None);

    let ranked = &session.state().ranked;
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].name, "June Park");
}

/// Unavailable workers still rank, just behind comparable available ones.
#[tokio::test]
async fn unavailable_worker_loses_availability_bonus() {
    let harness = TestHarness::new(sample_roster());
    let mut session = harness.session(CustomerId::new());

    session.open();
    session.submit_problem("clogged drain");
    session.advance(None);
    session.advance(None);
    session.advance(None);
    session.advance(None);

    let names: Vec<_> = session
        .state()
        .ranked
        .iter()
        .map(|w| w.name.as_str())
        .collect();
    // Both match "plumbing"; the plumber also gets the specialty boost
    assert_eq!(names[0], "Rosa Alvarez");
    assert_eq!(names[1], "Ike Brandt");
}

// =============================================================================
// Abandoned and repeated intakes
// =============================================================================

/// Closing halfway through writes nothing to the store.
#[tokio::test]
async fn abandoned_intake_creates_no_job() {
    let harness = TestHarness::new(sample_roster());
    let mut session = harness.session(CustomerId::new());

    session.open();
    session.submit_problem("Need a ride to the airport");
    session.answer("Airport run");
    session.advance(None);
    session.close();

    assert!(!session.state().open);
    assert_eq!(session.state().step, ChatStep::CollectingProblem);
    assert!(harness.wait_for_jobs(1).await.is_err());
    assert!(harness.store.jobs().await.is_empty());
}

/// A second intake sees workers added after the first one finished.
#[tokio::test]
async fn later_intake_uses_updated_roster() {
    let harness = TestHarness::new(vec![plumber()]);
    let mut session = harness.session(CustomerId::new());

    let run = |session: &mut IntakeSession| {
        session.open();
        session.submit_problem("drive me to the airport");
        session.answer("Airport run");
        session.advance(None);
        session.advance(Some("Home to MSP"));
        session.advance(None);
    };

    run(&mut session);
    assert_eq!(session.state().ranked[0].name, "Rosa Alvarez");

    harness.store.upsert_worker(driver()).await;
    run(&mut session);
    assert_eq!(session.state().ranked[0].name, "Dee Halvorsen");
}

/// Opening again mid-questionnaire starts from an empty problem.
#[tokio::test]
async fn reopening_resets_progress() {
    let harness = TestHarness::new(sample_roster());
    let mut session = harness.session(CustomerId::new());

    session.open();
    session.submit_problem("rewire the outlet");
    session.answer("Outlet not working");
    session.advance(None);
    session.open();

    let state = session.state();
    assert!(state.open);
    assert_eq!(state.step, ChatStep::CollectingProblem);
    assert!(state.answers.is_empty());
    assert_eq!(state.faq_index, 0);
}

// =============================================================================
// Store failures
// =============================================================================

/// A sink that rejects the write leaves the already-closed session untouched.
#[tokio::test]
async fn failing_sink_does_not_reopen_session() {
    use marketplace_core::domains::workers::RosterFeed;
    use marketplace_core::kernel::test_dependencies::{MockJobSink, MockProfileStore};
    use marketplace_core::kernel::{spawn_dispatch_worker, Dispatcher, MarketplaceDeps};
    use std::sync::Arc;

    let sink = Arc::new(MockJobSink::new().failing());
    let deps = MarketplaceDeps::new(sink.clone(), Arc::new(MockProfileStore::new()));
    let (dispatcher, rx) = Dispatcher::channel();
    let handle = spawn_dispatch_worker(rx, deps);

    let feed = RosterFeed::new();
    feed.publish(vec![driver()]);
    let mut session = IntakeSession::new(CustomerId::new(), feed.subscribe(), dispatcher);

    session.open();
    session.submit_problem("Need a ride to the airport");
    session.advance(None);
    session.advance(Some("Home to MSP"));
    session.advance(None);
    let dee = session.state().ranked[0].id;
    assert!(session.select_worker(dee).is_some());
    assert!(!session.state().open);

    // Dropping the session drops the last dispatcher, letting the worker finish
    drop(session);
    handle.await.unwrap();

    assert_eq!(sink.created().len(), 1);
}
