//! Timing of the stop sequence's bounded delete-retry loop.
//!
//! Runs under paused tokio time: sleeps auto-advance the clock, so the
//! elapsed virtual time pins the number of sleeps the loop performed.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::time::Duration;

use argus_agent::application::services::controller::lifecycle::{self, RetryPolicy};
use argus_agent::domain::modus::Modus;

use crate::helpers::{temp_layout, StubProcs};

/// A non-empty directory at the controller path makes every delete attempt
/// fail the same way a locked binary does.
fn plant_undeletable_controller(layout: &argus_agent::domain::layout::AgentLayout) {
    std::fs::create_dir_all(layout.controller_path()).unwrap();
    std::fs::write(layout.controller_path().join("held"), b"").unwrap();
}

#[tokio::test(start_paused = true)]
async fn exhausted_retry_budget_sleeps_once_per_attempt() {
    let (_dir, layout) = temp_layout();
    plant_undeletable_controller(&layout);

    let policy = RetryPolicy {
        attempts: 20,
        interval: Duration::from_millis(200),
    };
    let began = tokio::time::Instant::now();
    let procs = StubProcs::new(0);
    let deleted = lifecycle::stop(Modus::Service, &layout, &procs, policy).await;

    assert!(!deleted, "budget exhaustion must report failure");
    assert_eq!(
        began.elapsed(),
        Duration::from_millis(20 * 200),
        "one sleep per failed attempt"
    );
}

#[tokio::test(start_paused = true)]
async fn first_attempt_success_never_sleeps() {
    let (_dir, layout) = temp_layout();
    std::fs::create_dir_all(layout.controller_dir()).unwrap();
    std::fs::write(layout.controller_path(), b"controller").unwrap();

    let began = tokio::time::Instant::now();
    let procs = StubProcs::new(0);
    let deleted = lifecycle::stop(Modus::Service, &layout, &procs, RetryPolicy::default()).await;

    assert!(deleted);
    assert_eq!(began.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn already_absent_binary_counts_as_immediate_success() {
    let (_dir, layout) = temp_layout();
    let began = tokio::time::Instant::now();
    let procs = StubProcs::new(0);
    let deleted = lifecycle::stop(Modus::Service, &layout, &procs, RetryPolicy::default()).await;

    assert!(deleted);
    assert_eq!(began.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn shortened_budget_is_honored() {
    let (_dir, layout) = temp_layout();
    plant_undeletable_controller(&layout);

    let policy = RetryPolicy {
        attempts: 3,
        interval: Duration::from_millis(50),
    };
    let began = tokio::time::Instant::now();
    let procs = StubProcs::new(0);
    let deleted = lifecycle::stop(Modus::Service, &layout, &procs, policy).await;

    assert!(!deleted);
    assert_eq!(began.elapsed(), Duration::from_millis(3 * 50));
}
