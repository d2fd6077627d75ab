//! `DEBUG_HOME_DIR` handling during integration-modus starts.
//!
//! These tests mutate process environment, so they are serialized.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use argus_agent::application::services::controller::lifecycle::{self, DEBUG_HOME_ENV};
use argus_agent::domain::config::AgentConfig;
use argus_agent::domain::modus::Modus;
use serial_test::serial;

use crate::helpers::{temp_layout_with_package, StubGate, StubProcs};

#[test]
#[serial(debug_home)]
fn integration_start_sets_debug_home_when_absent() {
    std::env::remove_var(DEBUG_HOME_ENV);
    let (_dir, layout) = temp_layout_with_package();
    let procs = StubProcs::new(55);

    let pid = lifecycle::start(
        Modus::Integration,
        &AgentConfig::default(),
        &layout,
        &procs,
        &StubGate(true),
    );
    assert_eq!(pid, Some(55));
    assert_eq!(
        std::env::var_os(DEBUG_HOME_ENV).expect("set"),
        layout.user_dir().as_os_str()
    );
    std::env::remove_var(DEBUG_HOME_ENV);
}

#[test]
#[serial(debug_home)]
fn integration_start_never_overwrites_existing_debug_home() {
    std::env::set_var(DEBUG_HOME_ENV, "/operator/choice");
    let (_dir, layout) = temp_layout_with_package();
    let procs = StubProcs::new(55);

    lifecycle::start(
        Modus::Integration,
        &AgentConfig::default(),
        &layout,
        &procs,
        &StubGate(true),
    );
    assert_eq!(
        std::env::var(DEBUG_HOME_ENV).expect("still set"),
        "/operator/choice"
    );
    std::env::remove_var(DEBUG_HOME_ENV);
}

#[test]
#[serial(debug_home)]
fn service_start_leaves_debug_home_alone() {
    std::env::remove_var(DEBUG_HOME_ENV);
    let (_dir, layout) = temp_layout_with_package();
    let procs = StubProcs::new(55);

    lifecycle::start(
        Modus::Service,
        &AgentConfig::default(),
        &layout,
        &procs,
        &StubGate(true),
    );
    assert!(std::env::var_os(DEBUG_HOME_ENV).is_none());
}
