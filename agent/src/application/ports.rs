//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

use crate::domain::config::AgentConfig;

// ── Configuration Port ───────────────────────────────────────────────────────

/// Abstracts loading the agent configuration so services never read the
/// filesystem themselves. The core only reads configuration, never writes it.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed.
    fn load(&self) -> Result<AgentConfig>;
    /// Path the configuration is loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}

// ── Process Control Ports ────────────────────────────────────────────────────

/// Directory-rooted process termination.
///
/// The lifecycle manager never tracks controller PIDs across invocations;
/// teardown means "kill everything whose executable lives under this
/// directory", which stays correct even when a previous run's PID was reused.
pub trait ProcessHarvester {
    /// Kill every process whose executable path is under `dir`.
    /// Returns the number of processes killed. Best effort — enumeration
    /// or kill failures reduce the count, they are never surfaced as errors.
    fn kill_rooted_under(&self, dir: &Path) -> usize;
}

/// Detached launch of a long-running child.
pub trait DaemonSpawner {
    /// Spawn `program` with `args`, detached from this process's stdio.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn spawn_daemon(&self, program: &Path, args: &[&str]) -> Result<u32>;
}

/// Synchronous run with captured output, bounded by the implementation's
/// timeout.
#[allow(async_fn_in_trait)]
pub trait CaptureRunner {
    /// Run `program` with `args` and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// timeout. On timeout, the child must be killed (not left orphaned).
    async fn run_capture(&self, program: &Path, args: &[&str]) -> Result<Output>;
}

/// Composite trait — any type implementing all three sub-traits is a
/// `ProcessControl`.
pub trait ProcessControl: ProcessHarvester + DaemonSpawner + CaptureRunner {}

/// Blanket implementation for the composite.
impl<T> ProcessControl for T where T: ProcessHarvester + DaemonSpawner + CaptureRunner {}

// ── Platform Gate Port ───────────────────────────────────────────────────────

/// Abstracts the host-platform check gating controller start.
pub trait PlatformGate {
    /// Whether this host may run the controller at all.
    fn supports_controller(&self) -> bool;
    /// Short platform description for logs.
    fn describe(&self) -> String;
}
