//! Controller lifecycle: start and stop sequences.
//!
//! Both operations honor the sentinel return contract: a disallowed modus is
//! a silent no-op, every other failure is logged and reported as
//! `None`/`false`. Nothing here returns `Err` to the caller.

use std::path::Path;
use std::time::Duration;

use crate::application::ports::{DaemonSpawner, PlatformGate, ProcessControl, ProcessHarvester};
use crate::application::services::controller::{install, side_config};
use crate::domain::channel::effective_channel;
use crate::domain::config::AgentConfig;
use crate::domain::layout::AgentLayout;
use crate::domain::modus::Modus;

/// Home directory handed to the controller in integration runs.
pub const DEBUG_HOME_ENV: &str = "DEBUG_HOME_DIR";

/// Bounds for the stop sequence's delete-retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum delete attempts.
    pub attempts: u32,
    /// Sleep between failed attempts.
    pub interval: Duration,
}

impl Default for RetryPolicy {
    /// 20 × 200 ms — a worst case of about four seconds, enough for an
    /// antivirus scanner or a dying process to release the binary.
    fn default() -> Self {
        Self {
            attempts: 20,
            interval: Duration::from_millis(200),
        }
    }
}

/// Start the controller.
///
/// Returns the launched PID, or `None` when the modus disallows the
/// controller, the platform is unsupported, the install fails, or the
/// launch itself fails.
pub fn start(
    modus: Modus,
    cfg: &AgentConfig,
    layout: &AgentLayout,
    procs: &(impl ProcessHarvester + DaemonSpawner),
    gate: &impl PlatformGate,
) -> Option<u32> {
    if !modus.allows_controller() {
        // Policy denial, not an error: interactive invocations never
        // manage the controller.
        return None;
    }
    if !gate.supports_controller() {
        tracing::error!(
            platform = %gate.describe(),
            "platform too old for the controller, not starting"
        );
        return None;
    }

    let killed = procs.kill_rooted_under(&layout.controller_dir());
    tracing::info!(killed, "pre-clean of controller processes");

    let controller = install::install(layout)?;

    if let Err(err) = side_config::write(layout, cfg) {
        tracing::warn!(error = %err, "cannot write the controller side configuration");
    }

    if modus == Modus::Integration {
        ensure_debug_home(layout);
    }

    let address = effective_channel(&cfg.system.controller.channel, modus, std::process::id());
    let address = address.to_string();
    let args = ["-vv", "--daemon", "--channel", address.as_str()];
    match procs.spawn_daemon(&controller, &args) {
        Ok(pid) if pid > 0 => {
            tracing::info!(pid, channel = %address, "controller started");
            Some(pid)
        }
        Ok(pid) => {
            tracing::error!(pid, "controller launch reported no usable pid");
            None
        }
        Err(err) => {
            tracing::error!(error = %err, "cannot launch the controller");
            None
        }
    }
}

/// Stop the controller and delete its binary.
///
/// Returns whether the binary was gone within the retry budget. Exhausting
/// the budget is reported but never escalated — the caller decides what to
/// do with a controller that will not die.
pub async fn stop(
    modus: Modus,
    layout: &AgentLayout,
    procs: &impl ProcessControl,
    policy: RetryPolicy,
) -> bool {
    if !modus.allows_controller() {
        return false;
    }

    let killed = procs.kill_rooted_under(&layout.controller_dir());
    tracing::info!(killed, "killed controller processes");

    let deleted = delete_with_retry(&layout.controller_path(), policy).await;
    if !deleted {
        tracing::warn!(
            attempts = policy.attempts,
            controller = %layout.controller_path().display(),
            "controller binary still present after retry budget"
        );
    }

    side_config::remove(layout);
    deleted
}

/// Delete `target`, retrying while something still holds it.
///
/// An already-absent target counts as success immediately.
async fn delete_with_retry(target: &Path, policy: RetryPolicy) -> bool {
    for attempt in 1..=policy.attempts {
        match std::fs::remove_file(target) {
            Ok(()) => return true,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return true,
            Err(err) => {
                tracing::debug!(attempt, error = %err, "controller binary not deletable yet");
            }
        }
        tokio::time::sleep(policy.interval).await;
    }
    false
}

/// Point the controller's debug home at the agent user dir, unless the
/// operator already set one. Never overwrites an existing value.
fn ensure_debug_home(layout: &AgentLayout) {
    if std::env::var_os(DEBUG_HOME_ENV).is_some() {
        return;
    }
    std::env::set_var(DEBUG_HOME_ENV, layout.user_dir());
    tracing::debug!(
        dir = %layout.user_dir().display(),
        "set the controller debug home"
    );
}

// ── Unit tests ───────────────────────────────────────────────────────────────
