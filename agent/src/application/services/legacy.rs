//! Legacy mode decision engine — the side-effecting half.
//!
//! `domain::marker::classify` decides; this module samples the marker file
//! and applies the shared conditional-create step. Every branch logs the
//! marker path, the reason, and the resulting ON/OFF state whether or not a
//! file was written.

use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};

use crate::domain::layout::AgentLayout;
use crate::domain::marker::{classify, MarkerSample};

/// Written into the legacy pull file; existence is load-bearing, the content
/// only records provenance.
const LEGACY_PULL_CONTENT: &str = "created by argus-agent controller supervision\n";

/// How many leading bytes of the marker are read for the prefix check.
const MARKER_HEAD_BYTES: usize = 64;

/// Sample the marker file's existence, age, and leading content.
///
/// Never fails: every unreadable property degrades to `None` and lets the
/// classifier treat the marker conservatively.
#[must_use]
pub fn sample_marker(path: &Path) -> MarkerSample {
    let Ok(meta) = std::fs::metadata(path) else {
        return MarkerSample::Absent;
    };
    // A future-dated mtime (clock skew) counts as age zero, i.e. fresh.
    let age = meta.modified().ok().map(|mtime| {
        SystemTime::now()
            .duration_since(mtime)
            .unwrap_or(std::time::Duration::ZERO)
    });
    let head = std::fs::read(path).ok().map(|bytes| {
        let head = &bytes[..bytes.len().min(MARKER_HEAD_BYTES)];
        String::from_utf8_lossy(head)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });
    MarkerSample::Present { age, head }
}

/// The shared "ConditionallyCreate" step: write the legacy pull file unless
/// the flag file says it was already written during this install.
///
/// Returns whether the file was created by this call.
///
/// # Errors
///
/// Returns an error if the legacy pull file cannot be written.
pub fn ensure_legacy_pull(layout: &AgentLayout) -> Result<bool> {
    if layout.flag_file().exists() {
        return Ok(false);
    }
    write_legacy_pull(layout)?;
    Ok(true)
}

/// Unconditionally (re)write the legacy pull file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_legacy_pull(layout: &AgentLayout) -> Result<()> {
    let path = layout.legacy_pull_file();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    std::fs::write(&path, LEGACY_PULL_CONTENT)
        .with_context(|| format!("cannot write {}", path.display()))
}

/// Whether the agent is currently in legacy pull mode.
///
/// The file's existence is the single source of truth consumed by the rest
/// of the agent.
#[must_use]
pub fn legacy_pull_active(layout: &AgentLayout) -> bool {
    layout.legacy_pull_file().exists()
}

/// Run the decision engine once against the marker at `marker_path`.
///
/// Returns whether the legacy pull file was created. Marker deletion is the
/// reconciler's responsibility, not this function's.
#[must_use]
pub fn decide(layout: &AgentLayout, marker_path: &Path) -> bool {
    let sample = sample_marker(marker_path);
    let disposition = classify(&sample);
    let created = if disposition.legacy_eligible() {
        match ensure_legacy_pull(layout) {
            Ok(created) => created,
            Err(err) => {
                tracing::error!(error = %err, "cannot write the legacy pull file");
                false
            }
        }
    } else {
        false
    };
    tracing::info!(
        marker = %marker_path.display(),
        reason = disposition.reason(),
        legacy_mode = if legacy_pull_active(layout) { "ON" } else { "OFF" },
        created,
        "legacy mode decision"
    );
    created
}

// ── Unit tests ───────────────────────────────────────────────────────────────
