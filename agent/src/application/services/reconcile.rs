//! Artifact reconciler — one pass per agent cycle.
//!
//! Ties the decision engine and the flag-file bookkeeping together. The one
//! hard guarantee here is that the installer marker is deleted on every exit
//! path, success or failure, so a single marker is consumed exactly once.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::services::legacy;
use crate::domain::config::AgentConfig;
use crate::domain::layout::AgentLayout;

/// What a reconciliation pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No controller binary on disk; nothing to reconcile.
    NoController,
    /// `force_legacy` is set; the legacy pull file was rewritten.
    ForcedLegacy,
    /// The decision engine ran; `created` says whether it wrote the file.
    Decided { created: bool },
    /// The flag file already existed, so the engine was skipped.
    AlreadyFlagged,
}

/// Run one reconciliation pass.
///
/// `controller_exists` is sampled by the caller (presence of the packaged
/// controller binary). The marker at `marker_path` is deleted before this
/// function returns, on every path.
pub fn reconcile(
    cfg: &AgentConfig,
    layout: &AgentLayout,
    marker_path: &Path,
    controller_exists: bool,
) -> ReconcileOutcome {
    let outcome = reconcile_inner(cfg, layout, marker_path, controller_exists);
    delete_marker(marker_path);
    outcome
}

fn reconcile_inner(
    cfg: &AgentConfig,
    layout: &AgentLayout,
    marker_path: &Path,
    controller_exists: bool,
) -> ReconcileOutcome {
    if !controller_exists {
        tracing::debug!("no controller binary, skipping reconciliation");
        return ReconcileOutcome::NoController;
    }

    let outcome = if cfg.system.controller.force_legacy {
        // Operator override: legacy mode wins regardless of marker or flag.
        if let Err(err) = legacy::write_legacy_pull(layout) {
            tracing::error!(error = %err, "cannot force the legacy pull file");
        }
        ReconcileOutcome::ForcedLegacy
    } else if layout.flag_file().exists() {
        tracing::debug!("controller flag already present, skipping decision engine");
        ReconcileOutcome::AlreadyFlagged
    } else {
        let created = legacy::decide(layout, marker_path);
        ReconcileOutcome::Decided { created }
    };

    if let Err(err) = create_flag_file(layout) {
        tracing::error!(error = %err, "cannot create the controller flag file");
    }
    outcome
}

/// Create (or overwrite) the per-install flag file.
fn create_flag_file(layout: &AgentLayout) -> Result<()> {
    let path = layout.flag_file();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    std::fs::write(&path, "controller flag\n")
        .with_context(|| format!("cannot write {}", path.display()))
}

/// Delete the marker; idempotent on an already-absent path.
fn delete_marker(marker_path: &Path) {
    match std::fs::remove_file(marker_path) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            tracing::warn!(
                marker = %marker_path.display(),
                error = %err,
                "cannot delete the installer marker"
            );
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
