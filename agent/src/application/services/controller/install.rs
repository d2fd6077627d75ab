//! Controller installer — packaged location to run location.
//!
//! The run-location binary may be locked by an antivirus scanner or by a
//! controller that has not finished dying. The fallback is to rename the
//! locked target aside to a `.sav` sibling (renames usually succeed where
//! overwrites do not) and retry the copy once.

use std::path::{Path, PathBuf};

use crate::domain::layout::AgentLayout;

/// Copy the packaged controller binary over the run-location binary.
///
/// Returns the run-location path on success, `None` on total failure — in
/// which case the caller must not attempt to start a controller. No error
/// crosses this boundary; every failure is logged.
#[must_use]
pub fn install(layout: &AgentLayout) -> Option<PathBuf> {
    let source = layout.packaged_controller();
    let target = layout.controller_path();

    if let Err(err) = std::fs::create_dir_all(layout.controller_dir()) {
        tracing::error!(
            dir = %layout.controller_dir().display(),
            error = %err,
            "cannot create the controller run directory"
        );
        return None;
    }

    match copy_over(&source, &target) {
        Ok(()) => return Some(target),
        Err(err) => {
            tracing::debug!(
                target = %target.display(),
                error = %err,
                "direct copy failed, renaming the target aside"
            );
        }
    }

    // Best effort: a failure to move the old binary aside is logged and
    // ignored, the retry below decides the outcome.
    let saved = target.with_extension("sav");
    if let Err(err) = std::fs::rename(&target, &saved) {
        tracing::debug!(
            target = %target.display(),
            error = %err,
            "cannot rename the locked controller binary"
        );
    }

    match copy_over(&source, &target) {
        Ok(()) => Some(target),
        Err(err) => {
            tracing::error!(
                source = %source.display(),
                target = %target.display(),
                error = %err,
                "controller install failed after rename fallback"
            );
            None
        }
    }
}

fn copy_over(source: &Path, target: &Path) -> std::io::Result<()> {
    std::fs::copy(source, target).map(|_| ())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
