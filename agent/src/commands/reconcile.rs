//! `argus reconcile` — run one artifact reconciliation pass.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::reconcile::{self, ReconcileOutcome};

/// Arguments for the reconcile command.
#[derive(Args)]
pub struct ReconcileArgs {
    /// Path of the installer marker to consume
    #[arg(long)]
    pub marker: Option<PathBuf>,
}

/// Run `argus reconcile`.
///
/// # Errors
///
/// Never fails on reconciliation outcomes; they are informational.
pub fn run(app: &AppContext, args: &ReconcileArgs) -> Result<()> {
    let ctx = &app.output;
    let marker = args
        .marker
        .clone()
        .unwrap_or_else(|| app.layout.marker_path());
    let controller_exists = app.layout.packaged_controller().exists();

    let outcome = reconcile::reconcile(&app.config, &app.layout, &marker, controller_exists);
    match outcome {
        ReconcileOutcome::NoController => ctx.info("No controller binary, nothing to reconcile."),
        ReconcileOutcome::ForcedLegacy => ctx.success("Legacy pull mode forced by configuration."),
        ReconcileOutcome::Decided { created: true } => ctx.success("Legacy pull file created."),
        ReconcileOutcome::Decided { created: false } => {
            ctx.info("Legacy pull file not needed.");
        }
        ReconcileOutcome::AlreadyFlagged => {
            ctx.info("Already reconciled for this install.");
        }
    }
    Ok(())
}
