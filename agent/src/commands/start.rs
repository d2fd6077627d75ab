//! `argus start` — install and start the controller.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::controller::lifecycle;

/// Run `argus start`.
///
/// # Errors
///
/// Never fails on lifecycle outcomes: a controller that cannot start is
/// reported, not escalated.
pub fn run(app: &AppContext) -> Result<()> {
    let ctx = &app.output;

    if !app.config.system.controller.run {
        ctx.info("Controller is disabled in configuration.");
        return Ok(());
    }

    match lifecycle::start(app.modus, &app.config, &app.layout, &app.procs, &app.platform) {
        Some(pid) => ctx.success(&format!("Controller started (pid {pid}).")),
        None => ctx.warn("Controller not started."),
    }
    Ok(())
}
