//! `argus stop` — stop the controller and remove its binary.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::controller::lifecycle::{self, RetryPolicy};

/// Run `argus stop`.
///
/// # Errors
///
/// Never fails on lifecycle outcomes: exhausting the delete-retry budget is
/// reported, not escalated.
pub async fn run(app: &AppContext) -> Result<()> {
    let ctx = &app.output;

    if lifecycle::stop(app.modus, &app.layout, &app.procs, RetryPolicy::default()).await {
        ctx.success("Controller stopped.");
    } else if app.modus.allows_controller() {
        ctx.warn("Controller binary could not be removed.");
    } else {
        ctx.info("Controller is not managed in this modus.");
    }
    Ok(())
}
