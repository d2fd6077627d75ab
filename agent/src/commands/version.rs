//! `argus version` — agent and controller versions.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::controller::probe::{self, ProbeQuery};

/// Run `argus version`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let agent_version = env!("CARGO_PKG_VERSION");
    let controller_version =
        probe::probe(&app.procs, &app.layout.controller_path(), ProbeQuery::Version).await;

    if app.json {
        let payload = serde_json::json!({
            "version": agent_version,
            "controller_version": controller_version,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("argus {agent_version}");
    if !controller_version.is_empty() {
        println!("controller {controller_version}");
    }
    Ok(())
}
