//! `argus status` — controller presence, legacy mode, channel address.

use anyhow::Result;
use serde_json::json;

use crate::app::AppContext;
use crate::application::services::controller::probe::{self, ProbeQuery};
use crate::application::services::legacy::legacy_pull_active;
use crate::domain::channel::effective_channel;

/// Run `argus status`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let packaged = app.layout.packaged_controller();
    let installed = app.layout.controller_path();
    let legacy = legacy_pull_active(&app.layout);
    let address = effective_channel(
        &app.config.system.controller.channel,
        app.modus,
        std::process::id(),
    );
    let controller_status = probe::probe(&app.procs, &installed, ProbeQuery::Status).await;

    if app.json {
        let ctl = &app.config.system.controller;
        let payload = json!({
            "modus": app.modus.as_str(),
            "legacy_pull": legacy,
            "channel": address.to_string(),
            "channel_port": address.port(),
            "controller": {
                "packaged": packaged.exists(),
                "installed": installed.exists(),
                "status": controller_status,
                "settings": {
                    "run": ctl.run,
                    "force_legacy": ctl.force_legacy,
                    "local_only": ctl.local_only,
                    "allow_elevated": ctl.allow_elevated,
                    "check": ctl.check,
                    "on_crash": ctl.on_crash,
                    "detect_proxy": ctl.detect_proxy,
                    "valid_api_cert": ctl.valid_api_cert,
                },
            },
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let ctx = &app.output;
    ctx.header("Argus agent");
    ctx.kv("modus     ", app.modus.as_str());
    ctx.kv("mode      ", if legacy { "legacy pull (ON)" } else { "controller" });
    ctx.kv("channel   ", &address.to_string());
    ctx.kv(
        "packaged  ",
        if packaged.exists() { "present" } else { "missing" },
    );
    ctx.kv(
        "installed ",
        if installed.exists() { "present" } else { "missing" },
    );
    if !controller_status.is_empty() {
        ctx.kv("controller", &controller_status);
    }
    Ok(())
}
