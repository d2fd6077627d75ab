//! Generated side configuration consumed by the controller.
//!
//! Write-only plain text: the controller parses it, this agent never reads
//! it back. Kept as string rendering so the exact output stays testable.

use anyhow::{Context, Result};

use crate::domain::config::AgentConfig;
use crate::domain::layout::AgentLayout;

/// Render the side configuration text for the given agent configuration.
#[must_use]
pub fn render(cfg: &AgentConfig) -> String {
    let mut out = String::new();
    out.push_str("# Generated by argus-agent. Do not edit.\n");
    out.push_str("# The agent rewrites this file on every controller start.\n\n");
    out.push_str(&format!("pull_port = {}\n", cfg.global.port));
    if !cfg.global.only_from.is_empty() {
        let ips: Vec<String> = cfg
            .global
            .only_from
            .iter()
            .map(|ip| format!("\"{ip}\""))
            .collect();
        out.push_str(&format!("allowed_ip = [{}]\n", ips.join(",")));
    }
    out.push_str(&format!(
        "detect_proxy = {}\n",
        cfg.system.controller.detect_proxy
    ));
    out.push_str(&format!(
        "validate_api_cert = {}\n",
        cfg.system.controller.valid_api_cert
    ));
    out
}

/// Write the side configuration next to the run-location binary.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn write(layout: &AgentLayout, cfg: &AgentConfig) -> Result<()> {
    let path = layout.side_config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    std::fs::write(&path, render(cfg)).with_context(|| format!("cannot write {}", path.display()))
}

/// Remove the side configuration; idempotent, failures ignored.
pub fn remove(layout: &AgentLayout) {
    let _ = std::fs::remove_file(layout.side_config_path());
}

// ── Unit tests ───────────────────────────────────────────────────────────────
