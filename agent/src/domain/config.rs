//! Configuration model for the agent.
//!
//! Pure serde types with defaults — no I/O here. Loading lives behind the
//! `ConfigStore` port; this core only ever reads the loaded values.

use serde::{Deserialize, Serialize};

// ── Defaults ─────────────────────────────────────────────────────────────────

/// Default port the legacy pull listener binds and the controller forwards to.
pub const DEFAULT_PULL_PORT: u16 = 6776;

fn default_pull_port() -> u16 {
    DEFAULT_PULL_PORT
}

fn default_true() -> bool {
    true
}

fn default_channel() -> String {
    crate::domain::channel::MAILSLOT_SENTINEL.to_string()
}

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level agent configuration, stored in `~/.argus/argus.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AgentConfig {
    /// Settings shared by every delivery mode.
    pub global: GlobalConfig,
    /// Host-system integration settings.
    pub system: SystemConfig,
}

/// Settings shared by every delivery mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Port the pull listener answers on; forwarded into the controller's
    /// side configuration.
    #[serde(default = "default_pull_port")]
    pub port: u16,
    /// Source addresses allowed to pull; empty means no restriction.
    pub only_from: Vec<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            port: default_pull_port(),
            only_from: Vec::new(),
        }
    }
}

/// Host-system integration settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SystemConfig {
    /// Controller subsection.
    pub controller: ControllerConfig,
}

/// Controller settings consumed by this core and surfaced by `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Master switch for running the controller at all.
    #[serde(default = "default_true")]
    pub run: bool,
    /// Raw channel value: the `mailslot` sentinel or `host:port`.
    #[serde(default = "default_channel")]
    pub channel: String,
    /// Force legacy pull mode on every reconciliation, bypassing the
    /// marker-file decision engine.
    pub force_legacy: bool,
    /// Restrict the controller to loopback connections.
    #[serde(default = "default_true")]
    pub local_only: bool,
    /// Allow the controller to run elevated commands.
    pub allow_elevated: bool,
    /// Whether the controller self-checks its installation on start.
    #[serde(default = "default_true")]
    pub check: bool,
    /// What the agent does when the controller crashes.
    pub on_crash: CrashAction,
    /// Forwarded into the side configuration: probe for an HTTP proxy.
    pub detect_proxy: bool,
    /// Forwarded into the side configuration: validate the API certificate.
    #[serde(default = "default_true")]
    pub valid_api_cert: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            run: true,
            channel: default_channel(),
            force_legacy: false,
            local_only: true,
            allow_elevated: false,
            check: true,
            on_crash: CrashAction::default(),
            detect_proxy: false,
            valid_api_cert: true,
        }
    }
}

/// Reaction to a controller crash, recorded for the surrounding agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CrashAction {
    /// Log and carry on; the next cycle restarts the controller.
    #[default]
    Ignore,
    /// Switch to emergency legacy delivery until an operator intervenes.
    Emergency,
}

// ── Unit tests ───────────────────────────────────────────────────────────────
