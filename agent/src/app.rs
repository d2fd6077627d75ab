//! Application context — unified state passed to every command handler.
//!
//! Constructed once in `Cli::run()` and passed as `&AppContext` to all
//! command handlers. Adding a cross-cutting concern requires only one field
//! change here — zero command signatures change.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::AgentConfig;
use crate::domain::layout::AgentLayout;
use crate::domain::modus::Modus;
use crate::infra::config::YamlConfigStore;
use crate::infra::paths::discover_layout;
use crate::infra::platform::HostPlatform;
use crate::infra::process::SystemProcesses;
use crate::output::OutputContext;

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Operating context the agent was invoked under.
    pub modus: Modus,
    /// Enable JSON output mode.
    pub json: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Disable ANSI color output.
    pub no_color: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// When `true`, render machine-readable JSON instead of human output.
    pub json: bool,
    /// Operating context of this invocation.
    pub modus: Modus,
    /// Loaded agent configuration.
    pub config: AgentConfig,
    /// Discovered directory layout.
    pub layout: AgentLayout,
    /// Production process control.
    pub procs: SystemProcesses,
    /// Production platform gate.
    pub platform: HostPlatform,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the layout
    /// cannot be discovered.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            json: flags.json,
            modus: flags.modus,
            config: YamlConfigStore.load()?,
            layout: discover_layout()?,
            procs: SystemProcesses::default(),
            platform: HostPlatform,
        })
    }
}
