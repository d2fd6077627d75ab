//! Agent operating modes and the policies keyed off them.

use clap::ValueEnum;

/// The context the agent process was invoked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Modus {
    /// Running under the host service manager (production).
    Service,
    /// Running inside an integration-test harness.
    Integration,
    /// Running interactively as a console application.
    App,
}

impl Modus {
    /// Whether this modus may manage the controller at all.
    ///
    /// Interactive invocations never touch the controller; only the service
    /// and the integration harness do.
    #[must_use]
    pub fn allows_controller(self) -> bool {
        matches!(self, Modus::Service | Modus::Integration)
    }

    /// Whether the agent channel is pinned to the fixed internal port
    /// instead of whatever the configuration says.
    #[must_use]
    pub fn uses_internal_port(self) -> bool {
        matches!(self, Modus::App | Modus::Integration)
    }

    /// Short lowercase name used in mailslot stems and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Modus::Service => "service",
            Modus::Integration => "integration",
            Modus::App => "app",
        }
    }
}

impl std::fmt::Display for Modus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
