//! Host-platform gate for controller start.

use sysinfo::System;

use crate::application::ports::PlatformGate;

/// Oldest Windows major version the controller runs on.
#[cfg(windows)]
const MIN_WINDOWS_MAJOR: u64 = 7;

/// Production `PlatformGate` backed by the running host's OS version.
pub struct HostPlatform;

impl PlatformGate for HostPlatform {
    /// The controller ships for every supported platform except old Windows
    /// releases; elsewhere the gate always passes.
    fn supports_controller(&self) -> bool {
        #[cfg(windows)]
        {
            // os_version looks like "10 (19045)"; an unparsable version is
            // treated as too old.
            System::os_version()
                .as_deref()
                .and_then(|v| v.split(&[' ', '.'][..]).next())
                .and_then(|major| major.parse::<u64>().ok())
                .is_some_and(|major| major >= MIN_WINDOWS_MAJOR)
        }
        #[cfg(not(windows))]
        {
            true
        }
    }

    fn describe(&self) -> String {
        format!(
            "{} {}",
            System::name().unwrap_or_else(|| "unknown".to_string()),
            System::os_version().unwrap_or_else(|| "?".to_string())
        )
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
