//! Path arithmetic for the agent's on-disk footprint.
//!
//! A layout is the pair (root dir, user dir) every other path derives from.
//! Discovery of the two directories lives in `infra::paths`; this type only
//! joins path segments.

use std::path::{Path, PathBuf};

/// File name of the controller executable.
#[cfg(windows)]
pub const CONTROLLER_EXE: &str = "argus-controllerd.exe";
/// File name of the controller executable.
#[cfg(not(windows))]
pub const CONTROLLER_EXE: &str = "argus-controllerd";

/// Marker left behind by the installer/uninstaller.
pub const MARKER_FILE: &str = "uninstall.marker";
/// Per-install idempotence guard for legacy-file creation.
pub const FLAG_FILE: &str = "controller-flag";
/// Existence of this file switches the agent into legacy pull mode.
pub const LEGACY_PULL_FILE: &str = "allow-legacy-pull";
/// Generated side configuration consumed by the controller.
pub const SIDE_CONFIG_FILE: &str = "controller.toml";

/// The agent's directory layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentLayout {
    root_dir: PathBuf,
    user_dir: PathBuf,
}

impl AgentLayout {
    #[must_use]
    pub fn new(root_dir: PathBuf, user_dir: PathBuf) -> Self {
        Self { root_dir, user_dir }
    }

    /// Installation root holding the packaged binaries.
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// User-scoped state directory holding the marker/flag/legacy files.
    #[must_use]
    pub fn user_dir(&self) -> &Path {
        &self.user_dir
    }

    /// Controller binary as shipped inside the agent package.
    #[must_use]
    pub fn packaged_controller(&self) -> PathBuf {
        self.root_dir.join("pkg").join(CONTROLLER_EXE)
    }

    /// Directory the controller runs from; also the root for the
    /// directory-scoped process kill.
    #[must_use]
    pub fn controller_dir(&self) -> PathBuf {
        self.root_dir.join("controller")
    }

    /// Controller binary at its run location.
    #[must_use]
    pub fn controller_path(&self) -> PathBuf {
        self.controller_dir().join(CONTROLLER_EXE)
    }

    /// Generated side configuration next to the run-location binary.
    #[must_use]
    pub fn side_config_path(&self) -> PathBuf {
        self.controller_dir().join(SIDE_CONFIG_FILE)
    }

    /// Default location of the installer marker.
    #[must_use]
    pub fn marker_path(&self) -> PathBuf {
        self.user_dir.join(MARKER_FILE)
    }

    /// The per-install idempotence guard.
    #[must_use]
    pub fn flag_file(&self) -> PathBuf {
        self.user_dir.join(FLAG_FILE)
    }

    /// The legacy pull mode switch.
    #[must_use]
    pub fn legacy_pull_file(&self) -> PathBuf {
        self.user_dir.join(LEGACY_PULL_FILE)
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
