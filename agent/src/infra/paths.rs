//! Layout discovery — where the agent's directories actually are.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::layout::AgentLayout;

/// Environment override for the installation root.
pub const ROOT_DIR_ENV: &str = "ARGUS_ROOT_DIR";
/// Environment override for the user-scoped state directory.
pub const USER_DIR_ENV: &str = "ARGUS_USER_DIR";

/// Discover the agent layout.
///
/// Both directories can be pinned through environment variables (packaging
/// and tests rely on this). Without overrides, the root is the directory the
/// agent executable runs from and the user dir is `~/.argus`.
///
/// # Errors
///
/// Returns an error if neither an override nor a discoverable default is
/// available for one of the directories.
pub fn discover_layout() -> Result<AgentLayout> {
    let root_dir = match std::env::var_os(ROOT_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_exe()
            .context("cannot locate the agent executable")?
            .parent()
            .context("agent executable has no parent directory")?
            .to_path_buf(),
    };
    let user_dir = match std::env::var_os(USER_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .context("cannot determine home directory")?
            .join(".argus"),
    };
    Ok(AgentLayout::new(root_dir, user_dir))
}
