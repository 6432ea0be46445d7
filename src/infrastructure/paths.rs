//! Path handling for the Zellij plugin sandbox.
//!
//! The plugin sees the user's home directory as `/host`, so user-supplied
//! paths such as `~/themes/mine.toml` are rewritten before use.

use std::path::PathBuf;

/// Sandbox mount point of the user's home directory.
const HOST_HOME: &str = "/host";

/// Directory holding the trace file: `~/.local/share/zellij/zfolio`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_HOME).join(".local/share/zellij/zfolio")
}

/// Replaces a leading `~` with the sandbox home mount.
///
/// ```
/// use zfolio::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/profile.toml"), "/host/profile.toml");
/// assert_eq!(expand_tilde("/etc/x"), "/etc/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        HOST_HOME.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_HOME}/{rest}")
    } else {
        path.to_string()
    }
}

/// Turns a configured file option into a sandbox path. Blank values yield
/// `None`.
#[must_use]
pub fn resolve_user_file(option: Option<&str>) -> Option<PathBuf> {
    let value = option?.trim();
    if value.is_empty() {
        return None;
    }
    Some(PathBuf::from(expand_tilde(value)))
}
