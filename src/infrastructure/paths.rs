//! Path resolution for the data directory and user-supplied paths.

use std::path::PathBuf;

/// Directory name used under the platform data directory.
const APP_DIR_NAME: &str = "sidebar-explorer";

/// Returns the default data directory.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/sidebar-explorer`
/// 2. `$HOME/.local/share/sidebar-explorer`
/// 3. `./sidebar-explorer` when neither variable is set
#[must_use]
pub fn default_data_dir() -> PathBuf {
    data_dir_from(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn data_dir_from(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    xdg_data_home
        .filter(|path| path.is_absolute())
        .or_else(|| home.map(|home| home.join(".local").join("share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and tilde paths when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use sidebar_explorer::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, std::env::var_os("HOME").map(PathBuf::from))
}

fn expand_tilde_with(path: &str, home: Option<PathBuf>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}
