//! Filesystem locations used by the client.
//!
//! Locations follow the XDG base directory convention: configuration lives in
//! `$XDG_CONFIG_HOME/nutrisearch` (falling back to `~/.config/nutrisearch`).
//! The pure `*_from` variants take the environment as arguments so they can be
//! tested without touching process state.

use std::env;
use std::path::{Path, PathBuf};

/// Directory name under the platform config root.
pub const APP_DIR: &str = "nutrisearch";

/// Configuration file looked up when no `--config` argument is given.
pub const CONFIG_FILE: &str = "config.toml";

/// Returns the user's home directory from `$HOME`.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME").filter(|h| !h.is_empty()).map(PathBuf::from)
}

/// Expands a leading `~` to the user's home directory.
///
/// # Examples
///
/// ```
/// use nutrisearch::infrastructure::paths::expand_tilde_from;
/// use std::path::{Path, PathBuf};
///
/// let home = Some(Path::new("/home/ana"));
/// assert_eq!(expand_tilde_from("~/photos/a.jpg", home), PathBuf::from("/home/ana/photos/a.jpg"));
/// assert_eq!(expand_tilde_from("/tmp/a.jpg", home), PathBuf::from("/tmp/a.jpg"));
/// ```
#[must_use]
pub fn expand_tilde_from(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// [`expand_tilde_from`] using the process environment.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_from(path, home_dir().as_deref())
}

/// Resolves the configuration directory from the given environment values.
#[must_use]
pub fn config_dir_from(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|p| p.is_absolute())
        .map(Path::to_path_buf)
        .or_else(|| home.map(|h| h.join(".config")))
        .map(|root| root.join(APP_DIR))
}

/// Returns the configuration directory for the current user.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    let xdg = env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    config_dir_from(xdg.as_deref(), home_dir().as_deref())
}

/// Returns the default configuration file path, whether or not it exists.
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_without_home_is_left_alone() {
        assert_eq!(expand_tilde_from("~/a", None), PathBuf::from("~/a"));
        assert_eq!(expand_tilde_from("~", Some(Path::new("/h"))), PathBuf::from("/h"));
        assert_eq!(expand_tilde_from("~other/a", Some(Path::new("/h"))), PathBuf::from("~other/a"));
    }

    #[test]
    fn config_dir_prefers_absolute_xdg_home() {
        let home = Some(Path::new("/home/ana"));
        assert_eq!(
            config_dir_from(Some(Path::new("/xdg")), home),
            Some(PathBuf::from("/xdg/nutrisearch"))
        );
        assert_eq!(
            config_dir_from(Some(Path::new("relative")), home),
            Some(PathBuf::from("/home/ana/.config/nutrisearch"))
        );
        assert_eq!(config_dir_from(None, None), None);
    }
}
