//! Path handling for the Zellij plugin sandbox.
//!
//! In Zellij's plugin environment `/host` points to the cwd of the last
//! focused terminal, or the folder Zellij was started from. With Zellij
//! started from a home directory terminal this makes `~` and `/host` the same
//! place, which is what [`expand_tilde`] assumes.

use std::path::PathBuf;

/// File name of the OTLP trace log inside [`get_data_dir`].
const TRACE_FILE: &str = "castlist-otlp.json";

/// Returns the plugin's data directory, `/host/.local/share/zellij/castlist`.
///
/// ```
/// use castlist::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/castlist"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("castlist")
}

/// Location of the trace log written by the observability layer.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE)
}

/// Expands tilde paths onto the `/host` mount.
///
/// Used for the `theme_file` and `catalog_file` plugin options.
///
/// ```
/// use castlist::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/castlist/actors.toml"), "/host/castlist/actors.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/castlist.toml"), "/etc/castlist.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let path = path.trim();
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_lives_in_data_dir() {
        let path = trace_file_path();
        assert_eq!(path.parent(), Some(get_data_dir().as_path()));
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(TRACE_FILE));
    }

    #[test]
    fn tilde_only_expands_at_start() {
        assert_eq!(expand_tilde("  ~/themes/noir.toml "), "/host/themes/noir.toml");
        assert_eq!(expand_tilde("themes/~/noir.toml"), "themes/~/noir.toml");
        assert_eq!(expand_tilde("~user/noir.toml"), "~user/noir.toml");
    }
}
