//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "autocomplete";
const APPLICATION: &str = "autocomplete";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "AUTOCOMPLETE_CONFIG";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/autocomplete` or `~/.cache/autocomplete`
/// - macOS: `~/Library/Caches/dev.autocomplete.autocomplete`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/autocomplete` or `~/.config/autocomplete`
/// - macOS: `~/Library/Application Support/dev.autocomplete.autocomplete`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// The config file: `$AUTOCOMPLETE_CONFIG` if set, else `config.toml` in
/// the config directory.
pub fn config_file() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => Some(PathBuf::from(path)),
        None => config_dir().map(|dir| dir.join("config.toml")),
    }
}

/// Get the path to the log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}
