// Cache path utilities.
// Maps string cache keys onto files inside the cache directory.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::store::TIMESTAMP_KEY;

/// Get the base cache directory (~/.cache/starmap on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "starmap").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the log file written while the dashboard owns the terminal.
pub fn log_path(dir: &Path) -> PathBuf {
    dir.join("starmap.log")
}

/// Path to the file holding the payload for `key`.
pub fn entry_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", sanitize_name(key)))
}

/// Path to the shared freshness timestamp.
pub fn timestamp_path(dir: &Path) -> PathBuf {
    dir.join(sanitize_name(TIMESTAMP_KEY))
}

/// The payload keys used for one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKeys {
    pub identity: String,
    pub repositories: String,
}

impl CacheKeys {
    pub fn for_user(username: &str) -> Self {
        Self {
            identity: format!("github_user_{}", username),
            repositories: format!("github_repos_{}", username),
        }
    }
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '.' => '_',
            _ => c,
        })
        .collect()
}
