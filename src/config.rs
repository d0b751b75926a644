// Configuration for starmap.
// Loaded from TOML, with CLI overrides applied on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StarmapError};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_USERNAME: &str = "Deepankar-Siddharth";

/// Upper bound for `display.recency_window_days`, about a century.
pub const MAX_RECENCY_WINDOW_DAYS: i64 = 36_500;

/// How the resolver treats cached data when the live tier fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheAcceptance {
    /// Any structurally valid cache entry is used, however old.
    #[default]
    Valid,
    /// Cache entries must also be within the TTL.
    Fresh,
}

/// Limits and conventions for the derived presentation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum number of selected projects.
    pub project_cap: usize,
    /// Maximum number of activity entries.
    pub timeline_cap: usize,
    /// Repositories updated within this many days count as active.
    pub recency_window_days: i64,
    /// Suffix identifying the profile's pages-site repository.
    pub pages_suffix: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            project_cap: 12,
            timeline_cap: 6,
            recency_window_days: 180,
            pages_suffix: ".github.io".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub username: String,
    pub api_base: String,
    /// Page size for the repository listing.
    pub per_page: u32,
    pub request_timeout_secs: u64,
    pub cache_ttl_secs: u64,
    /// Overrides the platform cache directory.
    pub cache_dir: Option<PathBuf>,
    pub cache_acceptance: CacheAcceptance,
    /// JSON file replacing the built-in static dataset.
    pub fallback_file: Option<PathBuf>,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            per_page: 100,
            request_timeout_secs: 12,
            cache_ttl_secs: 60 * 60,
            cache_dir: None,
            cache_acceptance: CacheAcceptance::default(),
            fallback_file: None,
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return Ok(Config::default()),
            },
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let config: Config =
            toml::from_str(&contents).map_err(|e| StarmapError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !is_valid_username(&self.username) {
            return Err(StarmapError::Config(format!(
                "invalid username: {:?}",
                self.username
            )));
        }
        if self.api_base.trim().is_empty() {
            return Err(StarmapError::Config("api_base must not be empty".into()));
        }
        if self.per_page == 0 || self.per_page > 100 {
            return Err(StarmapError::Config(
                "per_page must be between 1 and 100".into(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(StarmapError::Config(
                "request_timeout_secs must be positive".into(),
            ));
        }
        if self.display.project_cap == 0 || self.display.timeline_cap == 0 {
            return Err(StarmapError::Config("display caps must be positive".into()));
        }
        if !(1..=MAX_RECENCY_WINDOW_DAYS).contains(&self.display.recency_window_days) {
            return Err(StarmapError::Config(format!(
                "recency_window_days must be between 1 and {}",
                MAX_RECENCY_WINDOW_DAYS
            )));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Cache directory: the configured one, else the platform default.
    pub fn resolved_cache_dir(&self) -> Option<PathBuf> {
        self.cache_dir.clone().or_else(crate::cache::cache_dir)
    }
}

/// Path to `config.toml` in the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "starmap").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// GitHub logins are alphanumeric with single inner hyphens, at most 39 chars.
fn is_valid_username(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 39
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
