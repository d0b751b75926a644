// Error types for starmap.
// Covers remote reads, cache access, configuration, and general failures.

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarmapError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Remote source unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StarmapError {
    /// Whether this error means the remote could not be reached or answered
    /// with a non-success status, as opposed to answering with a bad shape.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StarmapError::Api(_) | StarmapError::RemoteUnavailable(_) | StarmapError::Timeout(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StarmapError>;
