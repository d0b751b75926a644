// Cache store contract and the filesystem implementation.
// Payloads are JSON; one shared timestamp tracks freshness for all keys.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{Result, StarmapError};

use super::paths::{entry_path, timestamp_path};

/// Default TTL for cached profile data: 1 hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Key under which the shared write timestamp is stored.
pub const TIMESTAMP_KEY: &str = "github_cache_ts";

/// Key/value persistence with a single shared freshness timestamp.
///
/// Implementations never surface errors: failed writes are no-ops and failed
/// reads return `None`.
pub trait CacheStore: Send + Sync {
    /// Persist `payload` under `key` and refresh the shared timestamp.
    fn write(&self, key: &str, payload: &Value);

    /// Read the payload under `key`, if present and parseable.
    fn read(&self, key: &str) -> Option<Value>;

    /// When any key was last written.
    fn last_written_at(&self) -> Option<DateTime<Utc>>;

    fn ttl(&self) -> Duration;

    /// Freshness relative to `now`. A missing timestamp is never fresh.
    fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.last_written_at()
            .is_some_and(|written| is_within_ttl(written, now, self.ttl()))
    }

    fn is_fresh(&self) -> bool {
        self.is_fresh_at(Utc::now())
    }
}

/// Whether `now - written` is within `ttl`. Timestamps in the future count as fresh.
pub fn is_within_ttl(written: DateTime<Utc>, now: DateTime<Utc>, ttl: Duration) -> bool {
    match now.signed_duration_since(written).to_std() {
        Ok(elapsed) => elapsed <= ttl,
        Err(_) => true,
    }
}

/// Serialize `data` and write it through `store`.
pub fn write_json<T: Serialize + ?Sized>(store: &dyn CacheStore, key: &str, data: &T) {
    match serde_json::to_value(data) {
        Ok(value) => store.write(key, &value),
        Err(e) => tracing::warn!(key, error = %e, "failed to serialize cache payload"),
    }
}

/// Read `key` from `store` and deserialize it, treating shape mismatches as missing.
pub fn read_json<T: DeserializeOwned>(store: &dyn CacheStore, key: &str) -> Option<T> {
    let value = store.read(key)?;
    match serde_json::from_value(value) {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::debug!(key, error = %e, "cached payload has unexpected shape");
            None
        }
    }
}

/// Cache backed by one JSON file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
    ttl: Duration,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    fn try_write(&self, key: &str, payload: &Value) -> Result<()> {
        let json = serde_json::to_string_pretty(payload)?;
        write_atomic(&entry_path(&self.dir, key), &json)?;

        let millis = Utc::now().timestamp_millis();
        write_atomic(&timestamp_path(&self.dir), &millis.to_string())
    }

    fn try_read(&self, key: &str) -> Result<Option<Value>> {
        let path = entry_path(&self.dir, key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&contents)?;
        Ok(Some(value))
    }

    fn try_last_written_at(&self) -> Result<Option<DateTime<Utc>>> {
        let path = timestamp_path(&self.dir);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let millis: i64 = contents.trim().parse().map_err(|_| {
            StarmapError::CacheUnavailable(format!("corrupt timestamp: {:?}", contents.trim()))
        })?;
        Ok(DateTime::from_timestamp_millis(millis))
    }
}

impl CacheStore for FileCache {
    fn write(&self, key: &str, payload: &Value) {
        if let Err(e) = self.try_write(key, payload) {
            tracing::warn!(key, error = %e, "cache write failed");
        }
    }

    fn read(&self, key: &str) -> Option<Value> {
        match self.try_read(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "cache read failed");
                None
            }
        }
    }

    fn last_written_at(&self) -> Option<DateTime<Utc>> {
        match self.try_last_written_at() {
            Ok(ts) => ts,
            Err(e) => {
                tracing::warn!(error = %e, "cache timestamp unreadable");
                None
            }
        }
    }

    fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Write text to `path` atomically via a temp file.
fn write_atomic(path: &Path, text: &str) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
