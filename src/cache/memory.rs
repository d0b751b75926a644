// In-memory cache store.
// Same contract as the filesystem cache, used for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::store::{CacheStore, DEFAULT_TTL};

#[derive(Debug, Default)]
struct Inner {
    /// Serialized payloads, so reads exercise the same parse path as disk.
    entries: HashMap<String, String>,
    written_at: Option<DateTime<Utc>>,
}

/// Cache held in process memory behind a mutex.
#[derive(Debug)]
pub struct MemoryCache {
    inner: Mutex<Inner>,
    ttl: Duration,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            ttl,
        }
    }

    /// Store raw text under `key` without touching the timestamp.
    pub fn insert_raw(&self, key: &str, raw: impl Into<String>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.entries.insert(key.to_string(), raw.into());
        }
    }

    /// Override the shared write timestamp.
    pub fn set_written_at(&self, written_at: Option<DateTime<Utc>>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.written_at = written_at;
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryCache {
    fn write(&self, key: &str, payload: &Value) {
        let raw = match serde_json::to_string(payload) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "cache write failed");
                return;
            }
        };
        match self.inner.lock() {
            Ok(mut inner) => {
                inner.entries.insert(key.to_string(), raw);
                inner.written_at = Some(Utc::now());
            }
            Err(_) => tracing::warn!(key, "cache lock poisoned, write dropped"),
        }
    }

    fn read(&self, key: &str) -> Option<Value> {
        let inner = self.inner.lock().ok()?;
        let raw = inner.entries.get(key)?;
        serde_json::from_str(raw).ok()
    }

    fn last_written_at(&self) -> Option<DateTime<Utc>> {
        self.inner.lock().ok()?.written_at
    }

    fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_then_read_round_trips() {
        let cache = MemoryCache::default();
        let payload = json!({"login": "octocat", "followers": 3});

        cache.write("user", &payload);

        assert_eq!(cache.read("user"), Some(payload));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_missing_timestamp_is_not_fresh() {
        let cache = MemoryCache::default();
        cache.insert_raw("user", "{}");

        assert!(cache.read("user").is_some());
        assert!(!cache.is_fresh());
    }

    #[test]
    fn test_corrupt_entry_reads_as_none() {
        let cache = MemoryCache::default();
        cache.insert_raw("user", "{\"login\":");

        assert!(cache.read("user").is_none());
    }

    #[test]
    fn test_ttl_boundary_around_write() {
        let cache = MemoryCache::default();
        cache.write("user", &json!({}));

        let t0 = cache.last_written_at().unwrap();
        let ttl = chrono::Duration::from_std(DEFAULT_TTL).unwrap();
        let second = chrono::Duration::seconds(1);

        assert!(cache.is_fresh_at(t0 + ttl - second));
        assert!(!cache.is_fresh_at(t0 + ttl + second));
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let cache = MemoryCache::default();
        cache.write("repos", &json!([1]));
        cache.write("repos", &json!([1, 2]));

        assert_eq!(cache.read("repos"), Some(json!([1, 2])));
        assert_eq!(cache.len(), 1);
    }
}
