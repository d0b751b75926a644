// Cache module for profile data persistence.
// Stores resolved identity and repositories for fallback when GitHub is unreachable.

pub mod memory;
pub mod paths;
pub mod store;

pub use memory::MemoryCache;
pub use paths::{CacheKeys, cache_dir, log_path};
pub use store::{CacheStore, DEFAULT_TTL, FileCache, TIMESTAMP_KEY, read_json, write_json};
