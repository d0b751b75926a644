// starmap: GitHub profile resolution with live, cached, and static tiers,
// plus the pure derivations that turn a resolved profile into presentation data.

pub mod cache;
pub mod config;
pub mod derive;
pub mod error;
pub mod fallback;
pub mod github;
pub mod model;
pub mod resolver;

pub use config::{CacheAcceptance, Config, DisplayConfig};
pub use error::{Result, StarmapError};
pub use model::{Identity, LanguageStat, Provenance, Repository, ResolvedDataset};
pub use resolver::{ResolveContext, Resolver};
