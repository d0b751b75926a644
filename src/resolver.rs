// Data resolver.
// Chooses between live, cached, and static profile data and tags the winner.

use std::sync::Arc;

use crate::cache::{CacheKeys, CacheStore, read_json, write_json};
use crate::config::{CacheAcceptance, Config};
use crate::derive::aggregate_languages;
use crate::fallback::{FallbackData, fallback_dataset};
use crate::github::ProfileSource;
use crate::model::{
    Identity, Provenance, Repository, ResolvedDataset, validate_identity, validate_repositories,
};

/// Settings the resolver needs beyond its two collaborators.
#[derive(Debug, Clone)]
pub struct ResolveContext {
    pub keys: CacheKeys,
    pub acceptance: CacheAcceptance,
    pub fallback: FallbackData,
}

impl ResolveContext {
    pub fn from_config(config: &Config) -> Self {
        let fallback = fallback_dataset(config.fallback_file.as_deref());
        if !fallback.is_for(&config.username) {
            tracing::warn!(
                user = %config.username,
                fallback_user = %fallback.identity.id,
                "static fallback describes a different user; set fallback_file to match"
            );
        }
        Self {
            keys: CacheKeys::for_user(&config.username),
            acceptance: config.cache_acceptance,
            fallback,
        }
    }
}

/// Resolution progress. The three tiers are tried in order until one yields data.
#[derive(Debug)]
enum ResolveState {
    AttemptLive,
    AttemptCache,
    Resolved(ResolvedDataset),
}

pub struct Resolver {
    source: Arc<dyn ProfileSource>,
    cache: Arc<dyn CacheStore>,
    context: ResolveContext,
}

impl Resolver {
    pub fn new(
        source: Arc<dyn ProfileSource>,
        cache: Arc<dyn CacheStore>,
        context: ResolveContext,
    ) -> Self {
        Self {
            source,
            cache,
            context,
        }
    }

    pub fn cache(&self) -> &dyn CacheStore {
        &*self.cache
    }

    /// Resolve the profile. Always returns a dataset; failures only change its provenance.
    pub async fn resolve(&self) -> ResolvedDataset {
        let mut state = ResolveState::AttemptLive;
        loop {
            state = match state {
                ResolveState::AttemptLive => match self.attempt_live().await {
                    Some(dataset) => ResolveState::Resolved(dataset),
                    None => ResolveState::AttemptCache,
                },
                ResolveState::AttemptCache => match self.attempt_cache() {
                    Some(dataset) => ResolveState::Resolved(dataset),
                    None => ResolveState::Resolved(self.static_dataset()),
                },
                ResolveState::Resolved(dataset) => {
                    tracing::info!(
                        user = %dataset.identity.id,
                        provenance = dataset.provenance.label(),
                        repositories = dataset.repositories.len(),
                        "profile resolved"
                    );
                    return dataset;
                }
            };
        }
    }

    async fn attempt_live(&self) -> Option<ResolvedDataset> {
        let (identity, repositories) = tokio::join!(
            self.source.fetch_identity(),
            self.source.fetch_repositories()
        );

        let (identity, repositories) = match (identity, repositories) {
            (Some(identity), Some(repositories)) => (identity, repositories),
            (identity, repositories) => {
                tracing::debug!(
                    identity = identity.is_some(),
                    repositories = repositories.is_some(),
                    "live tier incomplete, trying cache"
                );
                return None;
            }
        };

        write_json(self.cache(), &self.context.keys.identity, &identity);
        write_json(self.cache(), &self.context.keys.repositories, &repositories);

        Some(dataset(identity, repositories, Provenance::Live))
    }

    fn attempt_cache(&self) -> Option<ResolvedDataset> {
        if self.context.acceptance == CacheAcceptance::Fresh && !self.cache.is_fresh() {
            tracing::debug!("cache stale under fresh-only policy, using static data");
            return None;
        }

        let identity: Identity = read_json(self.cache(), &self.context.keys.identity)?;
        let repositories: Vec<Repository> =
            read_json(self.cache(), &self.context.keys.repositories)?;

        let valid = validate_identity(&identity).and_then(|_| validate_repositories(&repositories));
        if let Err(e) = valid {
            tracing::warn!(error = %e, "cached profile failed validation");
            return None;
        }

        Some(dataset(identity, repositories, Provenance::Cached))
    }

    fn static_dataset(&self) -> ResolvedDataset {
        tracing::debug!(version = self.context.fallback.version, "using static fallback");
        self.context.fallback.clone().into_resolved()
    }
}

/// Languages are always recomputed for live and cached data.
fn dataset(
    identity: Identity,
    repositories: Vec<Repository>,
    provenance: Provenance,
) -> ResolvedDataset {
    ResolvedDataset {
        languages: aggregate_languages(&repositories),
        identity,
        repositories,
        provenance,
    }
}
