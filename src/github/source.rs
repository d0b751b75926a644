// Remote profile source.
// Collapses typed fetch failures into `None` at the boundary the resolver sees.

use async_trait::async_trait;

use crate::config::Config;
use crate::error::Result;
use crate::model::{Identity, Repository, validate_identity, validate_repositories};

use super::client::GitHubClient;

/// The two remote reads the resolver needs.
///
/// Both methods resolve to `None` on any failure; they never error or panic.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_identity(&self) -> Option<Identity>;
    async fn fetch_repositories(&self) -> Option<Vec<Repository>>;
}

/// Profile source backed by the public GitHub API.
#[derive(Debug)]
pub struct GitHubSource {
    client: GitHubClient,
    username: String,
    per_page: u32,
}

impl GitHubSource {
    pub fn new(client: GitHubClient, username: impl Into<String>, per_page: u32) -> Self {
        Self {
            client,
            username: username.into(),
            per_page,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = GitHubClient::new(&config.api_base, config.request_timeout())?;
        Ok(Self::new(client, config.username.clone(), config.per_page))
    }

    pub fn client(&self) -> &GitHubClient {
        &self.client
    }

    /// Fetch and validate the identity, keeping the failure reason.
    pub async fn try_fetch_identity(&self) -> Result<Identity> {
        let user = self.client.get_user(&self.username).await?;
        let identity = Identity::from(user);
        validate_identity(&identity)?;
        Ok(identity)
    }

    /// Fetch and validate the repository collection, keeping the failure reason.
    pub async fn try_fetch_repositories(&self) -> Result<Vec<Repository>> {
        let repos = self
            .client
            .get_user_repos(&self.username, self.per_page)
            .await?;
        let repos: Vec<Repository> = repos.into_iter().map(Repository::from).collect();
        validate_repositories(&repos)?;
        Ok(repos)
    }
}

#[async_trait]
impl ProfileSource for GitHubSource {
    async fn fetch_identity(&self) -> Option<Identity> {
        match self.try_fetch_identity().await {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::warn!(user = %self.username, error = %e, "identity fetch failed");
                None
            }
        }
    }

    async fn fetch_repositories(&self) -> Option<Vec<Repository>> {
        match self.try_fetch_repositories().await {
            Ok(repos) => {
                tracing::debug!(user = %self.username, count = repos.len(), "fetched repositories");
                Some(repos)
            }
            Err(e) => {
                tracing::warn!(user = %self.username, error = %e, "repository fetch failed");
                None
            }
        }
    }
}

/// A source that never answers, used when the live tier is skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineSource;

#[async_trait]
impl ProfileSource for OfflineSource {
    async fn fetch_identity(&self) -> Option<Identity> {
        None
    }

    async fn fetch_repositories(&self) -> Option<Vec<Repository>> {
        None
    }
}
