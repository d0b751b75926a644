// GitHub API response types.
// Wire shapes for the public user and repository endpoints, and their domain conversions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Identity, Repository};

/// Public GitHub user profile (`GET /users/{username}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
}

/// Public repository (`GET /users/{username}/repos`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiRepository {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub fork: bool,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

impl From<ApiUser> for Identity {
    fn from(user: ApiUser) -> Self {
        let display_name = user
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| user.login.clone());

        Identity {
            id: user.login,
            display_name,
            bio: user.bio.map(|b| b.trim().to_string()).unwrap_or_default(),
            avatar_ref: user.avatar_url.unwrap_or_default(),
            profile_url: user.html_url,
            repo_count: user.public_repos,
            follower_count: user.followers,
        }
    }
}

impl From<ApiRepository> for Repository {
    fn from(repo: ApiRepository) -> Self {
        Repository {
            name: repo.name,
            description: repo.description.unwrap_or_default(),
            url: repo.html_url,
            language: repo.language.unwrap_or_default(),
            star_count: repo.stargazers_count,
            fork_count: repo.forks_count,
            is_fork: repo.fork,
            updated_at: repo.updated_at,
            created_at: repo.created_at,
        }
    }
}
