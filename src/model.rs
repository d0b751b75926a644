// Domain model shared by the resolver and the derivation functions.
// These are the shapes persisted in the cache and handed to the renderer.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StarmapError};

/// Public identity of the profile owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Account login, used for cache keys and the pages-site check.
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_ref: String,
    pub profile_url: String,
    #[serde(default)]
    pub repo_count: u64,
    #[serde(default)]
    pub follower_count: u64,
}

/// A public repository owned by the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub star_count: u64,
    #[serde(default)]
    pub fork_count: u64,
    #[serde(default)]
    pub is_fork: bool,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Repository {
    /// Ranking score: stars count double, forks once.
    pub fn score(&self) -> u64 {
        self.star_count
            .saturating_mul(2)
            .saturating_add(self.fork_count)
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// Aggregated usage of one language across the repository collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub name: String,
    #[serde(alias = "count")]
    pub weight: u64,
    #[serde(alias = "color")]
    pub display_color: String,
}

/// Which tier produced a resolved dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Provenance {
    Live,
    Cached,
    Static,
}

impl Provenance {
    pub fn label(&self) -> &'static str {
        match self {
            Provenance::Live => "live",
            Provenance::Cached => "cached",
            Provenance::Static => "static",
        }
    }

    /// Non-live data is shown with a snapshot indicator.
    pub fn is_snapshot(&self) -> bool {
        !matches!(self, Provenance::Live)
    }
}

/// The handoff artifact between resolution and rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDataset {
    pub identity: Identity,
    pub repositories: Vec<Repository>,
    pub languages: Vec<LanguageStat>,
    pub provenance: Provenance,
}

/// Structural check applied to every tier's output.
pub fn validate_identity(identity: &Identity) -> Result<()> {
    if identity.id.trim().is_empty() {
        return Err(StarmapError::MalformedPayload("identity has empty id".into()));
    }
    if identity.profile_url.trim().is_empty() {
        return Err(StarmapError::MalformedPayload(format!(
            "identity {} has empty profile url",
            identity.id
        )));
    }
    Ok(())
}

/// Repository names must be present and unique within the collection.
pub fn validate_repositories(repositories: &[Repository]) -> Result<()> {
    let mut seen = HashSet::with_capacity(repositories.len());
    for repo in repositories {
        if repo.name.trim().is_empty() {
            return Err(StarmapError::MalformedPayload(
                "repository with empty name".into(),
            ));
        }
        if !seen.insert(repo.name.as_str()) {
            return Err(StarmapError::MalformedPayload(format!(
                "duplicate repository name: {}",
                repo.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{DateTime, Duration, Utc};

    use super::{Identity, Repository};

    pub fn identity(id: &str) -> Identity {
        Identity {
            id: id.to_string(),
            display_name: id.to_string(),
            bio: String::new(),
            avatar_ref: String::new(),
            profile_url: format!("https://github.com/{}", id),
            repo_count: 0,
            follower_count: 0,
        }
    }

    pub fn repo(name: &str, stars: u64, forks: u64, updated_at: DateTime<Utc>) -> Repository {
        Repository {
            name: name.to_string(),
            description: String::new(),
            url: format!("https://github.com/octocat/{}", name),
            language: String::new(),
            star_count: stars,
            fork_count: forks,
            is_fork: false,
            updated_at,
            created_at: updated_at - Duration::days(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{identity, repo};
    use super::*;

    #[test]
    fn test_score_weights_stars_double() {
        let r = repo("a", 5, 3, Utc::now());
        assert_eq!(r.score(), 13);
    }

    #[test]
    fn test_score_saturates() {
        let now = Utc::now();
        assert_eq!(repo("a", 5, 3, now).score(), 13);
        assert_eq!(repo("b", u64::MAX, 0, now).score(), u64::MAX);
        assert_eq!(repo("c", u64::MAX / 2 + 1, 1, now).score(), u64::MAX);
    }

    #[test]
    fn test_validate_identity_rejects_empty_id() {
        let mut id = identity("octocat");
        assert!(validate_identity(&id).is_ok());

        id.id = "  ".to_string();
        assert!(matches!(
            validate_identity(&id),
            Err(StarmapError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_validate_repositories_rejects_duplicates() {
        let now = Utc::now();
        let repos = vec![repo("a", 0, 0, now), repo("a", 1, 0, now)];
        assert!(validate_repositories(&repos).is_err());

        let repos = vec![repo("a", 0, 0, now), repo("b", 1, 0, now)];
        assert!(validate_repositories(&repos).is_ok());
    }

    #[test]
    fn test_provenance_serializes_uppercase() {
        let json = serde_json::to_string(&Provenance::Cached).unwrap();
        assert_eq!(json, "\"CACHED\"");
        assert!(Provenance::Static.is_snapshot());
        assert!(!Provenance::Live.is_snapshot());
    }

    #[test]
    fn test_language_stat_accepts_count_alias() {
        let stat: LanguageStat =
            serde_json::from_str(r##"{"name":"Go","count":3,"color":"#00add8"}"##).unwrap();
        assert_eq!(stat.weight, 3);
        assert_eq!(stat.display_color, "#00add8");
    }
}
