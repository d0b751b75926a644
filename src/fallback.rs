// Static fallback dataset.
// Used when neither GitHub nor the cache can supply a valid profile.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::derive::aggregate_languages;
use crate::error::{Result, StarmapError};
use crate::model::{
    Identity, LanguageStat, Provenance, Repository, ResolvedDataset, validate_identity,
    validate_repositories,
};

/// Version of the fallback dataset format.
pub const FALLBACK_VERSION: u32 = 1;

const PROFILE_URL: &str = "https://github.com/Deepankar-Siddharth";

fn default_version() -> u32 {
    FALLBACK_VERSION
}

/// A complete offline dataset, optionally with pre-aggregated languages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackData {
    #[serde(default = "default_version")]
    pub version: u32,
    pub identity: Identity,
    pub repositories: Vec<Repository>,
    /// Takes precedence over aggregation when non-empty.
    #[serde(default)]
    pub languages: Vec<LanguageStat>,
}

impl FallbackData {
    /// Load a user-supplied dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let data: FallbackData = serde_json::from_str(&contents)?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != FALLBACK_VERSION {
            return Err(StarmapError::MalformedPayload(format!(
                "unsupported fallback version {}",
                self.version
            )));
        }
        validate_identity(&self.identity)?;
        validate_repositories(&self.repositories)?;
        if self.languages.iter().any(|l| l.name.trim().is_empty()) {
            return Err(StarmapError::MalformedPayload(
                "language with empty name".into(),
            ));
        }
        Ok(())
    }

    /// Whether this dataset describes `username`. GitHub logins are case-insensitive.
    pub fn is_for(&self, username: &str) -> bool {
        self.identity.id.eq_ignore_ascii_case(username)
    }

    /// Convert into a STATIC dataset, aggregating languages only if none were supplied.
    pub fn into_resolved(self) -> ResolvedDataset {
        let languages = if self.languages.is_empty() {
            aggregate_languages(&self.repositories)
        } else {
            let mut languages = self.languages;
            languages.sort_by(|a, b| b.weight.cmp(&a.weight));
            languages
        };

        ResolvedDataset {
            identity: self.identity,
            repositories: self.repositories,
            languages,
            provenance: Provenance::Static,
        }
    }
}

/// The fallback for this run: the configured file if it loads, else the built-in data.
pub fn fallback_dataset(path: Option<&Path>) -> FallbackData {
    if let Some(path) = path {
        match FallbackData::load(path) {
            Ok(data) => return data,
            Err(e) => tracing::warn!(
                path = %path.display(),
                error = %e,
                "fallback file unusable, using built-in dataset"
            ),
        }
    }
    builtin_dataset()
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn repo(
    name: &str,
    description: &str,
    language: &str,
    stars: u64,
    forks: u64,
    updated_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
) -> Repository {
    Repository {
        name: name.to_string(),
        description: description.to_string(),
        url: format!("{}/{}", PROFILE_URL, name),
        language: language.to_string(),
        star_count: stars,
        fork_count: forks,
        is_fork: false,
        updated_at,
        created_at,
    }
}

fn language(name: &str, weight: u64, color: &str) -> LanguageStat {
    LanguageStat {
        name: name.to_string(),
        weight,
        display_color: color.to_string(),
    }
}

/// The canonical built-in dataset.
pub fn builtin_dataset() -> FallbackData {
    let identity = Identity {
        id: "Deepankar-Siddharth".to_string(),
        display_name: "Deepankar Siddharth".to_string(),
        bio: "Building things that matter. Developer exploring automation, bots, and web \
              applications. Learning in public, shipping often."
            .to_string(),
        avatar_ref: format!("{}.png", PROFILE_URL),
        profile_url: PROFILE_URL.to_string(),
        repo_count: 10,
        follower_count: 5,
    };

    let repositories = vec![
        repo(
            "portfolio",
            "Personal developer portfolio — cinematic GitHub-powered experience.",
            "JavaScript",
            3,
            1,
            at(2026, 1, 10, 0),
            at(2024, 1, 1, 0),
        ),
        repo(
            "automation-scripts",
            "Collection of automation scripts and bots for everyday tasks.",
            "Python",
            5,
            2,
            at(2025, 12, 15, 10),
            at(2024, 6, 1, 0),
        ),
        repo(
            "web-components",
            "Reusable web components library with modern CSS.",
            "TypeScript",
            2,
            0,
            at(2025, 11, 20, 8),
            at(2024, 3, 1, 0),
        ),
        repo(
            "cli-tools",
            "Command-line utilities for developers.",
            "Go",
            1,
            0,
            at(2025, 10, 10, 14),
            at(2024, 2, 1, 0),
        ),
        repo(
            "learning-notes",
            "Documentation and notes from learning various technologies.",
            "Markdown",
            0,
            0,
            at(2025, 9, 5, 9),
            at(2023, 6, 1, 0),
        ),
        repo(
            "api-starter",
            "Minimal REST API starter template with best practices.",
            "JavaScript",
            4,
            1,
            at(2025, 8, 20, 16),
            at(2024, 1, 15, 0),
        ),
    ];

    let languages = vec![
        language("JavaScript", 4, "#f7df1e"),
        language("HTML", 3, "#e34c26"),
        language("CSS", 3, "#563d7c"),
        language("Python", 2, "#3776ab"),
        language("TypeScript", 2, "#3178c6"),
        language("Go", 1, "#00add8"),
    ];

    FallbackData {
        version: FALLBACK_VERSION,
        identity,
        repositories,
        languages,
    }
}
