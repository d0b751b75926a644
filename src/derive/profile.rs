// Profile summary for the hero section.

use serde::Serialize;

use crate::model::{Identity, Repository};

pub const DEFAULT_DISPLAY_NAME: &str = "Developer";
pub const DEFAULT_BIO: &str = "Building, learning, shipping.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub display_name: String,
    pub bio: String,
    pub avatar_ref: String,
    pub profile_url: String,
    pub repo_count: u64,
    pub follower_count: u64,
    /// Stars summed over every repository, forks included.
    pub total_stars: u64,
}

pub fn profile_summary(identity: &Identity, repositories: &[Repository]) -> ProfileSummary {
    let display_name = [identity.display_name.trim(), identity.id.trim()]
        .into_iter()
        .find(|n| !n.is_empty())
        .unwrap_or(DEFAULT_DISPLAY_NAME)
        .to_string();

    let bio = match identity.bio.trim() {
        "" => DEFAULT_BIO.to_string(),
        bio => bio.to_string(),
    };

    ProfileSummary {
        display_name,
        bio,
        avatar_ref: identity.avatar_ref.clone(),
        profile_url: identity.profile_url.clone(),
        repo_count: identity.repo_count,
        follower_count: identity.follower_count,
        total_stars: repositories
            .iter()
            .map(|r| r.star_count)
            .fold(0, u64::saturating_add),
    }
}
