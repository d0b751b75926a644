// GitHub API endpoint functions.
// Typed reads of a user's public profile and repository listing.

use serde_json::Value;

use crate::error::{Result, StarmapError};

use super::client::GitHubClient;
use super::types::{ApiRepository, ApiUser};

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_user(&self, username: &str) -> Result<ApiUser> {
        let value = self.get_json(&format!("/users/{}", username), &[]).await?;
        if !value.is_object() {
            return Err(StarmapError::MalformedPayload(format!(
                "user {} payload is not an object",
                username
            )));
        }
        serde_json::from_value(value)
            .map_err(|e| StarmapError::MalformedPayload(format!("user {}: {}", username, e)))
    }

    /// Get a user's public repositories, most recently updated first.
    pub async fn get_user_repos(&self, username: &str, per_page: u32) -> Result<Vec<ApiRepository>> {
        let params = [
            ("per_page", per_page.to_string()),
            ("sort", "updated".to_string()),
        ];
        let value = self
            .get_json(&format!("/users/{}/repos", username), &params)
            .await?;
        parse_repo_list(value)
    }
}

/// A listing is all-or-nothing: any non-array or bad element rejects the whole payload.
fn parse_repo_list(value: Value) -> Result<Vec<ApiRepository>> {
    if !value.is_array() {
        return Err(StarmapError::MalformedPayload(
            "repository payload is not an array".into(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|e| StarmapError::MalformedPayload(format!("repository list: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repo_json(name: &str) -> Value {
        json!({
            "name": name,
            "description": null,
            "html_url": format!("https://github.com/octocat/{}", name),
            "language": "Rust",
            "stargazers_count": 1,
            "forks_count": 0,
            "fork": false,
            "updated_at": "2025-10-10T14:00:00Z",
            "created_at": "2024-02-01T00:00:00Z"
        })
    }

    #[test]
    fn test_parse_repo_list() {
        let repos = parse_repo_list(json!([repo_json("a"), repo_json("b")])).unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[1].name, "b");
    }

    #[test]
    fn test_object_payload_is_malformed() {
        let err = parse_repo_list(json!({"message": "API rate limit exceeded"})).unwrap_err();
        assert!(matches!(err, StarmapError::MalformedPayload(_)));
    }

    #[test]
    fn test_one_bad_element_rejects_list() {
        let err = parse_repo_list(json!([repo_json("a"), {"name": "b"}])).unwrap_err();
        assert!(matches!(err, StarmapError::MalformedPayload(_)));
    }
}
