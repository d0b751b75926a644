// GitHub API HTTP client.
// Handles bounded-time requests, rate limit tracking, and response status checks.

use std::sync::Mutex;
use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde_json::Value;

use crate::error::{Result, StarmapError};

use super::types::RateLimit;

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Unauthenticated client for the public GitHub REST API.
#[derive(Debug)]
pub struct GitHubClient {
    client: Client,
    api_base: String,
    timeout: Duration,
    rate_limit: Mutex<RateLimit>,
}

impl GitHubClient {
    /// Create a client against `api_base` where each request is abandoned after `timeout`.
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("starmap"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(StarmapError::Api)?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            timeout,
            rate_limit: Mutex::new(RateLimit::default()),
        })
    }

    /// Get the most recently observed rate limit information.
    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit
            .lock()
            .map(|rl| rl.clone())
            .unwrap_or_default()
    }

    /// GET `endpoint` and parse the body as JSON, within the request timeout.
    pub async fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        match tokio::time::timeout(self.timeout, self.fetch_json(endpoint, params)).await {
            Ok(result) => result,
            Err(_) => Err(StarmapError::Timeout(self.timeout)),
        }
    }

    async fn fetch_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.api_base, endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(StarmapError::Api)?;

        self.update_rate_limit(&response);
        let response = self.check_response(response)?;

        let body = response.bytes().await.map_err(StarmapError::Api)?;
        serde_json::from_slice(&body)
            .map_err(|e| StarmapError::MalformedPayload(format!("{}: {}", endpoint, e)))
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&self, response: &Response) {
        let header = |name: &str| -> Option<u64> {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };

        let Ok(mut rate_limit) = self.rate_limit.lock() else {
            return;
        };
        if let Some(limit) = header("x-ratelimit-limit") {
            rate_limit.limit = limit;
        }
        if let Some(remaining) = header("x-ratelimit-remaining") {
            rate_limit.remaining = remaining;
        }
        if let Some(reset) = header("x-ratelimit-reset") {
            rate_limit.reset = reset;
        }
    }

    /// Check response status and convert failures.
    fn check_response(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::NOT_FOUND => Err(StarmapError::RemoteUnavailable(format!(
                "not found: {}",
                response.url()
            ))),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
                if self.rate_limit().remaining == 0 =>
            {
                let reset_at = chrono::DateTime::from_timestamp(self.rate_limit().reset as i64, 0)
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                Err(StarmapError::RemoteUnavailable(format!(
                    "rate limit exceeded, resets at {}",
                    reset_at
                )))
            }
            status => Err(StarmapError::RemoteUnavailable(format!("HTTP {}", status))),
        }
    }
}
