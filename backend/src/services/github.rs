//! GitHub REST API client
//!
//! Thin async client for the three upstream calls the showcase pipeline
//! makes: user profile, repository listing, and per-repository commit
//! activity. One attempt per call; callers decide what a failure means.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::models::{CommitWeek, GithubRepo, GithubUser};

/// Timeout for each upstream request
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("repofolio/", env!("CARGO_PKG_VERSION"));

/// Repositories read per listing call. GitHub caps `per_page` at 100 and
/// only the first page is fetched, so accounts with more repositories get
/// a truncated view.
pub const REPOS_PER_PAGE: u32 = 100;

/// Errors from upstream GitHub calls
#[derive(Debug, Error)]
pub enum GithubError {
    #[error("GitHub user not found: {0}")]
    UserNotFound(String),

    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub responded with HTTP {status}: {message}")]
    Api { status: u16, message: String },
}

/// Client for the GitHub REST API
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Create a client against `base_url` (normally `https://api.github.com`).
    ///
    /// Requests carry the token as a bearer credential when one is given;
    /// anonymous requests work but are rate limited per IP.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, GithubError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Fetch a user's profile. A 404 becomes `GithubError::UserNotFound`.
    pub async fn user(&self, username: &str) -> Result<GithubUser, GithubError> {
        let response = self.get(&format!("/users/{username}")).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(GithubError::UserNotFound(username.to_string())),
            status if status.is_success() => Ok(response.json().await?),
            _ => Err(Self::api_error(response).await),
        }
    }

    /// Fetch one page of the user's repositories, most recently updated
    /// first.
    pub async fn repos(&self, username: &str) -> Result<Vec<GithubRepo>, GithubError> {
        let response = self
            .get(&format!(
                "/users/{username}/repos?per_page={REPOS_PER_PAGE}&sort=updated"
            ))
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Fetch the 52-week commit activity series for one repository.
    ///
    /// GitHub answers 202 (or an empty 204) while it is still computing the
    /// series; both come back as an empty series rather than an error.
    pub async fn commit_activity(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<CommitWeek>, GithubError> {
        let response = self
            .get(&format!("/repos/{owner}/{repo}/stats/commit_activity"))
            .await?;

        match response.status() {
            StatusCode::ACCEPTED | StatusCode::NO_CONTENT => {
                debug!("Commit activity for {}/{} not yet computed", owner, repo);
                Ok(Vec::new())
            }
            status if status.is_success() => Ok(response.json().await?),
            _ => Err(Self::api_error(response).await),
        }
    }

    async fn get(&self, path: &str) -> Result<Response, GithubError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        Ok(request.send().await?)
    }

    /// Turn a non-success response into a typed error, keeping GitHub's
    /// `message` field when the body parses.
    async fn api_error(response: Response) -> GithubError {
        let status = response.status().as_u16();
        let data: serde_json::Value = response
            .json()
            .await
            .unwrap_or_else(|_| serde_json::json!({}));

        let message = data
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or(&format!("HTTP {status}"))
            .to_string();

        GithubError::Api { status, message }
    }
}
