//! repofolio SDK main client.
//!
//! Provides the HTTP interface for fetching showcase documents.

use std::env;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use crate::error::{ApiError, Error};
use crate::types::Showcase;

/// Default base URL for the showcase API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the showcase API.
///
/// # Example
///
/// ```rust,no_run
/// use repofolio_sdk::ShowcaseClient;
///
/// # async fn run() -> Result<(), repofolio_sdk::Error> {
/// let client = ShowcaseClient::new(Some("https://folio.example.com"), None)?;
/// let showcase = client.fetch("octocat").await?;
/// println!("{} projects", showcase.projects.len());
/// # Ok(())
/// # }
/// ```
pub struct ShowcaseClient {
    base_url: String,
    client: Client,
}

impl ShowcaseClient {
    /// Create a new showcase client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests (default: <http://localhost:8080>)
    /// * `timeout` - Request timeout (default: 30 seconds)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: Option<&str>, timeout: Option<Duration>) -> Result<Self, Error> {
        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL);
        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a client from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `REPOFOLIO_BASE_URL` - Base URL for the API (optional, default: <http://localhost:8080>)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = env::var("REPOFOLIO_BASE_URL").ok();
        Self::new(base_url.as_deref(), None)
    }

    /// Get the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the showcase document for one GitHub username.
    ///
    /// A single request is made; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns a typed [`ApiError`] for error envelopes (validation, unknown
    /// user, upstream failure) and `Error::Http` for transport problems.
    pub async fn fetch(&self, username: &str) -> Result<Showcase, Error> {
        let url = format!("{}/v1/showcase", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "username": username }))
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::parse_error_response(response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::Http(format!("Failed to parse response: {e}")))?;

        let data = body
            .get("data")
            .ok_or_else(|| Error::Http("Missing data in response".to_string()))?;

        serde_json::from_value(data.clone()).map_err(Error::from)
    }

    /// Parse an error response into a typed error.
    async fn parse_error_response(response: Response) -> Error {
        let status = response.status();
        let data: Value = response
            .json()
            .await
            .unwrap_or_else(|_| serde_json::json!({}));

        let empty_obj = serde_json::json!({});
        let error = data.get("error").unwrap_or(&empty_obj);
        let code = error
            .get("code")
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN_ERROR")
            .to_string();
        let message = error
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or(&format!("HTTP {}", status.as_u16()))
            .to_string();
        let request_id = data
            .get("meta")
            .and_then(|m| m.get("requestId"))
            .and_then(|v| v.as_str())
            .map(String::from);

        let api_error = match status {
            StatusCode::NOT_FOUND => ApiError::NotFound {
                code,
                message,
                request_id,
            },
            StatusCode::BAD_GATEWAY => ApiError::Upstream {
                code,
                message,
                request_id,
            },
            s if s.is_server_error() => ApiError::Server {
                code,
                message,
                request_id,
            },
            _ => ApiError::Validation {
                code,
                message,
                request_id,
            },
        };

        Error::Api(api_error)
    }
}
