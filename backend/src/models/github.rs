//! GitHub REST API payload types
//!
//! Deserialization targets for the upstream calls. Field names match the
//! GitHub wire format (snake_case), and unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub user profile, as returned by `GET /users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

/// One repository from `GET /users/{username}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub fork: bool,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub language: Option<String>,
    /// Absent unless the listing was requested with the topics preview;
    /// default keeps older payloads deserializable.
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

/// One week of `GET /repos/{owner}/{repo}/stats/commit_activity`.
///
/// GitHub also sends a per-day breakdown; only the week start and total are
/// consumed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitWeek {
    /// Week start as unix epoch seconds.
    pub week: i64,
    pub total: u32,
}
