//! Showcase request and response types
//!
//! The shapes served by `POST /v1/showcase`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for the showcase endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowcaseRequest {
    pub username: String,
}

/// Condensed user profile for the showcase header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub login: String,
    /// Display name; falls back to the login when GitHub has none.
    pub name: String,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

/// One week of commit activity carried into the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyCommits {
    /// Week start as unix epoch seconds.
    pub week: i64,
    pub total: u32,
}

/// A selected repository with its activity summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub stars: u32,
    pub forks: u32,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
    /// Commits over the trailing four weeks of the activity series.
    pub recent_commits: u32,
    /// Up to 52 weeks of activity; empty when GitHub has no series ready.
    pub weekly_commits: Vec<WeeklyCommits>,
}

/// Full response served for one username.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseResponse {
    pub profile: Profile,
    /// Repository count per primary language, iterated in name order.
    pub language_stats: BTreeMap<String, u32>,
    pub projects: Vec<ProjectSummary>,
}
