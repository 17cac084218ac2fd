//! Data model types for the repofolio SDK.
//!
//! Mirrors of the showcase document served by the API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Condensed GitHub profile of the showcased user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// GitHub login
    pub login: String,
    /// Display name (the login when GitHub has no name on file)
    pub name: String,
    /// Avatar image URL
    pub avatar_url: String,
    /// Profile bio
    pub bio: Option<String>,
    /// Public repository count
    pub public_repos: u32,
    /// Follower count
    pub followers: u32,
    /// Following count
    pub following: u32,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// One week of commit activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyCommits {
    /// Week start as unix epoch seconds
    pub week: i64,
    /// Commits during that week
    pub total: u32,
}

/// A showcased project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Repository name
    pub name: String,
    /// Repository page URL
    pub url: String,
    /// Repository description
    pub description: Option<String>,
    /// Star count
    pub stars: u32,
    /// Fork count
    pub forks: u32,
    /// Primary language
    pub language: Option<String>,
    /// Repository topics
    pub topics: Vec<String>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Commits over the trailing four weeks
    pub recent_commits: u32,
    /// Weekly activity series (may be empty)
    pub weekly_commits: Vec<WeeklyCommits>,
}

/// Full showcase document for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Showcase {
    /// The showcased user
    pub profile: Profile,
    /// Repository count per primary language, keyed in name order
    pub language_stats: BTreeMap<String, u32>,
    /// Top starred projects, at most three
    pub projects: Vec<Project>,
}
