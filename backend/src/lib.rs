//! repofolio - recruiter-facing GitHub repository showcase
//!
//! This library provides the services and models for aggregating a GitHub
//! user's profile, per-language repository counts, and top starred projects
//! into a single showcase document.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;

// Re-export specific items to avoid ambiguous glob re-exports
pub use models::{Profile, ProjectSummary, ShowcaseRequest, ShowcaseResponse, WeeklyCommits};
pub use services::{GithubClient, ShowcaseService};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub github: GithubClient,
}
