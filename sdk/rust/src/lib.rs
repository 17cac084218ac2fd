//! repofolio SDK for Rust
//!
//! Client for the repofolio service - a recruiter-facing showcase of a
//! developer's GitHub repositories.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use repofolio_sdk::{ShowcaseClient, ShowcaseView, SortKey};
//!
//! # async fn run() -> Result<(), repofolio_sdk::Error> {
//! // Fetch the showcase document for a GitHub user
//! let client = ShowcaseClient::new(None, None)?;
//! let showcase = client.fetch("octocat").await?;
//!
//! // Browse it locally: sort, filter, expand
//! let mut view = ShowcaseView::new(showcase);
//! view.set_sort(SortKey::RecentCommits);
//! for project in view.projects() {
//!     println!("{} - {} stars", project.name, project.stars);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;
pub mod view;

// Re-exports
pub use client::{ShowcaseClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{ApiError, Error};
pub use types::{Profile, Project, Showcase, WeeklyCommits};
pub use view::{
    preview_image_url, sandbox_compatible, sandbox_url, ShowcaseView, SortKey, SANDBOX_LANGUAGES,
    SANDBOX_TOPICS,
};
