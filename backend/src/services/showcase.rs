//! Showcase Service
//!
//! Assembles the showcase document for one username: condensed profile,
//! per-language repository counts, and the top starred projects with their
//! recent commit activity.

use std::collections::BTreeMap;

use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{
    CommitWeek, GithubRepo, GithubUser, Profile, ProjectSummary, ShowcaseResponse, WeeklyCommits,
};
use crate::services::github::{GithubClient, GithubError};

/// Number of top-starred projects selected for the showcase
pub const TOP_PROJECT_COUNT: usize = 3;

/// Trailing weeks of the activity series summed into `recentCommits`
pub const RECENT_COMMIT_WEEKS: usize = 4;

/// Errors that can occur while assembling a showcase
#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Upstream call failed: {0}")]
    Upstream(GithubError),
}

impl From<GithubError> for ShowcaseError {
    fn from(err: GithubError) -> Self {
        match err {
            GithubError::UserNotFound(login) => Self::UserNotFound(login),
            other => Self::Upstream(other),
        }
    }
}

/// Service assembling showcase documents from the GitHub API
#[derive(Debug, Clone)]
pub struct ShowcaseService {
    github: GithubClient,
}

impl ShowcaseService {
    pub fn new(github: GithubClient) -> Self {
        Self { github }
    }

    /// Build the showcase for `username`.
    ///
    /// The profile and repository-listing fetches are load bearing and fail
    /// the whole build. Commit-activity fetches are best effort: a failed
    /// branch degrades only its own project to an empty series.
    pub async fn build(&self, username: &str) -> Result<ShowcaseResponse, ShowcaseError> {
        let user = self.github.user(username).await?;
        let repos = self.github.repos(username).await?;

        let fetched = repos.len();
        let sources: Vec<GithubRepo> = repos.into_iter().filter(|repo| !repo.fork).collect();
        debug!(
            "Fetched {} repos for {} ({} after dropping forks)",
            fetched,
            username,
            sources.len()
        );

        let language_stats = language_stats(&sources);
        let top = top_by_stars(sources, TOP_PROJECT_COUNT);

        let fetches = top.iter().map(|repo| {
            let github = self.github.clone();
            let owner = username.to_string();
            let name = repo.name.clone();
            async move { github.commit_activity(&owner, &name).await }
        });

        // join_all keeps selection order, so results zip back onto `top`
        let series: Vec<Vec<CommitWeek>> = join_all(fetches)
            .await
            .into_iter()
            .zip(top.iter())
            .map(|(result, repo)| match result {
                Ok(weeks) => weeks,
                Err(e) => {
                    warn!("Commit activity fetch for {} failed: {}", repo.name, e);
                    Vec::new()
                }
            })
            .collect();

        let projects: Vec<ProjectSummary> = top
            .into_iter()
            .zip(series)
            .map(|(repo, weeks)| project_summary(repo, weeks))
            .collect();

        Ok(ShowcaseResponse {
            profile: profile_from(user),
            language_stats,
            projects,
        })
    }
}

/// Count repositories per primary language. Repos without a language are
/// skipped, so the counts sum to the number of repos that have one.
fn language_stats(repos: &[GithubRepo]) -> BTreeMap<String, u32> {
    let mut stats = BTreeMap::new();
    for repo in repos {
        if let Some(language) = &repo.language {
            *stats.entry(language.clone()).or_insert(0) += 1;
        }
    }
    stats
}

/// Select the `count` most starred repositories. The sort is stable, so
/// star ties keep the upstream listing order.
fn top_by_stars(mut repos: Vec<GithubRepo>, count: usize) -> Vec<GithubRepo> {
    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    repos.truncate(count);
    repos
}

/// Sum of the trailing `RECENT_COMMIT_WEEKS` weekly totals; shorter series
/// sum whatever is there.
fn recent_commit_count(weeks: &[CommitWeek]) -> u32 {
    weeks
        .iter()
        .rev()
        .take(RECENT_COMMIT_WEEKS)
        .map(|week| week.total)
        .sum()
}

fn profile_from(user: GithubUser) -> Profile {
    let name = user.name.unwrap_or_else(|| user.login.clone());
    Profile {
        login: user.login,
        name,
        avatar_url: user.avatar_url,
        bio: user.bio,
        public_repos: user.public_repos,
        followers: user.followers,
        following: user.following,
        created_at: user.created_at,
    }
}

fn project_summary(repo: GithubRepo, weeks: Vec<CommitWeek>) -> ProjectSummary {
    let recent_commits = recent_commit_count(&weeks);
    ProjectSummary {
        name: repo.name,
        url: repo.html_url,
        description: repo.description,
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        language: repo.language,
        topics: repo.topics,
        updated_at: repo.updated_at,
        recent_commits,
        weekly_commits: weeks
            .into_iter()
            .map(|w| WeeklyCommits {
                week: w.week,
                total: w.total,
            })
            .collect(),
    }
}
