pub mod github;
pub mod showcase;


pub use github::{GithubClient, GithubError, REPOS_PER_PAGE};
pub use showcase::{RECENT_COMMIT_WEEKS, ShowcaseError, ShowcaseService, TOP_PROJECT_COUNT};
