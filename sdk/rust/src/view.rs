//! Local view state over a fetched showcase.
//!
//! [`ShowcaseView`] wraps one showcase document together with the
//! presentation state a caller mutates while browsing it: sort order,
//! language filter, live preview toggles and the single expanded card.
//! Every operation here is local; nothing touches the network.

use std::collections::{BTreeMap, HashSet};

use crate::types::{Profile, Project, Showcase};

/// Primary languages whose projects can run in the embedded sandbox.
pub const SANDBOX_LANGUAGES: [&str; 6] =
    ["JavaScript", "TypeScript", "HTML", "CSS", "Vue", "Svelte"];

/// Repository topics that mark a project as sandbox friendly.
pub const SANDBOX_TOPICS: [&str; 10] = [
    "react",
    "vue",
    "svelte",
    "angular",
    "nextjs",
    "vite",
    "website",
    "webapp",
    "frontend",
    "portfolio",
];

/// Sort order for the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most stars first. This is the order the server ranks by.
    #[default]
    Stars,
    /// Most commits in the last four weeks first.
    RecentCommits,
    /// Project name, ascending.
    Name,
}

/// Browsing state over a showcase document.
///
/// # Example
///
/// ```rust
/// use repofolio_sdk::{Showcase, ShowcaseView, SortKey};
///
/// # fn run(showcase: Showcase) {
/// let mut view = ShowcaseView::new(showcase);
/// view.set_sort(SortKey::RecentCommits);
/// view.set_language_filter(Some("TypeScript"));
/// for project in view.projects() {
///     println!("{} ({} stars)", project.name, project.stars);
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ShowcaseView {
    showcase: Showcase,
    sort: SortKey,
    language: Option<String>,
    live: HashSet<String>,
    expanded: Option<String>,
}

impl ShowcaseView {
    /// Wrap a showcase document with default view state.
    #[must_use]
    pub fn new(showcase: Showcase) -> Self {
        Self {
            showcase,
            sort: SortKey::default(),
            language: None,
            live: HashSet::new(),
            expanded: None,
        }
    }

    /// The developer profile of the showcase.
    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.showcase.profile
    }

    /// Per-language repository counts, keyed alphabetically.
    #[must_use]
    pub fn language_stats(&self) -> &BTreeMap<String, u32> {
        &self.showcase.language_stats
    }

    /// Change the sort order for [`projects`](Self::projects).
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// The current sort order.
    #[must_use]
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Show only projects whose primary language matches, or all with `None`.
    pub fn set_language_filter(&mut self, language: Option<&str>) {
        self.language = language.map(String::from);
    }

    /// The current language filter, if any.
    #[must_use]
    pub fn language_filter(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Distinct primary languages across all projects, sorted.
    ///
    /// Projects without a detected language do not contribute an entry.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self
            .showcase
            .projects
            .iter()
            .filter_map(|p| p.language.as_deref())
            .collect();
        languages.sort_unstable();
        languages.dedup();
        languages
    }

    /// Projects with the language filter and current sort applied.
    ///
    /// The sort is stable: projects that compare equal keep the order the
    /// server returned them in, and the underlying document is never
    /// reordered.
    #[must_use]
    pub fn projects(&self) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self
            .showcase
            .projects
            .iter()
            .filter(|p| match &self.language {
                Some(language) => p.language.as_deref() == Some(language.as_str()),
                None => true,
            })
            .collect();

        match self.sort {
            SortKey::Stars => projects.sort_by(|a, b| b.stars.cmp(&a.stars)),
            SortKey::RecentCommits => {
                projects.sort_by(|a, b| b.recent_commits.cmp(&a.recent_commits));
            }
            SortKey::Name => projects.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        projects
    }

    /// Toggle the live sandbox preview for one project.
    ///
    /// Unknown names and projects that are not sandbox compatible are
    /// ignored, so the live set only ever holds embeddable projects.
    pub fn toggle_live_preview(&mut self, name: &str) {
        let eligible = self
            .showcase
            .projects
            .iter()
            .any(|p| p.name == name && sandbox_compatible(p));
        if !eligible {
            return;
        }
        if !self.live.remove(name) {
            self.live.insert(name.to_string());
        }
    }

    /// Whether the named project currently shows its live preview.
    #[must_use]
    pub fn live_preview(&self, name: &str) -> bool {
        self.live.contains(name)
    }

    /// Expand one project card, collapsing whichever card was open.
    ///
    /// Toggling the already-expanded project collapses it. At most one
    /// project is expanded at a time, tracked by name rather than by list
    /// position so re-sorting or filtering never moves the expansion to a
    /// different project.
    pub fn toggle_expanded(&mut self, name: &str) {
        if self.expanded.as_deref() == Some(name) {
            self.expanded = None;
        } else {
            self.expanded = Some(name.to_string());
        }
    }

    /// The name of the expanded project, if any.
    #[must_use]
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }
}

/// Whether a project can run in the embedded StackBlitz sandbox.
///
/// Front-end projects qualify by primary language or by carrying a
/// recognized topic; everything else only gets the static preview image.
#[must_use]
pub fn sandbox_compatible(project: &Project) -> bool {
    if let Some(language) = project.language.as_deref() {
        if SANDBOX_LANGUAGES.contains(&language) {
            return true;
        }
    }
    // Topics compare case-insensitively; GitHub lowercases them, but other
    // sources of the document may not.
    project
        .topics
        .iter()
        .any(|t| SANDBOX_TOPICS.iter().any(|s| t.eq_ignore_ascii_case(s)))
}

/// Social preview image URL for a project card.
#[must_use]
pub fn preview_image_url(project: &Project) -> String {
    format!(
        "https://opengraph.githubassets.com/1/{}",
        repo_path(&project.url)
    )
}

/// StackBlitz embed URL for a sandbox compatible project.
#[must_use]
pub fn sandbox_url(project: &Project) -> String {
    format!(
        "https://stackblitz.com/github/{}?embed=1",
        repo_path(&project.url)
    )
}

/// Extract the `owner/repo` path from a GitHub HTML URL.
fn repo_path(url: &str) -> &str {
    url.trim_end_matches('/')
        .splitn(4, '/')
        .nth(3)
        .unwrap_or(url)
}
