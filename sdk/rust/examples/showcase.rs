//! repofolio Rust SDK - Showcase Browsing Example
//!
//! This example demonstrates the full showcase workflow:
//! 1. Fetch the showcase document for a GitHub user
//! 2. Inspect the profile and language breakdown
//! 3. Sort and filter the project list locally
//! 4. Toggle live previews and the expanded card
//!
//! Run a repofolio backend first, then:
//! ```bash
//! REPOFOLIO_BASE_URL=http://localhost:8080 cargo run --example showcase -- octocat
//! ```

use std::env;

use repofolio_sdk::{
    preview_image_url, sandbox_compatible, sandbox_url, ApiError, Error, ShowcaseClient,
    ShowcaseView, SortKey,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== repofolio Rust SDK Example ===\n");

    let username = env::args().nth(1).unwrap_or_else(|| "octocat".to_string());

    // Step 1: Fetch the showcase document
    println!("1. Fetching showcase for '{username}'...");
    let client = ShowcaseClient::from_env()?;
    let showcase = match client.fetch(&username).await {
        Ok(showcase) => showcase,
        Err(Error::Api(ApiError::NotFound { message, .. })) => {
            println!("   {message}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut view = ShowcaseView::new(showcase);

    // Step 2: Profile
    println!("\n2. Profile");
    let profile = view.profile();
    println!("   {} (@{})", profile.name, profile.login);
    if let Some(bio) = &profile.bio {
        println!("   {bio}");
    }
    println!(
        "   {} public repos, {} followers, member since {}",
        profile.public_repos,
        profile.followers,
        profile.created_at.format("%Y-%m-%d")
    );

    // Step 3: Language breakdown
    println!("\n3. Languages");
    for (language, count) in view.language_stats() {
        println!("   {language}: {count} repos");
    }

    // Step 4: Top projects by stars
    println!("\n4. Top projects by stars");
    for project in view.projects() {
        println!(
            "   - {} ({} stars, {} commits in the last 4 weeks)",
            project.name, project.stars, project.recent_commits
        );
    }

    // Step 5: Re-sort by recent activity
    println!("\n5. Sorted by recent commits");
    view.set_sort(SortKey::RecentCommits);
    for project in view.projects() {
        println!(
            "   - {} ({} recent commits)",
            project.name, project.recent_commits
        );
    }

    // Step 6: Filter to one language
    let language = view.languages().first().map(|s| s.to_string());
    if let Some(language) = language {
        println!("\n6. Filtered to {language}");
        view.set_language_filter(Some(&language));
        for project in view.projects() {
            println!("   - {}", project.name);
        }
        view.set_language_filter(None);
    } else {
        println!("\n6. No languages detected; skipping filter");
    }

    // Step 7: Preview cards
    println!("\n7. Preview cards");
    for project in view.projects() {
        println!("   - {}", project.name);
        println!("     image: {}", preview_image_url(project));
        if sandbox_compatible(project) {
            println!("     sandbox: {}", sandbox_url(project));
        }
    }

    // Step 8: Toggle a live preview and the expanded card
    println!("\n8. Toggles");
    let embeddable = view
        .projects()
        .into_iter()
        .find(|p| sandbox_compatible(p))
        .map(|p| p.name.clone());
    if let Some(name) = embeddable {
        view.toggle_live_preview(&name);
        println!("   live preview '{}': {}", name, view.live_preview(&name));
    } else {
        println!("   no sandbox compatible project to preview");
    }

    let first = view.projects().first().map(|p| p.name.clone());
    if let Some(name) = first {
        view.toggle_expanded(&name);
        println!("   expanded: {:?}", view.expanded());
        view.toggle_expanded(&name);
        println!("   expanded after second toggle: {:?}", view.expanded());
    }

    println!("\n=== Browsing Complete ===");
    Ok(())
}
