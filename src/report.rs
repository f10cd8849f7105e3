//! Plain-text rendering of a lookup, used by `--plain`.

use std::fmt::Write;

use crate::engine::{FetchState, ProfileState};

/// Render `state` as plain text.
///
/// `Success` lists the profile and every repository, with its link, in the
/// current sort order; `Error` is a single line with the failure.
pub fn render_plain(state: &ProfileState) -> String {
    let mut out = String::new();
    match &state.fetch {
        FetchState::Loading => {
            out.push_str("Loading...\n");
        }
        FetchState::Error(failure) => {
            let _ = writeln!(out, "{}: {}", failure.kind.user_message(), failure.message);
        }
        FetchState::Success { profile, .. } => {
            if profile.display_name() == profile.login {
                let _ = writeln!(out, "{}", profile.login);
            } else {
                let _ = writeln!(out, "{} ({})", profile.display_name(), profile.login);
            }
            if let Some(bio) = profile.bio.as_deref().filter(|b| !b.trim().is_empty()) {
                let _ = writeln!(out, "{}", bio.trim());
            }
            if let Some(url) = &profile.html_url {
                let _ = writeln!(out, "{}", url);
            }
            let _ = writeln!(
                out,
                "Repos: {}  Followers: {}  Following: {}",
                profile.public_repos, profile.followers, profile.following
            );

            let repositories = state.visible_repositories().unwrap_or_default();
            let _ = writeln!(
                out,
                "\nRepositories ({}, by {}):",
                repositories.len(),
                state.sort.label().to_lowercase()
            );
            if repositories.is_empty() {
                out.push_str("  (none)\n");
            }
            let star_width = repositories
                .iter()
                .map(|r| r.stars.to_string().len())
                .max()
                .unwrap_or(1);
            for repo in repositories {
                let _ = write!(out, "  ★ {:>width$}  {}", repo.stars, repo.name, width = star_width);
                if let Some(language) = &repo.language {
                    let _ = write!(out, " [{}]", language);
                }
                if let Some(updated) = repo.updated_at_parsed() {
                    let _ = write!(out, " updated {}", updated.format("%Y-%m-%d"));
                }
                out.push('\n');
                if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
                    let _ = writeln!(out, "      {}", description);
                }
                let _ = writeln!(out, "      {}", repo.html_url);
            }
        }
    }
    out
}
