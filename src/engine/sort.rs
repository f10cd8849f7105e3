//! Repository ordering.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::model::RepositorySummary;

/// How the repository list is ordered for display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Star count, highest first.
    #[default]
    Stars,
    /// Last update, most recent first.
    Recent,
    /// Name, A to Z.
    Name,
}

impl SortOption {
    /// Next option in the Stars → Recent → Name cycle.
    pub fn next(self) -> Self {
        match self {
            SortOption::Stars => SortOption::Recent,
            SortOption::Recent => SortOption::Name,
            SortOption::Name => SortOption::Stars,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOption::Stars => "Stars",
            SortOption::Recent => "Recent",
            SortOption::Name => "Name",
        }
    }
}

/// Order `repositories` by `option` without copying them.
///
/// The sort is stable: entries that compare equal keep fetch order.
/// Under `Recent`, entries without a parseable timestamp go last.
pub fn sort_repositories(
    repositories: &[RepositorySummary],
    option: SortOption,
) -> Vec<&RepositorySummary> {
    let mut sorted: Vec<&RepositorySummary> = repositories.iter().collect();
    match option {
        SortOption::Stars => sorted.sort_by(|a, b| b.stars.cmp(&a.stars)),
        SortOption::Recent => sorted.sort_by_cached_key(|repo| {
            let updated = repo.updated_at_parsed();
            (updated.is_none(), Reverse(updated))
        }),
        SortOption::Name => sorted.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        }),
    }
    sorted
}
