//! Engine state: what the presentation layer renders.

use std::sync::Arc;

use crate::model::{Profile, RepositorySummary};
use crate::repository::{FailureKind, FetchError};
use crate::ui::mvi::UiState;

use super::sort::{sort_repositories, SortOption};

/// Why the last search failed, kept for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&FetchError> for FetchFailure {
    fn from(err: &FetchError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Result of the most recent search. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// A search is in flight, or none has been started yet.
    #[default]
    Loading,
    /// Profile and repositories both arrived.
    Success {
        profile: Arc<Profile>,
        /// Fetch order; see [`ProfileState::visible_repositories`] for display order.
        repositories: Arc<[RepositorySummary]>,
    },
    /// At least one of the two fetches failed.
    Error(FetchFailure),
}

/// Full engine snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    /// Text in the search box. Independent of `fetch`.
    pub query: String,
    pub dark_theme: bool,
    pub sort: SortOption,
    pub fetch: FetchState,
    /// Incremented every time a search starts. Only results tagged with the
    /// current generation may replace `fetch`.
    pub generation: u64,
    /// Identifier of the most recently started search.
    pub last_identifier: Option<String>,
}

impl UiState for ProfileState {}

impl ProfileState {
    /// Fresh state with the given display preferences.
    pub fn with_preferences(dark_theme: bool, sort: SortOption) -> Self {
        Self {
            dark_theme,
            sort,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.fetch, FetchState::Loading)
    }

    /// False until the first search starts.
    pub fn has_searched(&self) -> bool {
        self.last_identifier.is_some()
    }

    pub fn profile(&self) -> Option<&Profile> {
        match &self.fetch {
            FetchState::Success { profile, .. } => Some(profile),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match &self.fetch {
            FetchState::Error(failure) => Some(failure),
            _ => None,
        }
    }

    /// Repositories of the current result in the current sort order.
    pub fn visible_repositories(&self) -> Option<Vec<&RepositorySummary>> {
        match &self.fetch {
            FetchState::Success { repositories, .. } => {
                Some(sort_repositories(repositories, self.sort))
            }
            _ => None,
        }
    }
}
