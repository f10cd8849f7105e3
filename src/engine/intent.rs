//! Intents for the profile engine.

use crate::model::{Profile, RepositorySummary};
use crate::ui::mvi::Intent;

use super::sort::SortOption;
use super::state::FetchFailure;

/// Everything that can change a [`ProfileState`](super::ProfileState).
#[derive(Debug, Clone)]
pub enum ProfileIntent {
    /// Search box text changed.
    UpdateQuery { text: String },

    ToggleTheme,

    SetSort { option: SortOption },

    /// A search for `identifier` was initiated. Starts a new generation.
    SearchStarted { identifier: String },

    /// Both fetches of search `generation` succeeded.
    SearchSucceeded {
        generation: u64,
        profile: Profile,
        repositories: Vec<RepositorySummary>,
    },

    /// A fetch of search `generation` failed.
    SearchFailed {
        generation: u64,
        failure: FetchFailure,
    },
}

impl Intent for ProfileIntent {}
