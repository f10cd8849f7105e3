//! Reducer for the profile engine.

use std::sync::Arc;

use crate::ui::mvi::Reducer;

use super::intent::ProfileIntent;
use super::state::{FetchState, ProfileState};

/// Reducer for profile lookup state transitions.
///
/// Pure function. Network calls happen in [`ProfileEngine`](super::ProfileEngine)
/// around the dispatch calls.
pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::UpdateQuery { text } => ProfileState {
                query: text,
                ..state
            },

            ProfileIntent::ToggleTheme => ProfileState {
                dark_theme: !state.dark_theme,
                ..state
            },

            ProfileIntent::SetSort { option } => ProfileState {
                sort: option,
                ..state
            },

            ProfileIntent::SearchStarted { identifier } => ProfileState {
                fetch: FetchState::Loading,
                generation: state.generation + 1,
                last_identifier: Some(identifier),
                ..state
            },

            ProfileIntent::SearchSucceeded {
                generation,
                profile,
                repositories,
            } => {
                if generation != state.generation {
                    return state;
                }
                ProfileState {
                    fetch: FetchState::Success {
                        profile: Arc::new(profile),
                        repositories: Arc::from(repositories),
                    },
                    ..state
                }
            }

            ProfileIntent::SearchFailed {
                generation,
                failure,
            } => {
                if generation != state.generation {
                    return state;
                }
                ProfileState {
                    fetch: FetchState::Error(failure),
                    ..state
                }
            }
        }
    }
}
