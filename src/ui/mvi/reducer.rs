//! Reducer trait for the MVI layer.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// All state transitions go through a reducer, which must stay pure:
/// (State, Intent) -> State. I/O belongs to whoever dispatches.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
