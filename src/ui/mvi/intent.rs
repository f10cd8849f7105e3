//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// Intents describe something that happened:
/// - User input (query edits, theme or sort changes)
/// - Request lifecycle events (search started, result arrived)
///
/// Reducers consume intents to produce the next state.
pub trait Intent: Send + 'static {}
