//! Base trait for state in the MVI layer.

/// Marker trait for state snapshots.
///
/// States should be:
/// - Replaced, not patched (Clone to derive the next one)
/// - Self-contained (everything a view needs to render)
/// - Comparable (PartialEq, so unchanged states are not re-published)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
