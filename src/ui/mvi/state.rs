//! Base trait for screen state.

/// Marker trait for UI state objects.
///
/// States are cloned rather than mutated in place and carry everything
/// needed to render their screen.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
