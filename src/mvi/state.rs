//! Base trait for UI state in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
/// - Shareable across the worker threads that publish into them
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
