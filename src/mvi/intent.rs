//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Commands from the presentation layer (load, dismiss)
/// - Results or failures of background tasks
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
