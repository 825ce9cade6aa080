//! Base trait for intents (actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (submitting a comment, toggling a modal)
/// - Data loader outcomes (comments fetched, fetch failed)
/// - Store lifecycle events
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
