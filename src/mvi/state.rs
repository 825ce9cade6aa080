//! Base trait for state in MVI architecture.

use std::sync::Arc;

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + Default + Send + 'static {}

/// Shared slices are states too. Returning the same `Arc` from a reducer
/// lets subscribers detect "nothing changed" with `Arc::ptr_eq`.
impl<T> State for Arc<T> where T: Clone + PartialEq + Default + Send + Sync + 'static {}
