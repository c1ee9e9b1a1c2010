//! Base trait for reducer-owned state.

/// Marker trait for state objects.
///
/// States are cloned into new values rather than mutated, compare with
/// `PartialEq` so tests can assert whole snapshots, and have a `Default`
/// that is the machine's initial state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
