//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (removing an item) or events reported
/// by asynchronous work (a fetch starting, succeeding or failing). They are
/// `Send` so background tasks can hand them to the event queue.
pub trait Intent: Send + 'static {}
