//! Construction-time errors
//!
//! Validation follows a two-tier policy: construction is strict and loud,
//! because a badly-constructed instance cannot be trusted, while every
//! post-construction operation is defensive and degrades to a safe
//! `None`/`false`/no-op instead of raising.

use thiserror::Error;

/// Error raised while constructing a queue from options.
///
/// Post-construction methods never return this type; only the
/// construction path ([`PriorityQueue::with_options`]) surfaces it.
///
/// [`PriorityQueue::with_options`]: crate::PriorityQueue::with_options
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// The serialized state string was not valid JSON for the expected shape.
    #[error("serialized state could not be parsed: {0}")]
    InvalidJson(String),

    /// The parsed state failed structural validation. The message joins
    /// every violation found, one per line — all-or-nothing.
    #[error("state is not a valid PriorityQueueState:\n{0}")]
    InvalidState(String),
}
