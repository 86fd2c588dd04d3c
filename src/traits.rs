//! The shared contract of the ADT family
//!
//! The stack, circular queue, object pool, and priority queue all share
//! one convention: an explicit serializable state, strict all-or-nothing
//! validation at construction, defensive post-construction operations,
//! and a uniform query/filter/delete overlay. This module holds the
//! cross-ADT surface; the sibling ADTs are external collaborators and only
//! the priority queue ships in this crate.

use serde::Serialize;

/// Base trait for the ADT family.
///
/// Implementors own an explicit state record and degrade defensively: a
/// state that fails structural validation makes `size` report zero and
/// `stringify` report `None` rather than panicking, until a fresh valid
/// state replaces it.
pub trait Adt<T: Serialize> {
    /// Element count, or 0 when the state fails structural validation.
    fn size(&self) -> usize;

    /// True when [`size`](Self::size) is zero.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Resets the backing sequence to empty, retaining configuration.
    fn clear(&mut self);

    /// Serializes the current state, or `None` when it fails validation.
    fn stringify(&self) -> Option<String>;
}
