//! Serializable priority-queue ADT
//!
//! This crate is the priority-queue member of a small family of generic
//! abstract data types (stack, circular queue, object pool, priority
//! queue) sharing one convention: an explicit serializable state, strict
//! all-or-nothing validation at construction, defensive post-construction
//! operations, and a uniform query/filter/delete overlay.
//!
//! The core is the binary-heap engine in [`priority_queue`]: it maintains
//! heap order under insertion, extraction, and arbitrary-position deletion
//! using a caller-supplied, possibly non-commutative ordering relation,
//! with every operation amortized logarithmic.
//!
//! # Features
//!
//! - **Comparator-defined order**: `comparator(a, b)` true means "`a` must
//!   be popped before `b`"; the relation is trusted as given.
//! - **Explicit state**: a tagged, serializable record with a JSON string
//!   round-trip (`stringify()` / `serialized_state`).
//! - **Query overlay**: predicate queries with AND semantics and a result
//!   limit, plus handle-driven position lookup and deletion that keep heap
//!   order intact.
//! - **Two-tier validation**: construction fails loudly with aggregated,
//!   human-readable errors; everything after degrades to `None`/no-op on
//!   invalid input.
//!
//! # Example
//!
//! ```rust
//! use adt_priority_queue::{PriorityQueue, PriorityQueueOptions};
//!
//! let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a < b);
//! queue.push(50);
//! queue.push(10);
//! queue.push(30);
//! assert_eq!(queue.front(), Some(&10));
//!
//! let serialized = queue.stringify().unwrap();
//! let mut restored = PriorityQueue::with_options(
//!     |a: &i32, b: &i32| a < b,
//!     PriorityQueueOptions::with_serialized_state(serialized),
//! )
//! .unwrap();
//! assert_eq!(restored.pop(), Some(10));
//! ```

pub mod error;
pub mod priority_queue;
pub mod query;
pub mod state;
pub mod traits;

pub use error::ConstructionError;
pub use priority_queue::{ChildIndexes, Comparator, PriorityQueue};
pub use query::{QueryFilter, QueryOptions, QueryResult};
pub use state::{PriorityQueueOptions, PriorityQueueState};
pub use traits::Adt;
