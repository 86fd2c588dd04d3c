//! Binary-heap priority queue with a caller-supplied ordering relation
//!
//! The queue keeps its elements in a `Vec`-backed binary heap: position
//! `i` has children at `2i + 1` / `2i + 2` and parent at
//! `floor((i - 1) / 2)`. Order is defined entirely by the comparator given
//! at construction — `comparator(a, b)` true means "`a` must be popped
//! before `b`" — and restored after every mutation by walking a single
//! chain of swaps toward the root or the leaves, so push, pop, and
//! arbitrary-position deletion all stay amortized logarithmic.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `push`         | O(log n)   |
//! | `pop`          | O(log n)   |
//! | `front`        | O(1)       |
//! | `query_delete` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use adt_priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a < b);
//! queue.push(50);
//! queue.push(10);
//! queue.push(30);
//!
//! assert_eq!(queue.front(), Some(&10));
//! assert_eq!(queue.pop(), Some(10));
//! assert_eq!(queue.pop(), Some(30));
//! assert_eq!(queue.pop(), Some(50));
//! assert_eq!(queue.pop(), None);
//! ```

use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ConstructionError;
use crate::query::{QueryFilter, QueryOptions, QueryResult};
use crate::state::{parse_serialized_state, PriorityQueueOptions, PriorityQueueState};
use crate::traits::Adt;

/// The queue's ordering relation: `comparator(a, b)` is true when `a` must
/// be popped before `b`.
///
/// Trusted as given — the engine never checks it for transitivity or
/// irreflexivity — and possibly non-commutative, so the engine always
/// invokes it with a fixed argument order (see
/// [`is_heap_unbalanced`](PriorityQueue::is_heap_unbalanced)).
pub type Comparator<T> = Rc<dyn Fn(&T, &T) -> bool>;

/// Child positions of a node, each `None` when the computed index falls
/// outside the backing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildIndexes {
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// A binary-heap priority queue over a caller-supplied comparator.
///
/// The state is public, like every ADT in this family: callers may inspect
/// or perturb it directly, which is exactly why every post-construction
/// operation validates defensively. A state that fails validation silently
/// disables operations (queries and mutators report emptiness/no-op) until
/// a fresh valid state replaces it.
pub struct PriorityQueue<T> {
    /// Backing state; `None` slots are tombstones awaiting eviction.
    pub state: PriorityQueueState<T>,
    comparator: Comparator<T>,
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue over `comparator`.
    pub fn new(comparator: impl Fn(&T, &T) -> bool + 'static) -> Self {
        Self {
            state: PriorityQueueState::default_state(),
            comparator: Rc::new(comparator),
        }
    }

    /// Creates a queue from construction options.
    ///
    /// # Errors
    ///
    /// Fails with a [`ConstructionError`] when `options.serialized_state`
    /// is malformed JSON or fails structural validation; the error message
    /// joins every violation found.
    pub fn with_options(
        comparator: impl Fn(&T, &T) -> bool + 'static,
        options: PriorityQueueOptions<T>,
    ) -> Result<Self, ConstructionError>
    where
        T: DeserializeOwned,
    {
        let mut queue = Self::new(comparator);
        queue.parse_options(options)?;
        Ok(queue)
    }

    /// Merges construction options into the current state.
    ///
    /// A serialized state replaces the state wholesale, all-or-nothing;
    /// its element order is trusted as already heap-ordered. Explicit
    /// elements are then routed one by one through [`push`](Self::push),
    /// so their heap order is derived from the comparator, never assumed
    /// from input ordering.
    pub fn parse_options(
        &mut self,
        options: PriorityQueueOptions<T>,
    ) -> Result<(), ConstructionError>
    where
        T: DeserializeOwned,
    {
        if let Some(serialized) = options.serialized_state.as_deref() {
            self.state = parse_serialized_state(serialized)?;
        }

        if let Some(elements) = options.elements {
            for element in elements {
                self.push(element);
            }
        }

        Ok(())
    }

    /// True when the state passes structural validation.
    pub fn is_valid_state(&self) -> bool {
        self.state.is_valid()
    }

    /// Number of slots in the backing sequence, tombstones included, or 0
    /// when the state fails structural validation.
    pub fn size(&self) -> usize {
        if !self.is_valid_state() {
            return 0;
        }

        self.state.elements.len()
    }

    /// True when [`size`](Self::size) is zero.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Uniform index check: true only for positions inside `[0, size)`.
    fn is_valid_index(&self, index: usize) -> bool {
        index < self.size()
    }

    /// The root element — the one every other element is outranked by —
    /// or `None` when the queue is empty, the state is invalid, or the
    /// root slot holds a tombstone.
    pub fn front(&self) -> Option<&T> {
        if !self.is_valid_state() {
            return None;
        }

        self.state.elements.first().and_then(|slot| slot.as_ref())
    }

    /// Alias for [`front`](Self::front).
    pub fn peek(&self) -> Option<&T> {
        self.front()
    }

    /// Appends `element` at the tail and restores order by sifting toward
    /// the root. No capacity ceiling; a no-op only when the state is
    /// invalid.
    pub fn push(&mut self, element: T) {
        if !self.is_valid_state() {
            return;
        }

        self.state.elements.push(Some(element));
        self.fix_heap(self.state.elements.len() - 1, false);
    }

    /// Removes and returns the root element, then restores order by
    /// sifting the relocated tail element toward the leaves.
    ///
    /// Returns `None` on an empty queue (repeatable, no mutation), on an
    /// invalid state, or when the evicted root slot was a tombstone.
    pub fn pop(&mut self) -> Option<T> {
        if !self.is_valid_state() {
            return None;
        }
        if self.state.elements.is_empty() {
            return None;
        }

        let last = self.state.elements.len() - 1;
        self.state.elements.swap(0, last);
        let captured = self.state.elements.pop().flatten();

        if self.state.elements.len() > 1 {
            self.fix_heap(0, true);
        }

        captured
    }

    /// Resets the backing sequence to empty, retaining the comparator.
    pub fn clear(&mut self) {
        self.state.elements.clear();
    }

    /// Exchanges two slots in place, identities preserved. A no-op unless
    /// both indexes are valid and distinct.
    pub fn swap_nodes(&mut self, index_one: usize, index_two: usize) {
        if !self.is_valid_index(index_one) || !self.is_valid_index(index_two) {
            return;
        }
        if index_one == index_two {
            return;
        }

        self.state.elements.swap(index_one, index_two);
    }

    /// Parent position, `floor((i - 1) / 2)`. The root has no parent, and
    /// positions outside the sequence have none either.
    pub fn parent_node_index(&self, index: usize) -> Option<usize> {
        if index == 0 || !self.is_valid_index(index) {
            return None;
        }

        Some((index - 1) / 2)
    }

    /// Child positions `2i + 1` / `2i + 2`, each independently `None` when
    /// it falls outside the sequence; both `None` for an invalid `index`.
    pub fn child_node_indexes(&self, index: usize) -> ChildIndexes {
        if !self.is_valid_index(index) {
            return ChildIndexes {
                left: None,
                right: None,
            };
        }

        let size = self.size();
        let left = 2 * index + 1;
        let right = 2 * index + 2;

        ChildIndexes {
            left: (left < size).then_some(left),
            right: (right < size).then_some(right),
        }
    }

    /// Whether the leaf-ward node of the pair outranks the root-ward node.
    ///
    /// Structural roles are resolved before the comparator runs: whichever
    /// index is lower is the parent, and the comparator is always invoked
    /// as `comparator(child, parent)` no matter which sift direction
    /// passed the pair in. Consumer comparators may be order-sensitive, so
    /// this call shape is part of the contract.
    ///
    /// False when either index is invalid, the indexes are equal, or
    /// either slot holds a tombstone.
    pub fn is_heap_unbalanced(&self, index_one: usize, index_two: usize) -> bool {
        if !self.is_valid_index(index_one) || !self.is_valid_index(index_two) {
            return false;
        }
        if index_one == index_two {
            return false;
        }

        let (parent, child) = if index_one < index_two {
            (index_one, index_two)
        } else {
            (index_two, index_one)
        };

        match (&self.state.elements[parent], &self.state.elements[child]) {
            (Some(parent_element), Some(child_element)) => {
                (self.comparator)(child_element, parent_element)
            }
            _ => false,
        }
    }

    /// Next position along the sift chain: the preferred live child when
    /// `start_from_top`, otherwise the parent.
    ///
    /// With one live child (the other absent or a tombstone) that child is
    /// returned; with two, whichever outranks the other, the left child
    /// winning ties; with none, `None`.
    pub fn get_next_index(&self, start_from_top: bool, index: usize) -> Option<usize> {
        if !start_from_top {
            return self.parent_node_index(index);
        }

        let children = self.child_node_indexes(index);
        let left = children.left.filter(|&i| self.state.elements[i].is_some());
        let right = children
            .right
            .filter(|&i| self.state.elements[i].is_some());

        match (left, right) {
            (None, None) => None,
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (Some(left), Some(right)) => {
                let left_element = self.state.elements[left].as_ref()?;
                let right_element = self.state.elements[right].as_ref()?;

                if (self.comparator)(right_element, left_element) {
                    Some(right)
                } else {
                    Some(left)
                }
            }
        }
    }

    /// Restores heap order by walking the single violating chain from
    /// `index` in the given direction, swapping until the pair under
    /// inspection is balanced or the chain runs out. O(log n) swaps.
    ///
    /// A start index that is not the out-of-order node performs zero
    /// swaps — the walk never scans the whole structure. A no-op when the
    /// queue holds at most one element or `index` is invalid.
    pub fn fix_heap(&mut self, index: usize, start_from_top: bool) {
        if self.size() <= 1 {
            return;
        }
        if !self.is_valid_index(index) {
            return;
        }

        let mut current = index;
        while let Some(next) = self.get_next_index(start_from_top, current) {
            if !self.is_heap_unbalanced(current, next) {
                break;
            }
            self.swap_nodes(current, next);
            current = next;
        }
    }

    /// Visits every live element in backing order with its position.
    /// Tombstones are skipped; an invalid state visits nothing.
    pub fn for_each(&self, mut func: impl FnMut(usize, &T)) {
        if !self.is_valid_state() {
            return;
        }

        for (index, slot) in self.state.elements.iter().enumerate() {
            if let Some(element) = slot {
                func(index, element);
            }
        }
    }

    /// Builds a new queue over the same ordering relation from the
    /// elements matching `predicate`. Matches are pushed individually, so
    /// the result derives its own heap order.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> PriorityQueue<T>
    where
        T: Clone,
    {
        let mut filtered = PriorityQueue {
            state: PriorityQueueState::default_state(),
            comparator: Rc::clone(&self.comparator),
        };

        self.for_each(|_, element| {
            if predicate(element) {
                filtered.push(element.clone());
            }
        });

        filtered
    }

    /// Collects a result handle for every element matching all `filters`,
    /// in traversal order, up to the merged limit. An empty filter list
    /// matches nothing.
    pub fn query(
        &self,
        filters: &[QueryFilter<'_, T>],
        options: QueryOptions,
    ) -> Vec<QueryResult<T>>
    where
        T: Clone,
    {
        let limit = options.resolved_limit();
        let mut results = Vec::new();

        self.for_each(|_, element| {
            if results.len() >= limit {
                return;
            }

            let take = !filters.is_empty() && filters.iter().all(|filter| filter(element));
            if take {
                results.push(QueryResult {
                    element: element.clone(),
                });
            }
        });

        results
    }

    /// Current live position of the handle's element, recomputed on every
    /// call — positions shift after other deletes. `None` when the element
    /// is no longer present.
    pub fn query_index(&self, result: &QueryResult<T>) -> Option<usize>
    where
        T: PartialEq,
    {
        if !self.is_valid_state() {
            return None;
        }

        self.state
            .elements
            .iter()
            .position(|slot| slot.as_ref() == Some(&result.element))
    }

    /// Removes the handle's element and returns it, or `None` when it has
    /// already been removed.
    ///
    /// Positions encode heap topology, so an interior deletion cannot be a
    /// splice: the last element moves into the vacated slot (or the slot
    /// is simply truncated when it is the last), then the sift re-runs
    /// from that slot in whichever direction restores order — up when the
    /// moved element is outranked by its new parent, down otherwise.
    pub fn query_delete(&mut self, result: &QueryResult<T>) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.query_index(result)?;
        let last = self.state.elements.len() - 1;

        if index == last {
            return self.state.elements.pop().flatten();
        }

        self.state.elements.swap(index, last);
        let removed = self.state.elements.pop().flatten();

        match self.parent_node_index(index) {
            Some(parent) if self.is_heap_unbalanced(parent, index) => {
                self.fix_heap(index, false);
            }
            _ => self.fix_heap(index, true),
        }

        removed
    }

    /// Serializes the current state, or `None` when it fails validation.
    pub fn stringify(&self) -> Option<String>
    where
        T: Serialize,
    {
        if !self.is_valid_state() {
            return None;
        }

        serde_json::to_string(&self.state).ok()
    }
}

impl<T: Serialize> Adt<T> for PriorityQueue<T> {
    fn size(&self) -> usize {
        PriorityQueue::size(self)
    }

    fn clear(&mut self) {
        PriorityQueue::clear(self)
    }

    fn stringify(&self) -> Option<String> {
        PriorityQueue::stringify(self)
    }
}
