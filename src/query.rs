//! Query overlay types shared by the ADT family
//!
//! Every ADT in this family exposes the same query/filter/delete surface:
//! a query takes one or more predicates (combined with AND semantics),
//! merged options, and yields one result handle per match. Handle-driven
//! operations that need the owning collection — recomputing the element's
//! live position, deleting it — are methods on the collection taking the
//! handle by reference.

/// A single query predicate, applied per element in traversal order.
pub type QueryFilter<'a, T> = &'a dyn Fn(&T) -> bool;

/// Query options, merged against the unbounded defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptions {
    /// Maximum number of results. Unbounded when absent; a zero limit is
    /// treated as absent.
    pub limit: Option<usize>,
}

impl QueryOptions {
    /// Truncates results at `limit`.
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    /// The merged result cap: the given limit when it is at least one,
    /// otherwise unbounded.
    pub fn resolved_limit(&self) -> usize {
        match self.limit {
            Some(limit) if limit >= 1 => limit,
            _ => usize::MAX,
        }
    }
}

/// A handle to one query match.
///
/// The handle carries a copy of the matched element. Its current position
/// and its removal are resolved against the owning queue at call time via
/// [`query_index`](crate::PriorityQueue::query_index) and
/// [`query_delete`](crate::PriorityQueue::query_delete) — positions shift
/// after other deletes, so nothing positional is cached here.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T> {
    /// The matched element at query time.
    pub element: T,
}

impl<T> QueryResult<T> {
    /// Always `None`: no ADT in this family has a keyed variant.
    pub fn key(&self) -> Option<&str> {
        None
    }
}
