//! Queue state, construction options, and structural validation
//!
//! The state is an explicit, serializable record: a `"type"` discriminator
//! tag plus the heap's backing sequence. Serializing and reconstructing a
//! state round-trips through JSON:
//!
//! ```rust
//! use adt_priority_queue::PriorityQueueState;
//!
//! let state: PriorityQueueState<i32> =
//!     serde_json::from_str(r#"{"type":"PriorityQueue","elements":[10,20,60]}"#).unwrap();
//! assert!(state.is_valid());
//! assert_eq!(state.elements.len(), 3);
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;

/// The `"type"` discriminator every valid state must carry.
pub const STATE_TYPE: &str = "PriorityQueue";

/// The serializable state of a priority queue.
///
/// `elements` is the heap's backing sequence, dense from the root to the
/// last slot. A `None` slot is a tombstone: logically absent, structurally
/// present, awaiting eviction by the next structural pop. There is no
/// separate size counter and no capacity bound — the queue grows without
/// ceiling, unlike the sibling pool and circular-queue ADTs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityQueueState<T> {
    /// Type discriminator, `"PriorityQueue"` in every valid state.
    #[serde(rename = "type")]
    pub kind: String,
    /// Backing sequence; position `i` has children at `2i+1` / `2i+2`.
    pub elements: Vec<Option<T>>,
}

impl<T> PriorityQueueState<T> {
    /// The default state: correct type tag, empty sequence.
    pub fn default_state() -> Self {
        Self {
            kind: STATE_TYPE.to_string(),
            elements: Vec::new(),
        }
    }

    /// Enumerates every structural violation as a human-readable string.
    /// An empty result means the state is valid.
    pub fn state_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.kind != STATE_TYPE {
            errors.push(format!("state type must be {STATE_TYPE}"));
        }

        errors
    }

    /// True when [`state_errors`](Self::state_errors) finds nothing.
    pub fn is_valid(&self) -> bool {
        self.state_errors().is_empty()
    }
}

impl<T> Default for PriorityQueueState<T> {
    fn default() -> Self {
        Self::default_state()
    }
}

/// Construction options for [`PriorityQueue`](crate::PriorityQueue).
///
/// A serialized state is applied first, all-or-nothing; explicit elements
/// are then pushed one by one so heap order is derived from the comparator,
/// never assumed from input ordering.
#[derive(Debug, Clone)]
pub struct PriorityQueueOptions<T> {
    /// Elements to push individually after the state is in place.
    pub elements: Option<Vec<T>>,
    /// A JSON state produced by a prior `stringify()`. The element order is
    /// trusted as already heap-ordered; only the shape is validated.
    pub serialized_state: Option<String>,
}

impl<T> PriorityQueueOptions<T> {
    /// Options carrying only explicit elements.
    pub fn with_elements(elements: Vec<T>) -> Self {
        Self {
            elements: Some(elements),
            serialized_state: None,
        }
    }

    /// Options carrying only a serialized state.
    pub fn with_serialized_state(serialized_state: impl Into<String>) -> Self {
        Self {
            elements: None,
            serialized_state: Some(serialized_state.into()),
        }
    }
}

impl<T> Default for PriorityQueueOptions<T> {
    fn default() -> Self {
        Self {
            elements: None,
            serialized_state: None,
        }
    }
}

/// Parses a serialized state and validates it as a whole.
///
/// Any failure — malformed JSON, wrong shape, or structural violations —
/// aggregates into a single [`ConstructionError`]; a partially-applied
/// state is never produced.
pub fn parse_serialized_state<T: DeserializeOwned>(
    data: &str,
) -> Result<PriorityQueueState<T>, ConstructionError> {
    let parsed: PriorityQueueState<T> =
        serde_json::from_str(data).map_err(|err| ConstructionError::InvalidJson(err.to_string()))?;

    let errors = parsed.state_errors();
    if !errors.is_empty() {
        return Err(ConstructionError::InvalidState(errors.join("\n")));
    }

    Ok(parsed)
}
