//! Property-based tests using proptest
//!
//! These tests generate random element sequences and operation
//! interleavings and verify that the heap invariant, the comparator-defined
//! pop order, and the serialization round-trip always hold.

use proptest::prelude::*;

use adt_priority_queue::{PriorityQueue, PriorityQueueOptions, QueryOptions};

fn min_queue() -> PriorityQueue<i32> {
    PriorityQueue::new(|a: &i32, b: &i32| a < b)
}

/// Every parent/child pair in the backing sequence must be balanced: the
/// child never outranks the parent.
fn assert_heap_ordered(queue: &PriorityQueue<i32>) -> Result<(), TestCaseError> {
    let size = queue.size();
    for child in 1..size {
        let parent = (child - 1) / 2;
        prop_assert!(
            !queue.is_heap_unbalanced(parent, child),
            "child {} outranks parent {}",
            child,
            parent
        );
    }
    Ok(())
}

proptest! {
    #[test]
    fn pop_yields_elements_in_comparator_order(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut queue = min_queue();
        for value in &values {
            queue.push(*value);
        }

        let mut expected = values.clone();
        expected.sort_unstable();

        let mut popped = Vec::new();
        while let Some(value) = queue.pop() {
            popped.push(value);
        }

        prop_assert_eq!(popped, expected);
    }

    #[test]
    fn heap_order_holds_under_interleaved_push_and_pop(
        ops in prop::collection::vec((any::<bool>(), any::<i32>()), 0..200)
    ) {
        let mut queue = min_queue();

        for (should_pop, value) in ops {
            if should_pop {
                queue.pop();
            } else {
                queue.push(value);
            }
            assert_heap_ordered(&queue)?;
        }
    }

    #[test]
    fn heap_order_holds_after_query_deletes(
        values in prop::collection::vec(0i32..1000, 1..100),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..20)
    ) {
        let mut queue = min_queue();
        for value in &values {
            queue.push(*value);
        }

        for pick in picks {
            if queue.is_empty() {
                break;
            }
            let target = values[pick.index(values.len())];
            let is_target = move |element: &i32| *element == target;
            let results = queue.query(&[&is_target], QueryOptions::with_limit(1));
            if let Some(handle) = results.first() {
                queue.query_delete(handle);
            }
            assert_heap_ordered(&queue)?;
        }
    }

    #[test]
    fn stringify_round_trips_through_construction(
        ops in prop::collection::vec((any::<bool>(), any::<i32>()), 0..100)
    ) {
        let mut queue = min_queue();
        for (should_pop, value) in ops {
            if should_pop {
                queue.pop();
            } else {
                queue.push(value);
            }
        }

        let serialized = queue.stringify().expect("valid state must stringify");
        let mut restored = PriorityQueue::with_options(
            |a: &i32, b: &i32| a < b,
            PriorityQueueOptions::with_serialized_state(serialized),
        )
        .expect("round-tripped state must reconstruct");

        prop_assert_eq!(&restored.state, &queue.state);

        loop {
            let expected = queue.pop();
            prop_assert_eq!(restored.pop(), expected);
            if expected.is_none() {
                break;
            }
        }
    }

    #[test]
    fn explicit_elements_derive_order_regardless_of_input_ordering(
        values in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let queue = PriorityQueue::with_options(
            |a: &i32, b: &i32| a < b,
            PriorityQueueOptions::with_elements(values),
        )
        .expect("explicit elements never fail construction");

        assert_heap_ordered(&queue)?;
    }
}
