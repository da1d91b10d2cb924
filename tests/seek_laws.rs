//! Property-based tests for Cursor seeks.
//!
//! Every seek is compared against the answer a sorted `BTreeMap` gives for the
//! same key and relation.

use proptest::prelude::*;
use seekmap::{Relation, ReverseOrder, TreeMap};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::ops::Bound;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

fn arbitrary_relation() -> impl Strategy<Value = Relation> {
    prop::sample::select(Relation::ALL.to_vec())
}

fn arbitrary_keys() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..48)
}

/// The expected seek answer, computed from the model.
fn model_seek<K: Ord + Copy>(model: &BTreeMap<K, u32>, key: K, relation: Relation) -> Option<(K, u32)> {
    let found = match relation {
        Relation::Equal => model.get_key_value(&key),
        Relation::Less => model.range(..key).next_back(),
        Relation::LessOrEqual => model.range(..=key).next_back(),
        Relation::Greater => model.range((Bound::Excluded(key), Bound::Unbounded)).next(),
        Relation::GreaterOrEqual => model.range(key..).next(),
    };
    found.map(|(key, value)| (*key, *value))
}

fn build(keys: &[u8]) -> (TreeMap<u8, u32>, BTreeMap<u8, u32>) {
    let entries: Vec<(u8, u32)> = keys.iter().map(|key| (*key, u32::from(*key) * 3 + 1)).collect();
    (entries.iter().copied().collect(), entries.into_iter().collect())
}

// =============================================================================
// Seek Correctness Laws
// =============================================================================

proptest! {
    /// Law: a seek from a fresh cursor finds the nearest satisfying key.
    #[test]
    fn prop_seek_from_root_matches_model(
        keys in arbitrary_keys(),
        target: u8,
        relation in arbitrary_relation(),
    ) {
        let (map, model) = build(&keys);
        let mut cursor = map.cursor();
        let actual = cursor.seek(&target, relation).map(|(key, value)| (*key, *value));
        prop_assert_eq!(actual, model_seek(&model, target, relation));
    }

    /// Law: a sequence of seeks from one travelling cursor gives the same
    /// answers as fresh cursors, whatever state the previous seek left behind.
    #[test]
    fn prop_seek_sequence_matches_model(
        keys in arbitrary_keys(),
        queries in prop::collection::vec((any::<u8>(), arbitrary_relation()), 1..32),
    ) {
        let (map, model) = build(&keys);
        let mut cursor = map.cursor();
        for (target, relation) in queries {
            let actual = cursor.seek(&target, relation).map(|(key, value)| (*key, *value));
            prop_assert_eq!(actual, model_seek(&model, target, relation));
        }
    }

    /// Law: under `ReverseOrder` a travelling cursor answers like a model
    /// keyed by `Reverse`, so "less" means numerically larger.
    #[test]
    fn prop_reverse_order_seek_matches_model(
        keys in arbitrary_keys(),
        queries in prop::collection::vec((any::<u8>(), arbitrary_relation()), 1..32),
    ) {
        let map: TreeMap<u8, u32, ReverseOrder> =
            keys.iter().map(|key| (*key, u32::from(*key) * 3 + 1)).collect();
        let model: BTreeMap<Reverse<u8>, u32> =
            keys.iter().map(|key| (Reverse(*key), u32::from(*key) * 3 + 1)).collect();

        let mut cursor = map.cursor();
        for (target, relation) in queries {
            let actual = cursor.seek(&target, relation).map(|(key, value)| (*key, *value));
            let expected = model_seek(&model, Reverse(target), relation)
                .map(|(Reverse(key), value)| (key, value));
            prop_assert_eq!(actual, expected);
        }
    }

    /// Law: whenever the cursor rests on a node, its key lies strictly inside
    /// the frame's bounds.
    #[test]
    fn prop_position_lies_within_bounds(
        keys in arbitrary_keys(),
        queries in prop::collection::vec((any::<u8>(), arbitrary_relation()), 1..16),
    ) {
        let (map, _) = build(&keys);
        let mut cursor = map.cursor();
        for (target, relation) in queries {
            if let Some((key, _)) = cursor.seek(&target, relation) {
                prop_assert!(cursor.in_range(key));
                if let Some(lower) = cursor.lower_bound_key() {
                    prop_assert!(lower < key);
                }
                if let Some(upper) = cursor.upper_bound_key() {
                    prop_assert!(key < upper);
                }
            }
        }
    }
}

// =============================================================================
// Traversal Order Laws
// =============================================================================

proptest! {
    /// Law: successor steps from the minimum visit every key once, ascending.
    #[test]
    fn prop_successor_walk_is_sorted(keys in arbitrary_keys()) {
        let (map, model) = build(&keys);
        let mut cursor = map.cursor();
        let mut visited = Vec::new();
        let mut entry = cursor.descend_min();
        while let Some((key, _)) = entry {
            visited.push(*key);
            entry = cursor.successor();
        }
        let expected: Vec<u8> = model.keys().copied().collect();
        prop_assert_eq!(visited, expected);
    }

    /// Law: predecessor steps from the maximum visit every key once, descending.
    #[test]
    fn prop_predecessor_walk_is_reverse_sorted(keys in arbitrary_keys()) {
        let (map, model) = build(&keys);
        let mut cursor = map.cursor();
        let mut visited = Vec::new();
        let mut entry = cursor.descend_max();
        while let Some((key, _)) = entry {
            visited.push(*key);
            entry = cursor.predecessor();
        }
        let expected: Vec<u8> = model.keys().rev().copied().collect();
        prop_assert_eq!(visited, expected);
    }

    /// Law: stepping from an absent slot recovers the neighbours of the gap.
    #[test]
    fn prop_step_out_of_gap(keys in arbitrary_keys(), target: u8) {
        let (map, model) = build(&keys);
        prop_assume!(!model.contains_key(&target));

        let mut cursor = map.cursor();
        prop_assert_eq!(cursor.seek(&target, Relation::Equal), None);
        let mut before = cursor.clone();

        let next = cursor.successor().map(|(key, _)| *key);
        prop_assert_eq!(next, model.range(target..).next().map(|(key, _)| *key));
        let previous = before.predecessor().map(|(key, _)| *key);
        prop_assert_eq!(previous, model.range(..target).next_back().map(|(key, _)| *key));
    }
}
