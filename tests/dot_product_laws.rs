//! Property-based tests for the sparse dot product.

use proptest::prelude::*;
use seekmap::{TreeMap, dot, dot_with_stats};
use std::collections::BTreeMap;

fn arbitrary_vector() -> impl Strategy<Value = BTreeMap<u16, i64>> {
    prop::collection::btree_map(0..512_u16, -1_000..1_000_i64, 0..64)
}

fn to_tree(model: &BTreeMap<u16, i64>) -> TreeMap<u16, i64> {
    model.iter().map(|(key, value)| (*key, *value)).collect()
}

/// The sum over shared keys, computed by probing one side for every key of
/// the other.
fn naive_dot(left: &BTreeMap<u16, i64>, right: &BTreeMap<u16, i64>) -> i64 {
    left.iter()
        .filter_map(|(key, value)| right.get(key).map(|other| value * other))
        .sum()
}

proptest! {
    /// Law: the join agrees with the naive sum of products over shared keys.
    #[test]
    fn prop_dot_matches_naive(left in arbitrary_vector(), right in arbitrary_vector()) {
        prop_assert_eq!(dot(&to_tree(&left), &to_tree(&right)), naive_dot(&left, &right));
    }

    /// Law: the dot product is symmetric.
    #[test]
    fn prop_dot_is_symmetric(left in arbitrary_vector(), right in arbitrary_vector()) {
        let (left, right) = (to_tree(&left), to_tree(&right));
        prop_assert_eq!(dot(&left, &right), dot(&right, &left));
    }

    /// Law: the match count equals the size of the key intersection.
    #[test]
    fn prop_matches_count_shared_keys(left in arbitrary_vector(), right in arbitrary_vector()) {
        let shared = left.keys().filter(|key| right.contains_key(key)).count();
        let (_, stats) = dot_with_stats(&to_tree(&left), &to_tree(&right));
        prop_assert_eq!(stats.matches, shared);
    }

    /// Law: every loop iteration either matches or jumps, and costs at most
    /// two seeks.
    #[test]
    fn prop_seeks_bounded_by_iterations(left in arbitrary_vector(), right in arbitrary_vector()) {
        let (_, stats) = dot_with_stats(&to_tree(&left), &to_tree(&right));
        prop_assert!(stats.seeks <= 2 * (stats.matches + stats.misses) + 1);
    }

    /// Law: a map with no shared keys contributes nothing.
    #[test]
    fn prop_disjoint_is_zero(left in arbitrary_vector()) {
        let shifted: BTreeMap<u16, i64> = left.iter().map(|(key, value)| (key + 1_000, *value)).collect();
        prop_assert_eq!(dot(&to_tree(&left), &to_tree(&shifted)), 0);
    }
}
