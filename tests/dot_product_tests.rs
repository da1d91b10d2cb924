//! Unit tests for the sparse dot product.

use rstest::rstest;
use seekmap::{ReverseOrder, TreeMap, dot, dot_with_stats};

fn vector(entries: &[(&'static str, f64)]) -> TreeMap<&'static str, f64> {
    entries.iter().copied().collect()
}

#[rstest]
fn test_worked_example() {
    let left = vector(&[("a", 2.0), ("c", 5.0), ("e", 1.0)]);
    let right = vector(&[("b", 3.0), ("c", 4.0), ("e", 2.0), ("f", 9.0)]);
    assert_eq!(dot(&left, &right), 22.0);
    assert_eq!(left.dot(&right), 22.0);
}

#[rstest]
fn test_both_empty() {
    let empty = vector(&[]);
    assert_eq!(dot(&empty, &empty), 0.0);
}

#[rstest]
fn test_disjoint_keys() {
    let left = vector(&[("a", 1.0), ("c", 1.0), ("e", 1.0)]);
    let right = vector(&[("b", 1.0), ("d", 1.0), ("f", 1.0)]);
    assert_eq!(dot(&left, &right), 0.0);
}

#[rstest]
fn test_identical_keys() {
    let left = vector(&[("x", 1.0), ("y", 2.0), ("z", 3.0)]);
    let right = vector(&[("z", 6.0), ("x", 4.0), ("y", 5.0)]);
    assert_eq!(dot(&left, &right), 32.0);
}

#[rstest]
fn test_self_dot_is_squared_norm() {
    let map: TreeMap<i64, i64> = (1..=10).map(|key| (key, key)).collect();
    assert_eq!(dot(&map, &map), 385);
}

#[rstest]
fn test_dot_under_reverse_order() {
    let left: TreeMap<i32, i32, ReverseOrder> = [(1, 1), (2, 2), (3, 3)].into_iter().collect();
    let right: TreeMap<i32, i32, ReverseOrder> = [(3, 10), (1, 100)].into_iter().collect();
    assert_eq!(dot(&left, &right), 130);
}

#[rstest]
#[case::small_left(1, 10_000)]
#[case::small_right(10_000, 1)]
fn test_single_key_against_large_map_is_cheap(#[case] left_len: u32, #[case] right_len: u32) {
    let spread = |len: u32| -> TreeMap<u32, u32> {
        if len == 1 {
            [(4_321, 2)].into_iter().collect()
        } else {
            // Midpoint-first insertion keeps the tree shallow.
            let mut keys: Vec<u32> = Vec::new();
            let mut ranges = vec![(0, len)];
            while let Some((low, high)) = ranges.pop() {
                if low < high {
                    let middle = low + (high - low) / 2;
                    keys.push(middle);
                    ranges.push((low, middle));
                    ranges.push((middle + 1, high));
                }
            }
            keys.into_iter().map(|key| (key, 3)).collect()
        }
    };
    let (product, stats) = dot_with_stats(&spread(left_len), &spread(right_len));
    assert_eq!(product, 6);
    assert_eq!(stats.matches, 1);
    assert!(stats.seeks <= 5, "{stats:?}");
}

#[rstest]
fn test_interleaved_runs_skip_through_tree() {
    let left: TreeMap<u32, u32> = (0..1_000).map(|key| (key, 1)).collect();
    let right: TreeMap<u32, u32> = [(100, 1), (500, 1), (900, 1)].into_iter().collect();
    let (product, stats) = dot_with_stats(&left, &right);
    assert_eq!(product, 3);
    assert_eq!(stats.matches, 3);
    assert!(stats.seeks < 20, "{stats:?}");
}
