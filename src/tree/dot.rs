//! Sparse dot product by merge-join over two cursors.
//!
//! Each map is read as a sparse vector whose absent keys hold zero. The join
//! keeps one cursor per map and repeatedly seeks the lagging side to the
//! other side's key with [`Relation::GreaterOrEqual`], so runs of keys present
//! on only one side are skipped through the tree rather than scanned.

use std::cmp::Ordering;

use super::map::TreeMap;
use super::relation::Relation;
use crate::policy::{KeyOrder, ValueCombine};
use crate::trace::trace_event;

/// Counters describing the work done by one join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct JoinStats {
    /// Cursor seeks performed, successor steps included.
    pub seeks: usize,
    /// Keys present in both maps.
    pub matches: usize,
    /// Times the right-hand cursor overshot and the left one had to jump.
    pub misses: usize,
}

/// Computes the sum of `left[k] * right[k]` over keys present in both maps.
///
/// Returns zero if either map is empty or the key sets are disjoint.
///
/// # Examples
///
/// ```rust
/// use seekmap::{TreeMap, dot};
///
/// let left: TreeMap<&str, i64> = [("a", 2), ("c", 5), ("e", 1)].into_iter().collect();
/// let right: TreeMap<&str, i64> = [("b", 3), ("c", 4), ("e", 2), ("f", 9)].into_iter().collect();
///
/// assert_eq!(dot(&left, &right), 22);
/// assert_eq!(dot(&left, &TreeMap::new()), 0);
/// ```
pub fn dot<K, V, O>(left: &TreeMap<K, V, O>, right: &TreeMap<K, V, O>) -> V
where
    V: ValueCombine,
    O: KeyOrder<K>,
{
    dot_with_stats(left, right).0
}

/// Like [`dot`], also reporting how many seeks the join needed.
///
/// # Examples
///
/// ```rust
/// use seekmap::{TreeMap, dot_with_stats};
///
/// let single: TreeMap<u32, u32> = [(500, 2)].into_iter().collect();
/// let wide: TreeMap<u32, u32> = (0..1000).map(|key| (key, 3)).collect();
///
/// let (product, stats) = dot_with_stats(&single, &wide);
/// assert_eq!(product, 6);
/// assert_eq!(stats.matches, 1);
/// assert!(stats.seeks <= 2);
/// ```
pub fn dot_with_stats<K, V, O>(left: &TreeMap<K, V, O>, right: &TreeMap<K, V, O>) -> (V, JoinStats)
where
    V: ValueCombine,
    O: KeyOrder<K>,
{
    let mut product = V::zero();
    let mut stats = JoinStats::default();
    if left.is_empty() || right.is_empty() {
        return (product, stats);
    }

    let mut outer = left.cursor();
    let mut inner = right.cursor();
    let mut candidate = outer.descend_min();

    while let Some((outer_key, outer_value)) = candidate {
        stats.seeks += 1;
        let Some((inner_key, inner_value)) = inner.seek(outer_key, Relation::GreaterOrEqual) else {
            break;
        };
        stats.seeks += 1;
        candidate = match O::compare(outer_key, inner_key) {
            Ordering::Equal => {
                product.multiply_accumulate(outer_value, inner_value);
                stats.matches += 1;
                outer.successor()
            }
            _ => {
                stats.misses += 1;
                outer.seek(inner_key, Relation::GreaterOrEqual)
            }
        };
    }

    trace_event!(
        debug,
        seeks = stats.seeks,
        matches = stats.matches,
        misses = stats.misses,
        "dot product joined"
    );
    (product, stats)
}
