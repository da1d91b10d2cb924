//! Key ordering policies.

use std::cmp::Ordering;

/// A strict total order over `K` together with key duplication.
///
/// Implementors are usually zero-sized marker types supplied as the `O`
/// parameter of [`TreeMap`](crate::TreeMap). `compare` must be a strict total
/// order: consistent, antisymmetric and transitive. A map whose keys are
/// compared inconsistently gives unspecified (but memory-safe) answers.
///
/// `duplicate` is called exactly once per new node and once per node when a
/// map is deep-copied.
///
/// # Examples
///
/// ```rust
/// use seekmap::{KeyOrder, TreeMap};
/// use std::cmp::Ordering;
///
/// /// Orders strings by length first, then lexicographically.
/// struct ShortestFirst;
///
/// impl KeyOrder<String> for ShortestFirst {
///     fn compare(left: &String, right: &String) -> Ordering {
///         left.len().cmp(&right.len()).then_with(|| left.cmp(right))
///     }
///
///     fn duplicate(key: &String) -> String {
///         key.clone()
///     }
/// }
///
/// let mut map: TreeMap<String, i32, ShortestFirst> = TreeMap::new();
/// map.insert(&"ccc".to_string(), 3);
/// map.insert(&"a".to_string(), 1);
/// map.insert(&"bb".to_string(), 2);
///
/// let keys: Vec<&String> = map.keys().collect();
/// assert_eq!(keys, vec!["a", "bb", "ccc"]);
/// ```
pub trait KeyOrder<K> {
    /// Three-way comparison of two keys.
    fn compare(left: &K, right: &K) -> Ordering;

    /// Produces an independently owned copy of `key`.
    fn duplicate(key: &K) -> K;
}

/// Orders keys by their [`Ord`] implementation and duplicates them with
/// [`Clone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NaturalOrder;

impl<K: Ord + Clone> KeyOrder<K> for NaturalOrder {
    #[inline]
    fn compare(left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }

    #[inline]
    fn duplicate(key: &K) -> K {
        key.clone()
    }
}

/// Orders keys by the reverse of their [`Ord`] implementation.
///
/// Under this policy "less" means "greater by `Ord`", so the minimum of a map
/// is its largest key and seek relations are interpreted accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReverseOrder;

impl<K: Ord + Clone> KeyOrder<K> for ReverseOrder {
    #[inline]
    fn compare(left: &K, right: &K) -> Ordering {
        right.cmp(left)
    }

    #[inline]
    fn duplicate(key: &K) -> K {
        key.clone()
    }
}
