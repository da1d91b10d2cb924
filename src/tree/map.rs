//! Ordered map backed by an unbalanced binary search tree.
//!
//! This module provides [`TreeMap`], an ordered dictionary whose nodes live in
//! an arena and are addressed by [`NodeId`].
//!
//! # Overview
//!
//! - insert-or-update and lookup by plain root-to-leaf descent
//! - no rebalancing: the height equals the key count under sorted insertion
//! - deep copy duplicates every key through the [`KeyOrder`] policy
//! - teardown and copy walk the arena, never the tree, so they use no recursion
//!
//! # Examples
//!
//! ```rust
//! use seekmap::TreeMap;
//!
//! let mut map: TreeMap<&str, f64> = TreeMap::new();
//! assert_eq!(map.insert(&"b", 2.0), 0.0);
//! assert_eq!(map.insert(&"b", 3.0), 2.0);
//! map.insert(&"a", 1.0);
//!
//! assert_eq!(map.lookup(&"b"), 3.0);
//! assert_eq!(map.lookup(&"z"), 0.0);
//! assert_eq!(format!("{map}"), "{a: 1, b: 3}");
//! ```
//!
//! # Internal Structure
//!
//! An empty map has no root. Every arena slot holds a populated node: a new
//! node is allocated at the first write to a child link and receives its key
//! in the same step, so no keyless slot ever persists below the root.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::mem;

use super::cursor::Cursor;
use super::dot::dot;
use super::iter::Iter;
use super::node::{Node, NodeId};
use crate::error::MapError;
use crate::policy::{KeyOrder, NaturalOrder, ValueCombine};
use crate::trace::trace_event;

/// Where a descent for a key ended.
enum Slot {
    Occupied(NodeId),
    Vacant(Link),
}

/// The unwritten child link a new node would hang from.
#[derive(Clone, Copy)]
enum Link {
    Root,
    Left(NodeId),
    Right(NodeId),
}

// =============================================================================
// TreeMap Definition
// =============================================================================

/// An ordered map backed by an unbalanced binary search tree.
///
/// Keys are ordered by the `O` policy (see [`KeyOrder`]); values provide a
/// zero for absent keys (see [`ValueCombine`]).
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `insert`       | O(h)              |
/// | `lookup`/`get` | O(h)              |
/// | `copy`         | O(N)              |
/// | `clear`        | O(N)              |
/// | `len`          | O(1)              |
///
/// `h` is the tree height, at most N since no rebalancing is performed.
///
/// # Examples
///
/// ```rust
/// use seekmap::TreeMap;
///
/// let map: TreeMap<i32, i32> = [(3, 30), (1, 10), (2, 20)].into_iter().collect();
///
/// let keys: Vec<&i32> = map.keys().collect();
/// assert_eq!(keys, vec![&1, &2, &3]);
/// assert_eq!(map.get(&2), Some(&20));
/// assert_eq!(map.get(&4), None);
/// ```
pub struct TreeMap<K, V, O = NaturalOrder> {
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
    order: PhantomData<fn() -> O>,
}

impl<K, V, O> TreeMap<K, V, O> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seekmap::TreeMap;
    ///
    /// let map: TreeMap<i32, i32> = TreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            order: PhantomData,
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
            order: PhantomData,
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Releases every node, leaving an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seekmap::TreeMap;
    ///
    /// let mut map: TreeMap<i32, i32> = (0..10).map(|key| (key, key)).collect();
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.lookup(&3), 0);
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seekmap::TreeMap;
    ///
    /// // Sorted insertion degenerates into a list.
    /// let map: TreeMap<i32, i32> = (0..100).map(|key| (key, key)).collect();
    /// assert_eq!(map.height(), 100);
    /// ```
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut pending: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = pending.pop() {
            tallest = tallest.max(depth);
            let node = self.node(id);
            pending.extend(node.left.map(|child| (child, depth + 1)));
            pending.extend(node.right.map(|child| (child, depth + 1)));
        }
        tallest
    }

    /// Returns a cursor positioned at the root, with an unbounded interval.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, K, V, O> {
        Cursor::new(self)
    }

    #[inline]
    pub(crate) const fn root(&self) -> Option<NodeId> {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.index()]
    }
}

impl<K, V, O: KeyOrder<K>> TreeMap<K, V, O> {
    /// Descends from the root towards `key`.
    fn locate(&self, key: &K) -> Slot {
        let Some(mut current) = self.root else {
            return Slot::Vacant(Link::Root);
        };
        loop {
            let node = self.node(current);
            match O::compare(key, &node.key) {
                Ordering::Less => match node.left {
                    Some(child) => current = child,
                    None => return Slot::Vacant(Link::Left(current)),
                },
                Ordering::Greater => match node.right {
                    Some(child) => current = child,
                    None => return Slot::Vacant(Link::Right(current)),
                },
                Ordering::Equal => return Slot::Occupied(current),
            }
        }
    }

    /// Allocates a populated node and hangs it from `link`.
    fn attach(&mut self, link: Link, key: &K, value: V) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::leaf(O::duplicate(key), value));
        match link {
            Link::Root => self.root = Some(id),
            Link::Left(parent) => self.nodes[parent.index()].left = Some(id),
            Link::Right(parent) => self.nodes[parent.index()].right = Some(id),
        }
        id
    }

    /// Inserts `value` under `key`, returning the previous value or zero.
    ///
    /// The key is duplicated through the policy only when a new node is
    /// created; updating an existing key keeps the stored key.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seekmap::TreeMap;
    ///
    /// let mut map: TreeMap<i32, i32> = TreeMap::new();
    /// assert_eq!(map.insert(&1, 10), 0);
    /// assert_eq!(map.insert(&1, 11), 10);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: &K, value: V) -> V
    where
        V: ValueCombine,
    {
        match self.locate(key) {
            Slot::Occupied(id) => mem::replace(&mut self.nodes[id.index()].value, value),
            Slot::Vacant(link) => {
                self.attach(link, key, value);
                V::zero()
            }
        }
    }

    /// Like [`insert`](Self::insert), but reports a failure to grow the node
    /// arena instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::AllocationFailed`] if a new node was needed and the
    /// arena could not reserve space for it. The map is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seekmap::TreeMap;
    ///
    /// let mut map: TreeMap<i32, i32> = TreeMap::new();
    /// assert_eq!(map.try_insert(&1, 10), Ok(0));
    /// assert_eq!(map.try_insert(&1, 20), Ok(10));
    /// ```
    pub fn try_insert(&mut self, key: &K, value: V) -> Result<V, MapError>
    where
        V: ValueCombine,
    {
        match self.locate(key) {
            Slot::Occupied(id) => Ok(mem::replace(&mut self.nodes[id.index()].value, value)),
            Slot::Vacant(link) => {
                self.nodes.try_reserve(1).map_err(|error| {
                    trace_event!(debug, entries = self.nodes.len(), "node allocation failed");
                    MapError::AllocationFailed(error)
                })?;
                self.attach(link, key, value);
                Ok(V::zero())
            }
        }
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seekmap::TreeMap;
    ///
    /// let map: TreeMap<i32, i32> = [(1, 10)].into_iter().collect();
    /// assert_eq!(map.get(&1), Some(&10));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        match self.locate(key) {
            Slot::Occupied(id) => Some(&self.node(id).value),
            Slot::Vacant(_) => None,
        }
    }

    /// Returns the value stored under `key`, or zero if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seekmap::TreeMap;
    ///
    /// let map: TreeMap<&str, f64> = [("x", 1.5)].into_iter().collect();
    /// assert_eq!(map.lookup(&"x"), 1.5);
    /// assert_eq!(map.lookup(&"y"), 0.0);
    /// ```
    pub fn lookup(&self, key: &K) -> V
    where
        V: ValueCombine + Clone,
    {
        self.get(key).cloned().unwrap_or_else(V::zero)
    }

    /// Returns `true` if the map holds an entry for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        matches!(self.locate(key), Slot::Occupied(_))
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.cursor().descend_min()
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.cursor().descend_max()
    }

    /// Returns an iterator over the entries in key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seekmap::TreeMap;
    ///
    /// let map: TreeMap<i32, char> = TreeMap::new();
    /// assert_eq!(map.iter().next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, O> {
        Iter::new(self)
    }

    /// Returns an iterator over the keys in order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.iter().map(|(_, value)| value)
    }

    /// Produces a fully independent deep copy of the map.
    ///
    /// Every key is re-created with [`KeyOrder::duplicate`]; the copy has the
    /// same shape as the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seekmap::TreeMap;
    ///
    /// let mut original: TreeMap<String, i32> = TreeMap::new();
    /// original.insert(&"a".to_string(), 1);
    ///
    /// let mut copy = original.copy();
    /// copy.insert(&"a".to_string(), 2);
    ///
    /// assert_eq!(original.lookup(&"a".to_string()), 1);
    /// assert_eq!(copy.lookup(&"a".to_string()), 2);
    /// ```
    #[must_use]
    pub fn copy(&self) -> Self
    where
        V: Clone,
    {
        let nodes = self
            .nodes
            .iter()
            .map(|node| Node {
                key: O::duplicate(&node.key),
                value: node.value.clone(),
                left: node.left,
                right: node.right,
            })
            .collect();
        Self {
            nodes,
            root: self.root,
            order: PhantomData,
        }
    }

    /// Computes the sparse inner product of two maps. See [`dot`].
    pub fn dot(&self, other: &Self) -> V
    where
        V: ValueCombine,
    {
        dot(self, other)
    }

    /// Checks the search-tree invariant over the whole arena.
    ///
    /// Every key must lie strictly inside the open interval inherited from
    /// its ancestors, and every arena node must be reachable from the root
    /// exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvariantViolated`] describing the first broken
    /// node found.
    pub fn validate(&self) -> Result<(), MapError> {
        let violated = |detail: String| Err(MapError::InvariantViolated { detail });

        let mut visited = vec![false; self.nodes.len()];
        let mut pending: Vec<(NodeId, Option<NodeId>, Option<NodeId>)> = Vec::new();
        match self.root {
            Some(root) => pending.push((root, None, None)),
            None if self.nodes.is_empty() => return Ok(()),
            None => return violated(format!("{} nodes but no root", self.nodes.len())),
        }

        while let Some((id, lower, upper)) = pending.pop() {
            let Some(seen) = visited.get_mut(id.index()) else {
                return violated(format!("link to {id} points outside the arena"));
            };
            if mem::replace(seen, true) {
                return violated(format!("node {id} is reachable twice"));
            }
            let node = self.node(id);
            if let Some(lower) = lower
                && O::compare(&self.node(lower).key, &node.key) != Ordering::Less
            {
                return violated(format!("node {id} is not above its lower bound {lower}"));
            }
            if let Some(upper) = upper
                && O::compare(&node.key, &self.node(upper).key) != Ordering::Less
            {
                return violated(format!("node {id} is not below its upper bound {upper}"));
            }
            pending.extend(node.left.map(|child| (child, lower, Some(id))));
            pending.extend(node.right.map(|child| (child, Some(id), upper)));
        }

        match visited.iter().position(|seen| !seen) {
            Some(index) => violated(format!("node {} is unreachable", NodeId::new(index))),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, O> Default for TreeMap<K, V, O> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V: Clone, O: KeyOrder<K>> Clone for TreeMap<K, V, O> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<K, V: ValueCombine, O: KeyOrder<K>> FromIterator<(K, V)> for TreeMap<K, V, O> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V: ValueCombine, O: KeyOrder<K>> Extend<(K, V)> for TreeMap<K, V, O> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(&key, value);
        }
    }
}

impl<'a, K, V, O: KeyOrder<K>> IntoIterator for &'a TreeMap<K, V, O> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two maps are equal when they hold the same entries in the same order,
/// whatever their shapes.
impl<K, V: PartialEq, O: KeyOrder<K>> PartialEq for TreeMap<K, V, O> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|((key, value), (other_key, other_value))| {
                O::compare(key, other_key) == Ordering::Equal && value == other_value
            })
    }
}

impl<K: fmt::Debug, V: fmt::Debug, O: KeyOrder<K>> fmt::Debug for TreeMap<K, V, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, O: KeyOrder<K>> fmt::Display for TreeMap<K, V, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}
