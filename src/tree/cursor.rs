//! Seekable cursors over a [`TreeMap`].
//!
//! A [`Cursor`] is the path from the root to its current position, kept as a
//! stack of frames. Each frame records the open interval `(lower, upper)`
//! inherited from the path: entering a left subtree tightens `upper` to the
//! parent, entering a right subtree tightens `lower`. Because every frame
//! knows which keys its subtree can hold, a seek only climbs as far as the
//! first ancestor whose interval contains the target and descends from there.
//!
//! # States
//!
//! - positioned on a node: [`entry`](Cursor::entry) is `Some`
//! - on an absent child (a gap between two keys): `entry` is `None`, the
//!   frame's bounds still describe the gap
//! - exhausted: every frame was popped while rewinding to a bound that does
//!   not exist; [`seek`](Cursor::seek) restarts from the root
//!
//! # Examples
//!
//! ```rust
//! use seekmap::{Relation, TreeMap};
//!
//! let map: TreeMap<&str, i32> = [("a", 1), ("c", 3), ("e", 5)].into_iter().collect();
//! let mut cursor = map.cursor();
//!
//! assert_eq!(cursor.seek(&"d", Relation::Less), Some((&"c", &3)));
//! assert_eq!(cursor.successor(), Some((&"e", &5)));
//! assert_eq!(cursor.successor(), None);
//! assert!(cursor.is_exhausted());
//! ```

use std::cmp::Ordering;
use std::fmt;

use super::map::TreeMap;
use super::node::NodeId;
use super::relation::Relation;
use crate::policy::{KeyOrder, NaturalOrder};
use crate::trace::trace_event;

/// One step of the path: a node (or an absent child) and the bound nodes
/// whose keys enclose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    node: Option<NodeId>,
    lower: Option<NodeId>,
    upper: Option<NodeId>,
}

impl Frame {
    const fn unbounded(node: Option<NodeId>) -> Self {
        Self {
            node,
            lower: None,
            upper: None,
        }
    }
}

/// A traversal position in a [`TreeMap`] that supports ordered seeks.
///
/// The cursor borrows the map, so the map cannot change while the cursor is
/// alive. Several cursors may traverse one map independently.
///
/// Motion methods return the entry the cursor lands on, or `None` if it lands
/// on no node.
pub struct Cursor<'a, K, V, O = NaturalOrder> {
    map: &'a TreeMap<K, V, O>,
    /// Root first; the parent of `frames[i]` is `frames[i - 1]`.
    frames: Vec<Frame>,
}

impl<'a, K, V, O> Cursor<'a, K, V, O> {
    /// Opens a cursor with a single unbounded frame over the map's root.
    pub fn new(map: &'a TreeMap<K, V, O>) -> Self {
        Self {
            map,
            frames: vec![Frame::unbounded(map.root())],
        }
    }

    /// Returns the cursor to a single frame over the root.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.frames.push(Frame::unbounded(self.map.root()));
    }

    /// Number of frames on the path, including the root frame.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` once every frame has been popped.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }

    /// The node under the cursor.
    #[inline]
    pub fn node_id(&self) -> Option<NodeId> {
        self.top().and_then(|frame| frame.node)
    }

    /// The entry under the cursor.
    pub fn entry(&self) -> Option<(&'a K, &'a V)> {
        let map = self.map;
        self.node_id().map(|id| {
            let node = map.node(id);
            (&node.key, &node.value)
        })
    }

    /// The key under the cursor.
    pub fn key(&self) -> Option<&'a K> {
        self.entry().map(|(key, _)| key)
    }

    /// The value under the cursor.
    pub fn value(&self) -> Option<&'a V> {
        self.entry().map(|(_, value)| value)
    }

    /// Key of the current frame's exclusive lower bound.
    pub fn lower_bound_key(&self) -> Option<&'a K> {
        let map = self.map;
        self.top().and_then(|frame| frame.lower).map(|id| &map.node(id).key)
    }

    /// Key of the current frame's exclusive upper bound.
    pub fn upper_bound_key(&self) -> Option<&'a K> {
        let map = self.map;
        self.top().and_then(|frame| frame.upper).map(|id| &map.node(id).key)
    }

    #[inline]
    fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Discards the top frame. Returns `false` if the cursor was already
    /// exhausted.
    pub fn pop(&mut self) -> bool {
        self.frames.pop().is_some()
    }

    /// Pushes a frame over the left child of the current node, tightening the
    /// upper bound to that node.
    ///
    /// Returns `false`, pushing nothing, if the cursor is not on a node. The
    /// pushed frame may be an absent child.
    pub fn step_left(&mut self) -> bool {
        let Some(&Frame {
            node: Some(id),
            lower,
            ..
        }) = self.top()
        else {
            return false;
        };
        self.frames.push(Frame {
            node: self.map.node(id).left,
            lower,
            upper: Some(id),
        });
        true
    }

    /// Pushes a frame over the right child of the current node, tightening
    /// the lower bound to that node.
    ///
    /// Returns `false`, pushing nothing, if the cursor is not on a node.
    pub fn step_right(&mut self) -> bool {
        let Some(&Frame {
            node: Some(id),
            upper,
            ..
        }) = self.top()
        else {
            return false;
        };
        self.frames.push(Frame {
            node: self.map.node(id).right,
            lower: Some(id),
            upper,
        });
        true
    }

    /// Walks left while a left child exists, landing on the smallest key of
    /// the current subtree.
    pub fn descend_min(&mut self) -> Option<(&'a K, &'a V)> {
        while self
            .node_id()
            .is_some_and(|id| self.map.node(id).left.is_some())
        {
            self.step_left();
        }
        self.entry()
    }

    /// Walks right while a right child exists, landing on the largest key of
    /// the current subtree.
    pub fn descend_max(&mut self) -> Option<(&'a K, &'a V)> {
        while self
            .node_id()
            .is_some_and(|id| self.map.node(id).right.is_some())
        {
            self.step_right();
        }
        self.entry()
    }

    /// Pops back to the ancestor that set the current lower bound: the
    /// nearest key below the current position.
    ///
    /// Without a lower bound there is no such ancestor and the cursor becomes
    /// exhausted.
    pub fn rewind_to_lower(&mut self) -> Option<(&'a K, &'a V)> {
        let target = self.top()?.lower;
        self.rewind_to(target)
    }

    /// Pops back to the ancestor that set the current upper bound: the
    /// nearest key above the current position.
    ///
    /// Without an upper bound the cursor becomes exhausted.
    pub fn rewind_to_upper(&mut self) -> Option<(&'a K, &'a V)> {
        let target = self.top()?.upper;
        self.rewind_to(target)
    }

    fn rewind_to(&mut self, target: Option<NodeId>) -> Option<(&'a K, &'a V)> {
        let Some(target) = target else {
            trace_event!(trace, depth = self.frames.len(), "cursor exhausted");
            self.frames.clear();
            return None;
        };
        while self.node_id() != Some(target) {
            if !self.pop() {
                break;
            }
        }
        debug_assert_eq!(self.node_id(), Some(target), "bound must be an ancestor on the path");
        self.entry()
    }
}

impl<'a, K, V, O: KeyOrder<K>> Cursor<'a, K, V, O> {
    /// Returns `true` if `key` lies strictly inside the current frame's
    /// interval, i.e. the current subtree is where `key` would live.
    ///
    /// An exhausted cursor contains nothing.
    pub fn in_range(&self, key: &K) -> bool {
        let Some(frame) = self.top() else {
            return false;
        };
        let above_lower = frame
            .lower
            .is_none_or(|lower| O::compare(&self.map.node(lower).key, key) == Ordering::Less);
        let below_upper = frame
            .upper
            .is_none_or(|upper| O::compare(&self.map.node(upper).key, key) == Ordering::Greater);
        above_lower && below_upper
    }

    /// Moves to the node nearest to `key` among those satisfying `relation`.
    ///
    /// The cursor first climbs until its interval contains `key`, then
    /// descends. Nearby seeks therefore cost little more than the tree
    /// distance between the old and new positions.
    ///
    /// Returns `None` when no node satisfies the relation. After a missed
    /// [`Relation::Equal`] seek the cursor rests on the absent child where
    /// `key` would be inserted; after a missed directional seek it is
    /// exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seekmap::{Relation, TreeMap};
    ///
    /// let map: TreeMap<i32, i32> = (1..=5).map(|key| (key * 10, key)).collect();
    /// let mut cursor = map.cursor();
    ///
    /// assert_eq!(cursor.seek(&30, Relation::Equal), Some((&30, &3)));
    /// assert_eq!(cursor.seek(&30, Relation::Less), Some((&20, &2)));
    /// assert_eq!(cursor.seek(&35, Relation::LessOrEqual), Some((&30, &3)));
    /// assert_eq!(cursor.seek(&35, Relation::Greater), Some((&40, &4)));
    /// assert_eq!(cursor.seek(&50, Relation::GreaterOrEqual), Some((&50, &5)));
    /// assert_eq!(cursor.seek(&50, Relation::Greater), None);
    /// ```
    pub fn seek(&mut self, key: &K, relation: Relation) -> Option<(&'a K, &'a V)> {
        if self.is_exhausted() {
            self.reset();
        }
        while !self.in_range(key) {
            self.pop();
        }
        debug_assert!(!self.is_exhausted(), "the root frame contains every key");
        trace_event!(trace, %relation, depth = self.frames.len(), "seek climbed");

        let found = self.descend_towards(key, relation);
        trace_event!(trace, %relation, found = found.is_some(), depth = self.frames.len(), "seek settled");
        found
    }

    /// Finishes a seek once the current frame's interval contains `key`.
    fn descend_towards(&mut self, key: &K, relation: Relation) -> Option<(&'a K, &'a V)> {
        while let Some(id) = self.node_id() {
            match O::compare(key, &self.map.node(id).key) {
                Ordering::Less => {
                    self.step_left();
                }
                Ordering::Greater => {
                    self.step_right();
                }
                Ordering::Equal => return self.settle_on_match(id, relation),
            }
        }

        if relation.is_less() {
            self.rewind_to_lower()
        } else if relation.is_greater() {
            self.rewind_to_upper()
        } else {
            None
        }
    }

    /// Resolves a seek whose descent found `key` itself at `id`.
    fn settle_on_match(&mut self, id: NodeId, relation: Relation) -> Option<(&'a K, &'a V)> {
        if relation.includes_equal() {
            return self.entry();
        }
        let map = self.map;
        let node = map.node(id);
        if relation.is_less() {
            if node.left.is_some() {
                self.step_left();
                self.descend_max()
            } else {
                self.rewind_to_lower()
            }
        } else if node.right.is_some() {
            self.step_right();
            self.descend_min()
        } else {
            self.rewind_to_upper()
        }
    }

    /// Moves to the largest key below the current position.
    ///
    /// From an absent child (left behind by a missed [`Relation::Equal`]
    /// seek) this rewinds to the gap's lower bound, the nearest key below the
    /// missing one. It does not restart from the gap's parent, which for a
    /// gap in a left subtree would lie above the gap. An exhausted cursor
    /// stays exhausted.
    pub fn predecessor(&mut self) -> Option<(&'a K, &'a V)> {
        let frame = *self.top()?;
        match frame.node {
            Some(id) => {
                let map = self.map;
                self.seek(&map.node(id).key, Relation::Less)
            }
            None => self.rewind_to_lower(),
        }
    }

    /// Moves to the smallest key above the current position.
    ///
    /// From an absent child (left behind by a missed [`Relation::Equal`]
    /// seek) this rewinds to the gap's upper bound, the nearest key above the
    /// missing one. It does not restart from the gap's parent, which for a
    /// gap in a right subtree would lie below the gap. An exhausted cursor
    /// stays exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seekmap::{Relation, TreeMap};
    ///
    /// let map: TreeMap<i32, i32> = [(10, 1), (30, 3), (20, 2)].into_iter().collect();
    /// let mut cursor = map.cursor();
    ///
    /// // 25 would hang to the right of 20, whose own key lies below the gap.
    /// assert_eq!(cursor.seek(&25, Relation::Equal), None);
    /// assert_eq!(cursor.successor(), Some((&30, &3)));
    /// ```
    pub fn successor(&mut self) -> Option<(&'a K, &'a V)> {
        let frame = *self.top()?;
        match frame.node {
            Some(id) => {
                let map = self.map;
                self.seek(&map.node(id).key, Relation::Greater)
            }
            None => self.rewind_to_upper(),
        }
    }
}

impl<K, V, O> Clone for Cursor<'_, K, V, O> {
    fn clone(&self) -> Self {
        Self {
            map: self.map,
            frames: self.frames.clone(),
        }
    }
}

impl<K: fmt::Debug, V, O> fmt::Debug for Cursor<'_, K, V, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cursor")
            .field("depth", &self.depth())
            .field("key", &self.key())
            .field("lower", &self.lower_bound_key())
            .field("upper", &self.upper_bound_key())
            .finish()
    }
}
