//! The search tree, its cursors and the dot-product join.
//!
//! - [`TreeMap`]: ordered map backed by an unbalanced binary search tree
//! - [`Cursor`]: seekable root-to-node path with inherited interval bounds
//! - [`dot`]: sparse inner product of two maps by merge-join over two cursors
//!
//! The layers depend strictly downwards: maps know nothing of cursors
//! beyond handing one out, and cursors know nothing of the join.
//!
//! # Examples
//!
//! ```rust
//! use seekmap::{Relation, TreeMap};
//!
//! let map: TreeMap<i32, i32> = [(10, 1), (20, 2), (30, 3)].into_iter().collect();
//! let mut cursor = map.cursor();
//!
//! assert_eq!(cursor.seek(&25, Relation::GreaterOrEqual), Some((&30, &3)));
//! assert_eq!(cursor.predecessor(), Some((&20, &2)));
//! assert_eq!(cursor.predecessor(), Some((&10, &1)));
//! assert_eq!(cursor.predecessor(), None);
//! ```

mod cursor;
mod dot;
mod iter;
mod map;
mod node;
mod relation;

pub use cursor::Cursor;
pub use dot::{JoinStats, dot, dot_with_stats};
pub use iter::Iter;
pub use map::TreeMap;
pub use node::NodeId;
pub use relation::Relation;
