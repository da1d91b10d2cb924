//! # seekmap
//!
//! An ordered map backed by an unbalanced binary search tree, with seekable
//! cursors and a merge-join sparse dot product.
//!
//! ## Overview
//!
//! - **Map**: [`TreeMap`], an arena-backed binary search tree with
//!   insert-or-update, lookup, deep copy and teardown.
//! - **Cursor**: [`Cursor`], a root-to-node path whose frames carry the open
//!   interval inherited from the path. Seeking reuses as much of the path as
//!   possible instead of restarting from the root.
//! - **Intersection**: [`dot`], the inner product of two maps viewed as sparse
//!   vectors, computed by alternately seeking each cursor to the other's key.
//!
//! Key ordering and value arithmetic are pluggable through the
//! [`KeyOrder`] and [`ValueCombine`] policies.
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` events from seeks and joins (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use seekmap::prelude::*;
//!
//! let left: TreeMap<&str, f64> = [("a", 2.0), ("c", 5.0), ("e", 1.0)].into_iter().collect();
//! let right: TreeMap<&str, f64> = [("b", 3.0), ("c", 4.0), ("e", 2.0), ("f", 9.0)]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(dot(&left, &right), 22.0);
//!
//! let mut cursor = left.cursor();
//! assert_eq!(cursor.seek(&"d", Relation::Less), Some((&"c", &5.0)));
//! assert_eq!(cursor.seek(&"d", Relation::Greater), Some((&"e", &1.0)));
//! assert_eq!(cursor.seek(&"d", Relation::Equal), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod trace;

pub mod error;
pub mod policy;
pub mod tree;

pub use error::{InvalidRelationError, InvalidRelationSyntaxError, MapError};
pub use policy::{KeyOrder, NaturalOrder, ReverseOrder, ValueCombine};
pub use tree::{Cursor, Iter, JoinStats, NodeId, Relation, TreeMap, dot, dot_with_stats};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use seekmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::policy::*;
    pub use crate::tree::*;
}
