//! Pluggable key and value behaviour.
//!
//! A map is parameterised by two capabilities:
//!
//! - [`KeyOrder`]: a strict total order over keys and a way to duplicate a key
//!   into independently owned storage
//! - [`ValueCombine`]: a zero value for absent keys and the multiply-accumulate
//!   step used by the dot product
//!
//! # Examples
//!
//! ```rust
//! use seekmap::policy::{KeyOrder, NaturalOrder, ReverseOrder, ValueCombine};
//! use std::cmp::Ordering;
//!
//! assert_eq!(<NaturalOrder as KeyOrder<i32>>::compare(&1, &2), Ordering::Less);
//! assert_eq!(<ReverseOrder as KeyOrder<i32>>::compare(&1, &2), Ordering::Greater);
//!
//! let mut accumulator = f64::zero();
//! accumulator.multiply_accumulate(&3.0, &4.0);
//! assert_eq!(accumulator, 12.0);
//! ```

mod key_order;
mod value_combine;

pub use key_order::{KeyOrder, NaturalOrder, ReverseOrder};
pub use value_combine::ValueCombine;
