//! # tada-list
//!
//! Ordered, mutable lists of colors with bulk algebra.
//!
//! This crate builds on [`tada_core::Color`] and provides:
//!
//! - [`ColorList`] - the list type: keyed access with host-style negative
//!   keys, slicing, insertion and removal, rotation, stable sorting and
//!   channel-wise min/max
//! - [`Operand`] - broadcast (one color) or pairwise (one color per
//!   element) right-hand side for in-place list math
//! - Spreads - growing a list by linear interpolation towards a target
//!
//! ## Quick Start
//!
//! ```
//! use tada_core::{Color, Normal};
//! use tada_list::{ColorList, Slice};
//!
//! type C = Color<Normal, f64>;
//!
//! let mut list: ColorList<Normal, f64> = ColorList::from_hex_list(&[0xFF0000, 0x00FF00]);
//! list.spread_append(4, C::new(0.0, 0.0, 1.0));
//! list.rotate(1);
//!
//! let tail = list.slice_out(&Slice::new(Some(-2), None, 1)).unwrap();
//! assert_eq!(tail.len(), 2);
//! ```
//!
//! ## Failure Model
//!
//! Lookups that may legitimately miss return `Option` (`get`, `pop`,
//! `index_of`). Operations that are given bad input return
//! [`tada_core::Result`]; in both cases the list is left unchanged.
//!
//! ## Feature Flags
//!
//! - `serde` - Serialization for [`ColorList`] as a plain array of colors

#![warn(missing_docs)]

pub mod list;
pub mod math;

pub use list::ColorList;
pub use math::Operand;
pub use tada_math::Slice;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::list::ColorList;
    pub use crate::math::Operand;
    pub use tada_core::prelude::*;
    pub use tada_math::Slice;
}
