//! # tada-core
//!
//! Core types and per-color algebra for tada.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - [`Color`] - Three-channel numeric tuple with value semantics
//! - [`Channel`] - Trait for channel scalar types (`f32`, `f64`, `f16`)
//! - [`ChannelRange`] - Trait and marker types for the value of a full channel
//! - [`Relation`] - Relational operators over the color order
//! - [`codec`] - Hex and text codecs
//! - [`Error`] - Error type for the few fallible operations
//!
//! ## Design Philosophy
//!
//! Colors are plain values. Every operation on a single color is pure and
//! returns a new color; the only mutation is channel assignment through
//! `IndexMut`. Bulk, in-place mutation belongs to color lists (`tada-list`).
//!
//! Channel ranges are tracked at compile time:
//!
//! ```ignore
//! let a: Color<Normal, f32> = ...;
//! let b: Color<Range255, f32> = ...;
//! // let bad = a + b; // Compile error!
//! let ok = a + b.convert_range();
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! tada-math (numeric rules, index utilities)
//!    ^
//!    |
//! tada-core (this crate)
//!    ^
//!    |
//! tada-list (color lists)
//! ```
//!
//! ## Feature Flags
//!
//! - `f16` - `Channel` for `half::f16` (enabled by default)
//! - `serde` - Serialization for [`Color`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod algebra;
pub mod channel;
pub mod codec;
pub mod color;
pub mod compare;
pub mod error;
pub mod range;

// Re-exports for convenience
pub use algebra::{unit_hash, HASH_BUCKETS};
pub use channel::Channel;
pub use color::Color;
pub use compare::Relation;
pub use error::{Error, Result};
pub use range::{ChannelRange, Normal, Range255, Range256};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tada_core::prelude::*;
///
/// let c: Color<Normal, f32> = Color::new(0.0, 0.5, 1.0);
/// assert!(c.compare_with(&c, Relation::Eq));
/// ```
pub mod prelude {
    pub use crate::channel::Channel;
    pub use crate::color::Color;
    pub use crate::compare::Relation;
    pub use crate::error::{Error, Result};
    pub use crate::range::{ChannelRange, Normal, Range255, Range256};
}
