//! # tada-math
//!
//! Scalar utilities underneath the tada color algebra.
//!
//! This crate provides the numeric primitives that color and color-list
//! operations are built from:
//!
//! - [`numeric`] - Host-style numeric semantics (true division, floor modulo,
//!   modular power, banker's rounding)
//! - [`index`] - Index normalization, slice resolution and rotation
//! - Interpolation utilities ([`lerp`], [`spread_steps`])
//!
//! # Design
//!
//! Everything here works on `f64` and plain slices. The channel types in
//! `tada-core` convert through `f64`, so a single implementation of each
//! rule serves every channel type.
//!
//! The numeric rules are deliberately **not** Rust's native ones:
//!
//! ```text
//! -7 % 3        Rust: -1      floor_mod: 2
//! round(2.5)    Rust: 3       round_half_even: 2
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tada_math::{fix_key, floor_mod, round_digits};
//!
//! assert_eq!(floor_mod(-7.0, 3.0), 2.0);
//! assert_eq!(round_digits(0.125, 2), 0.12);
//! assert_eq!(fix_key(-1, 4), Some(3));
//! ```
//!
//! # Used By
//!
//! - `tada-core` - Color algebra
//! - `tada-list` - Color list algebra

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod index;
mod interp;
pub mod numeric;

pub use index::{clamp_key, fix_key, rotate, Slice, SliceError, SliceIndices};
pub use interp::*;
pub use numeric::*;
