//! Channel ranges and compile-time range safety.
//!
//! Every [`Color`](crate::Color) carries a channel range as a type
//! parameter. The range says what the "full" value of a channel is:
//!
//! - [`Normal`] - channels in `[0, 1]`
//! - [`Range255`] - channels in `[0, 255]`, like 8-bit device colors
//! - [`Range256`] - channels in `[0, 256]`
//!
//! The range drives two things:
//!
//! 1. `invert`, which reflects a channel as `RANGE - value`
//! 2. `scale` / `unscale`, which move a color between the normalized form
//!    the codecs speak and the ranged form stored in the color
//!
//! Because the range is a type parameter, a `Range255` color cannot be added
//! to a `Normal` color by accident:
//!
//! ```compile_fail
//! use tada_core::{Color, Normal, Range255};
//!
//! let a: Color<Normal, f32> = Color::new(0.5, 0.5, 0.5);
//! let b: Color<Range255, f32> = Color::new(128.0, 128.0, 128.0);
//! let c = a + b;
//! ```

use std::fmt;

/// Trait for channel range marker types.
///
/// # Implementing Custom Ranges
///
/// ```
/// use tada_core::ChannelRange;
///
/// #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// pub struct Range100;
///
/// impl ChannelRange for Range100 {
///     const NAME: &'static str = "100";
///     const RANGE: f64 = 100.0;
/// }
/// ```
pub trait ChannelRange: Copy + Clone + Default + Send + Sync + fmt::Debug + 'static {
    /// Human-readable name of the range.
    const NAME: &'static str;

    /// The full value of a channel. Must be positive and finite.
    const RANGE: f64;

    /// Maps a normalized channel value into this range.
    #[inline]
    fn scale(v: f64) -> f64 {
        v * Self::RANGE
    }

    /// Maps a channel value in this range back to normalized form.
    #[inline]
    fn unscale(v: f64) -> f64 {
        v / Self::RANGE
    }
}

/// Channels in `[0, 1]`. Scaling is the identity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Normal;

impl ChannelRange for Normal {
    const NAME: &'static str = "normal";
    const RANGE: f64 = 1.0;

    #[inline]
    fn scale(v: f64) -> f64 {
        v
    }

    #[inline]
    fn unscale(v: f64) -> f64 {
        v
    }
}

/// Channels in `[0, 255]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Range255;

impl ChannelRange for Range255 {
    const NAME: &'static str = "255";
    const RANGE: f64 = 255.0;
}

/// Channels in `[0, 256]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Range256;

impl ChannelRange for Range256 {
    const NAME: &'static str = "256";
    const RANGE: f64 = 256.0;
}
