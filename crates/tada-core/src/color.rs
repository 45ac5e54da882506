//! The fixed-arity color tuple.
//!
//! A [`Color`] is three numeric channels with value semantics. It is
//! parameterized by:
//! 1. **Channel range** (`R: ChannelRange`) - what a full channel is worth
//! 2. **Channel type** (`T: Channel`) - the scalar stored per channel
//!
//! ```
//! use tada_core::prelude::*;
//!
//! // Normalized color with f32 channels
//! let a: Color<Normal, f32> = Color::new(1.0, 0.5, 0.25);
//!
//! // 8-bit style range, still stored as floats
//! let b: Color<Range255, f32> = Color::new(255.0, 128.0, 64.0);
//! assert_eq!(b.unscale()[0], 1.0);
//! ```
//!
//! Channels are opaque numeric slots: nothing here knows or cares whether
//! they hold RGB, HSV or anything else.
//!
//! # Memory Layout
//!
//! `#[repr(C)]`, laid out as `[T; 3]`.
//!
//! # Used By
//!
//! - [`crate::algebra`] - per-color math
//! - [`crate::compare`] - ordering and distance
//! - `tada-list` - color lists

use crate::channel::Channel;
use crate::codec;
use crate::error::{Error, Result};
use crate::range::ChannelRange;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// A three-channel color tuple.
///
/// # Example
///
/// ```
/// use tada_core::{Color, Normal};
///
/// let c: Color<Normal, f32> = Color::new(0.1, 0.2, 0.3);
/// assert_eq!(c[1], 0.2);
/// assert_eq!(c.to_array(), [0.1, 0.2, 0.3]);
/// ```
#[repr(C)]
#[derive(Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>"),
        into = "[T; 3]",
        from = "[T; 3]"
    )
)]
pub struct Color<R: ChannelRange, T: Channel> {
    channels: [T; 3],
    _range: PhantomData<R>,
}

impl<R: ChannelRange, T: Channel> Color<R, T> {
    /// Number of channels.
    pub const ARITY: usize = 3;

    /// Creates a color from its three channels.
    #[inline]
    pub const fn new(c0: T, c1: T, c2: T) -> Self {
        Self::from_array([c0, c1, c2])
    }

    /// Creates a color with every channel set to `v`.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }

    /// The all-zero color.
    #[inline]
    pub const fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(channels: [T; 3]) -> Self {
        Self {
            channels,
            _range: PhantomData,
        }
    }

    /// Converts to an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        self.channels
    }

    /// Channels widened to `f64`.
    #[inline]
    pub fn to_f64_array(self) -> [f64; 3] {
        self.channels.map(Channel::to_f64)
    }

    /// Creates from `f64` channels, narrowing each to `T`.
    #[inline]
    pub fn from_f64_array(a: [f64; 3]) -> Self {
        Self::from_array(a.map(T::from_f64))
    }

    /// Iterates over the channels.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.channels.iter()
    }

    /// Apply a function to each channel.
    #[inline]
    pub fn map<F: FnMut(T) -> T>(self, f: F) -> Self {
        Self::from_array(self.channels.map(f))
    }

    /// Apply a function with `f64` intermediates.
    #[inline]
    pub fn map_f64<F: Fn(f64) -> f64>(self, f: F) -> Self {
        self.map(|c| c.map_f64(&f))
    }

    /// Combine two colors channel by channel with `f64` intermediates.
    #[inline]
    pub fn zip_f64<F: Fn(f64, f64) -> f64>(self, other: Self, f: F) -> Self {
        let (a, b) = (self.to_f64_array(), other.to_f64_array());
        Self::from_f64_array([f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2])])
    }

    /// Maps a normalized color into this color's channel range.
    ///
    /// Multiplies every channel by `R::RANGE`. Identity for
    /// [`Normal`](crate::Normal).
    #[inline]
    pub fn scale(self) -> Self {
        self.map_f64(R::scale)
    }

    /// Maps this color's channels back to normalized form.
    ///
    /// Divides every channel by `R::RANGE`. Inverse of [`scale`](Self::scale).
    #[inline]
    pub fn unscale(self) -> Self {
        self.map_f64(R::unscale)
    }

    /// Builds a color from a normalized `f64` triple, scaling it into range.
    #[inline]
    pub fn from_normalized(n: [f64; 3]) -> Self {
        Self::from_f64_array(n.map(R::scale))
    }

    /// The normalized `f64` triple for this color.
    #[inline]
    pub fn to_normalized(self) -> [f64; 3] {
        self.to_f64_array().map(R::unscale)
    }

    /// Reinterprets the channels under another range without rescaling.
    #[inline]
    pub fn cast_range<S: ChannelRange>(self) -> Color<S, T> {
        Color::from_array(self.channels)
    }

    /// Converts to a different range, rescaling the channels.
    ///
    /// # Example
    ///
    /// ```
    /// use tada_core::{Color, Normal, Range255};
    ///
    /// let c: Color<Range255, f32> = Color::new(255.0, 0.0, 51.0);
    /// let n: Color<Normal, f32> = c.convert_range();
    /// assert_eq!(n.to_array(), [1.0, 0.0, 0.2]);
    /// ```
    #[inline]
    pub fn convert_range<S: ChannelRange>(self) -> Color<S, T> {
        Color::from_normalized(self.to_normalized())
    }

    /// Converts to a different channel type, same range.
    #[inline]
    pub fn convert_channel<U: Channel>(self) -> Color<R, U> {
        Color::from_f64_array(self.to_f64_array())
    }

    /// Decodes a packed `0xRRGGBB` value.
    ///
    /// # Example
    ///
    /// ```
    /// use tada_core::{Color, Range255};
    ///
    /// let c: Color<Range255, f32> = Color::from_hex(0xFF8000);
    /// assert_eq!(c.to_array(), [255.0, 128.0, 0.0]);
    /// assert_eq!(c.to_hex(), 0xFF8000);
    /// ```
    #[inline]
    pub fn from_hex(hex: u32) -> Self {
        Self::from_normalized(codec::hex::color_from_hex(hex))
    }

    /// Encodes as a packed `0xRRGGBB` value.
    ///
    /// Channels are clamped to the range and quantized to 8 bits.
    #[inline]
    pub fn to_hex(self) -> u32 {
        codec::hex::hex_from_color(self.to_normalized())
    }

    /// Formats the color with the text codec.
    ///
    /// Named colors print as their name, anything else as a normalized
    /// `(c0, c1, c2)` tuple.
    pub fn to_text(self) -> String {
        codec::text::color_to_string(self.unscale().to_array())
    }

    /// Parses a color with the text codec.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] if the text names no color. Nothing is produced on
    /// failure.
    pub fn from_text(s: &str) -> Result<Self> {
        match codec::text::string_to_color(s) {
            Some(n) => Ok(Self::from_normalized(n)),
            None => {
                tracing::debug!(input = s, "text does not describe a color");
                Err(Error::parse(s))
            }
        }
    }
}

impl<R: ChannelRange, T: Channel> Default for Color<R, T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: ChannelRange, T: Channel> PartialEq for Color<R, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.channels == other.channels
    }
}

impl<R: ChannelRange, T: Channel> Index<usize> for Color<R, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.channels[i]
    }
}

impl<R: ChannelRange, T: Channel> IndexMut<usize> for Color<R, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.channels[i]
    }
}

impl<'a, R: ChannelRange, T: Channel> IntoIterator for &'a Color<R, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: ChannelRange, T: Channel> From<[T; 3]> for Color<R, T> {
    #[inline]
    fn from(a: [T; 3]) -> Self {
        Self::from_array(a)
    }
}

impl<R: ChannelRange, T: Channel> From<Color<R, T>> for [T; 3] {
    #[inline]
    fn from(c: Color<R, T>) -> [T; 3] {
        c.to_array()
    }
}

impl<R: ChannelRange> From<glam::Vec3> for Color<R, f32> {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_array(v.to_array())
    }
}

impl<R: ChannelRange> From<Color<R, f32>> for glam::Vec3 {
    #[inline]
    fn from(c: Color<R, f32>) -> glam::Vec3 {
        glam::Vec3::from_array(c.to_array())
    }
}

impl<R: ChannelRange, T: Channel> FromStr for Color<R, T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl<R: ChannelRange, T: Channel> fmt::Debug for Color<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&format!("Color<{}, {}>", R::NAME, T::NAME))
            .field(&self.channels[0])
            .field(&self.channels[1])
            .field(&self.channels[2])
            .finish()
    }
}

impl<R: ChannelRange, T: Channel> fmt::Display for Color<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
