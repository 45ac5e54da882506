//! The color list container.
//!
//! [`ColorList`] is an ordered, resizable sequence of colors. Insertion
//! order matters and duplicates are allowed. Positions arrive as signed
//! host keys and are normalized before use:
//!
//! | Operation            | Key that does not normalize        |
//! |----------------------|------------------------------------|
//! | `get`, `set`, `pop`  | rejected, list untouched           |
//! | `insert`             | clamped into `[0, len]`            |
//! | slices               | bounds clamped, never rejected     |
//!
//! # Example
//!
//! ```
//! use tada_core::{Color, Range255};
//! use tada_list::ColorList;
//!
//! type C = Color<Range255, f32>;
//!
//! let mut list: ColorList<Range255, f32> =
//!     [C::splat(3.0), C::splat(1.0), C::splat(2.0)].into_iter().collect();
//! list.sort();
//! assert_eq!(list.get(-1), Some(&C::splat(3.0)));
//! assert_eq!(list.pop(7), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, DerefMut};

use tada_core::{Channel, ChannelRange, Color, Error, Result};
use tada_math::{clamp_key, fix_key, Slice};
use tracing::{debug, trace};

/// An ordered, mutable sequence of colors.
///
/// Dereferences to a slice of colors, so read-only slice methods
/// (`len`, `iter`, `first`, `windows`...) are available directly.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct ColorList<R: ChannelRange, T: Channel> {
    colors: Vec<Color<R, T>>,
}

impl<R: ChannelRange, T: Channel> ColorList<R, T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` colors.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: Vec::with_capacity(capacity),
        }
    }

    /// Wraps an existing vector.
    #[inline]
    pub fn from_vec(colors: Vec<Color<R, T>>) -> Self {
        Self { colors }
    }

    /// Unwraps into the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<Color<R, T>> {
        self.colors
    }

    /// The colors as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Color<R, T>] {
        &self.colors
    }

    /// Appends one color.
    #[inline]
    pub fn push(&mut self, color: Color<R, T>) {
        self.colors.push(color);
    }

    // ========================================================================
    // Keyed access
    // ========================================================================

    /// The color at a host key, counting from the end when negative.
    #[inline]
    pub fn get(&self, key: isize) -> Option<&Color<R, T>> {
        fix_key(key, self.colors.len()).and_then(|i| self.colors.get(i))
    }

    /// Mutable access at a host key.
    #[inline]
    pub fn get_mut(&mut self, key: isize) -> Option<&mut Color<R, T>> {
        fix_key(key, self.colors.len()).and_then(|i| self.colors.get_mut(i))
    }

    /// Replaces the color at a host key.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `key` does not normalize.
    pub fn set(&mut self, key: isize, color: Color<R, T>) -> Result<()> {
        let len = self.colors.len();
        match self.get_mut(key) {
            Some(slot) => {
                *slot = color;
                Ok(())
            }
            None => {
                debug!(key, len, "set rejected key");
                Err(Error::index_out_of_range(key, len))
            }
        }
    }

    // ========================================================================
    // Slicing
    // ========================================================================

    /// Copies the colors selected by `slice` into a new list.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSlice`] for a zero step.
    pub fn slice_out(&self, slice: &Slice) -> Result<Self> {
        let indices = slice.indices(self.colors.len())?;
        Ok(indices.map(|i| self.colors[i]).collect())
    }

    /// Replaces the contents of `out` with the colors selected by `slice`.
    ///
    /// `out` is left untouched on error.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSlice`] for a zero step.
    pub fn slice_into(&self, slice: &Slice, out: &mut Self) -> Result<()> {
        let indices = slice.indices(self.colors.len())?;
        out.colors.clear();
        out.colors.extend(indices.map(|i| self.colors[i]));
        Ok(())
    }

    /// Assigns `values` to the positions selected by `slice`.
    ///
    /// A step-one slice is replaced wholesale and may grow or shrink the
    /// list. Any other slice must select exactly `values.len()` positions.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSlice`] for a zero step
    /// - [`Error::LengthMismatch`] if an extended slice and `values` differ
    ///   in length; the list is untouched
    pub fn assign_slice(&mut self, slice: &Slice, values: &[Color<R, T>]) -> Result<()> {
        let indices = slice.indices(self.colors.len())?;
        if let Some(span) = indices.contiguous() {
            self.colors.splice(span, values.iter().copied());
            return Ok(());
        }
        if indices.len() != values.len() {
            debug!(
                selected = indices.len(),
                values = values.len(),
                "extended slice assignment length mismatch"
            );
            return Err(Error::length_mismatch(indices.len(), values.len()));
        }
        for (i, v) in indices.zip(values) {
            self.colors[i] = *v;
        }
        Ok(())
    }

    /// Removes the colors selected by `slice`, keeping the rest in order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSlice`] for a zero step.
    pub fn delete_slice(&mut self, slice: &Slice) -> Result<()> {
        let indices = slice.indices(self.colors.len())?;
        if let Some(span) = indices.contiguous() {
            self.colors.drain(span);
            return Ok(());
        }
        let mut doomed = vec![false; self.colors.len()];
        for i in indices {
            doomed[i] = true;
        }
        let mut pos = 0;
        self.colors.retain(|_| {
            let keep = !doomed[pos];
            pos += 1;
            keep
        });
        Ok(())
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Number of colors equal to `color`.
    pub fn count(&self, color: &Color<R, T>) -> usize {
        self.colors.iter().filter(|c| *c == color).count()
    }

    /// Position of the first color equal to `color`.
    pub fn index_of(&self, color: &Color<R, T>) -> Option<usize> {
        self.colors.iter().position(|c| c == color)
    }

    /// [`index_of`](Self::index_of) with `-1` for "not found".
    pub fn index_of_or_neg(&self, color: &Color<R, T>) -> isize {
        self.index_of(color).map_or(-1, |i| i as isize)
    }

    // ========================================================================
    // Growth and removal
    // ========================================================================

    /// Appends every color of `other`, in order.
    pub fn extend_from_slice(&mut self, other: &[Color<R, T>]) {
        self.colors.extend_from_slice(other);
    }

    /// Inserts `color` so that it ends up at `key`.
    ///
    /// Keys that do not normalize are clamped, so inserting past either
    /// end lands at that end.
    ///
    /// ```
    /// use tada_core::{Color, Normal};
    /// use tada_list::ColorList;
    ///
    /// type C = Color<Normal, f64>;
    ///
    /// let mut list: ColorList<Normal, f64> = vec![C::splat(0.0)].into();
    /// list.insert(99, C::splat(1.0));
    /// list.insert(-99, C::splat(2.0));
    /// assert_eq!(list.as_slice(), &[C::splat(2.0), C::splat(0.0), C::splat(1.0)]);
    /// ```
    pub fn insert(&mut self, key: isize, color: Color<R, T>) {
        let len = self.colors.len();
        let index = clamp_key(key, len);
        if fix_key(key, len).is_none() {
            debug!(key, len, index, "insert key clamped");
        }
        self.colors.insert(index, color);
    }

    /// Removes and returns the color at `key`.
    ///
    /// Returns `None` and leaves the list untouched if `key` does not
    /// normalize.
    pub fn pop(&mut self, key: isize) -> Option<Color<R, T>> {
        let len = self.colors.len();
        match fix_key(key, len) {
            Some(i) => Some(self.colors.remove(i)),
            None => {
                debug!(key, len, "pop rejected key");
                None
            }
        }
    }

    /// Removes and returns the last color.
    #[inline]
    pub fn pop_last(&mut self) -> Option<Color<R, T>> {
        self.colors.pop()
    }

    /// Removes the first color equal to `color`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no color matches.
    pub fn remove(&mut self, color: &Color<R, T>) -> Result<()> {
        let i = self.index_of(color).ok_or(Error::NotFound)?;
        self.colors.remove(i);
        Ok(())
    }

    // ========================================================================
    // Order
    // ========================================================================

    /// Rotates the list cyclically; positive `pos` moves colors towards
    /// the end.
    #[inline]
    pub fn rotate(&mut self, pos: isize) {
        tada_math::rotate(&mut self.colors, pos);
    }

    /// Sorts by the color order. Stable: equal colors keep their relative
    /// order.
    ///
    /// Channels holding NaN sort after every number.
    pub fn sort(&mut self) {
        trace!(len = self.colors.len(), "sort");
        self.colors.sort_by(sort_order);
    }

    // ========================================================================
    // Reductions
    // ========================================================================

    /// Channel-wise minimum. An empty list yields all `+inf`.
    pub fn min(&self) -> Color<R, T> {
        self.colors
            .iter()
            .fold(Color::splat(T::INFINITY), |acc, c| acc.zip_f64(*c, f64::min))
    }

    /// Channel-wise maximum. An empty list yields all `-inf`.
    pub fn max(&self) -> Color<R, T> {
        self.colors
            .iter()
            .fold(Color::splat(T::NEG_INFINITY), |acc, c| {
                acc.zip_f64(*c, f64::max)
            })
    }

    /// Rounds every channel to `digits` decimal places, ties to even.
    pub fn round(&mut self, digits: i32) {
        for c in &mut self.colors {
            *c = c.round(digits);
        }
    }

    // ========================================================================
    // Codecs
    // ========================================================================

    /// Builds a list from packed `0xRRGGBB` values.
    pub fn from_hex_list(hexes: &[u32]) -> Self {
        hexes.iter().map(|&h| Color::from_hex(h)).collect()
    }

    /// Packs every color as `0xRRGGBB`.
    pub fn to_hex_list(&self) -> Vec<u32> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }

    pub(crate) fn colors_mut(&mut self) -> &mut Vec<Color<R, T>> {
        &mut self.colors
    }
}

/// The sort predicate: [`Color::compare`] made total.
///
/// Agrees with the sign of `a.compare(b)` whenever neither color holds NaN.
/// A NaN channel sorts after every number and equals other NaN.
fn sort_order<R: ChannelRange, T: Channel>(a: &Color<R, T>, b: &Color<R, T>) -> Ordering {
    for (x, y) in a.to_f64_array().into_iter().zip(b.to_f64_array()) {
        let ord = match (x.is_nan(), y.is_nan()) {
            (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => Ordering::Equal,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

impl<R: ChannelRange, T: Channel> Default for ColorList<R, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ChannelRange, T: Channel> Clone for ColorList<R, T> {
    fn clone(&self) -> Self {
        Self {
            colors: self.colors.clone(),
        }
    }
}

impl<R: ChannelRange, T: Channel> PartialEq for ColorList<R, T> {
    fn eq(&self, other: &Self) -> bool {
        self.colors == other.colors
    }
}

impl<R: ChannelRange, T: Channel> Deref for ColorList<R, T> {
    type Target = [Color<R, T>];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.colors
    }
}

impl<R: ChannelRange, T: Channel> DerefMut for ColorList<R, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.colors
    }
}

impl<R: ChannelRange, T: Channel> From<Vec<Color<R, T>>> for ColorList<R, T> {
    fn from(colors: Vec<Color<R, T>>) -> Self {
        Self::from_vec(colors)
    }
}

impl<R: ChannelRange, T: Channel> From<ColorList<R, T>> for Vec<Color<R, T>> {
    fn from(list: ColorList<R, T>) -> Self {
        list.into_vec()
    }
}

impl<R: ChannelRange, T: Channel> FromIterator<Color<R, T>> for ColorList<R, T> {
    fn from_iter<I: IntoIterator<Item = Color<R, T>>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl<R: ChannelRange, T: Channel> Extend<Color<R, T>> for ColorList<R, T> {
    fn extend<I: IntoIterator<Item = Color<R, T>>>(&mut self, iter: I) {
        self.colors.extend(iter);
    }
}

impl<'a, R: ChannelRange, T: Channel> Extend<&'a Color<R, T>> for ColorList<R, T> {
    fn extend<I: IntoIterator<Item = &'a Color<R, T>>>(&mut self, iter: I) {
        self.colors.extend(iter.into_iter().copied());
    }
}

impl<R: ChannelRange, T: Channel> IntoIterator for ColorList<R, T> {
    type Item = Color<R, T>;
    type IntoIter = std::vec::IntoIter<Color<R, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

impl<'a, R: ChannelRange, T: Channel> IntoIterator for &'a ColorList<R, T> {
    type Item = &'a Color<R, T>;
    type IntoIter = std::slice::Iter<'a, Color<R, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl<'a, R: ChannelRange, T: Channel> IntoIterator for &'a mut ColorList<R, T> {
    type Item = &'a mut Color<R, T>;
    type IntoIter = std::slice::IterMut<'a, Color<R, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter_mut()
    }
}

impl<R: ChannelRange, T: Channel> fmt::Debug for ColorList<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.colors.iter()).finish()
    }
}

impl<R: ChannelRange, T: Channel> fmt::Display for ColorList<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}
