//! Index normalization, slice resolution and rotation.
//!
//! Sequence positions arrive from the scripting host as signed integers,
//! where `-1` means "last". Everything in this module turns those into
//! plain `usize` positions, or reports that it cannot.
//!
//! # Policies
//!
//! - Lookup and removal reject a key that does not normalize ([`fix_key`]).
//! - Insertion clamps it instead ([`clamp_key`]).
//! - Slices never reject their bounds; they clamp them ([`Slice::indices`]).
//!
//! # Example
//!
//! ```rust
//! use tada_math::{fix_key, Slice};
//!
//! assert_eq!(fix_key(-1, 3), Some(2));
//! assert_eq!(fix_key(3, 3), None);
//!
//! let reversed: Vec<usize> = Slice::new(None, None, -1).indices(4).unwrap().collect();
//! assert_eq!(reversed, vec![3, 2, 1, 0]);
//! ```

use thiserror::Error;

/// Normalizes a possibly-negative key against a sequence of `size` elements.
///
/// Negative keys count from the end. Returns `None` unless the result lies
/// in `[0, size)`, so an empty sequence accepts no key at all.
///
/// # Example
///
/// ```rust
/// use tada_math::fix_key;
///
/// assert_eq!(fix_key(0, 2), Some(0));
/// assert_eq!(fix_key(-2, 2), Some(0));
/// assert_eq!(fix_key(-3, 2), None);
/// assert_eq!(fix_key(0, 0), None);
/// ```
#[inline]
pub fn fix_key(key: isize, size: usize) -> Option<usize> {
    let size = isize::try_from(size).ok()?;
    let key = if key < 0 { key + size } else { key };
    (0..size).contains(&key).then_some(key as usize)
}

/// Normalizes a key for insertion.
///
/// Tries [`fix_key`] first. A key that does not normalize is clamped into
/// `[0, size]`, so inserting past either end lands at that end.
///
/// # Example
///
/// ```rust
/// use tada_math::clamp_key;
///
/// assert_eq!(clamp_key(-1, 3), 2);
/// assert_eq!(clamp_key(3, 3), 3);
/// assert_eq!(clamp_key(99, 3), 3);
/// assert_eq!(clamp_key(-99, 3), 0);
/// ```
pub fn clamp_key(key: isize, size: usize) -> usize {
    if let Some(k) = fix_key(key, size) {
        return k;
    }
    let size_i = isize::try_from(size).unwrap_or(isize::MAX);
    let key = if key < 0 { key.saturating_add(size_i) } else { key };
    key.clamp(0, size_i) as usize
}

/// Rotates a whole slice cyclically by `pos` positions.
///
/// Positive `pos` moves elements towards the end, with the tail wrapping
/// to the front. `pos` may be negative or larger than the slice; it is
/// reduced modulo the length first. Empty slices are left alone.
///
/// # Example
///
/// ```rust
/// use tada_math::rotate;
///
/// let mut v = [1, 2, 3, 4];
/// rotate(&mut v, 1);
/// assert_eq!(v, [4, 1, 2, 3]);
/// rotate(&mut v, -1);
/// assert_eq!(v, [1, 2, 3, 4]);
/// ```
pub fn rotate<T>(items: &mut [T], pos: isize) {
    let len = items.len();
    if len == 0 {
        return;
    }
    let len_i = len as isize;
    let mut pos = pos % len_i;
    if pos < 0 {
        pos += len_i;
    }
    items.rotate_right(pos as usize);
}

/// Error resolving a [`Slice`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliceError {
    /// A step of zero selects nothing and never terminates.
    #[error("slice step cannot be zero")]
    ZeroStep,
}

/// A host-style slice: `start:stop:step`.
///
/// Missing bounds default according to the direction of `step`. Negative
/// bounds count from the end; bounds past either end are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    /// First position, inclusive.
    pub start: Option<isize>,
    /// End position, exclusive.
    pub stop: Option<isize>,
    /// Distance between selected positions. Negative walks backwards.
    pub step: isize,
}

impl Default for Slice {
    fn default() -> Self {
        Self::full()
    }
}

impl Slice {
    /// Creates a slice.
    #[inline]
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        Self { start, stop, step }
    }

    /// `start:stop` with a step of one.
    #[inline]
    pub const fn range(start: isize, stop: isize) -> Self {
        Self::new(Some(start), Some(stop), 1)
    }

    /// `:` - every element, in order.
    #[inline]
    pub const fn full() -> Self {
        Self::new(None, None, 1)
    }

    /// Returns true if this slice may select a non-contiguous or reversed
    /// run of elements.
    #[inline]
    pub const fn is_extended(&self) -> bool {
        self.step != 1
    }

    /// Resolves the slice against a sequence of `len` elements.
    ///
    /// # Errors
    ///
    /// [`SliceError::ZeroStep`] if `step` is zero.
    pub fn indices(&self, len: usize) -> Result<SliceIndices, SliceError> {
        let step = self.step;
        if step == 0 {
            return Err(SliceError::ZeroStep);
        }
        let len = isize::try_from(len).unwrap_or(isize::MAX);

        // Bounds for a backwards walk may sit one before the first element.
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

        let adjust = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(b) if b < 0 => (b + len).max(lower),
            Some(b) => b.min(upper),
        };

        let (start, stop) = if step < 0 {
            (adjust(self.start, upper), adjust(self.stop, lower))
        } else {
            (adjust(self.start, lower), adjust(self.stop, upper))
        };

        // Distance to the last selected position, then whole steps within it.
        let span = if step < 0 { start - stop } else { stop - start };
        let count = if span > 0 {
            (span - 1) as usize / step.unsigned_abs() + 1
        } else {
            0
        };

        Ok(SliceIndices {
            start,
            step,
            remaining: count,
        })
    }
}

impl From<std::ops::Range<isize>> for Slice {
    fn from(r: std::ops::Range<isize>) -> Self {
        Self::range(r.start, r.end)
    }
}

impl From<std::ops::RangeFrom<isize>> for Slice {
    fn from(r: std::ops::RangeFrom<isize>) -> Self {
        Self::new(Some(r.start), None, 1)
    }
}

impl From<std::ops::RangeTo<isize>> for Slice {
    fn from(r: std::ops::RangeTo<isize>) -> Self {
        Self::new(None, Some(r.end), 1)
    }
}

impl From<std::ops::RangeFull> for Slice {
    fn from(_: std::ops::RangeFull) -> Self {
        Self::full()
    }
}

/// Positions selected by a resolved [`Slice`], in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceIndices {
    start: isize,
    step: isize,
    remaining: usize,
}

impl SliceIndices {
    /// First position selected, if any.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        (self.remaining > 0).then_some(self.start as usize)
    }

    /// The step the positions advance by.
    #[inline]
    pub fn step(&self) -> isize {
        self.step
    }

    /// The selected positions as a plain range, for a step of one.
    ///
    /// An empty forward slice still has a resolved start, which is where
    /// slice assignment inserts.
    ///
    /// ```rust
    /// use tada_math::Slice;
    ///
    /// let s = Slice::range(4, 2).indices(3).unwrap();
    /// assert_eq!(s.contiguous(), Some(3..3));
    /// ```
    pub fn contiguous(&self) -> Option<std::ops::Range<usize>> {
        (self.step == 1).then(|| {
            let start = self.start as usize;
            start..start + self.remaining
        })
    }
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.start;
        self.remaining -= 1;
        // Only step onto positions that exist, so huge steps cannot overflow.
        if self.remaining > 0 {
            self.start += self.step;
        }
        Some(i as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SliceIndices {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(s: Slice, len: usize) -> Vec<usize> {
        s.indices(len).unwrap().collect()
    }

    #[test]
    fn test_fix_key_bounds() {
        assert_eq!(fix_key(-4, 4), Some(0));
        assert_eq!(fix_key(4, 4), None);
        assert_eq!(fix_key(-5, 4), None);
        assert_eq!(fix_key(3, 4), Some(3));
    }

    #[test]
    fn test_fix_key_empty() {
        for key in -2..=2 {
            assert_eq!(fix_key(key, 0), None);
        }
    }

    #[test]
    fn test_clamp_key() {
        assert_eq!(clamp_key(0, 0), 0);
        assert_eq!(clamp_key(5, 0), 0);
        assert_eq!(clamp_key(-5, 0), 0);
        assert_eq!(clamp_key(-3, 3), 0);
        assert_eq!(clamp_key(1, 3), 1);
        assert_eq!(clamp_key(isize::MIN, 3), 0);
    }

    #[test]
    fn test_rotate() {
        let mut v = [1, 2, 3];
        rotate(&mut v, 1);
        assert_eq!(v, [3, 1, 2]);

        let mut v = [1, 2, 3];
        rotate(&mut v, -1);
        assert_eq!(v, [2, 3, 1]);

        let mut v = [1, 2, 3];
        rotate(&mut v, 7);
        assert_eq!(v, [3, 1, 2]);

        let mut v = [1, 2, 3];
        rotate(&mut v, -3);
        assert_eq!(v, [1, 2, 3]);

        let mut empty: [i32; 0] = [];
        rotate(&mut empty, 5);
    }

    #[test]
    fn test_rotate_inverse() {
        for pos in -10..=10 {
            let mut v = [1, 2, 3, 4, 5];
            rotate(&mut v, pos);
            rotate(&mut v, -pos);
            assert_eq!(v, [1, 2, 3, 4, 5], "pos = {pos}");
        }
    }

    #[test]
    fn test_slice_defaults() {
        assert_eq!(collect(Slice::full(), 3), vec![0, 1, 2]);
        assert_eq!(collect(Slice::new(None, None, -1), 3), vec![2, 1, 0]);
        assert_eq!(collect(Slice::new(None, None, 2), 5), vec![0, 2, 4]);
        assert_eq!(collect(Slice::new(None, None, -2), 5), vec![4, 2, 0]);
    }

    #[test]
    fn test_slice_negative_bounds() {
        assert_eq!(collect(Slice::new(Some(-3), None, 1), 10), vec![7, 8, 9]);
        assert_eq!(collect(Slice::new(None, Some(-8), 1), 10), vec![0, 1]);
        assert_eq!(collect(Slice::new(Some(-1), Some(-4), -1), 10), vec![9, 8, 7]);
    }

    #[test]
    fn test_slice_clamps_out_of_range() {
        assert_eq!(collect(Slice::range(-100, 100), 3), vec![0, 1, 2]);
        assert_eq!(collect(Slice::new(Some(100), Some(-100), -1), 3), vec![2, 1, 0]);
        assert_eq!(collect(Slice::range(5, 10), 3), Vec::<usize>::new());
    }

    #[test]
    fn test_slice_empty_selection() {
        assert_eq!(collect(Slice::range(2, 1), 5), Vec::<usize>::new());
        assert_eq!(collect(Slice::new(Some(1), Some(2), -1), 5), Vec::<usize>::new());
        assert_eq!(collect(Slice::full(), 0), Vec::<usize>::new());
        assert_eq!(collect(Slice::new(None, None, -1), 0), Vec::<usize>::new());
    }

    #[test]
    fn test_slice_zero_step() {
        assert_eq!(Slice::new(None, None, 0).indices(3), Err(SliceError::ZeroStep));
    }

    #[test]
    fn test_slice_indices_len() {
        let idx = Slice::new(Some(1), None, 3).indices(10).unwrap();
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.first(), Some(1));
        assert_eq!(idx.step(), 3);
    }

    #[test]
    fn test_slice_extreme_steps() {
        assert_eq!(collect(Slice::new(Some(1), None, isize::MAX), 10), vec![1]);
        assert_eq!(collect(Slice::new(None, None, isize::MAX), 10), vec![0]);
        assert_eq!(collect(Slice::new(None, None, isize::MIN), 10), vec![9]);
        assert_eq!(collect(Slice::new(Some(3), None, isize::MIN + 1), 10), vec![3]);
        assert_eq!(collect(Slice::new(None, None, isize::MIN), 0), Vec::<usize>::new());
        let idx = Slice::new(None, None, isize::MIN).indices(4).unwrap();
        assert_eq!(idx.len(), 1);
    }

    #[test]
    fn test_slice_from_ranges() {
        assert_eq!(Slice::from(1..3), Slice::range(1, 3));
        assert_eq!(Slice::from(-3..), Slice::new(Some(-3), None, 1));
        assert_eq!(Slice::from(..2), Slice::new(None, Some(2), 1));
        assert_eq!(Slice::from(..), Slice::full());
    }
}
