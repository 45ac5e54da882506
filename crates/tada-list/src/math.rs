//! In-place math over whole color lists.
//!
//! Unary mutators rewrite every color with the matching per-color
//! operation. Binary mutators take an [`Operand`]:
//!
//! - [`Operand::Scalar`] broadcasts one color against every element
//! - [`Operand::Each`] pairs element `i` of the list with element `i` of
//!   the operand, and requires equal lengths
//!
//! A pairwise length mismatch is reported before any element changes.
//!
//! # Example
//!
//! ```
//! use tada_core::{Color, Range255};
//! use tada_list::{ColorList, Operand};
//!
//! type C = Color<Range255, f32>;
//!
//! let mut list: ColorList<Range255, f32> = vec![C::splat(10.0), C::splat(20.0)].into();
//! list.math_add(Operand::Scalar(C::splat(1.0))).unwrap();
//! list.math_mul([C::splat(2.0), C::splat(3.0)].as_slice().into()).unwrap();
//! assert_eq!(list.as_slice(), &[C::splat(22.0), C::splat(63.0)]);
//!
//! // Element on the right of the operator.
//! list.math_rsub(C::splat(100.0).into()).unwrap();
//! assert_eq!(list.as_slice(), &[C::splat(78.0), C::splat(37.0)]);
//! ```

use tada_core::{Channel, ChannelRange, Color, Error, Result};
use tada_math::{lerp, spread_steps};
use tracing::{debug, trace};

use crate::list::ColorList;

/// Right-hand side of a list math operation.
#[derive(Debug)]
pub enum Operand<'a, R: ChannelRange, T: Channel> {
    /// One color applied to every element.
    Scalar(Color<R, T>),
    /// One color per element.
    Each(&'a [Color<R, T>]),
}

impl<R: ChannelRange, T: Channel> Clone for Operand<'_, R, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ChannelRange, T: Channel> Copy for Operand<'_, R, T> {}

impl<R: ChannelRange, T: Channel> From<Color<R, T>> for Operand<'_, R, T> {
    fn from(c: Color<R, T>) -> Self {
        Operand::Scalar(c)
    }
}

impl<'a, R: ChannelRange, T: Channel> From<&'a [Color<R, T>]> for Operand<'a, R, T> {
    fn from(colors: &'a [Color<R, T>]) -> Self {
        Operand::Each(colors)
    }
}

impl<'a, R: ChannelRange, T: Channel> From<&'a ColorList<R, T>> for Operand<'a, R, T> {
    fn from(list: &'a ColorList<R, T>) -> Self {
        Operand::Each(list.as_slice())
    }
}

impl<R: ChannelRange, T: Channel> ColorList<R, T> {
    fn map_in_place(&mut self, f: impl Fn(Color<R, T>) -> Color<R, T>) {
        for c in self.colors_mut().iter_mut() {
            *c = f(*c);
        }
    }

    /// Rewrites every element as `f(element, rhs)`.
    fn apply(
        &mut self,
        op: &'static str,
        rhs: Operand<'_, R, T>,
        f: impl Fn(Color<R, T>, Color<R, T>) -> Color<R, T>,
    ) -> Result<()> {
        let colors = self.colors_mut();
        match rhs {
            Operand::Scalar(r) => {
                for c in colors.iter_mut() {
                    *c = f(*c, r);
                }
            }
            Operand::Each(rs) => {
                if rs.len() != colors.len() {
                    debug!(op, len = colors.len(), rhs = rs.len(), "pairwise length mismatch");
                    return Err(Error::length_mismatch(colors.len(), rs.len()));
                }
                for (c, r) in colors.iter_mut().zip(rs) {
                    *c = f(*c, *r);
                }
            }
        }
        trace!(op, len = colors.len(), "list math");
        Ok(())
    }

    // ========================================================================
    // Unary
    // ========================================================================

    /// Absolute value of every channel.
    pub fn math_abs(&mut self) {
        self.map_in_place(Color::abs);
    }

    /// Floor of every channel.
    pub fn math_floor(&mut self) {
        self.map_in_place(Color::floor);
    }

    /// Ceiling of every channel.
    pub fn math_ceil(&mut self) {
        self.map_in_place(Color::ceil);
    }

    /// Truncation towards zero of every channel.
    pub fn math_trunc(&mut self) {
        self.map_in_place(Color::trunc);
    }

    /// Negates every channel.
    pub fn math_neg(&mut self) {
        self.map_in_place(|c| -c);
    }

    /// Reflects every channel within the channel range.
    pub fn math_invert(&mut self) {
        self.map_in_place(Color::invert);
    }

    /// Reverses the order of the colors.
    pub fn math_reverse(&mut self) {
        self.colors_mut().reverse();
    }

    /// Sets every color to zero, keeping the length.
    pub fn math_zero(&mut self) {
        self.colors_mut().fill(Color::zero());
    }

    /// Removes every color.
    pub fn math_clear(&mut self) {
        self.colors_mut().clear();
    }

    // ========================================================================
    // Binary, element on the left
    // ========================================================================

    /// `element + rhs`.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] for a pairwise operand of another length.
    pub fn math_add(&mut self, rhs: Operand<'_, R, T>) -> Result<()> {
        self.apply("add", rhs, |a, b| a + b)
    }

    /// `element - rhs`.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] for a pairwise operand of another length.
    pub fn math_sub(&mut self, rhs: Operand<'_, R, T>) -> Result<()> {
        self.apply("sub", rhs, |a, b| a - b)
    }

    /// `element * rhs`.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] for a pairwise operand of another length.
    pub fn math_mul(&mut self, rhs: Operand<'_, R, T>) -> Result<()> {
        self.apply("mul", rhs, |a, b| a * b)
    }

    /// `element / rhs`, true division.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] for a pairwise operand of another length.
    pub fn math_div(&mut self, rhs: Operand<'_, R, T>) -> Result<()> {
        self.apply("div", rhs, Color::true_div)
    }

    /// `element mod rhs`, sign following the divisor.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] for a pairwise operand of another length.
    pub fn math_mod(&mut self, rhs: Operand<'_, R, T>) -> Result<()> {
        self.apply("mod", rhs, Color::floor_mod)
    }

    /// `element ** rhs`.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] for a pairwise operand of another length.
    pub fn math_pow(&mut self, rhs: Operand<'_, R, T>) -> Result<()> {
        self.apply("pow", rhs, Color::pow)
    }

    /// Channel-wise `max(element, rhs)`: raises every channel to at least
    /// `rhs`.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] for a pairwise operand of another length.
    pub fn limit_min(&mut self, rhs: Operand<'_, R, T>) -> Result<()> {
        self.apply("limit_min", rhs, Color::limit_min)
    }

    /// Channel-wise `min(element, rhs)`: caps every channel at `rhs`.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] for a pairwise operand of another length.
    pub fn limit_max(&mut self, rhs: Operand<'_, R, T>) -> Result<()> {
        self.apply("limit_max", rhs, Color::limit_max)
    }

    // ========================================================================
    // Binary, element on the right
    // ========================================================================

    /// `rhs / element`.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] for a pairwise operand of another length.
    pub fn math_rdiv(&mut self, rhs: Operand<'_, R, T>) -> Result<()> {
        self.apply("rdiv", rhs, |a, b| b.true_div(a))
    }

    /// `rhs ** element`.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] for a pairwise operand of another length.
    pub fn math_rpow(&mut self, rhs: Operand<'_, R, T>) -> Result<()> {
        self.apply("rpow", rhs, |a, b| b.pow(a))
    }

    /// `rhs - element`.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] for a pairwise operand of another length.
    pub fn math_rsub(&mut self, rhs: Operand<'_, R, T>) -> Result<()> {
        self.apply("rsub", rhs, |a, b| b - a)
    }

    // ========================================================================
    // Growth by interpolation
    // ========================================================================

    /// Grows the list to `size` colors by a linear spread from the current
    /// last color to `end`.
    ///
    /// The existing colors are untouched and the new last color is exactly
    /// `end`. An empty list spreads from `end` itself. Nothing happens when
    /// the list already holds `size` or more colors.
    ///
    /// ```
    /// use tada_core::{Color, Range255};
    /// use tada_list::ColorList;
    ///
    /// type C = Color<Range255, f32>;
    ///
    /// let mut list: ColorList<Range255, f32> = vec![C::splat(0.0)].into();
    /// list.spread_append(5, C::splat(100.0));
    /// let firsts: Vec<f32> = list.iter().map(|c| c[0]).collect();
    /// assert_eq!(firsts, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    /// ```
    pub fn spread_append(&mut self, size: usize, end: Color<R, T>) {
        let colors = self.colors_mut();
        let len = colors.len();
        if size <= len {
            return;
        }
        let start = colors.last().copied().unwrap_or(end);
        trace!(len, size, "spread_append");
        colors.extend(spread_steps(size - len).map(|t| start.zip_f64(end, |a, b| lerp(a, b, t))));
    }
}
