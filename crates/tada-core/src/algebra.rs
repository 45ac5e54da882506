//! Per-color math.
//!
//! Every operation here is pure: it takes colors by value and returns a new
//! color, applying a scalar rule to each channel independently. The scalar
//! rules come from [`tada_math::numeric`], so division, modulo, power and
//! rounding follow the scripting host rather than Rust's primitives.
//!
//! # Operators
//!
//! | Operator  | Method                          | Rule                      |
//! |-----------|---------------------------------|---------------------------|
//! | `a + b`   | -                               | channel sum               |
//! | `a - b`   | -                               | channel difference        |
//! | `a * b`   | -                               | channel product           |
//! | `a / b`   | [`Color::true_div`]             | true division             |
//! | `a % b`   | [`Color::floor_mod`]            | sign follows divisor      |
//! | `-a`      | -                               | negation                  |
//!
//! ```
//! use tada_core::{Color, Normal};
//!
//! type C = Color<Normal, f64>;
//!
//! let a = C::new(-7.0, 7.0, 1.0);
//! let b = C::new(3.0, 2.0, 4.0);
//! assert_eq!(a % b, C::new(2.0, 1.0, 1.0));
//! assert_eq!(a / b, C::new(-7.0 / 3.0, 3.5, 0.25));
//! ```

use crate::channel::Channel;
use crate::color::Color;
use crate::range::ChannelRange;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use tada_math::numeric;

// ============================================================================
// Unary Math
// ============================================================================

impl<R: ChannelRange, T: Channel> Color<R, T> {
    /// Channel-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map_f64(f64::abs)
    }

    /// Channel-wise floor.
    #[inline]
    pub fn floor(self) -> Self {
        self.map_f64(f64::floor)
    }

    /// Channel-wise ceiling.
    #[inline]
    pub fn ceil(self) -> Self {
        self.map_f64(f64::ceil)
    }

    /// Channel-wise truncation towards zero.
    #[inline]
    pub fn trunc(self) -> Self {
        self.map_f64(f64::trunc)
    }

    /// Rounds every channel to `digits` decimal places, ties to even.
    ///
    /// # Example
    ///
    /// ```
    /// use tada_core::{Color, Range255};
    ///
    /// let c: Color<Range255, f64> = Color::new(0.5, 1.5, 2.25);
    /// assert_eq!(c.round(0), Color::new(0.0, 2.0, 2.0));
    /// assert_eq!(c.round(1), Color::new(0.5, 1.5, 2.2));
    /// ```
    #[inline]
    pub fn round(self, digits: i32) -> Self {
        self.map_f64(|v| numeric::round_digits(v, digits))
    }

    /// Reflects every channel within the range: `R::RANGE - channel`.
    ///
    /// # Example
    ///
    /// ```
    /// use tada_core::{Color, Range255};
    ///
    /// let c: Color<Range255, f32> = Color::new(0.0, 55.0, 255.0);
    /// assert_eq!(c.invert(), Color::new(255.0, 200.0, 0.0));
    /// ```
    #[inline]
    pub fn invert(self) -> Self {
        self.map_f64(|v| numeric::invert(v, R::RANGE))
    }

    /// Channels cyclically shifted by `pos` places.
    ///
    /// Positive `pos` moves channels towards the end; negative and
    /// out-of-range values wrap.
    ///
    /// # Example
    ///
    /// ```
    /// use tada_core::{Color, Normal};
    ///
    /// let c: Color<Normal, f32> = Color::new(1.0, 2.0, 3.0);
    /// assert_eq!(c.rotated(1), Color::new(3.0, 1.0, 2.0));
    /// assert_eq!(c.rotated(-1), Color::new(2.0, 3.0, 1.0));
    /// ```
    #[inline]
    pub fn rotated(self, pos: isize) -> Self {
        let mut channels = self.to_array();
        tada_math::rotate(&mut channels, pos);
        Self::from_array(channels)
    }
}

// ============================================================================
// Binary Math
// ============================================================================

impl<R: ChannelRange, T: Channel> Color<R, T> {
    /// Channel-wise true division. Never truncates.
    #[inline]
    pub fn true_div(self, rhs: Self) -> Self {
        self.zip_f64(rhs, numeric::true_div)
    }

    /// Channel-wise modulo with the sign of the divisor.
    #[inline]
    pub fn floor_mod(self, rhs: Self) -> Self {
        self.zip_f64(rhs, numeric::floor_mod)
    }

    /// Channel-wise power.
    #[inline]
    pub fn pow(self, exp: Self) -> Self {
        self.zip_f64(exp, numeric::power)
    }

    /// Channel-wise ternary power: `(self ** exp) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// use tada_core::{Color, Range255};
    ///
    /// type C = Color<Range255, f64>;
    /// let c = C::new(2.0, 3.0, -2.0);
    /// assert_eq!(c.pow_mod(C::splat(3.0), C::splat(5.0)), C::new(3.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub fn pow_mod(self, exp: Self, modulus: Self) -> Self {
        let (x, y, z) = (self.to_f64_array(), exp.to_f64_array(), modulus.to_f64_array());
        Self::from_f64_array([0, 1, 2].map(|i| numeric::pow_mod(x[i], y[i], z[i])))
    }

    /// Clamps this color from below by `floor`: the channel-wise maximum.
    #[inline]
    pub fn limit_min(self, floor: Self) -> Self {
        self.zip_f64(floor, f64::max)
    }

    /// Clamps this color from above by `ceiling`: the channel-wise minimum.
    #[inline]
    pub fn limit_max(self, ceiling: Self) -> Self {
        self.zip_f64(ceiling, f64::min)
    }
}

impl<R: ChannelRange, T: Channel> Add for Color<R, T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_f64(rhs, |a, b| a + b)
    }
}

impl<R: ChannelRange, T: Channel> Sub for Color<R, T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_f64(rhs, |a, b| a - b)
    }
}

impl<R: ChannelRange, T: Channel> Mul for Color<R, T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.zip_f64(rhs, |a, b| a * b)
    }
}

impl<R: ChannelRange, T: Channel> Div for Color<R, T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.true_div(rhs)
    }
}

impl<R: ChannelRange, T: Channel> Rem for Color<R, T> {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.floor_mod(rhs)
    }
}

impl<R: ChannelRange, T: Channel> Neg for Color<R, T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map_f64(|v| -v)
    }
}

// ============================================================================
// Hashing
// ============================================================================

/// Number of buckets [`Color::hash_with`] spreads a unit hash over.
pub const HASH_BUCKETS: f64 = 256.0;

impl<R: ChannelRange, T: Channel> Color<R, T> {
    /// Hashes the normalized channels with `unit_hash` and scales the
    /// result into `[0, 256)`.
    ///
    /// `unit_hash` receives the unscaled channels and is expected to return
    /// a value in `[0, 1)`, so colors that differ only by range hash alike.
    pub fn hash_with<F: FnOnce([f64; 3]) -> f64>(self, unit_hash: F) -> i64 {
        (unit_hash(self.to_normalized()) * HASH_BUCKETS) as i64
    }

    /// Built-in hash: [`unit_hash`] of the normalized channels, in `[0, 256)`.
    ///
    /// # Example
    ///
    /// ```
    /// use tada_core::{Color, Normal, Range255};
    ///
    /// let a: Color<Normal, f64> = Color::new(1.0, 0.0, 0.5);
    /// let b: Color<Range255, f64> = Color::new(255.0, 0.0, 127.5);
    /// assert_eq!(a.hash(), b.hash());
    /// assert!((0..256).contains(&a.hash()));
    /// ```
    #[inline]
    pub fn hash(self) -> i64 {
        self.hash_with(unit_hash)
    }
}

/// Hashes a normalized triple to a value in `[0, 1)`.
///
/// `0.0` and `-0.0` hash alike.
pub fn unit_hash(c: [f64; 3]) -> f64 {
    let mut hasher = DefaultHasher::new();
    for v in c {
        // Fold negative zero onto zero.
        (v + 0.0).to_bits().hash(&mut hasher);
    }
    (hasher.finish() >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{Normal, Range255, Range256};
    use approx::assert_relative_eq;

    type C = Color<Normal, f64>;
    type C255 = Color<Range255, f32>;

    #[test]
    fn test_unary() {
        let c = C::new(-1.5, 0.25, 2.75);
        assert_eq!(c.abs(), C::new(1.5, 0.25, 2.75));
        assert_eq!(c.floor(), C::new(-2.0, 0.0, 2.0));
        assert_eq!(c.ceil(), C::new(-1.0, 1.0, 3.0));
        assert_eq!(c.trunc(), C::new(-1.0, 0.0, 2.0));
        assert_eq!(-c, C::new(1.5, -0.25, -2.75));
    }

    #[test]
    fn test_round_half_even() {
        let c = C::new(0.5, 1.5, 2.5);
        assert_eq!(c.round(0), C::new(0.0, 2.0, 2.0));
        let c = C::new(-0.5, -1.5, 3.5);
        assert_eq!(c.round(0), C::new(0.0, -2.0, 4.0));
    }

    #[test]
    fn test_round_digits() {
        let c = C::new(0.125, 0.375, 0.123456);
        let r = c.round(2);
        assert_eq!(r[0], 0.12);
        assert_eq!(r[1], 0.38);
        assert_relative_eq!(r[2], 0.12);
    }

    #[test]
    fn test_invert_uses_range() {
        assert_eq!(C::new(0.25, 1.0, 0.0).invert(), C::new(0.75, 0.0, 1.0));
        let c: Color<Range256, f32> = Color::new(0.0, 56.0, 256.0);
        assert_eq!(c.invert(), Color::new(256.0, 200.0, 0.0));
        assert_eq!(c.invert().invert(), c);
    }

    #[test]
    fn test_arithmetic() {
        let a = C255::new(10.0, 20.0, 30.0);
        let b = C255::new(1.0, 2.0, 3.0);
        assert_eq!(a + b, C255::new(11.0, 22.0, 33.0));
        assert_eq!(a - b, C255::new(9.0, 18.0, 27.0));
        assert_eq!(a * b, C255::new(10.0, 40.0, 90.0));
        assert_eq!(a / b, C255::splat(10.0));
    }

    #[test]
    fn test_true_div_does_not_truncate() {
        let a = C::new(1.0, -7.0, 0.0);
        let b = C::new(2.0, 2.0, 5.0);
        assert_eq!(a.true_div(b), C::new(0.5, -3.5, 0.0));
    }

    #[test]
    fn test_floor_mod_follows_divisor() {
        let a = C::new(-7.0, 7.0, -7.0);
        let b = C::new(3.0, -3.0, -3.0);
        assert_eq!(a % b, C::new(2.0, -2.0, -1.0));
    }

    #[test]
    fn test_pow() {
        let a = C::new(2.0, 9.0, -2.0);
        let b = C::new(3.0, 0.5, 2.0);
        let p = a.pow(b);
        assert_eq!(p[0], 8.0);
        assert_relative_eq!(p[1], 3.0);
        assert_eq!(p[2], 4.0);
    }

    #[test]
    fn test_pow_mod_applies_modulus_after() {
        let x = C::new(2.0, 3.0, 10.0);
        let y = C::new(10.0, 4.0, 2.0);
        let z = C::new(1000.0, 7.0, -7.0);
        // 1024 % 1000, 81 % 7, 100 % -7
        assert_eq!(x.pow_mod(y, z), C::new(24.0, 4.0, -5.0));
    }

    #[test]
    fn test_limits() {
        let a = C::new(0.0, 0.5, 1.0);
        let b = C::splat(0.5);
        assert_eq!(a.limit_min(b), C::new(0.5, 0.5, 1.0));
        assert_eq!(a.limit_max(b), C::new(0.0, 0.5, 0.5));
    }

    #[test]
    fn test_rotated() {
        let c = C::new(1.0, 2.0, 3.0);
        assert_eq!(c.rotated(0), c);
        assert_eq!(c.rotated(3), c);
        assert_eq!(c.rotated(2), C::new(2.0, 3.0, 1.0));
        assert_eq!(c.rotated(-4), C::new(2.0, 3.0, 1.0));
        assert_eq!(c.rotated(5).rotated(-5), c);
    }

    #[test]
    fn test_hash_is_bounded_and_stable() {
        let c = C::new(0.1, 0.2, 0.3);
        let h = c.hash();
        assert!((0..256).contains(&h));
        assert_eq!(h, C::new(0.1, 0.2, 0.3).hash());
    }

    #[test]
    fn test_hash_negative_zero() {
        assert_eq!(C::new(-0.0, 0.0, 0.0).hash(), C::zero().hash());
    }

    #[test]
    fn test_hash_with_receives_normalized() {
        let c = C255::new(255.0, 0.0, 51.0);
        let h = c.hash_with(|n| {
            assert_eq!(n, [1.0, 0.0, 0.2]);
            0.5
        });
        assert_eq!(h, 128);
    }
}
