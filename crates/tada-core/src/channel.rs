//! Scalar types a color channel can be stored as.
//!
//! # Types
//!
//! - `f32` - the common case
//! - `f64` - when channels must survive repeated math without drift
//! - `half::f16` - compact storage (feature `f16`, on by default)
//!
//! All arithmetic runs on `f64` intermediates. A channel converts to `f64`,
//! the operation happens there, and the result converts back. This keeps a
//! single implementation of every numeric rule in `tada-math` and makes
//! `f16` channels behave exactly like wider ones up to storage precision.

use std::fmt;

/// Trait for channel data types.
///
/// # Example
///
/// ```
/// use tada_core::Channel;
///
/// let v: f32 = Channel::from_f64(0.25);
/// assert_eq!(v.to_f64(), 0.25);
/// assert_eq!(<f32 as Channel>::ZERO, 0.0);
/// ```
pub trait Channel:
    Copy + Clone + Default + Send + Sync + PartialEq + PartialOrd + fmt::Debug + fmt::Display + 'static
{
    /// Name of the type, for diagnostics.
    const NAME: &'static str;

    /// Zero value.
    const ZERO: Self;

    /// Positive infinity, the seed for a minimum reduction.
    const INFINITY: Self;

    /// Negative infinity, the seed for a maximum reduction.
    const NEG_INFINITY: Self;

    /// Widen to `f64`. Lossless for every implementor.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`, rounding to the nearest representable value.
    fn from_f64(v: f64) -> Self;

    /// Applies an `f64` function to this value.
    #[inline]
    fn map_f64<F: FnOnce(f64) -> f64>(self, f: F) -> Self {
        Self::from_f64(f(self.to_f64()))
    }

    /// Returns true if the value is NaN.
    #[inline]
    fn is_nan(self) -> bool {
        self.to_f64().is_nan()
    }
}

impl Channel for f32 {
    const NAME: &'static str = "f32";
    const ZERO: Self = 0.0;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Channel for f64 {
    const NAME: &'static str = "f64";
    const ZERO: Self = 0.0;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

#[cfg(feature = "f16")]
impl Channel for half::f16 {
    const NAME: &'static str = "f16";
    const ZERO: Self = half::f16::ZERO;
    const INFINITY: Self = half::f16::INFINITY;
    const NEG_INFINITY: Self = half::f16::NEG_INFINITY;

    #[inline]
    fn to_f64(self) -> f64 {
        half::f16::to_f64(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::f16::from_f64(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_roundtrip() {
        assert_eq!(f32::from_f64(0.5), 0.5f32);
        assert_eq!(0.5f32.to_f64(), 0.5);
        assert_eq!(<f32 as Channel>::NAME, "f32");
    }

    #[test]
    fn test_map_f64() {
        assert_eq!((-2.5f32).map_f64(f64::abs), 2.5);
        assert_eq!(2.5f64.map_f64(f64::floor), 2.0);
    }

    #[test]
    fn test_infinities() {
        assert!(<f32 as Channel>::INFINITY > f32::MAX);
        assert!(<f64 as Channel>::NEG_INFINITY < f64::MIN);
    }

    #[cfg(feature = "f16")]
    #[test]
    fn test_f16() {
        use half::f16;
        let v = f16::from_f64(0.25);
        assert_eq!(Channel::to_f64(v), 0.25);
        assert_eq!(<f16 as Channel>::from_f64(1.5), f16::from_f32(1.5));
        assert!(<f16 as Channel>::INFINITY.is_infinite());
    }
}
