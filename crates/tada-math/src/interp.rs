//! Interpolation utilities for color spreads.
//!
//! # Usage
//!
//! ```rust
//! use tada_math::{lerp, spread_steps};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//!
//! let t: Vec<f64> = spread_steps(4).collect();
//! assert_eq!(t, vec![0.25, 0.5, 0.75, 1.0]);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`, except that `t = 1.0` returns `b` exactly.
///
/// # Example
///
/// ```rust
/// use tada_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t == 1.0 { b } else { a + (b - a) * t }
}

/// Fractions for a linear spread of `count` new points.
///
/// Yields `1/count, 2/count, ..., 1`. The start point itself is not part
/// of the spread; the last fraction is exactly `1.0`.
pub fn spread_steps(count: usize) -> impl ExactSizeIterator<Item = f64> {
    let n = count as f64;
    (1..count + 1).map(move |i| if i == count { 1.0 } else { i as f64 / n })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(10.0, 0.0, 0.25), 7.5);
    }

    #[test]
    fn test_lerp_exact_endpoint() {
        // 0.1 + (0.7 - 0.1) * 1.0 is not exactly 0.7 in binary.
        assert_eq!(lerp(0.1, 0.7, 1.0), 0.7);
    }

    #[test]
    fn test_spread_steps() {
        assert_eq!(spread_steps(0).count(), 0);
        assert_eq!(spread_steps(1).collect::<Vec<_>>(), vec![1.0]);
        assert_eq!(spread_steps(2).collect::<Vec<_>>(), vec![0.5, 1.0]);
        assert_eq!(spread_steps(3).len(), 3);
    }
}
