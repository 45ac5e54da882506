//! Numeric semantics of the scripting host.
//!
//! Color math has to agree with the host language the colors come from,
//! not with Rust's primitive operators. The differences matter:
//!
//! | Operation       | Rust native             | Here                         |
//! |-----------------|-------------------------|------------------------------|
//! | `x % y`         | sign follows dividend   | sign follows divisor         |
//! | `x.round()`     | half away from zero     | half to even                 |
//! | `pow(x, y, z)`  | n/a                     | `(x ** y) mod z`             |
//!
//! All functions take and return `f64`.

/// True (non-truncating) division.
///
/// Division by zero follows IEEE 754: `±inf` for a non-zero numerator,
/// NaN for `0 / 0`.
///
/// # Example
///
/// ```rust
/// use tada_math::true_div;
///
/// assert_eq!(true_div(7.0, 2.0), 3.5);
/// assert_eq!(true_div(-7.0, 2.0), -3.5);
/// ```
#[inline]
pub fn true_div(x: f64, y: f64) -> f64 {
    x / y
}

/// Modulo whose result takes the sign of the divisor.
///
/// A zero remainder carries the divisor's sign, and a zero divisor
/// yields NaN.
///
/// # Example
///
/// ```rust
/// use tada_math::floor_mod;
///
/// assert_eq!(floor_mod(7.0, 3.0), 1.0);
/// assert_eq!(floor_mod(-7.0, 3.0), 2.0);
/// assert_eq!(floor_mod(7.0, -3.0), -2.0);
/// ```
pub fn floor_mod(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        return f64::NAN;
    }
    let r = x % y;
    if r == 0.0 {
        0.0_f64.copysign(y)
    } else if (r < 0.0) != (y < 0.0) {
        r + y
    } else {
        r
    }
}

/// `x` raised to the power `y`, as the platform `pow` computes it.
///
/// A negative base with a fractional exponent has no real result and
/// yields NaN.
///
/// # Example
///
/// ```rust
/// use tada_math::power;
///
/// assert_eq!(power(-2.0, 3.0), -8.0);
/// assert_eq!(power(1.1, 100.0), 13780.61233982238);
/// ```
#[inline]
pub fn power(x: f64, y: f64) -> f64 {
    x.powf(y)
}

/// Ternary power: `(x ** y) mod z`, with the modulus applied after
/// exponentiation.
///
/// # Example
///
/// ```rust
/// use tada_math::pow_mod;
///
/// assert_eq!(pow_mod(3.0, 2.0, 4.0), 1.0);
/// assert_eq!(pow_mod(-2.0, 3.0, 5.0), 2.0);
/// ```
#[inline]
pub fn pow_mod(x: f64, y: f64, z: f64) -> f64 {
    floor_mod(power(x, y), z)
}

/// Rounds to the nearest whole number, ties to even.
#[inline]
pub fn round_half_even(x: f64) -> f64 {
    x.round_ties_even()
}

/// Largest digit count that can change a finite `f64`.
const ROUND_DIGITS_MAX: i32 = 323;

/// Smallest digit count that can leave a finite `f64` non-zero.
const ROUND_DIGITS_MIN: i32 = -308;

/// Rounds to `digits` decimal places, ties to even.
///
/// The decision is made on the exact decimal value of `x`, so a double
/// that only looks like a tie (`0.0025` is slightly above it) rounds the
/// way its true value says. Negative `digits` round to tens, hundreds and
/// so on. NaN and infinities are returned unchanged.
///
/// # Example
///
/// ```rust
/// use tada_math::round_digits;
///
/// assert_eq!(round_digits(2.5, 0), 2.0);
/// assert_eq!(round_digits(3.5, 0), 4.0);
/// assert_eq!(round_digits(0.125, 2), 0.12);
/// assert_eq!(round_digits(0.0025, 3), 0.003);
/// assert_eq!(round_digits(1250.0, -2), 1200.0);
/// ```
pub fn round_digits(x: f64, digits: i32) -> f64 {
    if !x.is_finite() || digits > ROUND_DIGITS_MAX {
        return x;
    }
    if digits < ROUND_DIGITS_MIN {
        return 0.0 * x;
    }
    if digits >= 0 {
        // Float formatting rounds the exact binary value, ties to even.
        let text = format!("{:.*}", digits as usize, x);
        return text.parse().unwrap_or(x);
    }
    let p = 10f64.powi(digits.unsigned_abs() as i32);
    let y = round_half_even(x / p) * p;
    if y == 0.0 { 0.0 * x } else { y }
}

/// Reflects `x` within `[0, range]`: `range - x`.
#[inline]
pub fn invert(x: f64, range: f64) -> f64 {
    range - x
}
