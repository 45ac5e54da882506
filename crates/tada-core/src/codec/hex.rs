//! Packed `0xRRGGBB` hex codec.
//!
//! Each byte maps linearly onto `[0, 1]` as `byte / 255`. Encoding clamps
//! to `[0, 1]` and rounds half to even, so every 24-bit value survives a
//! decode/encode round trip unchanged.

use tada_math::round_half_even;

const BYTE_MAX: f64 = 255.0;

/// Decodes a packed `0xRRGGBB` value into a normalized triple.
///
/// Bits above the low 24 are ignored.
///
/// # Example
///
/// ```
/// use tada_core::codec::color_from_hex;
///
/// assert_eq!(color_from_hex(0xFF0000), [1.0, 0.0, 0.0]);
/// assert_eq!(color_from_hex(0x00FF00), [0.0, 1.0, 0.0]);
/// ```
pub fn color_from_hex(hex: u32) -> [f64; 3] {
    [16, 8, 0].map(|shift| ((hex >> shift) & 0xFF) as f64 / BYTE_MAX)
}

/// Encodes a normalized triple as a packed `0xRRGGBB` value.
///
/// Channels outside `[0, 1]` are clamped; NaN encodes as zero.
pub fn hex_from_color(c: [f64; 3]) -> u32 {
    c.iter().fold(0, |acc, &v| (acc << 8) | encode_byte(v))
}

fn encode_byte(v: f64) -> u32 {
    if v.is_nan() {
        return 0;
    }
    round_half_even(v.clamp(0.0, 1.0) * BYTE_MAX) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        assert_eq!(color_from_hex(0x000000), [0.0, 0.0, 0.0]);
        assert_eq!(color_from_hex(0xFFFFFF), [1.0, 1.0, 1.0]);
        assert_eq!(color_from_hex(0x0000FF), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_decode_ignores_high_bits() {
        assert_eq!(color_from_hex(0xAB00FF00), color_from_hex(0x00FF00));
    }

    #[test]
    fn test_encode_clamps() {
        assert_eq!(hex_from_color([2.0, -1.0, 0.5]), 0xFF0080);
        assert_eq!(hex_from_color([f64::NAN, 1.0, 0.0]), 0x00FF00);
    }

    #[test]
    fn test_roundtrip_every_byte() {
        for b in 0..=0xFFu32 {
            let hex = (b << 16) | ((0xFF - b) << 8) | b;
            assert_eq!(hex_from_color(color_from_hex(hex)), hex);
        }
    }
}
