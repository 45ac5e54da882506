//! Text codec: color names, hex literals and numeric tuples.
//!
//! # Accepted Input
//!
//! Parsing ignores case and surrounding whitespace:
//!
//! | Form              | Example             |
//! |-------------------|---------------------|
//! | Name              | `red`, `Navy`       |
//! | Hex literal       | `#ff8000`, `0xff8000` |
//! | Tuple             | `(1, 0.5, 0)`       |
//! | Bare triple       | `1, 0.5, 0`         |
//!
//! Tuple channels are normalized values and must be finite.
//!
//! # Output
//!
//! A color equal to a named color (to within a small tolerance) prints as
//! the name. Anything else prints as a tuple using the channel type's own
//! formatting, which round-trips.

use crate::channel::Channel;
use crate::codec::hex::{color_from_hex, hex_from_color};

/// Named colors and their packed values, in listing order.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xFFFFFF),
    ("red", 0xFF0000),
    ("lime", 0x00FF00),
    ("blue", 0x0000FF),
    ("yellow", 0xFFFF00),
    ("cyan", 0x00FFFF),
    ("magenta", 0xFF00FF),
    ("gray", 0x808080),
    ("silver", 0xC0C0C0),
    ("maroon", 0x800000),
    ("olive", 0x808000),
    ("green", 0x008000),
    ("purple", 0x800080),
    ("teal", 0x008080),
    ("navy", 0x000080),
    ("orange", 0xFFA500),
];

/// Maximum per-channel distance from a named color's exact value that
/// still prints as the name. Covers `f32` storage error.
const NAME_TOLERANCE: f64 = 1e-6;

/// Names recognized by [`string_to_color`], in a stable order.
pub fn color_names() -> impl ExactSizeIterator<Item = &'static str> {
    NAMED_COLORS.iter().map(|(name, _)| *name)
}

/// Formats a normalized color.
///
/// # Example
///
/// ```
/// use tada_core::codec::color_to_string;
///
/// assert_eq!(color_to_string([1.0f32, 0.0, 0.0]), "red");
/// assert_eq!(color_to_string([0.5f32, 0.25, 0.0]), "(0.5, 0.25, 0)");
/// ```
pub fn color_to_string<T: Channel>(c: [T; 3]) -> String {
    if let Some(name) = name_of(c.map(Channel::to_f64)) {
        return name.to_string();
    }
    format!("({}, {}, {})", c[0], c[1], c[2])
}

/// Parses a normalized color. Returns `None` for anything unrecognized.
///
/// # Example
///
/// ```
/// use tada_core::codec::string_to_color;
///
/// assert_eq!(string_to_color(" Red "), Some([1.0, 0.0, 0.0]));
/// assert_eq!(string_to_color("#0000ff"), Some([0.0, 0.0, 1.0]));
/// assert_eq!(string_to_color("(0.5, 0.5, 0.5)"), Some([0.5, 0.5, 0.5]));
/// assert_eq!(string_to_color("chartreuse-ish"), None);
/// ```
pub fn string_to_color(s: &str) -> Option<[f64; 3]> {
    let s = s.trim().to_ascii_lowercase();
    if s.is_empty() {
        return None;
    }
    if let Some((_, hex)) = NAMED_COLORS.iter().find(|(name, _)| *name == s) {
        return Some(color_from_hex(*hex));
    }
    if let Some(digits) = s.strip_prefix('#').or_else(|| s.strip_prefix("0x")) {
        return parse_hex(digits).map(color_from_hex);
    }
    parse_tuple(&s)
}

fn name_of(c: [f64; 3]) -> Option<&'static str> {
    let hex = hex_from_color(c);
    let exact = color_from_hex(hex);
    let close = c
        .iter()
        .zip(exact.iter())
        .all(|(a, b)| (a - b).abs() <= NAME_TOLERANCE);
    if !close {
        return None;
    }
    NAMED_COLORS
        .iter()
        .find(|(_, h)| *h == hex)
        .map(|(name, _)| *name)
}

fn parse_hex(digits: &str) -> Option<u32> {
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

fn parse_tuple(s: &str) -> Option<[f64; 3]> {
    let inner = match s.strip_prefix('(') {
        Some(rest) => rest.strip_suffix(')')?,
        None => s,
    };
    let mut out = [0.0; 3];
    let mut parts = inner.split(',');
    for slot in &mut out {
        let v: f64 = parts.next()?.trim().parse().ok()?;
        if !v.is_finite() {
            return None;
        }
        *slot = v;
    }
    match parts.next() {
        None => Some(out),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for name in color_names() {
            let c = string_to_color(name).unwrap();
            assert_eq!(color_to_string(c), name);
        }
    }

    #[test]
    fn test_name_with_f32_storage() {
        let gray = string_to_color("gray").unwrap().map(|v| v as f32);
        assert_eq!(color_to_string(gray), "gray");
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(string_to_color("  NAVY\t"), string_to_color("navy"));
        assert_eq!(string_to_color("#FF8000"), string_to_color("0xff8000"));
    }

    #[test]
    fn test_tuple_forms() {
        assert_eq!(string_to_color("1, 2, 3"), Some([1.0, 2.0, 3.0]));
        assert_eq!(string_to_color("( -1 ,0.5,  2 )"), Some([-1.0, 0.5, 2.0]));
    }

    #[test]
    fn test_rejects() {
        assert_eq!(string_to_color(""), None);
        assert_eq!(string_to_color("#fff"), None);
        assert_eq!(string_to_color("#gggggg"), None);
        assert_eq!(string_to_color("(1, 2)"), None);
        assert_eq!(string_to_color("(1, 2, 3, 4)"), None);
        assert_eq!(string_to_color("(1, 2, 3"), None);
        assert_eq!(string_to_color("(nan, 0, 0)"), None);
        assert_eq!(string_to_color("(inf, 0, 0)"), None);
    }

    #[test]
    fn test_unnamed_prints_tuple() {
        assert_eq!(color_to_string([0.5f64, 0.5, 0.5]), "(0.5, 0.5, 0.5)");
        assert_eq!(color_to_string([-1.0f32, 2.0, 0.0]), "(-1, 2, 0)");
    }
}
