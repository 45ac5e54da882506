//! Codecs between colors and their external representations.
//!
//! Both codecs speak **normalized** channels (`[0, 1]`). A
//! [`Color`](crate::Color) unscales itself before encoding and scales the
//! decoded triple back into its own range, so the codecs never see a
//! channel range.
//!
//! - [`hex`] - packed `0xRRGGBB` integers
//! - [`text`] - color names, `#rrggbb` literals and numeric tuples

pub mod hex;
pub mod text;

pub use hex::{color_from_hex, hex_from_color};
pub use text::{color_names, color_to_string, string_to_color};
