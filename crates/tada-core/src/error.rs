//! Error types for tada operations.
//!
//! Almost all color math is total. The few operations that can fail do so
//! with an [`Error`] value, never a panic:
//!
//! - Keyed access into a color list with a key that does not normalize
//! - Pairwise list math between lists of different lengths
//! - Slices with a zero step, or extended slice assignment of the wrong size
//! - Parsing a color from text
//!
//! Lookups the scripting host models with a sentinel (`pop`, `index`) return
//! `Option` instead.
//!
//! # Usage
//!
//! ```rust
//! use tada_core::{Error, Result};
//!
//! fn check_lengths(left: usize, right: usize) -> Result<()> {
//!     if left != right {
//!         return Err(Error::length_mismatch(left, right));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_lengths(3, 4).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use tada_math::SliceError;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from color and color list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A signed key does not address an element.
    ///
    /// The key is reported as given, before normalization.
    #[error("index {key} out of range for list of length {len}")]
    IndexOutOfRange {
        /// Key as supplied by the caller
        key: isize,
        /// Length of the list
        len: usize,
    },

    /// Two operands that must have the same number of elements do not.
    ///
    /// Detected before any element is modified.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Required element count
        expected: usize,
        /// Actual element count
        got: usize,
    },

    /// A slice could not be resolved.
    #[error("invalid slice: {0}")]
    InvalidSlice(String),

    /// Text did not describe a color.
    #[error("cannot parse color from {input:?}")]
    Parse {
        /// The rejected input
        input: String,
    },

    /// A color searched for by value is not in the list.
    #[error("color not in list")]
    NotFound,
}

impl Error {
    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(key: isize, len: usize) -> Self {
        Self::IndexOutOfRange { key, len }
    }

    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }

    /// Creates an [`Error::Parse`] error.
    #[inline]
    pub fn parse(input: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
        }
    }

    /// Returns `true` if this is an index or slice error.
    #[inline]
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. } | Self::InvalidSlice(_))
    }

    /// Returns `true` if this is a length mismatch.
    #[inline]
    pub fn is_length_error(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. })
    }

    /// Returns `true` if this is a parse error.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<SliceError> for Error {
    fn from(e: SliceError) -> Self {
        Self::InvalidSlice(e.to_string())
    }
}
