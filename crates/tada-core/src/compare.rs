//! Ordering, comparison and distance between colors.
//!
//! # Order
//!
//! Colors are ordered lexicographically by channel: channel 0 decides, then
//! channel 1, then channel 2. [`Color::compare`] expresses this as a signed
//! number (the first non-zero channel difference) so the scripting host can
//! use it directly as a three-way comparison result.
//!
//! ```
//! use tada_core::{Color, Normal, Relation};
//!
//! type C = Color<Normal, f64>;
//!
//! let a = C::new(0.5, 0.0, 0.0);
//! let b = C::new(0.5, 0.25, 0.0);
//! assert_eq!(a.compare(&b), -0.25);
//! assert!(a.compare_with(&b, Relation::Lt));
//! assert!(a < b);
//! ```

use crate::channel::Channel;
use crate::color::Color;
use crate::range::ChannelRange;
use std::cmp::Ordering;
use std::fmt;

/// A relational operator applied to a three-way comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Relation {
    /// All relations, in rich-comparison opcode order.
    pub const ALL: [Relation; 6] = [
        Relation::Lt,
        Relation::Le,
        Relation::Eq,
        Relation::Ne,
        Relation::Gt,
        Relation::Ge,
    ];

    /// Maps a host rich-comparison opcode (`0..=5`: lt, le, eq, ne, gt, ge).
    ///
    /// # Example
    ///
    /// ```
    /// use tada_core::Relation;
    ///
    /// assert_eq!(Relation::from_richcmp(2), Some(Relation::Eq));
    /// assert_eq!(Relation::from_richcmp(6), None);
    /// ```
    pub fn from_richcmp(op: i32) -> Option<Self> {
        usize::try_from(op).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Applies the relation to a signed comparison result against zero.
    ///
    /// NaN satisfies only [`Relation::Ne`].
    #[inline]
    pub fn holds(self, cmp: f64) -> bool {
        match self {
            Relation::Lt => cmp < 0.0,
            Relation::Le => cmp <= 0.0,
            Relation::Eq => cmp == 0.0,
            Relation::Ne => cmp != 0.0,
            Relation::Gt => cmp > 0.0,
            Relation::Ge => cmp >= 0.0,
        }
    }

    /// The operator symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Lt => "<",
            Relation::Le => "<=",
            Relation::Eq => "==",
            Relation::Ne => "!=",
            Relation::Gt => ">",
            Relation::Ge => ">=",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl<R: ChannelRange, T: Channel> Color<R, T> {
    /// Three-way lexicographic comparison.
    ///
    /// Returns the first non-zero difference `self[i] - other[i]` for
    /// `i = 0, 1, 2`, or `0.0` when all channels are equal. The sign says
    /// which color orders first; the magnitude is informational. Equal
    /// infinities count as equal channels.
    pub fn compare(&self, other: &Self) -> f64 {
        let (a, b) = (self.to_f64_array(), other.to_f64_array());
        a.iter()
            .zip(b.iter())
            .find(|(x, y)| x != y)
            .map_or(0.0, |(x, y)| x - y)
    }

    /// Applies `relation` to [`compare`](Self::compare).
    #[inline]
    pub fn compare_with(&self, other: &Self, relation: Relation) -> bool {
        relation.holds(self.compare(other))
    }

    /// Sum of squared channel differences. Never negative.
    ///
    /// # Example
    ///
    /// ```
    /// use tada_core::{Color, Range255};
    ///
    /// let a: Color<Range255, f32> = Color::new(0.0, 0.0, 0.0);
    /// let b: Color<Range255, f32> = Color::new(3.0, 4.0, 0.0);
    /// assert_eq!(a.distance2(&b), 25.0);
    /// assert_eq!(a.distance(&b), 5.0);
    /// ```
    pub fn distance2(&self, other: &Self) -> f64 {
        let (a, b) = (self.to_f64_array(), other.to_f64_array());
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| {
                let d = x - y;
                d * d
            })
            .sum()
    }

    /// Euclidean distance: `sqrt(distance2)`.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance2(other).sqrt()
    }
}

impl<R: ChannelRange, T: Channel> PartialOrd for Color<R, T> {
    /// Lexicographic channel order; `None` if the first differing channel
    /// involves NaN.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let c = self.compare(other);
        if c < 0.0 {
            Some(Ordering::Less)
        } else if c > 0.0 {
            Some(Ordering::Greater)
        } else if c == 0.0 {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Normal;

    type C = Color<Normal, f64>;

    fn samples() -> Vec<C> {
        vec![
            C::new(0.0, 0.0, 0.0),
            C::new(1.0, 0.0, 0.0),
            C::new(0.0, 1.0, 0.0),
            C::new(0.0, 0.0, 1.0),
            C::new(0.5, 0.5, -0.5),
            C::new(-2.0, 3.0, 0.25),
            C::new(0.5, 0.5, 0.5),
        ]
    }

    #[test]
    fn test_compare_antisymmetric() {
        for x in samples() {
            assert_eq!(x.compare(&x), 0.0);
            for y in samples() {
                assert_eq!(x.compare(&y), -y.compare(&x));
            }
        }
    }

    #[test]
    fn test_compare_first_nonzero_channel() {
        let a = C::new(1.0, 5.0, 9.0);
        assert_eq!(a.compare(&C::new(0.5, 9.0, 9.0)), 0.5);
        assert_eq!(a.compare(&C::new(1.0, 7.0, 0.0)), -2.0);
        assert_eq!(a.compare(&C::new(1.0, 5.0, 10.0)), -1.0);
        assert_eq!(a.compare(&a), 0.0);

        let inf = C::new(f64::INFINITY, 1.0, 0.0);
        assert_eq!(inf.compare(&C::new(f64::INFINITY, 0.0, 0.0)), 1.0);
    }

    #[test]
    fn test_compare_with_relations() {
        let a = C::new(0.0, 1.0, 0.0);
        let b = C::new(0.0, 2.0, 0.0);
        assert!(a.compare_with(&b, Relation::Lt));
        assert!(a.compare_with(&b, Relation::Le));
        assert!(a.compare_with(&b, Relation::Ne));
        assert!(!a.compare_with(&b, Relation::Eq));
        assert!(!a.compare_with(&b, Relation::Gt));
        assert!(!a.compare_with(&b, Relation::Ge));
        assert!(a.compare_with(&a, Relation::Eq));
        assert!(a.compare_with(&a, Relation::Ge));
    }

    #[test]
    fn test_from_richcmp() {
        for (i, r) in Relation::ALL.iter().enumerate() {
            assert_eq!(Relation::from_richcmp(i as i32), Some(*r));
        }
        assert_eq!(Relation::from_richcmp(-1), None);
        assert_eq!(Relation::Ge.to_string(), ">=");
    }

    #[test]
    fn test_partial_ord() {
        assert!(C::new(0.0, 0.0, 1.0) < C::new(0.0, 1.0, 0.0));
        assert!(C::new(1.0, 0.0, 0.0) > C::new(0.0, 9.0, 9.0));
        assert_eq!(
            C::new(f64::NAN, 0.0, 0.0).partial_cmp(&C::zero()),
            None
        );
    }

    #[test]
    fn test_distance() {
        for x in samples() {
            assert_eq!(x.distance2(&x), 0.0);
            for y in samples() {
                assert!(x.distance2(&y) >= 0.0);
                assert_eq!(x.distance(&y), y.distance(&x));
            }
        }
        assert_eq!(C::zero().distance2(&C::new(1.0, 2.0, 2.0)), 9.0);
        assert_eq!(C::zero().distance(&C::new(1.0, 2.0, 2.0)), 3.0);
    }
}
