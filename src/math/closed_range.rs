// Copyright (c) 2026 the ordrange developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Closed Ranges
//!
//! A closed interval `[lower; upper]` over a totally ordered domain. A
//! `ClosedRange<C>` contains every value `v` with `lower <= v <= upper`,
//! always contains both of its bounds, and is therefore never empty; the
//! empty interval is represented by absence (`Option::None`), never by a
//! distinguished state.
//!
//! ## Highlights
//!
//! - Validation at the construction boundary: `new` panics on `lower > upper`,
//!   `try_new` returns `Option`, and every operation downstream relies on the
//!   invariant instead of re-checking it.
//! - Equality and hashing are defined through `Ord::cmp` on the bounds, so
//!   two ranges are equal exactly when their bounds compare equal.
//! - Combination operations (`intersection`, `extend_with_value`,
//!   `extend_with_range`) return one of their operands unchanged whenever no
//!   new bound combination is needed.
//! - The text format `"[lower; upper]"` is both the `Display` output and the
//!   `parse` grammar. The separator is `"; "` rather than a comma because
//!   some numeric formats use `,` as a decimal separator.
//!
//! ## Usage
//!
//! ```rust
//! use ordrange::math::closed_range::ClosedRange;
//!
//! let range = ClosedRange::new(1, 10);
//! assert!(range.contains(&7));
//! assert_eq!(range.to_string(), "[1; 10]");
//!
//! let narrowed = range.intersection(ClosedRange::new(5, 20));
//! assert_eq!(narrowed, Some(ClosedRange::new(5, 10)));
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, Bound, RangeBounds, RangeInclusive};
use std::str::FromStr;

const OPEN_SYMBOL: char = '[';
const CLOSE_SYMBOL: char = ']';
const SEPARATOR: &str = "; ";

/// A closed interval `[lower; upper]` over a totally ordered domain `C`.
///
/// # Invariants
///
/// `lower <= upper` under the domain's total order, established at
/// construction and relied upon (never re-checked) by every operation.
///
/// # Examples
///
/// ```rust
/// use ordrange::math::closed_range::ClosedRange;
///
/// let range = ClosedRange::new(3, 6);
/// assert!(range.contains(&3));
/// assert!(range.contains(&6));
/// assert!(!range.contains(&7));
/// ```
#[derive(Clone, Copy)]
pub struct ClosedRange<C> {
    lower: C,
    upper: C,
}

impl<C: Ord> ClosedRange<C> {
    /// Creates a new `ClosedRange` of `[lower; upper]`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let range = ClosedRange::new(1, 5);
    /// assert_eq!(*range.lower_bound(), 1);
    /// assert_eq!(*range.upper_bound(), 5);
    /// ```
    #[inline]
    pub fn new(lower: C, upper: C) -> Self {
        assert!(
            lower <= upper,
            "Invalid ClosedRange: lower bound must be less than or equal to upper bound"
        );
        Self { lower, upper }
    }

    /// Creates a new `ClosedRange` if the bounds are correctly ordered.
    ///
    /// Returns `None` if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// assert!(ClosedRange::try_new(1, 5).is_some());
    /// assert!(ClosedRange::try_new(5, 1).is_none());
    /// ```
    #[inline]
    pub fn try_new(lower: C, upper: C) -> Option<Self> {
        if lower <= upper {
            Some(Self { lower, upper })
        } else {
            None
        }
    }

    /// Checks whether the given bounds could form a valid `ClosedRange`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// assert!(ClosedRange::is_valid(&1, &5));
    /// assert!(ClosedRange::is_valid(&5, &5));
    /// assert!(!ClosedRange::is_valid(&5, &1));
    /// ```
    #[inline]
    pub fn is_valid(lower: &C, upper: &C) -> bool {
        lower <= upper
    }

    /// Returns the degenerate range `[value; value]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let range = ClosedRange::single(5);
    /// assert!(range.contains(&5));
    /// assert!(!range.contains(&4));
    /// ```
    #[inline]
    pub fn single(value: C) -> Self
    where
        C: Clone,
    {
        Self::new_unchecked(value.clone(), value)
    }

    /// Creates a new `ClosedRange` without re-validating the bound ordering.
    ///
    /// Reserved for call sites that have already proven `lower <= upper`.
    #[inline]
    fn new_unchecked(lower: C, upper: C) -> Self {
        debug_assert!(
            lower <= upper,
            "Invalid ClosedRange: lower bound must be less than or equal to upper bound"
        );
        Self { lower, upper }
    }

    /// Parses `input` according to the `"[lower; upper]"` grammar, decoding
    /// the individual bounds with `parser`.
    ///
    /// Parsing fails with [`ParseRangeError::Malformed`] if the input is
    /// empty, does not start with `[`, does not end with `]`, or splitting
    /// the interior on the literal separator `"; "` does not yield exactly
    /// two parts. A failure of `parser` itself is propagated unchanged in
    /// [`ParseRangeError::Bound`]. Bounds that parse but violate the
    /// ordering invariant yield [`ParseRangeError::Decreasing`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let range = ClosedRange::parse("[1; 10]", |s| s.parse::<i32>()).unwrap();
    /// assert_eq!(range, ClosedRange::new(1, 10));
    ///
    /// assert!(ClosedRange::parse("1; 10", |s| s.parse::<i32>()).is_err());
    /// ```
    pub fn parse<F, E>(input: &str, mut parser: F) -> Result<Self, ParseRangeError<E>>
    where
        F: FnMut(&str) -> Result<C, E>,
    {
        let malformed = || ParseRangeError::Malformed {
            input: input.to_string(),
        };
        let interior = input
            .strip_prefix(OPEN_SYMBOL)
            .and_then(|rest| rest.strip_suffix(CLOSE_SYMBOL))
            .ok_or_else(malformed)?;
        let mut parts = interior.split(SEPARATOR);
        let (Some(lower_text), Some(upper_text), None) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        let lower = parser(lower_text).map_err(ParseRangeError::Bound)?;
        let upper = parser(upper_text).map_err(ParseRangeError::Bound)?;
        Self::try_new(lower, upper).ok_or_else(|| ParseRangeError::Decreasing {
            input: input.to_string(),
        })
    }

    /// Returns the lower bound of the range.
    #[inline]
    pub fn lower_bound(&self) -> &C {
        &self.lower
    }

    /// Returns the upper bound of the range.
    #[inline]
    pub fn upper_bound(&self) -> &C {
        &self.upper
    }

    /// Consumes the range and returns its `(lower, upper)` bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let (lower, upper) = ClosedRange::new(2, 9).into_bounds();
    /// assert_eq!((lower, upper), (2, 9));
    /// ```
    #[inline]
    pub fn into_bounds(self) -> (C, C) {
        (self.lower, self.upper)
    }

    /// Returns `true` if `value` lies within `[lower; upper]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let range = ClosedRange::new(1, 10);
    /// assert!(range.contains(&1));
    /// assert!(range.contains(&10));
    /// assert!(!range.contains(&0));
    /// ```
    #[inline]
    pub fn contains(&self, value: &C) -> bool {
        &self.lower <= value && value <= &self.upper
    }

    /// Returns `true` if the two ranges share at least one common value.
    ///
    /// Computed directly from the bounds, without materializing the
    /// intersection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let range = ClosedRange::new(1, 10);
    /// assert!(range.is_connected(&ClosedRange::new(10, 20)));
    /// assert!(!range.is_connected(&ClosedRange::new(11, 20)));
    /// ```
    #[inline]
    pub fn is_connected(&self, other: &Self) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Returns `true` if every value of `self` is also contained in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let range = ClosedRange::new(2, 8);
    /// assert!(range.is_subset_of(&ClosedRange::new(1, 10)));
    /// assert!(range.is_subset_of(&range));
    /// assert!(!range.is_subset_of(&ClosedRange::new(3, 10)));
    /// ```
    #[inline]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        other.lower <= self.lower && self.upper <= other.upper
    }

    /// Equivalent to `other.is_subset_of(self)`.
    #[inline]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    /// Returns a new `ClosedRange` with the lower bound replaced.
    ///
    /// # Panics
    ///
    /// Panics if the resulting bounds would violate `lower <= upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let range = ClosedRange::new(1, 10).with_lower_bound(5);
    /// assert_eq!(range, ClosedRange::new(5, 10));
    /// ```
    #[inline]
    pub fn with_lower_bound(self, lower: C) -> Self {
        Self::new(lower, self.upper)
    }

    /// Returns a new `ClosedRange` with the upper bound replaced.
    ///
    /// # Panics
    ///
    /// Panics if the resulting bounds would violate `lower <= upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let range = ClosedRange::new(1, 10).with_upper_bound(5);
    /// assert_eq!(range, ClosedRange::new(1, 5));
    /// ```
    #[inline]
    pub fn with_upper_bound(self, upper: C) -> Self {
        Self::new(self.lower, upper)
    }

    /// Calculates the intersection of two ranges.
    ///
    /// Returns `None` if the ranges are not connected: two disjoint closed
    /// ranges have no common value, and an empty interval is represented by
    /// absence. When one operand is a subset of the other, that operand is
    /// returned unchanged rather than assembling a new bound combination.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let range = ClosedRange::new(1, 10);
    /// assert_eq!(
    ///     range.intersection(ClosedRange::new(5, 20)),
    ///     Some(ClosedRange::new(5, 10))
    /// );
    /// assert_eq!(range.intersection(ClosedRange::new(12, 20)), None);
    /// ```
    pub fn intersection(self, other: Self) -> Option<Self> {
        if !self.is_connected(&other) {
            return None;
        }
        let lower_cmp = self.lower.cmp(&other.lower);
        let upper_cmp = self.upper.cmp(&other.upper);
        if lower_cmp.is_ge() && upper_cmp.is_le() {
            return Some(self);
        }
        if lower_cmp.is_le() && upper_cmp.is_ge() {
            return Some(other);
        }
        Some(Self::new_unchecked(
            if lower_cmp.is_ge() { self.lower } else { other.lower },
            if upper_cmp.is_le() { self.upper } else { other.upper },
        ))
    }

    /// Returns the smallest range that is a superset of `self` and also
    /// contains `value`.
    ///
    /// If `value` is already contained, `self` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let range = ClosedRange::new(1, 5);
    /// assert_eq!(range.extend_with_value(10), ClosedRange::new(1, 10));
    /// assert_eq!(range.extend_with_value(3), ClosedRange::new(1, 5));
    /// assert_eq!(range.extend_with_value(-2), ClosedRange::new(-2, 5));
    /// ```
    pub fn extend_with_value(self, value: C) -> Self {
        if self.contains(&value) {
            return self;
        }
        if value < self.lower {
            return Self::new_unchecked(value, self.upper);
        }
        // Contained and strictly-below are exhausted; a total order leaves
        // only strictly-above.
        debug_assert!(self.upper < value, "extend_with_value: bound comparison exhausted");
        Self::new_unchecked(self.lower, value)
    }

    /// Returns the smallest range that is a superset of both `self` and
    /// `other`.
    ///
    /// When one operand already covers the other, the covering operand is
    /// returned unchanged rather than assembling a new bound combination.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let range = ClosedRange::new(1, 5).extend_with_range(ClosedRange::new(8, 12));
    /// assert_eq!(range, ClosedRange::new(1, 12));
    /// ```
    pub fn extend_with_range(self, other: Self) -> Self {
        let lower_cmp = self.lower.cmp(&other.lower);
        let upper_cmp = self.upper.cmp(&other.upper);
        if lower_cmp.is_le() && upper_cmp.is_ge() {
            return self;
        }
        if lower_cmp.is_ge() && upper_cmp.is_le() {
            return other;
        }
        Self::new_unchecked(
            if lower_cmp.is_le() { self.lower } else { other.lower },
            if upper_cmp.is_ge() { self.upper } else { other.upper },
        )
    }

    /// Creates a new `ClosedRange` with both bounds transformed by `f`.
    ///
    /// The result is eagerly validated, so only a valid range can be
    /// returned; `f` must therefore be order-compatible over the two bounds.
    ///
    /// # Panics
    ///
    /// Panics if the transformed bounds violate `lower <= upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let range = ClosedRange::new(1i32, 5i32).convert(i64::from);
    /// assert_eq!(range, ClosedRange::new(1i64, 5i64));
    /// ```
    pub fn convert<T, F>(self, mut f: F) -> ClosedRange<T>
    where
        T: Ord,
        F: FnMut(C) -> T,
    {
        ClosedRange::new(f(self.lower), f(self.upper))
    }
}

impl ClosedRange<String> {
    /// Parses `input` with the identity bound decoder, producing a range of
    /// `String` bounds validated by lexicographic order.
    ///
    /// Lexicographic order is not numeric order: `"[4; 17]"` fails here
    /// because `"4" > "17"` as strings, so numeric domains must be parsed
    /// with [`ClosedRange::parse`] and a numeric decoder instead of
    /// parse-then-convert.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    ///
    /// let range = ClosedRange::parse_str("[apple; pear]").unwrap();
    /// assert_eq!(*range.lower_bound(), "apple");
    ///
    /// assert!(ClosedRange::parse_str("[4; 17]").is_err());
    /// ```
    pub fn parse_str(input: &str) -> Result<Self, ParseRangeError<std::convert::Infallible>> {
        Self::parse(input, |text| Ok(text.to_string()))
    }
}

impl<C: Ord> PartialEq for ClosedRange<C> {
    /// Two ranges are equal exactly when their bounds compare equal under
    /// the domain's total order.
    fn eq(&self, other: &Self) -> bool {
        self.lower.cmp(&other.lower) == Ordering::Equal
            && self.upper.cmp(&other.upper) == Ordering::Equal
    }
}

impl<C: Ord> Eq for ClosedRange<C> {}

impl<C: Ord + Hash> Hash for ClosedRange<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lower.hash(state);
        self.upper.hash(state);
    }
}

impl<C: Ord + FromStr> FromStr for ClosedRange<C> {
    type Err = ParseRangeError<C::Err>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, C::from_str)
    }
}

impl<C> std::fmt::Debug for ClosedRange<C>
where
    C: std::fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosedRange")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

impl<C> Display for ClosedRange<C>
where
    C: Display,
{
    /// Writes the mathematical interval notation `[lower; upper]`, the exact
    /// inverse of the `parse` grammar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            OPEN_SYMBOL, self.lower, SEPARATOR, self.upper, CLOSE_SYMBOL
        )
    }
}

impl<C: Ord> BitAnd for ClosedRange<C> {
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<C: Ord> BitOr for ClosedRange<C> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.extend_with_range(rhs)
    }
}

impl<C: Ord> RangeBounds<C> for ClosedRange<C> {
    fn start_bound(&self) -> Bound<&C> {
        Bound::Included(&self.lower)
    }

    fn end_bound(&self) -> Bound<&C> {
        Bound::Included(&self.upper)
    }
}

impl<C: Ord> From<RangeInclusive<C>> for ClosedRange<C> {
    /// # Panics
    ///
    /// Panics if the range is inverted (`start > end`).
    #[inline]
    fn from(range: RangeInclusive<C>) -> Self {
        let (lower, upper) = range.into_inner();
        Self::new(lower, upper)
    }
}

impl<C: Ord> From<ClosedRange<C>> for RangeInclusive<C> {
    #[inline]
    fn from(range: ClosedRange<C>) -> Self {
        RangeInclusive::new(range.lower, range.upper)
    }
}

/// The error type for parsing a [`ClosedRange`] from text.
///
/// `E` is the error type of the caller-supplied bound decoder; its failures
/// pass through unchanged in the [`Bound`](ParseRangeError::Bound) variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRangeError<E> {
    /// The input does not match the `"[lower; upper]"` grammar.
    Malformed {
        /// The offending input text.
        input: String,
    },
    /// The bound decoder rejected one of the bound texts.
    Bound(E),
    /// Both bounds parsed, but the lower bound exceeds the upper bound.
    Decreasing {
        /// The offending input text.
        input: String,
    },
}

impl<E: Display> Display for ParseRangeError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { input } => write!(f, "Invalid ClosedRange: {input:?}"),
            Self::Bound(e) => write!(f, "Invalid ClosedRange bound: {e}"),
            Self::Decreasing { input } => {
                write!(f, "Invalid ClosedRange: decreasing bounds in {input:?}")
            }
        }
    }
}

impl<E> std::error::Error for ParseRangeError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bound(e) => Some(e),
            _ => None,
        }
    }
}
