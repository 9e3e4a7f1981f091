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

//! # Discrete Enumeration Views
//!
//! Read-only, set-like views over every discrete value of an integer-bounded
//! [`ClosedRange`]. A view materializes no storage: it borrows the range,
//! derives its element count once (overflow-safe, in arbitrary precision),
//! and iterates by stepping a cursor from the lower bound upward until the
//! range's own containment check rejects the next candidate.
//!
//! ## Usage
//!
//! ```rust
//! use ordrange::math::closed_range::ClosedRange;
//! use ordrange::math::elements::IntElements;
//!
//! let range = ClosedRange::new(3, 6);
//! let view = IntElements::new(&range);
//!
//! assert_eq!(view.len(), 4);
//! assert!(view.contains(5));
//! assert_eq!(view.iter().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
//! ```

use crate::math::closed_range::ClosedRange;
use crate::math::count::count_bigints;
use num_bigint::BigInt;
use num_traits::{PrimInt, ToPrimitive, WrappingAdd};
use std::iter::FusedIterator;

/// A read-only view of all discrete values in an integer-bounded range.
///
/// The element count is computed eagerly at construction through the
/// overflow-safe big-integer count, then narrowed to `usize`; a count that
/// does not fit in `usize` is an explicit failure (`new` panics, `try_new`
/// returns `None`), never a silent truncation.
///
/// # Examples
///
/// ```rust
/// use ordrange::math::closed_range::ClosedRange;
/// use ordrange::math::elements::RangeElements;
///
/// let range = ClosedRange::new(-1i64, 1i64);
/// let view = RangeElements::new(&range);
/// assert_eq!(view.len(), 3);
/// assert_eq!(view.iter().collect::<Vec<_>>(), vec![-1, 0, 1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RangeElements<'a, T>
where
    T: PrimInt,
{
    range: &'a ClosedRange<T>,
    len: usize,
}

/// View over all values of an `i32`-bounded range.
pub type IntElements<'a> = RangeElements<'a, i32>;

/// View over all values of an `i64`-bounded range.
pub type LongElements<'a> = RangeElements<'a, i64>;

impl<'a, T> RangeElements<'a, T>
where
    T: PrimInt + Into<BigInt>,
{
    /// Creates a view over all discrete values of `range`.
    ///
    /// # Panics
    ///
    /// Panics if the element count of `range` does not fit in `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    /// # use ordrange::math::elements::RangeElements;
    ///
    /// let range = ClosedRange::new(1, 5);
    /// assert_eq!(RangeElements::new(&range).len(), 5);
    /// ```
    #[inline]
    pub fn new(range: &'a ClosedRange<T>) -> Self {
        Self::try_new(range).expect("RangeElements: element count exceeds usize::MAX")
    }

    /// Creates a view over all discrete values of `range`, or `None` if the
    /// element count does not fit in `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    /// # use ordrange::math::elements::RangeElements;
    ///
    /// let range = ClosedRange::new(i64::MIN, i64::MAX);
    /// assert!(RangeElements::try_new(&range).is_none());
    /// ```
    pub fn try_new(range: &'a ClosedRange<T>) -> Option<Self> {
        let count = count_bigints(&(*range).convert(|bound| bound.into()));
        let len = count.to_usize()?;
        Some(Self { range, len })
    }
}

impl<'a, T> RangeElements<'a, T>
where
    T: PrimInt,
{
    /// Returns the number of discrete values in the underlying range.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a `ClosedRange` contains at least its bounds.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `value` lies within the underlying range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::math::closed_range::ClosedRange;
    /// # use ordrange::math::elements::IntElements;
    ///
    /// let range = ClosedRange::new(3, 6);
    /// let view = IntElements::new(&range);
    /// assert!(view.contains(3));
    /// assert!(!view.contains(7));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.range.contains(&value)
    }

    /// Creates an iterator over the discrete values, in increasing order.
    #[inline]
    pub fn iter(&self) -> ElementsIter<'a, T> {
        ElementsIter {
            range: self.range,
            next_value: *self.range.lower_bound(),
        }
    }
}

impl<'a, T> IntoIterator for &RangeElements<'a, T>
where
    T: PrimInt + WrappingAdd,
{
    type Item = T;
    type IntoIter = ElementsIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the discrete values of an integer-bounded range.
///
/// The cursor starts at the lower bound and advances by wrapping increments
/// of one; iteration ends exactly when the next candidate value is no longer
/// contained in the range. At the domain maximum the increment wraps below
/// the lower bound, which terminates iteration naturally.
pub struct ElementsIter<'a, T>
where
    T: PrimInt,
{
    range: &'a ClosedRange<T>,
    next_value: T,
}

impl<T> Iterator for ElementsIter<'_, T>
where
    T: PrimInt + WrappingAdd,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.next_value;
        if self.range.contains(&candidate) {
            self.next_value = candidate.wrapping_add(&T::one());
            Some(candidate)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for ElementsIter<'_, T> where T: PrimInt + WrappingAdd {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_over_small_range() {
        let range = ClosedRange::new(3, 6);
        let view = IntElements::new(&range);

        assert_eq!(view.len(), 4);
        assert!(!view.is_empty());
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_iterator_exhaustion() {
        let range = ClosedRange::new(3, 6);
        let view = IntElements::new(&range);
        let mut iter = view.iter();

        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.next(), Some(4));
        assert_eq!(iter.next(), Some(5));
        assert_eq!(iter.next(), Some(6));
        assert_eq!(iter.next(), None);
        // Fused: stays exhausted
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_single_value_view() {
        let range = ClosedRange::single(42);
        let view = IntElements::new(&range);
        assert_eq!(view.len(), 1);
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![42]);
    }

    #[test]
    fn test_contains_delegates_to_range() {
        let range = ClosedRange::new(-2i64, 2i64);
        let view = LongElements::new(&range);
        assert!(view.contains(-2));
        assert!(view.contains(0));
        assert!(view.contains(2));
        assert!(!view.contains(3));
    }

    #[test]
    fn test_wraparound_at_domain_maximum() {
        // The cursor wraps past i32::MAX to i32::MIN, which the range no
        // longer contains, terminating iteration.
        let range = ClosedRange::new(i32::MAX - 2, i32::MAX);
        let view = IntElements::new(&range);
        assert_eq!(
            view.iter().collect::<Vec<_>>(),
            vec![i32::MAX - 2, i32::MAX - 1, i32::MAX]
        );
    }

    #[test]
    fn test_long_view_len() {
        let range = ClosedRange::new(0i64, 9i64);
        let view = LongElements::new(&range);
        assert_eq!(view.len(), 10);
    }

    #[test]
    fn test_unrepresentable_len_is_explicit() {
        let range = ClosedRange::new(i64::MIN, i64::MAX);
        assert!(LongElements::try_new(&range).is_none());
    }

    #[test]
    #[should_panic(expected = "element count exceeds usize::MAX")]
    fn test_new_panics_on_unrepresentable_len() {
        let range = ClosedRange::new(i64::MIN, i64::MAX);
        LongElements::new(&range);
    }

    #[test]
    fn test_into_iterator_ref() {
        let range = ClosedRange::new(1, 3);
        let view = IntElements::new(&range);
        let mut collected = Vec::new();
        for value in &view {
            collected.push(value);
        }
        assert_eq!(collected, vec![1, 2, 3]);
    }
}
