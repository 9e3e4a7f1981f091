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

//! # Discrete Cardinality & Continuous Length
//!
//! Measurement functions over [`ClosedRange`] instances. Discrete counts are
//! returned as [`BigInt`] across the board: the element count of a valid
//! `i64` range can exceed `i64::MAX` (and an `i32` count can exceed
//! `i32::MAX`), so a fixed-width return type would reintroduce exactly the
//! overflow these functions exist to avoid. Callers narrow with the checked
//! conversions `BigInt` provides where a native width is needed.
//!
//! ## Usage
//!
//! ```rust
//! use num_bigint::BigInt;
//! use ordrange::math::closed_range::ClosedRange;
//! use ordrange::math::count::count_ints;
//!
//! assert_eq!(count_ints(&ClosedRange::new(1, 10)), BigInt::from(10));
//! assert_eq!(count_ints(&ClosedRange::new(5, 5)), BigInt::from(1));
//! ```

use crate::math::closed_range::ClosedRange;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::One;

/// Returns the continuous length `upper - lower` of a decimal-bounded range.
///
/// This is a length, not a count: the degenerate range `[v; v]` has length
/// zero even though it contains one value.
///
/// # Examples
///
/// ```rust
/// use bigdecimal::BigDecimal;
/// use ordrange::math::closed_range::ClosedRange;
/// use ordrange::math::count::decimal_length_of;
///
/// let range = ClosedRange::new(BigDecimal::from(2), BigDecimal::from(7));
/// assert_eq!(decimal_length_of(&range), BigDecimal::from(5));
/// ```
pub fn decimal_length_of(range: &ClosedRange<BigDecimal>) -> BigDecimal {
    range.upper_bound() - range.lower_bound()
}

/// Returns the discrete element count `upper - lower + 1` of a
/// `BigInt`-bounded range.
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use ordrange::math::closed_range::ClosedRange;
/// use ordrange::math::count::count_bigints;
///
/// let range = ClosedRange::new(BigInt::from(0), BigInt::from(10));
/// assert_eq!(count_bigints(&range), BigInt::from(11));
/// ```
pub fn count_bigints(range: &ClosedRange<BigInt>) -> BigInt {
    range.upper_bound() - range.lower_bound() + BigInt::one()
}

/// Returns the discrete element count of an `i64`-bounded range.
///
/// The bounds are converted to `BigInt` before the subtraction, so the
/// result is exact even when the true count exceeds `i64::MAX` (the count of
/// `[i64::MIN; i64::MAX]` is `2^64`).
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use ordrange::math::closed_range::ClosedRange;
/// use ordrange::math::count::count_longs;
///
/// let range = ClosedRange::new(i64::MIN, i64::MAX);
/// assert_eq!(count_longs(&range), BigInt::from(1u128 << 64));
/// ```
pub fn count_longs(range: &ClosedRange<i64>) -> BigInt {
    count_bigints(&(*range).convert(BigInt::from))
}

/// Returns the discrete element count of an `i32`-bounded range.
///
/// Both bounds are widened to `i64` before the subtraction, so the
/// subtraction itself cannot overflow; the result is returned as `BigInt`
/// for interface uniformity with the other count functions.
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use ordrange::math::closed_range::ClosedRange;
/// use ordrange::math::count::count_ints;
///
/// let range = ClosedRange::new(i32::MIN, i32::MAX);
/// assert_eq!(count_ints(&range), BigInt::from(1u64 << 32));
/// ```
pub fn count_ints(range: &ClosedRange<i32>) -> BigInt {
    let count = i64::from(*range.upper_bound()) - i64::from(*range.lower_bound()) + 1;
    BigInt::from(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_ints() {
        assert_eq!(count_ints(&ClosedRange::new(5, 5)), BigInt::from(1));
        assert_eq!(count_ints(&ClosedRange::new(1, 10)), BigInt::from(10));
        assert_eq!(count_ints(&ClosedRange::new(-3, 3)), BigInt::from(7));
    }

    #[test]
    fn test_count_ints_full_domain() {
        // The count of all i32 values exceeds i32::MAX; widening keeps the
        // subtraction exact.
        let range = ClosedRange::new(i32::MIN, i32::MAX);
        assert_eq!(count_ints(&range), BigInt::from(1u64 << 32));
    }

    #[test]
    fn test_count_longs() {
        assert_eq!(count_longs(&ClosedRange::new(0, 9)), BigInt::from(10));
        assert_eq!(
            count_longs(&ClosedRange::new(i64::MIN, i64::MAX)),
            BigInt::from(1u128 << 64)
        );
    }

    #[test]
    fn test_count_bigints() {
        let range = ClosedRange::new(BigInt::from(0), BigInt::from(10));
        assert_eq!(count_bigints(&range), BigInt::from(11));

        let single = ClosedRange::single(BigInt::from(-40));
        assert_eq!(count_bigints(&single), BigInt::one());
    }

    #[test]
    fn test_decimal_length() {
        let range = ClosedRange::new(BigDecimal::from(2), BigDecimal::from(7));
        assert_eq!(decimal_length_of(&range), BigDecimal::from(5));

        // Length of a degenerate range is zero, not one
        let single = ClosedRange::single(BigDecimal::from(3));
        assert_eq!(decimal_length_of(&single), BigDecimal::from(0));
    }
}
