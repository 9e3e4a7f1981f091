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

//! # Repeated-Element Sequences
//!
//! A fixed-length, random-access sequence whose every element is one stored
//! value. `Repeated<E>` holds the element once regardless of the sequence
//! length and can never be empty; the [`repeat`] factory collapses length 0
//! and length 1 into the dedicated [`RepeatSeq`] variants, reserving the
//! stored-size representation for two or more elements.
//!
//! The sequence surface is strictly read-only: there is no mutating API, so
//! removal, replacement, and in-place sorting are unrepresentable rather
//! than rejected at run time.
//!
//! ## Usage
//!
//! ```rust
//! use ordrange::utils::repeat::repeat;
//!
//! let seq = repeat("ha", 3);
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq[1], "ha");
//! assert_eq!(seq.iter().copied().collect::<String>(), "hahaha");
//! ```

use std::iter::FusedIterator;
use std::ops::Index;

/// A read-only sequence of `size` identical elements, stored once.
///
/// # Invariants
///
/// `size >= 1`; an instance can never be empty. Use [`repeat`] when a length
/// of zero must be tolerated.
///
/// # Examples
///
/// ```rust
/// use ordrange::utils::repeat::Repeated;
///
/// let seq = Repeated::new('x', 4);
/// assert_eq!(seq.len(), 4);
/// assert_eq!(seq.get(3), Some(&'x'));
/// assert_eq!(seq.get(4), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repeated<E> {
    element: E,
    size: usize,
}

impl<E> Repeated<E> {
    /// Creates a sequence of `size` repetitions of `element`.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordrange::utils::repeat::Repeated;
    ///
    /// let seq = Repeated::new(7, 3);
    /// assert_eq!(seq.iter().collect::<Vec<_>>(), vec![&7, &7, &7]);
    /// ```
    #[inline]
    pub fn new(element: E, size: usize) -> Self {
        assert!(size > 0, "Repeated: size must be positive");
        Self { element, size }
    }

    /// Creates a sequence of `size` repetitions of `element`, or `None` if
    /// `size == 0`.
    #[inline]
    pub fn try_new(element: E, size: usize) -> Option<Self> {
        if size > 0 {
            Some(Self { element, size })
        } else {
            None
        }
    }

    /// Returns the repeated element.
    #[inline]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Returns the fixed length of the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Always `false`: the constructor rejects a zero size.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the element at `index`, or `None` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&E> {
        if index < self.size {
            Some(&self.element)
        } else {
            None
        }
    }

    /// Returns `true` if `value` equals the repeated element.
    #[inline]
    pub fn contains(&self, value: &E) -> bool
    where
        E: PartialEq,
    {
        *value == self.element
    }

    /// Creates an iterator yielding the element exactly `len()` times.
    #[inline]
    pub fn iter(&self) -> RepeatIter<'_, E> {
        RepeatIter {
            element: Some(&self.element),
            remaining: self.size,
        }
    }
}

impl<E> Index<usize> for Repeated<E> {
    type Output = E;

    /// # Panics
    ///
    /// Panics if `index >= len()`, with a message carrying both the index
    /// and the size.
    fn index(&self, index: usize) -> &E {
        self.get(index).unwrap_or_else(|| {
            panic!("index out of bounds: index={}, size={}", index, self.size)
        })
    }
}

impl<'a, E> IntoIterator for &'a Repeated<E> {
    type Item = &'a E;
    type IntoIter = RepeatIter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A read-only sequence of `n` identical elements, including the empty and
/// single-element cases.
///
/// Produced by [`repeat`]; the multi-element representation ([`Repeated`])
/// is reserved for `n >= 2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RepeatSeq<E> {
    /// The empty sequence (`n == 0`).
    Empty,
    /// A sequence of exactly one element (`n == 1`).
    Single(E),
    /// A sequence of two or more identical elements.
    Many(Repeated<E>),
}

/// Returns a read-only sequence of `n` repetitions of `element`.
///
/// `n == 0` yields [`RepeatSeq::Empty`] and `n == 1` yields
/// [`RepeatSeq::Single`]; only `n >= 2` builds the stored-size
/// representation. A negative repetition count is unrepresentable (`usize`).
///
/// # Examples
///
/// ```rust
/// use ordrange::utils::repeat::{repeat, RepeatSeq};
///
/// assert!(repeat('x', 0).is_empty());
/// assert!(matches!(repeat('x', 1), RepeatSeq::Single('x')));
/// assert_eq!(repeat('x', 5).len(), 5);
/// ```
pub fn repeat<E>(element: E, n: usize) -> RepeatSeq<E> {
    match n {
        0 => RepeatSeq::Empty,
        1 => RepeatSeq::Single(element),
        _ => RepeatSeq::Many(Repeated::new(element, n)),
    }
}

impl<E> RepeatSeq<E> {
    /// Returns the length of the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single(_) => 1,
            Self::Many(repeated) => repeated.len(),
        }
    }

    /// Returns `true` only for [`RepeatSeq::Empty`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the element at `index`, or `None` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&E> {
        match self {
            Self::Empty => None,
            Self::Single(element) => (index == 0).then_some(element),
            Self::Many(repeated) => repeated.get(index),
        }
    }

    /// Returns `true` if the sequence is non-empty and `value` equals its
    /// element.
    #[inline]
    pub fn contains(&self, value: &E) -> bool
    where
        E: PartialEq,
    {
        match self {
            Self::Empty => false,
            Self::Single(element) => value == element,
            Self::Many(repeated) => repeated.contains(value),
        }
    }

    /// Creates an iterator yielding the element exactly `len()` times.
    pub fn iter(&self) -> RepeatIter<'_, E> {
        match self {
            Self::Empty => RepeatIter {
                element: None,
                remaining: 0,
            },
            Self::Single(element) => RepeatIter {
                element: Some(element),
                remaining: 1,
            },
            Self::Many(repeated) => repeated.iter(),
        }
    }
}

impl<E> Index<usize> for RepeatSeq<E> {
    type Output = E;

    /// # Panics
    ///
    /// Panics if `index >= len()`, with a message carrying both the index
    /// and the size.
    fn index(&self, index: usize) -> &E {
        self.get(index).unwrap_or_else(|| {
            panic!("index out of bounds: index={}, size={}", index, self.len())
        })
    }
}

impl<'a, E> IntoIterator for &'a RepeatSeq<E> {
    type Item = &'a E;
    type IntoIter = RepeatIter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator yielding one borrowed element a fixed number of times.
///
/// `element` is `None` only for the empty sequence, in which case
/// `remaining` is zero.
#[derive(Debug, Clone)]
pub struct RepeatIter<'a, E> {
    element: Option<&'a E>,
    remaining: usize,
}

impl<'a, E> Iterator for RepeatIter<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.element
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> DoubleEndedIterator for RepeatIter<'_, E> {
    // Every position holds the same element, so both ends are identical.
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

impl<E> ExactSizeIterator for RepeatIter<'_, E> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<E> FusedIterator for RepeatIter<'_, E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_collapses_zero_and_one() {
        let empty = repeat('x', 0);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);

        let single = repeat('x', 1);
        assert!(matches!(single, RepeatSeq::Single('x')));
        assert_eq!(single.len(), 1);

        let many = repeat('x', 5);
        assert!(matches!(many, RepeatSeq::Many(_)));
        assert_eq!(many.len(), 5);
    }

    #[test]
    fn test_get_within_and_out_of_bounds() {
        let seq = repeat(9, 5);
        for index in 0..5 {
            assert_eq!(seq.get(index), Some(&9));
        }
        assert_eq!(seq.get(5), None);

        assert_eq!(repeat(9, 0).get(0), None);
        assert_eq!(repeat(9, 1).get(0), Some(&9));
        assert_eq!(repeat(9, 1).get(1), None);
    }

    #[test]
    fn test_indexing() {
        let seq = repeat("a", 3);
        assert_eq!(seq[0], "a");
        assert_eq!(seq[2], "a");
    }

    #[test]
    #[should_panic(expected = "index=5, size=5")]
    fn test_index_out_of_bounds_panics() {
        let seq = repeat(9, 5);
        let _ = seq[5];
    }

    #[test]
    #[should_panic(expected = "index=0, size=0")]
    fn test_index_into_empty_panics() {
        let seq = repeat(9, 0);
        let _ = seq[0];
    }

    #[test]
    fn test_repeated_never_empty() {
        let seq = Repeated::new('y', 2);
        assert!(!seq.is_empty());
        assert_eq!(*seq.element(), 'y');
    }

    #[test]
    #[should_panic(expected = "size must be positive")]
    fn test_repeated_rejects_zero_size() {
        Repeated::new('y', 0);
    }

    #[test]
    fn test_try_new() {
        assert!(Repeated::try_new('y', 0).is_none());
        assert!(Repeated::try_new('y', 1).is_some());
    }

    #[test]
    fn test_contains() {
        let seq = repeat(3, 4);
        assert!(seq.contains(&3));
        assert!(!seq.contains(&4));
        assert!(!repeat(3, 0).contains(&3));
        assert!(repeat(3, 1).contains(&3));
    }

    #[test]
    fn test_iteration_yields_element_len_times() {
        let seq = repeat("go", 4);
        let mut calls = 0;
        seq.iter().for_each(|element| {
            assert_eq!(*element, "go");
            calls += 1;
        });
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_iterator_traits() {
        let seq = Repeated::new(1, 3);
        let mut iter = seq.iter();

        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&1));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        // Fused
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty_iteration() {
        let seq: RepeatSeq<i32> = repeat(0, 0);
        assert_eq!(seq.iter().next(), None);
        assert_eq!(seq.iter().len(), 0);
    }

    #[test]
    fn test_into_iterator_ref() {
        let seq = repeat(2, 3);
        let total: i32 = (&seq).into_iter().sum();
        assert_eq!(total, 6);
    }
}
