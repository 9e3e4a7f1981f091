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

//! # Ordrange
//!
//! Immutable value-type primitives for closed intervals and repeated-element
//! sequences. Everything in this crate is constructed once, validated at the
//! construction boundary, and read-only afterwards, which makes every type
//! trivially shareable across threads.
//!
//! ## Modules
//!
//! - `math`: The closed interval `[lower; upper]` over any totally ordered
//!   domain (`ClosedRange<C>`), with containment, connectivity, subset and
//!   superset predicates, intersection and union-extension, bound conversion,
//!   `"[a; b]"` parsing and formatting, overflow-free discrete cardinality
//!   functions, and lazy enumeration views over integer-bounded ranges.
//! - `utils`: A fixed-length, random-access sequence whose every element is
//!   one stored value (`Repeated<E>`), together with the `repeat` factory
//!   that collapses the zero- and one-element cases into dedicated variants.
//!
//! ## Purpose
//!
//! These primitives make interval and repetition logic explicit and hard to
//! misuse: invalid bound orderings cannot be represented, discrete counts are
//! computed in arbitrary precision so no bound magnitude can overflow them,
//! and the enumeration views materialize no storage.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod utils;
