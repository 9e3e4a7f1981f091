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

//! # Closed Interval Math
//!
//! Foundational structures for closed intervals `[lower; upper]` over any
//! totally ordered domain.
//!
//! ## Submodules
//!
//! - `closed_range`: The `ClosedRange<C>` value type with validation,
//!   predicates (containment, connectivity, subset/superset), combination
//!   operations (intersection, extension by value or range, bound
//!   conversion), and the `"[a; b]"` text format with its parse error type.
//! - `count`: Exact discrete element counts computed in arbitrary precision
//!   (`BigInt`) so that no bound magnitude can overflow the arithmetic, plus
//!   the continuous length of decimal-bounded ranges.
//! - `elements`: Read-only, storage-free enumeration views over every
//!   discrete value of an integer-bounded range, with cursor-based iterators.
//!
//! ## Motivation
//!
//! Closed intervals carry one invariant (`lower <= upper`) and a handful of
//! easy-to-get-wrong comparison chains. Centralizing them in one validated
//! value type keeps off-by-one and ordering bugs out of calling code.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod closed_range;
pub mod count;
pub mod elements;
