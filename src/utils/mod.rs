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

//! # Sequence Utilities
//!
//! Small read-only sequence primitives.
//!
//! ## Submodules
//!
//! - `repeat`: A fixed-length, random-access sequence of `n` identical
//!   elements stored once (`Repeated<E>`), the `repeat` factory collapsing
//!   the zero- and one-element cases (`RepeatSeq<E>`), and the shared
//!   iterator (`RepeatIter`).
//!
//! ## Motivation
//!
//! Representing `n` copies of one value as a view over a single stored
//! element keeps memory flat regardless of `n`, while still offering the
//! familiar sequence surface (length, indexed access, containment,
//! iteration).
//!
//! Refer to the `repeat` submodule for detailed APIs and examples.

pub mod repeat;
