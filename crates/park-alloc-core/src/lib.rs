// Copyright (c) 2025 Felix Kahle.
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

//! # Parking Allocation Core (`park-alloc-core`)
//!
//! Type-safe primitives for simulating cars parking along a one-way street:
//! 1-based [`spot::Spot`]s, the [`spot::StreetLength`] `n`, zero-based
//! [`spot::CarIndex`]es, closed [`primitives::Interval`]s of spots and the
//! iterators the placement rules probe with.

pub mod iter;
pub mod primitives;
pub mod spot;

pub mod prelude {
    pub use crate::iter::{MaybeIter, SpotIter};
    pub use crate::primitives::Interval;
    pub use crate::spot::{CarIndex, Spot, SpotInterval, StreetLength};
}
