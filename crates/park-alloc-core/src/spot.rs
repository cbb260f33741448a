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

//! Street positions.
//!
//! Spots are numbered `1..=n` along a one-way street. [`Spot`] is a
//! 1-based position, [`StreetLength`] the number of spots `n`, and
//! [`CarIndex`] the zero-based arrival position of a car.

use crate::primitives::Interval;
use serde::Serialize;

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct Spot(usize);

pub type SpotInterval = Interval<Spot>;

impl std::fmt::Display for Spot {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Spot({})", self.0)
    }
}

impl Spot {
    /// The first spot on every street.
    pub const FIRST: Spot = Spot(1);

    /// Creates a spot from its 1-based number.
    ///
    /// Returns `None` for `0`, which is not a spot.
    ///
    /// # Examples
    ///
    /// ```
    /// use park_alloc_core::spot::Spot;
    ///
    /// assert_eq!(Spot::new(3).map(Spot::value), Some(3));
    /// assert!(Spot::new(0).is_none());
    /// ```
    #[inline]
    pub const fn new(v: usize) -> Option<Self> {
        if v == 0 { None } else { Some(Spot(v)) }
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Zero-based offset of this spot from [`Spot::FIRST`].
    #[inline]
    pub const fn offset(self) -> usize {
        self.0 - 1
    }

    /// The spot right after this one, ignoring any street bound.
    #[inline]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Spot)
    }

    #[inline]
    pub fn checked_back(self, steps: usize) -> Option<Self> {
        self.0.checked_sub(steps).and_then(Spot::new)
    }

    /// Steps back at most `steps` spots, stopping at [`Spot::FIRST`].
    ///
    /// # Examples
    ///
    /// ```
    /// use park_alloc_core::spot::Spot;
    ///
    /// let s = Spot::new(3).unwrap();
    /// assert_eq!(s.saturating_back(1).value(), 2);
    /// assert_eq!(s.saturating_back(10), Spot::FIRST);
    /// ```
    #[inline]
    pub fn saturating_back(self, steps: usize) -> Self {
        self.checked_back(steps).unwrap_or(Spot::FIRST)
    }

    /// Number of spots between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Spot) -> usize {
        self.0.abs_diff(other.0)
    }
}

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct StreetLength(usize);

impl std::fmt::Display for StreetLength {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StreetLength({})", self.0)
    }
}

impl StreetLength {
    #[inline]
    pub const fn new(v: usize) -> Self {
        StreetLength(v)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The last spot of the street, `None` for an empty street.
    #[inline]
    pub const fn last_spot(self) -> Option<Spot> {
        Spot::new(self.0)
    }

    #[inline]
    pub const fn contains(self, spot: Spot) -> bool {
        spot.0 <= self.0
    }
}

#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct CarIndex(usize);

impl CarIndex {
    #[inline]
    pub const fn new(v: usize) -> Self {
        CarIndex(v)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// 1-based car number as used in `c_1, c_2, ...`.
    #[inline]
    pub const fn number(self) -> usize {
        self.0 + 1
    }

    #[inline]
    pub const fn is_last_of(self, cars: usize) -> bool {
        self.0 + 1 == cars
    }
}

impl std::fmt::Display for CarIndex {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c_{}", self.number())
    }
}
