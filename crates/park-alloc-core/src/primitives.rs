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

//! # Core Primitives
//!
//! Small generic building blocks shared by the model and the simulator.
//! The central one is [`Interval`], a closed range of ordered values used for
//! the per-car spot windows of interval parking functions.

use crate::iter::SpotIter;
use crate::spot::Spot;
use std::cmp::Ordering;
use std::fmt;

/// A closed interval `[start, end]`.
///
/// Both bounds are inclusive, so an interval always contains at least one
/// value. A car preferring the single spot `p` is the interval `[p, p]`.
///
/// # Examples
///
/// ```
/// use park_alloc_core::primitives::Interval;
/// let interval = Interval::new(1, 5);
/// assert_eq!(interval.start(), 1);
/// assert_eq!(interval.end(), 5);
/// assert!(interval.contains(5));
/// assert!(!interval.contains(6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start_inclusive: T,
    end_inclusive: T,
}

impl<T> Interval<T> {
    /// Creates a new closed interval `[a, b]`.
    ///
    /// The bounds are ordered on construction, so `Interval::new(5, 3)`
    /// is the same interval as `Interval::new(3, 5)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use park_alloc_core::primitives::Interval;
    ///
    /// let interval = Interval::new(5, 3);
    /// assert_eq!(interval.start(), 3);
    /// assert_eq!(interval.end(), 5);
    /// ```
    #[inline]
    pub fn new(a: T, b: T) -> Self
    where
        T: Ord,
    {
        let (s, e) = match a.cmp(&b) {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };

        Self {
            start_inclusive: s,
            end_inclusive: e,
        }
    }

    /// Creates the interval `[a, b]` only if `a <= b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use park_alloc_core::primitives::Interval;
    ///
    /// assert!(Interval::ordered(2, 4).is_some());
    /// assert!(Interval::ordered(4, 2).is_none());
    /// ```
    #[inline]
    pub fn ordered(a: T, b: T) -> Option<Self>
    where
        T: PartialOrd,
    {
        if a <= b {
            Some(Self {
                start_inclusive: a,
                end_inclusive: b,
            })
        } else {
            None
        }
    }

    /// A single-value interval `[v, v]`.
    #[inline]
    pub fn point(v: T) -> Self
    where
        T: Copy,
    {
        Self {
            start_inclusive: v,
            end_inclusive: v,
        }
    }

    #[inline]
    pub fn start(&self) -> T
    where
        T: Copy,
    {
        self.start_inclusive
    }

    #[inline]
    pub fn end(&self) -> T
    where
        T: Copy,
    {
        self.end_inclusive
    }

    /// Whether the interval holds exactly one value.
    #[inline]
    pub fn is_point(&self) -> bool
    where
        T: PartialEq,
    {
        self.start_inclusive == self.end_inclusive
    }

    /// Checks if `x` lies within `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use park_alloc_core::primitives::Interval;
    ///
    /// let interval = Interval::new(1, 5);
    /// assert!(interval.contains(1));
    /// assert!(interval.contains(5));
    /// assert!(!interval.contains(0));
    /// ```
    #[inline]
    pub fn contains(&self, x: T) -> bool
    where
        T: PartialOrd,
    {
        x >= self.start_inclusive && x <= self.end_inclusive
    }
}

impl Interval<Spot> {
    /// Number of steps from the first to the last spot; `0` for `[p, p]`.
    #[inline]
    pub fn width(&self) -> usize {
        self.end().distance(self.start())
    }

    /// Spots of the interval in increasing order.
    #[inline]
    pub fn iter(&self) -> SpotIter {
        SpotIter::between(self.start(), self.end())
    }
}

impl IntoIterator for Interval<Spot> {
    type Item = Spot;
    type IntoIter = SpotIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start_inclusive, self.end_inclusive)
    }
}
