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

use crate::spot::Spot;
use std::iter::FusedIterator;

/// Wraps an optional iterator; a missing one yields nothing.
#[derive(Debug, Clone)]
pub struct MaybeIter<T> {
    inner: Option<T>,
}

impl<T> MaybeIter<T> {
    #[inline]
    pub fn new(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<I: Iterator> Iterator for MaybeIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), |i| i.size_hint())
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for MaybeIter<I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl<I: FusedIterator> FusedIterator for MaybeIter<I> {}

impl<I: ExactSizeIterator> ExactSizeIterator for MaybeIter<I> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |i| i.len())
    }
}

/// Consecutive spots `from..=to`, walkable from either end.
///
/// Unlike [`crate::primitives::Interval`], a `SpotIter` may be empty, which
/// is what probing needs when a scan starts past its own end (for example
/// probing forward from the last spot of the street).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotIter {
    front: usize,
    back: usize,
}

impl SpotIter {
    /// Spots `from..=to`; empty when `from > to`.
    #[inline]
    pub fn between(from: Spot, to: Spot) -> Self {
        Self {
            front: from.value(),
            back: to.value(),
        }
    }

    /// Spots numbered `from..=to`, clamped below at the first spot.
    ///
    /// Used for scans whose bounds may already lie off the street, such as
    /// `p + 1..=n` with `p = n` or `max(1, p - k)..=p - 1` with `p = 1`.
    #[inline]
    pub fn numbers(from: usize, to: usize) -> Self {
        Self {
            front: from.max(Spot::FIRST.value()),
            back: to,
        }
    }

    /// Whether no spot is left at either end.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.front > self.back
    }
}

impl Iterator for SpotIter {
    type Item = Spot;

    #[inline]
    fn next(&mut self) -> Option<Spot> {
        if self.is_exhausted() {
            return None;
        }
        let s = Spot::new(self.front);
        self.front += 1;
        s
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl DoubleEndedIterator for SpotIter {
    #[inline]
    fn next_back(&mut self) -> Option<Spot> {
        if self.is_exhausted() {
            return None;
        }
        let s = Spot::new(self.back);
        // `back` reaches 0 only when the range is exhausted; `front >= 1` keeps it empty.
        self.back -= 1;
        s
    }
}

impl ExactSizeIterator for SpotIter {
    #[inline]
    fn len(&self) -> usize {
        if self.is_exhausted() {
            0
        } else {
            self.back - self.front + 1
        }
    }
}

impl FusedIterator for SpotIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(v: usize) -> Spot {
        Spot::new(v).unwrap()
    }

    fn values<I: Iterator<Item = Spot>>(it: I) -> Vec<usize> {
        it.map(Spot::value).collect()
    }

    #[test]
    fn test_spot_iter_forward() {
        assert_eq!(values(SpotIter::between(spot(2), spot(4))), vec![2, 3, 4]);
    }

    #[test]
    fn test_spot_iter_backward() {
        assert_eq!(
            values(SpotIter::between(spot(1), spot(3)).rev()),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn test_spot_iter_single() {
        let it = SpotIter::between(spot(3), spot(3));
        assert_eq!(it.len(), 1);
        assert_eq!(values(it), vec![3]);
    }

    #[test]
    fn test_spot_iter_empty_when_reversed() {
        let it = SpotIter::between(spot(4), spot(3));
        assert!(it.is_exhausted());
        assert_eq!(it.len(), 0);
        assert_eq!(values(it), Vec::<usize>::new());
    }

    #[test]
    fn test_spot_iter_empty_rev_at_first_spot() {
        let mut it = SpotIter::between(spot(1), spot(1));
        assert_eq!(it.next_back(), Some(Spot::FIRST));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_spot_iter_numbers_off_the_street() {
        assert!(SpotIter::numbers(4, 3).is_exhausted());
        assert!(SpotIter::numbers(1, 0).is_exhausted());
        assert_eq!(SpotIter::numbers(1, 0).rev().next(), None);
        assert_eq!(values(SpotIter::numbers(0, 2)), vec![1, 2]);
    }

    #[test]
    fn test_spot_iter_meets_in_the_middle() {
        let mut it = SpotIter::between(spot(1), spot(3));
        assert_eq!(it.next(), Some(spot(1)));
        assert_eq!(it.next_back(), Some(spot(3)));
        assert_eq!(it.next(), Some(spot(2)));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_maybe_iter() {
        let some = MaybeIter::new(Some(SpotIter::between(spot(1), spot(2))));
        assert_eq!(some.len(), 2);
        assert_eq!(values(some), vec![1, 2]);

        let none: MaybeIter<SpotIter> = MaybeIter::new(None);
        assert_eq!(none.len(), 0);
        assert_eq!(values(none), Vec::<usize>::new());
    }
}
