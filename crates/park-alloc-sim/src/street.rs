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

//! Occupancy of the street.
//!
//! A street of length `n` tracks which of the spots `1..=n` have been
//! claimed. Occupancy only grows: there is no operation that frees a spot.

use park_alloc_core::spot::{Spot, StreetLength};
use std::{
    collections::BTreeSet,
    fmt::Display,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreetOutOfBoundsError {
    spot: Spot,
    length: StreetLength,
}

impl StreetOutOfBoundsError {
    #[inline]
    pub fn new(spot: Spot, length: StreetLength) -> Self {
        Self { spot, length }
    }

    #[inline]
    pub fn spot(&self) -> Spot {
        self.spot
    }

    #[inline]
    pub fn length(&self) -> StreetLength {
        self.length
    }
}

impl Display for StreetOutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lies off a street of length {} (spots [1, {}])",
            self.spot,
            self.length.value(),
            self.length.value()
        )
    }
}

impl std::error::Error for StreetOutOfBoundsError {}

pub trait StreetRead: Eq + Clone {
    /// An empty street of the given length.
    fn new(length: StreetLength) -> Self
    where
        Self: Sized;

    type OccupiedIter<'a>: Iterator<Item = Spot> + 'a
    where
        Self: 'a;

    fn length(&self) -> StreetLength;

    fn is_occupied(&self, spot: Spot) -> Result<bool, StreetOutOfBoundsError>;

    #[inline]
    fn is_free(&self, spot: Spot) -> Result<bool, StreetOutOfBoundsError> {
        self.is_occupied(spot).map(|occupied| !occupied)
    }

    fn occupied_count(&self) -> usize;

    #[inline]
    fn is_full(&self) -> bool {
        self.occupied_count() == self.length().value()
    }

    /// Occupied spots in ascending order.
    fn iter_occupied(&self) -> Self::OccupiedIter<'_>;
}

pub trait StreetWrite: StreetRead {
    /// Marks `spot` as occupied.
    ///
    /// Returns `Ok(true)` if the spot was free before and `Ok(false)` if it
    /// was already occupied, in which case nothing changes.
    fn occupy(&mut self, spot: Spot) -> Result<bool, StreetOutOfBoundsError>;

    /// Occupies `spot` iff it lies on the street and is free.
    ///
    /// Returns whether the spot was claimed. Spots off the street are simply
    /// unavailable.
    #[inline]
    fn claim(&mut self, spot: Spot) -> bool {
        matches!(self.occupy(spot), Ok(true))
    }
}

pub trait Street: StreetRead + StreetWrite {}
impl<T: StreetRead + StreetWrite> Street for T {}

#[inline]
fn check_on_street(length: StreetLength, spot: Spot) -> Result<usize, StreetOutOfBoundsError> {
    if length.contains(spot) {
        Ok(spot.offset())
    } else {
        Err(StreetOutOfBoundsError::new(spot, length))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BooleanVecStreet {
    length: StreetLength,
    occupied: Vec<bool>, // indexed by `Spot::offset`
    count: usize,
}

impl BooleanVecStreet {
    #[inline]
    pub fn new(length: StreetLength) -> Self {
        Self {
            length,
            occupied: vec![false; length.value()],
            count: 0,
        }
    }
}

pub struct BooleanVecOccupiedIter<'a> {
    slice: &'a [bool],
    cur: usize,
}

impl<'a> Iterator for BooleanVecOccupiedIter<'a> {
    type Item = Spot;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.cur < self.slice.len() {
            let i = self.cur;
            self.cur += 1;
            if self.slice[i] {
                return Spot::new(i + 1);
            }
        }
        None
    }
}

impl StreetRead for BooleanVecStreet {
    type OccupiedIter<'a>
        = BooleanVecOccupiedIter<'a>
    where
        Self: 'a;

    #[inline]
    fn new(length: StreetLength) -> Self {
        Self::new(length)
    }

    #[inline]
    fn length(&self) -> StreetLength {
        self.length
    }

    #[inline]
    fn is_occupied(&self, spot: Spot) -> Result<bool, StreetOutOfBoundsError> {
        let i = check_on_street(self.length, spot)?;
        Ok(self.occupied[i])
    }

    #[inline]
    fn occupied_count(&self) -> usize {
        self.count
    }

    #[inline]
    fn iter_occupied(&self) -> Self::OccupiedIter<'_> {
        BooleanVecOccupiedIter {
            slice: &self.occupied,
            cur: 0,
        }
    }
}

impl StreetWrite for BooleanVecStreet {
    #[inline]
    fn occupy(&mut self, spot: Spot) -> Result<bool, StreetOutOfBoundsError> {
        let i = check_on_street(self.length, spot)?;
        if self.occupied[i] {
            return Ok(false);
        }
        self.occupied[i] = true;
        self.count += 1;
        Ok(true)
    }
}

/// The occupied set kept literally as a set of spots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BTreeSetStreet {
    length: StreetLength,
    occupied: BTreeSet<Spot>,
}

impl BTreeSetStreet {
    #[inline]
    pub fn new(length: StreetLength) -> Self {
        Self {
            length,
            occupied: BTreeSet::new(),
        }
    }
}

impl StreetRead for BTreeSetStreet {
    type OccupiedIter<'a>
        = std::iter::Copied<std::collections::btree_set::Iter<'a, Spot>>
    where
        Self: 'a;

    #[inline]
    fn new(length: StreetLength) -> Self {
        Self::new(length)
    }

    #[inline]
    fn length(&self) -> StreetLength {
        self.length
    }

    #[inline]
    fn is_occupied(&self, spot: Spot) -> Result<bool, StreetOutOfBoundsError> {
        check_on_street(self.length, spot)?;
        Ok(self.occupied.contains(&spot))
    }

    #[inline]
    fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    #[inline]
    fn iter_occupied(&self) -> Self::OccupiedIter<'_> {
        self.occupied.iter().copied()
    }
}

impl StreetWrite for BTreeSetStreet {
    #[inline]
    fn occupy(&mut self, spot: Spot) -> Result<bool, StreetOutOfBoundsError> {
        check_on_street(self.length, spot)?;
        Ok(self.occupied.insert(spot))
    }
}
