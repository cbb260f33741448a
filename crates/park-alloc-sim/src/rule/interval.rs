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

use crate::rule::{FailurePolicy, PlacementRule};
use park_alloc_core::{
    iter::{MaybeIter, SpotIter},
    spot::{CarIndex, SpotInterval},
};
use park_alloc_model::{
    input::{IntervalList, UnitIntervalList},
    outcome::RuleKind,
};

#[inline]
fn scan(interval: Option<SpotInterval>) -> MaybeIter<SpotIter> {
    MaybeIter::new(interval.map(|i| i.iter()))
}

/// Each car scans its interval in ascending order. A car that finds no spot
/// does not stop the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalRule<'p> {
    list: &'p IntervalList,
}

impl<'p> IntervalRule<'p> {
    #[inline]
    pub fn new(list: &'p IntervalList) -> Self {
        Self { list }
    }
}

impl<'p> PlacementRule for IntervalRule<'p> {
    type Candidates<'a>
        = MaybeIter<SpotIter>
    where
        Self: 'a;

    #[inline]
    fn kind(&self) -> RuleKind {
        RuleKind::Interval
    }

    #[inline]
    fn car_count(&self) -> usize {
        self.list.car_count()
    }

    #[inline]
    fn candidates(&self, car: CarIndex) -> Self::Candidates<'_> {
        scan(self.list.get(car))
    }

    #[inline]
    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::ContinueWithExtraFrame
    }
}

/// Each car tries `alpha_i`, then `beta_i` if it differs; the first car
/// that fits neither stops the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitIntervalRule<'p> {
    list: &'p UnitIntervalList,
}

impl<'p> UnitIntervalRule<'p> {
    #[inline]
    pub fn new(list: &'p UnitIntervalList) -> Self {
        Self { list }
    }
}

impl<'p> PlacementRule for UnitIntervalRule<'p> {
    type Candidates<'a>
        = MaybeIter<SpotIter>
    where
        Self: 'a;

    #[inline]
    fn kind(&self) -> RuleKind {
        RuleKind::UnitInterval
    }

    #[inline]
    fn car_count(&self) -> usize {
        self.list.car_count()
    }

    // Width is at most one, so the ascending scan is exactly `alpha_i, beta_i`.
    #[inline]
    fn candidates(&self, car: CarIndex) -> Self::Candidates<'_> {
        scan(self.list.get(car))
    }

    #[inline]
    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::Halt
    }
}
