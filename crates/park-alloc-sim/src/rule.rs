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

//! Placement rules.
//!
//! A rule decides, for every car, which spots the car is willing to take
//! and in which order it tries them. The engine claims the first candidate
//! that is on the street and free; the rule never sees the street itself.

pub mod classical;
pub mod interval;
pub mod naples;

use park_alloc_core::spot::{CarIndex, Spot, StreetLength};
use park_alloc_model::outcome::RuleKind;

pub use classical::ClassicalRule;
pub use interval::{IntervalRule, UnitIntervalRule};
pub use naples::NaplesRule;

/// What the engine does once a car finds no spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Record one frame for the failed car and stop the run.
    Halt,
    /// Record an extra frame for the failed car, then the regular frame, and
    /// keep going with the next car.
    ContinueWithExtraFrame,
}

pub trait PlacementRule {
    type Candidates<'a>: Iterator<Item = Spot> + 'a
    where
        Self: 'a;

    fn kind(&self) -> RuleKind;

    fn car_count(&self) -> usize;

    /// Street length; every rule here has one spot per car.
    #[inline]
    fn street(&self) -> StreetLength {
        StreetLength::new(self.car_count())
    }

    /// Spots `car` tries, in order. Empty for a car the rule does not know.
    fn candidates(&self, car: CarIndex) -> Self::Candidates<'_>;

    fn failure_policy(&self) -> FailurePolicy;
}
