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

//! One entry point per placement rule.
//!
//! Each function runs a fresh [`ParkingEngine`] over a [`BooleanVecStreet`]
//! and returns the full [`Trace`]. Runs share no state, so calling a function
//! twice with the same input yields the same trace.

use crate::{
    engine::ParkingEngine,
    rule::{ClassicalRule, IntervalRule, NaplesRule, UnitIntervalRule},
    street::BooleanVecStreet,
};
use park_alloc_model::{
    frame::Trace,
    input::{IntervalList, NaplesReach, PreferenceList, UnitIntervalList},
};

/// Classical parking: every car drives forward from its preferred spot.
///
/// The run stops at the first car that reaches the end of the street.
///
/// # Examples
///
/// ```
/// use park_alloc_model::input::PreferenceList;
/// use park_alloc_sim::simulate::simulate_classical;
///
/// let prefs = PreferenceList::new(&[1, 1, 1]).unwrap();
/// let trace = simulate_classical(&prefs);
/// assert_eq!(trace.final_frame().to_string(), "[1, 2, 3]");
/// assert!(trace.outcome().is_valid());
/// ```
pub fn simulate_classical(prefs: &PreferenceList) -> Trace {
    ParkingEngine::<BooleanVecStreet>::new().run(&ClassicalRule::new(prefs))
}

/// k-Naples parking: a car whose spot is taken first backs up to `k` spots,
/// nearest first, before driving forward.
pub fn simulate_k_naples(prefs: &PreferenceList, k: NaplesReach) -> Trace {
    ParkingEngine::<BooleanVecStreet>::new().run(&NaplesRule::new(prefs, k))
}

/// Interval parking: each car takes the first free spot of `[alpha_i, beta_i]`.
///
/// A car that finds nothing is marked unparked and the run goes on. Its
/// failure shows up as two identical consecutive frames, so a trace has
/// `1 + n + failures` frames.
pub fn simulate_interval(list: &IntervalList) -> Trace {
    ParkingEngine::<BooleanVecStreet>::new().run(&IntervalRule::new(list))
}

/// Unit-interval parking: each car tries `alpha_i`, then `beta_i`.
pub fn simulate_unit_interval(list: &UnitIntervalList) -> Trace {
    ParkingEngine::<BooleanVecStreet>::new().run(&UnitIntervalRule::new(list))
}
