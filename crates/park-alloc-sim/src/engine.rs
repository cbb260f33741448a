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

//! The shared simulation loop.
//!
//! Every placement rule runs through [`ParkingEngine::run`]: cars arrive in
//! order, each car claims the first of its candidate spots that is still
//! free, and a frame is recorded after every car. The rule's
//! [`FailurePolicy`] decides what happens when a car finds nothing.

use crate::{
    recorder::FrameRecorder,
    rule::{FailurePolicy, PlacementRule},
    street::{BooleanVecStreet, Street, StreetRead},
};
use park_alloc_model::frame::{Decision, Trace};
use std::marker::PhantomData;
use tracing::{debug, instrument, trace};

/// Runs placement rules against a street implementation `S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParkingEngine<S = BooleanVecStreet> {
    _street: PhantomData<S>,
}

impl<S> Default for ParkingEngine<S> {
    #[inline]
    fn default() -> Self {
        Self {
            _street: PhantomData,
        }
    }
}

impl<S: Street> ParkingEngine<S> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn run<R: PlacementRule>(&self, rule: &R) -> Trace {
        self.run_with_street(rule).0
    }

    /// Like [`ParkingEngine::run`], but also hands back the street as the last
    /// car left it.
    #[instrument(
        level = "debug",
        skip_all,
        fields(rule = %rule.kind(), cars = rule.car_count())
    )]
    pub fn run_with_street<R: PlacementRule>(&self, rule: &R) -> (Trace, S) {
        let street_length = rule.street();
        let mut street = <S as StreetRead>::new(street_length);
        let mut recorder = FrameRecorder::new(street_length);

        while let Some(car) = recorder.next_car() {
            let claimed = rule.candidates(car).find(|&spot| {
                let ok = street.claim(spot);
                trace!(car = %car, spot = spot.value(), claimed = ok, "probe");
                ok
            });

            match claimed {
                Some(spot) => {
                    recorder.decide(Decision::Parked(spot));
                    debug!(car = %car, spot = spot.value(), "parked");
                }
                None => {
                    recorder.decide(Decision::Unparked);
                    debug!(car = %car, "no spot available");
                    match rule.failure_policy() {
                        FailurePolicy::Halt => {
                            recorder.record();
                            break;
                        }
                        FailurePolicy::ContinueWithExtraFrame => recorder.record(),
                    }
                }
            }
            recorder.record();
        }

        debug!(
            frames = recorder.frame_count(),
            occupied = street.occupied_count(),
            "run finished"
        );
        (recorder.finish(), street)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{ClassicalRule, IntervalRule, NaplesRule, UnitIntervalRule};
    use crate::street::BTreeSetStreet;
    use park_alloc_core::spot::Spot;
    use park_alloc_model::input::{IntervalList, NaplesReach, PreferenceList, UnitIntervalList};

    fn assert_street_matches_final_frame<S: Street, R: PlacementRule>(rule: &R) {
        let (trace, street) = ParkingEngine::<S>::new().run_with_street(rule);
        let last = trace.final_frame();
        assert_eq!(street.occupied_count(), last.parked_count());

        let mut parked: Vec<Spot> = last.spots().flatten().collect();
        parked.sort();
        let mut occupied: Vec<Spot> = street.iter_occupied().collect();
        occupied.sort();
        assert_eq!(occupied, parked);
    }

    fn assert_on_both_streets<R: PlacementRule>(rule: &R) {
        assert_street_matches_final_frame::<BooleanVecStreet, R>(rule);
        assert_street_matches_final_frame::<BTreeSetStreet, R>(rule);
    }

    #[test]
    fn test_halt_records_failure_frame_once() {
        let prefs = PreferenceList::new(&[2, 2]).unwrap();
        let trace = ParkingEngine::<BooleanVecStreet>::new().run(&ClassicalRule::new(&prefs));
        let shown: Vec<String> = trace.iter().map(|f| f.to_string()).collect();
        assert_eq!(shown, vec!["[_, _]", "[2, _]", "[2, x]"]);
    }

    #[test]
    fn test_continue_records_failure_frame_twice() {
        let list = IntervalList::new(&[1, 1, 1], &[1, 1, 3]).unwrap();
        let trace = ParkingEngine::<BooleanVecStreet>::new().run(&IntervalRule::new(&list));
        let shown: Vec<String> = trace.iter().map(|f| f.to_string()).collect();
        assert_eq!(
            shown,
            vec![
                "[_, _, _]",
                "[1, _, _]",
                "[1, x, _]",
                "[1, x, _]",
                "[1, x, 2]"
            ]
        );
    }

    #[test]
    fn test_street_implementations_agree() {
        let prefs = PreferenceList::new(&[3, 1, 1, 2]).unwrap();
        let rule = ClassicalRule::new(&prefs);
        let a = ParkingEngine::<BooleanVecStreet>::new().run(&rule);
        let b = ParkingEngine::<BTreeSetStreet>::new().run(&rule);
        assert_eq!(a, b);
        assert_on_both_streets(&rule);
    }

    #[test]
    fn test_occupied_count_equals_parked_count() {
        for values in [&[1, 1, 1][..], &[2, 2][..], &[3, 3, 1][..], &[4, 1, 4, 2][..]] {
            let prefs = PreferenceList::new(values).unwrap();
            assert_on_both_streets(&ClassicalRule::new(&prefs));
            assert_on_both_streets(&UnitIntervalRule::new(
                &UnitIntervalList::from_preferences(&prefs),
            ));
            let k = NaplesReach::new(1, prefs.street()).unwrap();
            assert_on_both_streets(&NaplesRule::new(&prefs, k));
        }

        let list = IntervalList::new(&[1, 1, 1], &[1, 1, 3]).unwrap();
        assert_on_both_streets(&IntervalRule::new(&list));
    }
}
