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
    spot::CarIndex,
};
use park_alloc_model::{input::PreferenceList, outcome::RuleKind};

/// Each car drives forward from its preferred spot to the end of the street.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassicalRule<'p> {
    prefs: &'p PreferenceList,
}

impl<'p> ClassicalRule<'p> {
    #[inline]
    pub fn new(prefs: &'p PreferenceList) -> Self {
        Self { prefs }
    }

    #[inline]
    pub fn preferences(&self) -> &'p PreferenceList {
        self.prefs
    }
}

impl<'p> PlacementRule for ClassicalRule<'p> {
    type Candidates<'a>
        = MaybeIter<SpotIter>
    where
        Self: 'a;

    #[inline]
    fn kind(&self) -> RuleKind {
        RuleKind::Classical
    }

    #[inline]
    fn car_count(&self) -> usize {
        self.prefs.car_count()
    }

    #[inline]
    fn candidates(&self, car: CarIndex) -> Self::Candidates<'_> {
        let probe = self
            .prefs
            .get(car)
            .zip(self.street().last_spot())
            .map(|(p, last)| SpotIter::between(p, last));
        MaybeIter::new(probe)
    }

    #[inline]
    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::Halt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_alloc_core::spot::Spot;

    fn values(rule: &ClassicalRule<'_>, car: usize) -> Vec<usize> {
        rule.candidates(CarIndex::new(car))
            .map(Spot::value)
            .collect()
    }

    #[test]
    fn test_probes_forward_to_street_end() {
        let prefs = PreferenceList::new(&[2, 1, 3]).unwrap();
        let rule = ClassicalRule::new(&prefs);
        assert_eq!(values(&rule, 0), vec![2, 3]);
        assert_eq!(values(&rule, 1), vec![1, 2, 3]);
        assert_eq!(values(&rule, 2), vec![3]);
    }

    #[test]
    fn test_unknown_car_has_no_candidates() {
        let prefs = PreferenceList::new(&[1]).unwrap();
        let rule = ClassicalRule::new(&prefs);
        assert!(values(&rule, 1).is_empty());
    }

    #[test]
    fn test_rule_metadata() {
        let prefs = PreferenceList::new(&[1, 1]).unwrap();
        let rule = ClassicalRule::new(&prefs);
        assert_eq!(rule.kind(), RuleKind::Classical);
        assert_eq!(rule.car_count(), 2);
        assert_eq!(rule.street().value(), 2);
        assert_eq!(rule.failure_policy(), FailurePolicy::Halt);
    }
}
