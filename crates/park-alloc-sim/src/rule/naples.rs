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
    spot::{CarIndex, Spot},
};
use park_alloc_model::{
    input::{NaplesReach, PreferenceList},
    outcome::RuleKind,
};
use std::iter::{Chain, Once, Rev};

/// `p`, then `p - 1` down to `max(1, p - k)`, then `p + 1` up to the end.
pub type NaplesProbe = Chain<Chain<Once<Spot>, Rev<SpotIter>>, SpotIter>;

/// Probe order of one car preferring `p` with look-back `k` on a street
/// ending at `last`.
///
/// After the backward scan a car restarts its forward drive at `p`, which
/// is already known to be taken, so the forward leg starts at `p + 1`.
#[inline]
pub fn naples_probe(p: Spot, k: NaplesReach, last: Spot) -> NaplesProbe {
    let back = SpotIter::numbers(p.saturating_back(k.value()).value(), p.value() - 1).rev();
    let forward = SpotIter::numbers(p.value() + 1, last.value());
    std::iter::once(p).chain(back).chain(forward)
}

/// Cars first look up to `k` spots behind their preference before driving on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaplesRule<'p> {
    prefs: &'p PreferenceList,
    k: NaplesReach,
}

impl<'p> NaplesRule<'p> {
    #[inline]
    pub fn new(prefs: &'p PreferenceList, k: NaplesReach) -> Self {
        Self { prefs, k }
    }

    #[inline]
    pub fn reach(&self) -> NaplesReach {
        self.k
    }
}

impl<'p> PlacementRule for NaplesRule<'p> {
    type Candidates<'a>
        = MaybeIter<NaplesProbe>
    where
        Self: 'a;

    #[inline]
    fn kind(&self) -> RuleKind {
        RuleKind::KNaples { k: self.k.value() }
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
            .map(|(p, last)| naples_probe(p, self.k, last));
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
    use park_alloc_core::spot::StreetLength;

    fn spot(v: usize) -> Spot {
        Spot::new(v).unwrap()
    }

    fn probe(p: usize, k: usize, n: usize) -> Vec<usize> {
        let reach = NaplesReach::new(k, StreetLength::new(n)).unwrap();
        naples_probe(spot(p), reach, spot(n))
            .map(Spot::value)
            .collect()
    }

    #[test]
    fn test_probe_backward_nearest_first_then_forward() {
        assert_eq!(probe(4, 2, 6), vec![4, 3, 2, 5, 6]);
    }

    #[test]
    fn test_probe_backward_clamped_at_first_spot() {
        assert_eq!(probe(2, 3, 5), vec![2, 1, 3, 4, 5]);
    }

    #[test]
    fn test_probe_from_first_spot_has_no_backward_leg() {
        assert_eq!(probe(1, 2, 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_probe_from_last_spot_has_no_forward_leg() {
        assert_eq!(probe(3, 1, 3), vec![3, 2]);
    }

    #[test]
    fn test_probe_visits_every_spot_once() {
        for n in 2..7 {
            for k in 1..n {
                for p in 1..=n {
                    let mut seen = probe(p, k, n);
                    let low = p.saturating_sub(k).max(1);
                    assert_eq!(seen.len(), n - low + 1, "p={} k={} n={}", p, k, n);
                    seen.sort_unstable();
                    seen.dedup();
                    assert_eq!(seen.len(), n - low + 1);
                }
            }
        }
    }

    #[test]
    fn test_rule_kind_carries_k() {
        let prefs = PreferenceList::new(&[1, 1, 1]).unwrap();
        let k = NaplesReach::new(2, prefs.street()).unwrap();
        let rule = NaplesRule::new(&prefs, k);
        assert_eq!(rule.kind(), RuleKind::KNaples { k: 2 });
        assert_eq!(rule.failure_policy(), FailurePolicy::Halt);
        assert_eq!(
            rule.candidates(CarIndex::new(0))
                .map(Spot::value)
                .collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(rule.candidates(CarIndex::new(3)).count(), 0);
    }
}
