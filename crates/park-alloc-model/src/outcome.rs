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

use crate::frame::Frame;
use park_alloc_core::spot::{CarIndex, StreetLength};
use serde::Serialize;
use std::fmt::Display;

/// Whether every car of a run found a spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Valid,
    /// `car` is the first car that could not park.
    Invalid { car: CarIndex },
}

impl Outcome {
    /// Reads the outcome off a frame, normally the final frame of a trace.
    #[inline]
    pub fn of_frame(frame: &Frame) -> Self {
        match frame.first_unparked() {
            Some(car) => Outcome::Invalid { car },
            None => Outcome::Valid,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Valid => write!(f, "valid"),
            Outcome::Invalid { car } => write!(f, "invalid ({} did not park)", car),
        }
    }
}

/// The placement rule a trace was produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    Classical,
    KNaples { k: usize },
    Interval,
    UnitInterval,
}

impl RuleKind {
    /// Human readable family name, e.g. `"2-Naples"`.
    pub fn family_name(&self) -> String {
        match self {
            RuleKind::Classical => "Classical".to_string(),
            RuleKind::KNaples { k } => format!("{}-Naples", k),
            RuleKind::Interval => "l-Interval".to_string(),
            RuleKind::UnitInterval => "Unit Interval".to_string(),
        }
    }

    /// Whether the rule keeps processing cars after one fails to park.
    #[inline]
    pub fn continues_after_failure(&self) -> bool {
        matches!(self, RuleKind::Interval)
    }
}

impl Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.family_name())
    }
}

/// The user-facing pass/fail message for one run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Verdict {
    rule: RuleKind,
    outcome: Outcome,
    street_length: StreetLength,
}

impl Verdict {
    #[inline]
    pub fn new(rule: RuleKind, outcome: Outcome, street_length: StreetLength) -> Self {
        Self {
            rule,
            outcome,
            street_length,
        }
    }

    #[inline]
    pub fn rule(&self) -> RuleKind {
        self.rule
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }

    pub fn message(&self) -> String {
        let family = self.rule.family_name();
        let n = self.street_length.value();
        match (self.rule, self.outcome) {
            (RuleKind::Classical | RuleKind::KNaples { .. }, Outcome::Valid) => format!(
                "All cars parked. This is a valid {} Parking Function of length {}!",
                family, n
            ),
            (RuleKind::Classical, Outcome::Invalid { .. }) => format!(
                "A car reached the end of the street. Therefore, this is not a valid {} Parking Function!",
                family
            ),
            (RuleKind::KNaples { .. }, Outcome::Invalid { .. }) => format!(
                "A car reached the end of the street without parking. This is not a valid {} Parking Function!",
                family
            ),
            (RuleKind::Interval | RuleKind::UnitInterval, Outcome::Valid) => format!(
                "All cars parked successfully! This is a valid {} Parking Function!",
                family
            ),
            (RuleKind::Interval | RuleKind::UnitInterval, Outcome::Invalid { .. }) => format!(
                "A car couldn't park in its allowed interval. This is not a valid {} Parking Function!",
                family
            ),
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Assignment, Decision};
    use park_alloc_core::spot::Spot;

    fn frame(decisions: &[Decision], cars: usize) -> Frame {
        let mut a = Assignment::new(cars);
        for d in decisions {
            a.decide(*d);
        }
        a.snapshot()
    }

    fn parked(v: usize) -> Decision {
        Decision::Parked(Spot::new(v).unwrap())
    }

    #[test]
    fn test_outcome_valid_when_nobody_unparked() {
        let f = frame(&[parked(1), parked(2)], 2);
        assert_eq!(Outcome::of_frame(&f), Outcome::Valid);
    }

    #[test]
    fn test_outcome_names_first_unparked_car() {
        let f = frame(&[parked(1), Decision::Unparked, Decision::Unparked], 3);
        assert_eq!(
            Outcome::of_frame(&f),
            Outcome::Invalid {
                car: CarIndex::new(1)
            }
        );
    }

    #[test]
    fn test_outcome_undecided_is_not_a_failure() {
        let f = frame(&[parked(1)], 2);
        assert!(Outcome::of_frame(&f).is_valid());
    }

    #[test]
    fn test_classical_messages() {
        let n = StreetLength::new(3);
        let ok = Verdict::new(RuleKind::Classical, Outcome::Valid, n);
        assert_eq!(
            ok.message(),
            "All cars parked. This is a valid Classical Parking Function of length 3!"
        );
        let bad = Verdict::new(
            RuleKind::Classical,
            Outcome::Invalid {
                car: CarIndex::new(2),
            },
            n,
        );
        assert!(!bad.is_valid());
        assert_eq!(
            bad.to_string(),
            "A car reached the end of the street. Therefore, this is not a valid Classical Parking Function!"
        );
    }

    #[test]
    fn test_k_naples_message_names_k() {
        let v = Verdict::new(RuleKind::KNaples { k: 2 }, Outcome::Valid, StreetLength::new(4));
        assert_eq!(
            v.message(),
            "All cars parked. This is a valid 2-Naples Parking Function of length 4!"
        );
    }

    #[test]
    fn test_interval_messages() {
        let bad = Verdict::new(
            RuleKind::UnitInterval,
            Outcome::Invalid {
                car: CarIndex::new(0),
            },
            StreetLength::new(2),
        );
        assert_eq!(
            bad.message(),
            "A car couldn't park in its allowed interval. This is not a valid Unit Interval Parking Function!"
        );
        let ok = Verdict::new(RuleKind::Interval, Outcome::Valid, StreetLength::new(2));
        assert!(ok.message().contains("valid l-Interval Parking Function"));
    }

    #[test]
    fn test_only_interval_continues_after_failure() {
        assert!(RuleKind::Interval.continues_after_failure());
        assert!(!RuleKind::Classical.continues_after_failure());
        assert!(!RuleKind::KNaples { k: 1 }.continues_after_failure());
        assert!(!RuleKind::UnitInterval.continues_after_failure());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Valid.to_string(), "valid");
        assert_eq!(
            Outcome::Invalid {
                car: CarIndex::new(2)
            }
            .to_string(),
            "invalid (c_3 did not park)"
        );
    }
}
