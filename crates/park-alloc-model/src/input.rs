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

//! Validated simulation inputs.
//!
//! The simulator never re-checks its inputs. Every precondition a placement
//! rule relies on (spots within `[1, n]`, ordered interval bounds, `1 <= k < n`)
//! is enforced once, when one of these types is constructed.

use crate::err::{
    IntervalError, IntervalReversedError, IntervalTooWideError, LengthMismatchError,
    NaplesReachOutOfRangeError, PreferenceError, SpotOutOfRangeError,
};
use park_alloc_core::{
    primitives::Interval,
    spot::{CarIndex, Spot, SpotInterval, StreetLength},
};
use std::fmt::Display;

#[inline]
fn spot_on_street(
    car: CarIndex,
    value: usize,
    street: StreetLength,
) -> Result<Spot, SpotOutOfRangeError> {
    Spot::new(value)
        .filter(|s| street.contains(*s))
        .ok_or_else(|| SpotOutOfRangeError::new(car, value, street))
}

#[inline]
fn expect_len(expected: usize, actual: usize) -> Result<(), LengthMismatchError> {
    if expected == actual {
        Ok(())
    } else {
        Err(LengthMismatchError::new(expected, actual))
    }
}

/// One preferred spot per car, `n` cars on a street of `n` spots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreferenceList {
    spots: Vec<Spot>,
}

impl PreferenceList {
    /// Validates that every preference lies in `[1, n]` where `n = values.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use park_alloc_model::input::PreferenceList;
    ///
    /// assert!(PreferenceList::new(&[1, 1, 3]).is_ok());
    /// assert!(PreferenceList::new(&[1, 4, 3]).is_err());
    /// ```
    pub fn new(values: &[usize]) -> Result<Self, PreferenceError> {
        let street = StreetLength::new(values.len());
        let spots = values
            .iter()
            .enumerate()
            .map(|(i, &v)| spot_on_street(CarIndex::new(i), v, street))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { spots })
    }

    /// Like [`PreferenceList::new`] but additionally requires exactly `cars` entries.
    pub fn with_cars(values: &[usize], cars: usize) -> Result<Self, PreferenceError> {
        expect_len(cars, values.len())?;
        Self::new(values)
    }

    #[inline]
    pub fn car_count(&self) -> usize {
        self.spots.len()
    }

    #[inline]
    pub fn street(&self) -> StreetLength {
        StreetLength::new(self.spots.len())
    }

    #[inline]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    #[inline]
    pub fn get(&self, car: CarIndex) -> Option<Spot> {
        self.spots.get(car.value()).copied()
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (CarIndex, Spot)> + '_ {
        self.spots
            .iter()
            .enumerate()
            .map(|(i, &s)| (CarIndex::new(i), s))
    }
}

impl Display for PreferenceList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_tuple(f, self.spots.iter().map(|s| s.value()))
    }
}

/// The backward look-back `k` of the k-Naples rule, `1 <= k < n`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NaplesReach(usize);

impl NaplesReach {
    pub fn new(k: usize, street: StreetLength) -> Result<Self, NaplesReachOutOfRangeError> {
        if k >= 1 && k < street.value() {
            Ok(Self(k))
        } else {
            Err(NaplesReachOutOfRangeError::new(k, street))
        }
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Display for NaplesReach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "k={}", self.0)
    }
}

fn intervals_on_street(alpha: &[usize], beta: &[usize]) -> Result<Vec<SpotInterval>, IntervalError> {
    expect_len(alpha.len(), beta.len())?;
    let street = StreetLength::new(alpha.len());

    let mut bounds = Vec::with_capacity(alpha.len());
    for (i, (&a, &b)) in alpha.iter().zip(beta).enumerate() {
        let car = CarIndex::new(i);
        bounds.push((spot_on_street(car, a, street)?, spot_on_street(car, b, street)?));
    }

    bounds
        .into_iter()
        .enumerate()
        .map(|(i, (a, b))| {
            Interval::ordered(a, b).ok_or_else(|| {
                IntervalError::from(IntervalReversedError::new(
                    CarIndex::new(i),
                    a.value(),
                    b.value(),
                ))
            })
        })
        .collect()
}

/// One closed interval `[alpha_i, beta_i]` of acceptable spots per car.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalList {
    intervals: Vec<SpotInterval>,
}

impl IntervalList {
    /// Validates equal lengths, bounds within `[1, n]` and `alpha_i <= beta_i`,
    /// in that order.
    ///
    /// # Examples
    ///
    /// ```
    /// use park_alloc_model::input::IntervalList;
    ///
    /// assert!(IntervalList::new(&[1, 1, 1], &[3, 3, 3]).is_ok());
    /// assert!(IntervalList::new(&[2, 1, 1], &[1, 3, 3]).is_err());
    /// ```
    pub fn new(alpha: &[usize], beta: &[usize]) -> Result<Self, IntervalError> {
        Ok(Self {
            intervals: intervals_on_street(alpha, beta)?,
        })
    }

    #[inline]
    pub fn car_count(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn street(&self) -> StreetLength {
        StreetLength::new(self.intervals.len())
    }

    #[inline]
    pub fn intervals(&self) -> &[SpotInterval] {
        &self.intervals
    }

    #[inline]
    pub fn get(&self, car: CarIndex) -> Option<SpotInterval> {
        self.intervals.get(car.value()).copied()
    }
}

impl Display for IntervalList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_bounds(f, &self.intervals)
    }
}

/// Intervals of width at most one; the last car's interval is a single spot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitIntervalList {
    intervals: Vec<SpotInterval>,
}

impl UnitIntervalList {
    /// Validates explicit bounds as [`IntervalList::new`] does, then checks
    /// `beta_i - alpha_i <= 1` and `beta_last == alpha_last`.
    pub fn new(alpha: &[usize], beta: &[usize]) -> Result<Self, IntervalError> {
        let intervals = intervals_on_street(alpha, beta)?;
        let cars = intervals.len();
        for (i, interval) in intervals.iter().enumerate() {
            let car = CarIndex::new(i);
            let max_width = if car.is_last_of(cars) { 0 } else { 1 };
            if interval.width() > max_width {
                let raw = Interval::new(interval.start().value(), interval.end().value());
                return Err(IntervalError::from(IntervalTooWideError::new(
                    car, raw, max_width,
                )));
            }
        }
        Ok(Self { intervals })
    }

    /// Derives `[p_i, p_i + 1]` for every car but the last, which gets `[p_last, p_last]`.
    ///
    /// A car preferring the last spot of the street has no next spot, so its
    /// interval collapses to that spot.
    ///
    /// # Examples
    ///
    /// ```
    /// use park_alloc_model::input::{PreferenceList, UnitIntervalList};
    ///
    /// let prefs = PreferenceList::new(&[2, 1, 1]).unwrap();
    /// let unit = UnitIntervalList::from_preferences(&prefs);
    /// assert_eq!(unit.to_string(), "alpha=(2, 1, 1) beta=(3, 2, 1)");
    /// ```
    pub fn from_preferences(prefs: &PreferenceList) -> Self {
        let street = prefs.street();
        let cars = prefs.car_count();
        let intervals = prefs
            .iter()
            .map(|(car, p)| {
                let next = p.next().filter(|s| street.contains(*s));
                match next {
                    Some(n) if !car.is_last_of(cars) => Interval::new(p, n),
                    _ => Interval::point(p),
                }
            })
            .collect();
        Self { intervals }
    }

    #[inline]
    pub fn car_count(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn street(&self) -> StreetLength {
        StreetLength::new(self.intervals.len())
    }

    #[inline]
    pub fn intervals(&self) -> &[SpotInterval] {
        &self.intervals
    }

    #[inline]
    pub fn get(&self, car: CarIndex) -> Option<SpotInterval> {
        self.intervals.get(car.value()).copied()
    }
}

impl Display for UnitIntervalList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_bounds(f, &self.intervals)
    }
}

fn write_tuple<I>(f: &mut std::fmt::Formatter<'_>, values: I) -> std::fmt::Result
where
    I: IntoIterator<Item = usize>,
{
    write!(f, "(")?;
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", v)?;
    }
    write!(f, ")")
}

fn write_bounds(f: &mut std::fmt::Formatter<'_>, intervals: &[SpotInterval]) -> std::fmt::Result {
    write!(f, "alpha=")?;
    write_tuple(f, intervals.iter().map(|i| i.start().value()))?;
    write!(f, " beta=")?;
    write_tuple(f, intervals.iter().map(|i| i.end().value()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spots(values: &[usize]) -> Vec<Spot> {
        values.iter().map(|&v| Spot::new(v).unwrap()).collect()
    }

    #[test]
    fn test_preferences_accepts_values_in_range() {
        let p = PreferenceList::new(&[1, 3, 2]).unwrap();
        assert_eq!(p.car_count(), 3);
        assert_eq!(p.street(), StreetLength::new(3));
        assert_eq!(p.spots(), spots(&[1, 3, 2]).as_slice());
        assert_eq!(p.get(CarIndex::new(1)), Spot::new(3));
        assert_eq!(p.get(CarIndex::new(3)), None);
    }

    #[test]
    fn test_preferences_rejects_zero() {
        let err = PreferenceList::new(&[1, 0, 2]).unwrap_err();
        assert_eq!(
            err,
            PreferenceError::SpotOutOfRange(SpotOutOfRangeError::new(
                CarIndex::new(1),
                0,
                StreetLength::new(3)
            ))
        );
    }

    #[test]
    fn test_preferences_rejects_past_street() {
        assert!(matches!(
            PreferenceList::new(&[1, 4, 2]),
            Err(PreferenceError::SpotOutOfRange(e)) if e.value() == 4
        ));
    }

    #[test]
    fn test_preferences_empty_is_valid() {
        let p = PreferenceList::new(&[]).unwrap();
        assert_eq!(p.car_count(), 0);
        assert!(p.street().is_zero());
    }

    #[test]
    fn test_preferences_with_cars_checks_length_first() {
        assert_eq!(
            PreferenceList::with_cars(&[9, 9], 3),
            Err(PreferenceError::LengthMismatch(LengthMismatchError::new(3, 2)))
        );
        assert!(PreferenceList::with_cars(&[1, 2, 3], 3).is_ok());
    }

    #[test]
    fn test_preferences_display() {
        let p = PreferenceList::new(&[2, 2, 1]).unwrap();
        assert_eq!(p.to_string(), "(2, 2, 1)");
    }

    #[test]
    fn test_naples_reach_bounds() {
        let street = StreetLength::new(3);
        assert!(NaplesReach::new(0, street).is_err());
        assert_eq!(NaplesReach::new(1, street).map(NaplesReach::value), Ok(1));
        assert_eq!(NaplesReach::new(2, street).map(NaplesReach::value), Ok(2));
        assert!(NaplesReach::new(3, street).is_err());
        assert!(NaplesReach::new(1, StreetLength::new(1)).is_err());
    }

    #[test]
    fn test_interval_list_valid() {
        let list = IntervalList::new(&[1, 1, 2], &[3, 1, 3]).unwrap();
        assert_eq!(list.car_count(), 3);
        let first = list.get(CarIndex::new(0)).unwrap();
        assert_eq!((first.start().value(), first.end().value()), (1, 3));
        assert!(list.get(CarIndex::new(1)).unwrap().is_point());
        assert_eq!(list.to_string(), "alpha=(1, 1, 2) beta=(3, 1, 3)");
    }

    #[test]
    fn test_interval_list_length_mismatch() {
        assert_eq!(
            IntervalList::new(&[1, 1], &[2]),
            Err(IntervalError::LengthMismatch(LengthMismatchError::new(2, 1)))
        );
    }

    #[test]
    fn test_interval_list_out_of_range() {
        assert!(matches!(
            IntervalList::new(&[1, 1], &[2, 3]),
            Err(IntervalError::SpotOutOfRange(e)) if e.value() == 3 && e.car() == CarIndex::new(1)
        ));
    }

    #[test]
    fn test_interval_list_range_checked_before_order() {
        // car 0 is reversed, car 1 is out of range: range errors win
        assert!(matches!(
            IntervalList::new(&[2, 1], &[1, 5]),
            Err(IntervalError::SpotOutOfRange(_))
        ));
    }

    #[test]
    fn test_interval_list_reversed() {
        assert_eq!(
            IntervalList::new(&[2, 1, 1], &[1, 3, 3]),
            Err(IntervalError::Reversed(IntervalReversedError::new(
                CarIndex::new(0),
                2,
                1
            )))
        );
    }

    #[test]
    fn test_unit_interval_new_accepts_width_one() {
        let list = UnitIntervalList::new(&[2, 1, 1], &[3, 2, 1]).unwrap();
        assert_eq!(list.intervals()[0].width(), 1);
        assert!(list.intervals()[2].is_point());
    }

    #[test]
    fn test_unit_interval_new_rejects_wide_interval() {
        assert!(matches!(
            UnitIntervalList::new(&[1, 1, 1], &[3, 2, 1]),
            Err(IntervalError::TooWide(e)) if e.car() == CarIndex::new(0) && e.max_width() == 1
        ));
    }

    #[test]
    fn test_unit_interval_new_rejects_wide_last_interval() {
        assert!(matches!(
            UnitIntervalList::new(&[1, 2, 2], &[2, 3, 3]),
            Err(IntervalError::TooWide(e)) if e.car() == CarIndex::new(2) && e.max_width() == 0
        ));
    }

    #[test]
    fn test_unit_interval_from_preferences() {
        let prefs = PreferenceList::new(&[2, 1, 1]).unwrap();
        let unit = UnitIntervalList::from_preferences(&prefs);
        let bounds: Vec<(usize, usize)> = unit
            .intervals()
            .iter()
            .map(|i| (i.start().value(), i.end().value()))
            .collect();
        assert_eq!(bounds, vec![(2, 3), (1, 2), (1, 1)]);
    }

    #[test]
    fn test_unit_interval_from_preferences_collapses_at_street_end() {
        let prefs = PreferenceList::new(&[3, 3, 1]).unwrap();
        let unit = UnitIntervalList::from_preferences(&prefs);
        assert!(unit.intervals()[0].is_point());
        assert!(unit.intervals()[1].is_point());
        assert_eq!(unit.to_string(), "alpha=(3, 3, 1) beta=(3, 3, 1)");
    }

    #[test]
    fn test_unit_interval_from_preferences_matches_explicit_bounds() {
        let prefs = PreferenceList::new(&[1, 2, 2, 4]).unwrap();
        let derived = UnitIntervalList::from_preferences(&prefs);
        let explicit = UnitIntervalList::new(&[1, 2, 2, 4], &[2, 3, 3, 4]).unwrap();
        assert_eq!(derived, explicit);
    }
}
