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

use park_alloc_core::{
    primitives::Interval,
    spot::{CarIndex, StreetLength},
};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpotOutOfRangeError {
    car: CarIndex,
    value: usize,
    street: StreetLength,
}

impl SpotOutOfRangeError {
    #[inline]
    pub fn new(car: CarIndex, value: usize, street: StreetLength) -> Self {
        Self { car, value, street }
    }

    #[inline]
    pub fn car(&self) -> CarIndex {
        self.car
    }

    #[inline]
    pub fn value(&self) -> usize {
        self.value
    }

    #[inline]
    pub fn street(&self) -> StreetLength {
        self.street
    }
}

impl Display for SpotOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Car {} names spot {} but all numbers must be between 1 and {}",
            self.car,
            self.value,
            self.street.value()
        )
    }
}

impl std::error::Error for SpotOutOfRangeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthMismatchError {
    expected: usize,
    actual: usize,
}

impl LengthMismatchError {
    #[inline]
    pub fn new(expected: usize, actual: usize) -> Self {
        Self { expected, actual }
    }

    #[inline]
    pub fn expected(&self) -> usize {
        self.expected
    }

    #[inline]
    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl Display for LengthMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Expected exactly {} numbers but got {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for LengthMismatchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalReversedError {
    car: CarIndex,
    start: usize,
    end: usize,
}

impl IntervalReversedError {
    #[inline]
    pub fn new(car: CarIndex, start: usize, end: usize) -> Self {
        Self { car, start, end }
    }

    #[inline]
    pub fn car(&self) -> CarIndex {
        self.car
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }
}

impl Display for IntervalReversedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Car {} has interval end {} before its start {}",
            self.car, self.end, self.start
        )
    }
}

impl std::error::Error for IntervalReversedError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalTooWideError {
    car: CarIndex,
    interval: Interval<usize>,
    max_width: usize,
}

impl IntervalTooWideError {
    #[inline]
    pub fn new(car: CarIndex, interval: Interval<usize>, max_width: usize) -> Self {
        Self {
            car,
            interval,
            max_width,
        }
    }

    #[inline]
    pub fn car(&self) -> CarIndex {
        self.car
    }

    #[inline]
    pub fn interval(&self) -> Interval<usize> {
        self.interval
    }

    #[inline]
    pub fn max_width(&self) -> usize {
        self.max_width
    }
}

impl Display for IntervalTooWideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Car {} has interval {} wider than {}",
            self.car, self.interval, self.max_width
        )
    }
}

impl std::error::Error for IntervalTooWideError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaplesReachOutOfRangeError {
    k: usize,
    street: StreetLength,
}

impl NaplesReachOutOfRangeError {
    #[inline]
    pub fn new(k: usize, street: StreetLength) -> Self {
        Self { k, street }
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn street(&self) -> StreetLength {
        self.street
    }
}

impl Display for NaplesReachOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "k = {} must satisfy 1 <= k < {}",
            self.k,
            self.street.value()
        )
    }
}

impl std::error::Error for NaplesReachOutOfRangeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceError {
    /// A preferred spot lies outside `[1, n]`.
    SpotOutOfRange(SpotOutOfRangeError),
    /// The caller asked for a specific number of cars and got a different one.
    LengthMismatch(LengthMismatchError),
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceError::SpotOutOfRange(e) => write!(f, "{}", e),
            PreferenceError::LengthMismatch(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PreferenceError {}

impl From<SpotOutOfRangeError> for PreferenceError {
    fn from(e: SpotOutOfRangeError) -> Self {
        PreferenceError::SpotOutOfRange(e)
    }
}

impl From<LengthMismatchError> for PreferenceError {
    fn from(e: LengthMismatchError) -> Self {
        PreferenceError::LengthMismatch(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalError {
    /// `alpha` and `beta` differ in length.
    LengthMismatch(LengthMismatchError),
    /// A bound lies outside `[1, n]`.
    SpotOutOfRange(SpotOutOfRangeError),
    /// `beta_i < alpha_i`.
    Reversed(IntervalReversedError),
    /// A unit interval spans more than one step.
    TooWide(IntervalTooWideError),
}

impl Display for IntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntervalError::LengthMismatch(e) => write!(f, "{}", e),
            IntervalError::SpotOutOfRange(e) => write!(f, "{}", e),
            IntervalError::Reversed(e) => write!(f, "{}", e),
            IntervalError::TooWide(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for IntervalError {}

impl From<LengthMismatchError> for IntervalError {
    fn from(e: LengthMismatchError) -> Self {
        IntervalError::LengthMismatch(e)
    }
}

impl From<SpotOutOfRangeError> for IntervalError {
    fn from(e: SpotOutOfRangeError) -> Self {
        IntervalError::SpotOutOfRange(e)
    }
}

impl From<IntervalReversedError> for IntervalError {
    fn from(e: IntervalReversedError) -> Self {
        IntervalError::Reversed(e)
    }
}

impl From<IntervalTooWideError> for IntervalError {
    fn from(e: IntervalTooWideError) -> Self {
        IntervalError::TooWide(e)
    }
}

impl From<PreferenceError> for IntervalError {
    fn from(e: PreferenceError) -> Self {
        match e {
            PreferenceError::SpotOutOfRange(e) => IntervalError::SpotOutOfRange(e),
            PreferenceError::LengthMismatch(e) => IntervalError::LengthMismatch(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseTupleError {
    /// Nothing but parentheses and whitespace.
    Empty,
    /// A comma separated entry is not a non-negative integer.
    InvalidNumber(String),
}

impl Display for ParseTupleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseTupleError::Empty => write!(f, "Invalid input format: the tuple is empty"),
            ParseTupleError::InvalidNumber(token) => write!(
                f,
                "Invalid input format: '{}' is not a number. Please enter numbers separated by commas",
                token
            ),
        }
    }
}

impl std::error::Error for ParseTupleError {}
