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

use crate::config::ReplayConfigBuildError;
use park_alloc_model::err::{
    IntervalError, LengthMismatchError, NaplesReachOutOfRangeError, ParseTupleError,
    PreferenceError,
};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarLimitExceededError {
    cars: usize,
    max_cars: usize,
}

impl CarLimitExceededError {
    #[inline]
    pub fn new(cars: usize, max_cars: usize) -> Self {
        Self { cars, max_cars }
    }

    #[inline]
    pub fn cars(&self) -> usize {
        self.cars
    }

    #[inline]
    pub fn max_cars(&self) -> usize {
        self.max_cars
    }
}

impl Display for CarLimitExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} cars requested but at most {} are supported",
            self.cars, self.max_cars
        )
    }
}

impl std::error::Error for CarLimitExceededError {}

/// Everything that ends a command before or while its result is printed.
#[derive(Debug)]
pub enum CliError {
    Config(ReplayConfigBuildError),
    Parse(ParseTupleError),
    Preference(PreferenceError),
    Interval(IntervalError),
    NaplesReach(NaplesReachOutOfRangeError),
    TooManyCars(CarLimitExceededError),
    /// `unit-interval` got neither `--prefs` nor both bounds.
    MissingUnitIntervalInput,
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Parse(e) => write!(f, "{}", e),
            CliError::Preference(e) => write!(f, "{}", e),
            CliError::Interval(e) => write!(f, "{}", e),
            CliError::NaplesReach(e) => write!(f, "{}", e),
            CliError::TooManyCars(e) => write!(f, "{}", e),
            CliError::MissingUnitIntervalInput => write!(
                f,
                "unit-interval needs either --prefs or both --alpha and --beta"
            ),
            CliError::Io(e) => write!(f, "Failed to write output: {}", e),
            CliError::Json(e) => write!(f, "Failed to encode report: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ReplayConfigBuildError> for CliError {
    fn from(e: ReplayConfigBuildError) -> Self {
        CliError::Config(e)
    }
}

impl From<ParseTupleError> for CliError {
    fn from(e: ParseTupleError) -> Self {
        CliError::Parse(e)
    }
}

impl From<PreferenceError> for CliError {
    fn from(e: PreferenceError) -> Self {
        CliError::Preference(e)
    }
}

impl From<IntervalError> for CliError {
    fn from(e: IntervalError) -> Self {
        CliError::Interval(e)
    }
}

impl From<LengthMismatchError> for CliError {
    fn from(e: LengthMismatchError) -> Self {
        CliError::Interval(e.into())
    }
}

impl From<NaplesReachOutOfRangeError> for CliError {
    fn from(e: NaplesReachOutOfRangeError) -> Self {
        CliError::NaplesReach(e)
    }
}

impl From<CarLimitExceededError> for CliError {
    fn from(e: CarLimitExceededError) -> Self {
        CliError::TooManyCars(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_limit_message() {
        let e = CarLimitExceededError::new(12, 10);
        assert_eq!(e.to_string(), "12 cars requested but at most 10 are supported");
    }

    #[test]
    fn test_cli_error_forwards_inner_message() {
        let inner = ParseTupleError::InvalidNumber("a".to_string());
        let e: CliError = inner.clone().into();
        assert_eq!(e.to_string(), inner.to_string());
    }

    #[test]
    fn test_length_mismatch_becomes_interval_error() {
        let e: CliError = LengthMismatchError::new(3, 2).into();
        assert!(matches!(
            e,
            CliError::Interval(IntervalError::LengthMismatch(_))
        ));
    }
}
