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

//! Replay settings of the command line front end.

use crate::error::CarLimitExceededError;
use clap::ValueEnum;
use std::{fmt::Display, time::Duration};

/// Largest street the front end accepts unless configured otherwise.
pub const DEFAULT_MAX_CARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per frame followed by the verdict.
    #[default]
    Text,
    /// A single JSON document with every frame.
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplayConfig {
    frame_delay: Duration,
    format: OutputFormat,
    max_cars: usize,
    expected_cars: Option<usize>,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            frame_delay: Duration::ZERO,
            format: OutputFormat::Text,
            max_cars: DEFAULT_MAX_CARS,
            expected_cars: None,
        }
    }
}

impl ReplayConfig {
    /// Pause between two printed frames.
    #[inline]
    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    #[inline]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    #[inline]
    pub fn max_cars(&self) -> usize {
        self.max_cars
    }

    /// The number of cars the input must have, if the user fixed one.
    #[inline]
    pub fn expected_cars(&self) -> Option<usize> {
        self.expected_cars
    }

    /// Rejects inputs with more cars than the configured maximum.
    #[inline]
    pub fn check_car_count(&self, cars: usize) -> Result<(), CarLimitExceededError> {
        if cars > self.max_cars {
            return Err(CarLimitExceededError::new(cars, self.max_cars));
        }
        Ok(())
    }
}

impl Display for ReplayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ReplayConfig(delay={}ms, format={}, max_cars={}",
            self.frame_delay.as_millis(),
            self.format,
            self.max_cars
        )?;
        if let Some(cars) = self.expected_cars {
            write!(f, ", cars={}", cars)?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayConfigBuildError {
    MaxCarsZero,
    ExpectedCarsZero,
    ExpectedCarsAboveLimit(CarLimitExceededError),
}

impl Display for ReplayConfigBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ReplayConfigBuildError::*;
        match self {
            MaxCarsZero => write!(f, "max_cars must be at least 1"),
            ExpectedCarsZero => write!(f, "The number of cars must be at least 1"),
            ExpectedCarsAboveLimit(e) => write!(
                f,
                "The number of cars {} exceeds the limit of {}",
                e.cars(),
                e.max_cars()
            ),
        }
    }
}

impl From<CarLimitExceededError> for ReplayConfigBuildError {
    fn from(err: CarLimitExceededError) -> Self {
        Self::ExpectedCarsAboveLimit(err)
    }
}

impl std::error::Error for ReplayConfigBuildError {}

/// Builder for [`ReplayConfig`].
#[derive(Debug, Clone, Default)]
pub struct ReplayConfigBuilder {
    frame_delay: Option<Duration>,
    format: Option<OutputFormat>,
    max_cars: Option<usize>,
    expected_cars: Option<usize>,
}

impl ReplayConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn frame_delay(mut self, v: Duration) -> Self {
        self.frame_delay = Some(v);
        self
    }

    #[inline]
    pub fn format(mut self, v: OutputFormat) -> Self {
        self.format = Some(v);
        self
    }

    #[inline]
    pub fn max_cars(mut self, v: usize) -> Self {
        self.max_cars = Some(v);
        self
    }

    #[inline]
    pub fn expected_cars(mut self, v: Option<usize>) -> Self {
        self.expected_cars = v;
        self
    }

    pub fn build(self) -> Result<ReplayConfig, ReplayConfigBuildError> {
        let defaults = ReplayConfig::default();
        let config = ReplayConfig {
            frame_delay: self.frame_delay.unwrap_or(defaults.frame_delay),
            format: self.format.unwrap_or(defaults.format),
            max_cars: self.max_cars.unwrap_or(defaults.max_cars),
            expected_cars: self.expected_cars,
        };

        if config.max_cars == 0 {
            return Err(ReplayConfigBuildError::MaxCarsZero);
        }
        if let Some(cars) = config.expected_cars {
            if cars == 0 {
                return Err(ReplayConfigBuildError::ExpectedCarsZero);
            }
            config.check_car_count(cars)?;
        }
        Ok(config)
    }
}
