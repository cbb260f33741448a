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

use crate::config::{OutputFormat, ReplayConfig, ReplayConfigBuildError, ReplayConfigBuilder};
use clap::{Parser, Subcommand};
use std::time::Duration;

/// Simulates parking functions car by car and prints every intermediate state.
#[derive(Debug, Parser)]
#[command(name = "park-alloc", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Number of cars the input must contain.
    #[arg(long, global = true, value_name = "N")]
    pub cars: Option<usize>,

    /// Milliseconds to wait between two printed frames.
    #[arg(
        long = "delay-ms",
        global = true,
        value_name = "MILLISECONDS",
        default_value_t = 0,
        value_parser = clap::value_parser!(u64).range(0..=60_000)
    )]
    pub delay_ms: u64,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Each car drives forward from its preferred spot.
    Classical {
        /// Preferred spots as a tuple, for example "(1, 1, 2)".
        #[arg(long, value_name = "TUPLE")]
        prefs: String,
    },
    /// Each car first backs up to k spots before driving forward.
    KNaples {
        #[arg(long, value_name = "TUPLE")]
        prefs: String,
        /// How many spots a car may look back, 1 <= k < n.
        #[arg(short, value_name = "K")]
        k: usize,
    },
    /// Each car parks in the first free spot of [alpha_i, beta_i].
    Interval {
        #[arg(long, value_name = "TUPLE")]
        alpha: String,
        #[arg(long, value_name = "TUPLE")]
        beta: String,
    },
    /// Each car tries alpha_i, then alpha_i + 1.
    UnitInterval {
        /// Preferences; the intervals are derived as [p_i, p_i + 1], the last car gets [p_n, p_n].
        #[arg(
            long,
            value_name = "TUPLE",
            conflicts_with_all = ["alpha", "beta"],
            required_unless_present = "alpha"
        )]
        prefs: Option<String>,
        #[arg(long, value_name = "TUPLE", requires = "beta")]
        alpha: Option<String>,
        #[arg(long, value_name = "TUPLE", requires = "alpha")]
        beta: Option<String>,
    },
}

impl Cli {
    pub fn replay_config(&self) -> Result<ReplayConfig, ReplayConfigBuildError> {
        ReplayConfigBuilder::new()
            .frame_delay(Duration::from_millis(self.delay_ms))
            .format(self.format)
            .expected_cars(self.cars)
            .build()
    }
}
