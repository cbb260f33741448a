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

mod cli;
mod config;
mod error;
mod report;

use crate::{
    cli::{Cli, Command},
    config::{OutputFormat, ReplayConfig},
    error::CliError,
    report::RunReport,
};
use clap::Parser;
use park_alloc_model::{
    err::LengthMismatchError,
    frame::Trace,
    input::{IntervalList, NaplesReach, PreferenceList, UnitIntervalList},
    outcome::RuleKind,
    parse::parse_tuple,
};
use park_alloc_sim::{
    simulate_classical, simulate_interval, simulate_k_naples, simulate_unit_interval,
};
use std::{io::Write, process::ExitCode};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_prefs(input: &str, config: &ReplayConfig) -> Result<PreferenceList, CliError> {
    let values = parse_tuple(input)?;
    config.check_car_count(values.len())?;
    let prefs = match config.expected_cars() {
        Some(cars) => PreferenceList::with_cars(&values, cars)?,
        None => PreferenceList::new(&values)?,
    };
    Ok(prefs)
}

fn read_bounds(
    alpha: &str,
    beta: &str,
    config: &ReplayConfig,
) -> Result<(Vec<usize>, Vec<usize>), CliError> {
    let alpha = parse_tuple(alpha)?;
    let beta = parse_tuple(beta)?;
    config.check_car_count(alpha.len())?;
    if let Some(cars) = config.expected_cars()
        && alpha.len() != cars
    {
        return Err(LengthMismatchError::new(cars, alpha.len()).into());
    }
    Ok((alpha, beta))
}

/// Validates the input of `command` and runs the matching simulation.
fn simulate(command: &Command, config: &ReplayConfig) -> Result<(RuleKind, Trace), CliError> {
    let run = match command {
        Command::Classical { prefs } => {
            let prefs = read_prefs(prefs, config)?;
            (RuleKind::Classical, simulate_classical(&prefs))
        }
        Command::KNaples { prefs, k } => {
            let prefs = read_prefs(prefs, config)?;
            let k = NaplesReach::new(*k, prefs.street())?;
            (
                RuleKind::KNaples { k: k.value() },
                simulate_k_naples(&prefs, k),
            )
        }
        Command::Interval { alpha, beta } => {
            let (alpha, beta) = read_bounds(alpha, beta, config)?;
            let list = IntervalList::new(&alpha, &beta)?;
            (RuleKind::Interval, simulate_interval(&list))
        }
        Command::UnitInterval { prefs, alpha, beta } => {
            let bounds = alpha.as_deref().zip(beta.as_deref());
            let list = match (prefs, bounds) {
                (Some(prefs), _) => {
                    UnitIntervalList::from_preferences(&read_prefs(prefs, config)?)
                }
                (None, Some((alpha, beta))) => {
                    let (alpha, beta) = read_bounds(alpha, beta, config)?;
                    UnitIntervalList::new(&alpha, &beta)?
                }
                (None, None) => return Err(CliError::MissingUnitIntervalInput),
            };
            (RuleKind::UnitInterval, simulate_unit_interval(&list))
        }
    };
    Ok(run)
}

#[instrument(level = "info", skip_all, fields(format = %config.format()))]
fn run<W: Write>(command: &Command, config: &ReplayConfig, out: &mut W) -> Result<bool, CliError> {
    let (rule, trace) = simulate(command, config)?;
    info!(rule = %rule, frames = trace.len(), outcome = %trace.outcome(), "simulated");

    let report = RunReport::new(rule, &trace);
    match config.format() {
        OutputFormat::Text => report.write_text(out, config.frame_delay())?,
        OutputFormat::Json => report.write_json(out)?,
    }
    out.flush()?;
    Ok(report.is_valid())
}

fn main() -> ExitCode {
    enable_tracing();
    let cli = Cli::parse();

    let result = cli
        .replay_config()
        .map_err(CliError::from)
        .and_then(|config| run(&cli.command, &config, &mut std::io::stdout().lock()));

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            warn!(error = %e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
