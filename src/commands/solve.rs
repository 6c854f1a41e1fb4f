//! The interactive session: title, prompt/read loop, solve, report.

use crate::config::RunConfig;
use crate::core::Outcome;
use crate::io::{create_writer, prompt_equation, CoefficientReader, Report};
use crate::solver::solve;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

pub const TITLE: &str = "Square equation solver.";

/// Run one full session against the given streams.
///
/// Input exhaustion surfaces as an [`InputError::Exhausted`] inside the
/// returned error so the caller can pick the exit status.
///
/// [`InputError::Exhausted`]: crate::errors::InputError::Exhausted
pub fn run_session<R: BufRead, W: Write>(
    config: &RunConfig,
    input: R,
    mut out: W,
) -> Result<Outcome> {
    if config.show_title {
        writeln!(out, "{}\n", TITLE)?;
    }

    let mut reader = CoefficientReader::new(input);
    let equation = prompt_equation(&mut reader, &mut out, config.show_prompts)?;

    let outcome = solve(&equation);
    info!(%equation, kind = %outcome.kind(), "solved");

    let report = Report::new(equation, &outcome);
    create_writer(config.format, &mut out).write_report(&report)?;
    Ok(outcome)
}
