use super::CliError;
use super::helpers::{
    EQUILIBRATION_LABEL, TIME_STEP_LABEL, TOTAL_TIME_LABEL, parse_decimal, parse_integer,
    prompt_line,
};
use anyhow::Context;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use xwham_core::common::config::BatchConfig;
use xwham_core::domain::RunParameters;
use xwham_core::modules::{BatchRunner, render_human_summary, write_report};

#[derive(clap::Args)]
pub(super) struct BatchArgs {
    /// Directory holding the simulation logs
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Total time per simulation in fs; prompted for when omitted
    #[arg(long, value_name = "FS", allow_negative_numbers = true)]
    total_time: Option<i64>,

    /// Time-step size in fs; prompted for when omitted
    #[arg(long, value_name = "FS", allow_negative_numbers = true)]
    time_step: Option<f64>,

    /// Equilibration time in fs; prompted for when omitted
    #[arg(long, value_name = "FS", allow_negative_numbers = true)]
    equilibration: Option<i64>,

    /// Skip input files whose name matches this glob (repeatable)
    #[arg(long = "ignore", value_name = "GLOB")]
    ignore: Vec<String>,

    /// Pair inputs in file-name order instead of directory listing order
    #[arg(long)]
    sorted: bool,

    /// Write a JSON run report; relative paths resolve against --dir
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Log pair progress to stderr
    #[arg(short, long)]
    pub(super) verbose: bool,
}

pub(super) fn run_batch_command<R, W>(
    args: BatchArgs,
    input: &mut R,
    output: &mut W,
) -> Result<i32, CliError>
where
    R: BufRead,
    W: Write,
{
    let parameters = collect_parameters(&args, input, output)?;

    let mut config = BatchConfig::new(args.dir, parameters);
    config.ignore_patterns = args.ignore;
    config.sorted = args.sorted;
    config.report_path = args.report;

    let runner = BatchRunner::new(config)?;
    let counts = runner.counts();
    writeln!(output, "{}", counts.total_frames).context("failed to write frame counts")?;
    writeln!(output, "{}", counts.equil_frames).context("failed to write frame counts")?;

    let report = runner.run()?;
    writeln!(output, "{}", render_human_summary(&report)).context("failed to write summary")?;

    if let Some(path) = runner.config().resolved_report_path() {
        write_report(&path, &report)?;
        info!(path = %path.display(), "wrote run report");
        writeln!(output, "JSON report: {}", path.display()).context("failed to write summary")?;
    }

    Ok(0)
}

/// Flags win; anything missing is prompted for in the fixed order, and each
/// answer is validated before the next prompt.
fn collect_parameters<R, W>(
    args: &BatchArgs,
    input: &mut R,
    output: &mut W,
) -> Result<RunParameters, CliError>
where
    R: BufRead,
    W: Write,
{
    let total_time = match args.total_time {
        Some(value) => value,
        None => parse_integer(&prompt_line(input, output, TOTAL_TIME_LABEL)?, TOTAL_TIME_LABEL)?,
    };
    let time_step = match args.time_step {
        Some(value) => value,
        None => parse_decimal(&prompt_line(input, output, TIME_STEP_LABEL)?, TIME_STEP_LABEL)?,
    };
    let equilibration = match args.equilibration {
        Some(value) => value,
        None => parse_integer(
            &prompt_line(input, output, EQUILIBRATION_LABEL)?,
            EQUILIBRATION_LABEL,
        )?,
    };

    Ok(RunParameters::new(
        total_time as f64,
        time_step,
        equilibration as f64,
    ))
}
