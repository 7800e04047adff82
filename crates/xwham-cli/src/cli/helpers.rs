use super::CliError;
use anyhow::Context;
use std::io::{BufRead, Write};
use xwham_core::domain::WhamError;

pub(super) const TOTAL_TIME_LABEL: &str = "Total time per simulation (in fs)";
pub(super) const TIME_STEP_LABEL: &str = "Time-step size (in fs)";
pub(super) const EQUILIBRATION_LABEL: &str = "Equilibration time (in fs)";

/// Writes `<label>: ` without a newline and reads one line of operator input.
pub(super) fn prompt_line<R, W>(input: &mut R, output: &mut W, label: &str) -> Result<String, CliError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}: ", label).context("failed to write prompt")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("failed to read value for '{}'", label))?;
    if read == 0 {
        return Err(CliError::Compute(WhamError::input_validation(
            "INPUT.PROMPT_EOF",
            format!("no value supplied for '{}'", label),
        )));
    }
    Ok(line)
}

pub(super) fn parse_integer(raw: &str, label: &str) -> Result<i64, WhamError> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|_| {
        WhamError::input_validation(
            "INPUT.PROMPT_INTEGER",
            format!("'{}' expects an integer, got '{}'", label, trimmed),
        )
    })
}

pub(super) fn parse_decimal(raw: &str, label: &str) -> Result<f64, WhamError> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|_| {
        WhamError::input_validation(
            "INPUT.PROMPT_DECIMAL",
            format!("'{}' expects a number, got '{}'", label, trimmed),
        )
    })
}
