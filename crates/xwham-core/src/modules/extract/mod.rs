mod window;

use crate::domain::{InputArtifacts, Metric, WhamError, WhamResult};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub(crate) use window::{byte_window, contains_marker};

/// One column extraction: a single log scanned for a single metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionTask {
    pub input: PathBuf,
    pub metric: Metric,
    pub output: PathBuf,
}

impl ExtractionTask {
    pub fn new(artifacts: &InputArtifacts, metric: Metric) -> Self {
        Self {
            input: artifacts.input.clone(),
            metric,
            output: artifacts.column(metric).to_path_buf(),
        }
    }

    pub fn run(&self) -> WhamResult<ExtractionSummary> {
        let matched_lines = extract_column(&self.input, &self.output, self.metric)?;
        debug!(
            input = %self.input.display(),
            metric = %self.metric,
            matched_lines,
            "extracted column"
        );
        Ok(ExtractionSummary {
            metric: self.metric,
            output: self.output.clone(),
            matched_lines,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    pub metric: Metric,
    pub output: PathBuf,
    pub matched_lines: usize,
}

/// Copies the metric's byte window out of every matching line of `input`
/// into `output`, in file order. Returns the number of matching lines.
///
/// The output is created before the input is opened, so it exists (empty)
/// even when the input cannot be read.
pub fn extract_column(input: &Path, output: &Path, metric: Metric) -> WhamResult<usize> {
    let output_file = File::create(output).map_err(|source| {
        WhamError::io_system(
            "IO.EXTRACT_OUTPUT_WRITE",
            format!(
                "failed to create {} column '{}': {}",
                metric,
                output.display(),
                source
            ),
        )
    })?;
    let mut writer = BufWriter::new(output_file);

    let input_file = File::open(input).map_err(|source| read_error(input, source))?;
    let mut reader = BufReader::new(input_file);

    let marker = metric.marker();
    let (start, end) = metric.window();
    let mut line = Vec::new();
    let mut matched_lines = 0;

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| read_error(input, source))?;
        if read == 0 {
            break;
        }
        if !contains_marker(&line, marker) {
            continue;
        }

        writer
            .write_all(byte_window(&line, start, end))
            .map_err(|source| write_error(output, source))?;
        if metric.appends_newline() {
            writer
                .write_all(b"\n")
                .map_err(|source| write_error(output, source))?;
        }
        matched_lines += 1;
    }

    writer.flush().map_err(|source| write_error(output, source))?;
    Ok(matched_lines)
}

fn read_error(input: &Path, source: std::io::Error) -> WhamError {
    WhamError::io_system(
        "IO.EXTRACT_INPUT_READ",
        format!("failed to read log '{}': {}", input.display(), source),
    )
}

fn write_error(output: &Path, source: std::io::Error) -> WhamError {
    WhamError::io_system(
        "IO.EXTRACT_OUTPUT_WRITE",
        format!("failed to write column '{}': {}", output.display(), source),
    )
}

#[cfg(test)]
mod tests {
    use super::{ExtractionTask, extract_column};
    use crate::domain::{InputArtifacts, Metric};
    use std::fs;
    use tempfile::TempDir;

    fn radius_line(value: &str) -> String {
        format!("{:<30}{:>18}  nm\n", " SPHERE  Radius", value)
    }

    #[test]
    fn radius_emits_exact_window_without_newline() {
        let temp = TempDir::new().expect("tempdir should be created");
        let input = temp.path().join("run.log");
        let output = temp.path().join("run.log.rad");
        let log = format!(
            "header line\n{}NSTEP = 1\n{}",
            radius_line("1.250000"),
            radius_line("1.375000")
        );
        fs::write(&input, log).expect("log should be staged");

        let matched = extract_column(&input, &output, Metric::Radius).expect("extract");

        assert_eq!(matched, 2);
        let expected = format!("{:>18}{:>18}", "1.250000", "1.375000");
        assert_eq!(fs::read_to_string(&output).expect("column"), expected);
    }

    #[test]
    fn radius_window_keeps_terminator_on_short_lines() {
        let temp = TempDir::new().expect("tempdir should be created");
        let input = temp.path().join("run.log");
        let output = temp.path().join("run.log.rad");
        let short = format!("{:<30}{:>17}\n", " SPHERE  Radius", "9.5");
        fs::write(&input, format!("{short}{short}")).expect("log should be staged");

        extract_column(&input, &output, Metric::Radius).expect("extract");

        let expected = format!("{:>17}\n{:>17}\n", "9.5", "9.5");
        assert_eq!(fs::read_to_string(&output).expect("column"), expected);
    }

    #[test]
    fn potential_appends_newline_per_match() {
        let temp = TempDir::new().expect("tempdir should be created");
        let input = temp.path().join("run.log");
        let output = temp.path().join("run.log.pot");
        let line = format!("{:<25}{:>20}   extra columns\n", " Etot  POT  ENERGY", "-1520.4471");
        fs::write(&input, format!("{line} POT ENERGY single space\n{line}"))
            .expect("log should be staged");

        let matched = extract_column(&input, &output, Metric::Potential).expect("extract");

        assert_eq!(matched, 2);
        let value = format!("{:>20}\n", "-1520.4471");
        assert_eq!(
            fs::read_to_string(&output).expect("column"),
            format!("{value}{value}")
        );
    }

    #[test]
    fn short_matching_lines_yield_partial_values() {
        let temp = TempDir::new().expect("tempdir should be created");
        let input = temp.path().join("run.log");
        let output = temp.path().join("run.log.pot");
        fs::write(&input, "POT  ENERGY\n0123456789012345678901234567\n POT  ENERGY abcdefghijklmn\n")
            .expect("log should be staged");

        extract_column(&input, &output, Metric::Potential).expect("extract");

        // The first match is shorter than the window; the second ends inside it.
        assert_eq!(fs::read_to_string(&output).expect("column"), "\nmn\n\n");
    }

    #[test]
    fn no_matches_creates_empty_column() {
        let temp = TempDir::new().expect("tempdir should be created");
        let input = temp.path().join("run.log");
        let output = temp.path().join("run.log.pot");
        fs::write(&input, "nothing to see\nRadius only\n").expect("log should be staged");

        let matched = extract_column(&input, &output, Metric::Potential).expect("extract");

        assert_eq!(matched, 0);
        assert_eq!(fs::read(&output).expect("column should exist"), b"");
    }

    #[test]
    fn missing_input_is_io_error_but_output_exists() {
        let temp = TempDir::new().expect("tempdir should be created");
        let artifacts = InputArtifacts::for_input(temp.path().join("absent.log"));
        let task = ExtractionTask::new(&artifacts, Metric::Radius);

        let error = task.run().expect_err("missing input should fail");

        assert_eq!(error.placeholder(), "IO.EXTRACT_INPUT_READ");
        assert_eq!(error.exit_code(), 3);
        assert!(artifacts.radius.is_file());
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let temp = TempDir::new().expect("tempdir should be created");
        let input = temp.path().join("run.log");
        let output = temp.path().join("run.log.rad");
        let mut line = b"Radius".to_vec();
        line.resize(30, b' ');
        line.extend_from_slice(&[0xff, 0xfe, b'1', b'\n']);
        fs::write(&input, &line).expect("log should be staged");

        extract_column(&input, &output, Metric::Radius).expect("extract");

        assert_eq!(fs::read(&output).expect("column"), vec![0xff, 0xfe, b'1', b'\n']);
    }
}
