use super::derive::derive_frame_counts;
use super::discovery::{InputFilter, discover_inputs};
use super::frame_index::write_frame_index;
use super::schedule::{PairOutcome, adjacent_pairs, process_pair};
use crate::common::config::BatchConfig;
use crate::domain::{FrameCounts, RunParameters, WhamResult};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub parameters: RunParameters,
    pub frame_counts: FrameCounts,
    pub frame_index: PathBuf,
    pub frame_index_rows: u64,
    pub inputs: Vec<PathBuf>,
    pub pairs: Vec<PairOutcome>,
}

impl BatchReport {
    pub fn failed_files(&self) -> usize {
        self.pairs
            .iter()
            .flat_map(|pair| [&pair.first, &pair.second])
            .filter(|file| !file.is_final())
            .count()
    }
}

/// Validated batch: frame counts are derived and ignore patterns compiled
/// before anything touches the working directory.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    config: BatchConfig,
    counts: FrameCounts,
    filter: InputFilter,
}

impl BatchRunner {
    pub fn new(config: BatchConfig) -> WhamResult<Self> {
        let counts = derive_frame_counts(&config.parameters)?;
        let filter = InputFilter::from_patterns(&config.ignore_patterns)?;
        Ok(Self {
            config,
            counts,
            filter,
        })
    }

    pub fn counts(&self) -> FrameCounts {
        self.counts
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Inputs are listed before the frame index is written, so a first run
    /// never treats `seq.out` as a log.
    pub fn run(&self) -> WhamResult<BatchReport> {
        let inputs = discover_inputs(&self.config.working_dir, &self.filter, self.config.sorted)?;
        info!(
            inputs = inputs.len(),
            dir = %self.config.working_dir.display(),
            "discovered input files"
        );

        let frame_index = self.config.frame_index_path();
        let frame_index_rows = write_frame_index(&frame_index, &self.counts)?;
        info!(rows = frame_index_rows, path = %frame_index.display(), "wrote frame index");

        let pairs = adjacent_pairs(&inputs);
        let mut outcomes = Vec::with_capacity(pairs.len());
        for (position, (first, second)) in pairs.iter().enumerate() {
            info!(
                pair = position + 1,
                of = pairs.len(),
                first = %first.display(),
                second = %second.display(),
                "processing pair"
            );
            outcomes.push(process_pair(first, second, &frame_index, &self.counts)?);
        }

        Ok(BatchReport {
            parameters: self.config.parameters,
            frame_counts: self.counts,
            frame_index,
            frame_index_rows,
            inputs,
            pairs: outcomes,
        })
    }
}

pub fn run_batch(config: &BatchConfig) -> WhamResult<BatchReport> {
    BatchRunner::new(config.clone())?.run()
}

pub fn render_human_summary(report: &BatchReport) -> String {
    let mut lines = vec![format!(
        "Frame index: {} rows ({} total frames, {} equilibration frames)",
        report.frame_index_rows, report.frame_counts.total_frames, report.frame_counts.equil_frames
    )];
    lines.push(format!(
        "Inputs: {}  Pairs processed: {}",
        report.inputs.len(),
        report.pairs.len()
    ));
    for (position, pair) in report.pairs.iter().enumerate() {
        for file in [&pair.first, &pair.second] {
            let status = match (&file.table_rows, &file.error) {
                (Some(rows), _) => format!("{} rows", rows),
                (None, Some(error)) => format!("stopped at {}: {}", file.stage, error),
                (None, None) => format!("stopped at {}", file.stage),
            };
            lines.push(format!(
                "  [{}] {} -> {}",
                position + 1,
                file.input.display(),
                status
            ));
        }
    }
    let failed = report.failed_files();
    if failed > 0 {
        lines.push(format!("Tables with assembly failures: {}", failed));
    }
    lines.join("\n")
}
