use super::assemble::assemble_table;
use super::extract::{ExtractionSummary, ExtractionTask};
use crate::common::constants::TASKS_PER_PAIR;
use crate::domain::{FileStage, FrameCounts, InputArtifacts, Metric, WhamError, WhamResult};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::thread;
use tracing::{debug, warn};

/// Sliding window of size two: `[a, b, c]` gives `(a, b)` and `(b, c)`.
/// Interior items appear in two pairs.
pub fn adjacent_pairs<T: Clone>(items: &[T]) -> Vec<(T, T)> {
    items
        .windows(2)
        .map(|window| (window[0].clone(), window[1].clone()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub stage: FileStage,
    pub radius_lines: usize,
    pub potential_lines: usize,
    pub table_rows: Option<usize>,
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn is_final(&self) -> bool {
        self.stage == FileStage::Final
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairOutcome {
    pub first: FileOutcome,
    pub second: FileOutcome,
}

/// Runs every task on its own scoped thread and waits for all of them.
/// Results come back in task order; the first failure wins.
pub fn run_extraction_group(tasks: &[ExtractionTask]) -> WhamResult<Vec<ExtractionSummary>> {
    let results = thread::scope(|scope| {
        let handles = tasks
            .iter()
            .map(|task| (task, scope.spawn(move || task.run())))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|(task, handle)| {
                handle.join().unwrap_or_else(|_| {
                    Err(WhamError::computation(
                        "RUN.EXTRACT_TASK_PANIC",
                        format!(
                            "{} extraction for '{}' panicked",
                            task.metric,
                            task.input.display()
                        ),
                    ))
                })
            })
            .collect::<Vec<_>>()
    });

    results.into_iter().collect()
}

/// Extracts both columns of both files concurrently, then assembles each
/// file's table. Extraction failures abort; assembly failures are recorded.
pub fn process_pair(
    first: &Path,
    second: &Path,
    frame_index: &Path,
    counts: &FrameCounts,
) -> WhamResult<PairOutcome> {
    let first_artifacts = InputArtifacts::for_input(first);
    let second_artifacts = InputArtifacts::for_input(second);

    let mut tasks = Vec::with_capacity(TASKS_PER_PAIR);
    for artifacts in [&first_artifacts, &second_artifacts] {
        for metric in Metric::ALL {
            tasks.push(ExtractionTask::new(artifacts, metric));
        }
    }
    let summaries = run_extraction_group(&tasks)?;
    debug!(
        first = %first.display(),
        second = %second.display(),
        tasks = summaries.len(),
        "extraction group finished"
    );

    let (first_columns, second_columns) = summaries.split_at(Metric::ALL.len());
    Ok(PairOutcome {
        first: assemble_file(&first_artifacts, first_columns, frame_index, counts),
        second: assemble_file(&second_artifacts, second_columns, frame_index, counts),
    })
}

fn assemble_file(
    artifacts: &InputArtifacts,
    columns: &[ExtractionSummary],
    frame_index: &Path,
    counts: &FrameCounts,
) -> FileOutcome {
    let matched = |metric: Metric| {
        columns
            .iter()
            .find(|summary| summary.metric == metric)
            .map_or(0, |summary| summary.matched_lines)
    };
    let mut outcome = FileOutcome {
        input: artifacts.input.clone(),
        stage: FileStage::Extracted,
        radius_lines: matched(Metric::Radius),
        potential_lines: matched(Metric::Potential),
        table_rows: None,
        error: None,
    };

    match assemble_table(artifacts, frame_index, counts) {
        Ok(assembly) => {
            outcome.stage = FileStage::Final;
            outcome.table_rows = Some(assembly.table_rows);
        }
        Err(failure) => {
            warn!(
                input = %artifacts.input.display(),
                stage = %failure.reached,
                error = %failure.error,
                "table assembly failed"
            );
            outcome.stage = failure.reached;
            outcome.error = Some(failure.error.diagnostic_line());
        }
    }
    outcome
}
