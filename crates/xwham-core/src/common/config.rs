use super::constants::FRAME_INDEX_FILE;
use crate::domain::RunParameters;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    pub working_dir: PathBuf,
    pub parameters: RunParameters,
    /// Glob patterns matched against input file names; matches are skipped.
    pub ignore_patterns: Vec<String>,
    /// Sort inputs by file name instead of keeping directory listing order.
    pub sorted: bool,
    pub report_path: Option<PathBuf>,
}

impl BatchConfig {
    pub fn new(working_dir: impl Into<PathBuf>, parameters: RunParameters) -> Self {
        Self {
            working_dir: working_dir.into(),
            parameters,
            ignore_patterns: Vec::new(),
            sorted: false,
            report_path: None,
        }
    }

    pub fn frame_index_path(&self) -> PathBuf {
        self.working_dir.join(FRAME_INDEX_FILE)
    }

    /// Relative report paths are resolved against the working directory.
    pub fn resolved_report_path(&self) -> Option<PathBuf> {
        self.report_path
            .as_deref()
            .map(|path| resolve_against(&self.working_dir, path))
    }
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
