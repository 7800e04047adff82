use crate::domain::{WhamError, WhamResult};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// File-name filter built from `--ignore` patterns. Empty by default.
#[derive(Debug, Clone)]
pub struct InputFilter {
    ignored: GlobSet,
}

impl InputFilter {
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> WhamResult<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = Glob::new(pattern).map_err(|source| {
                WhamError::input_validation(
                    "INPUT.IGNORE_PATTERN",
                    format!("invalid ignore pattern '{}': {}", pattern, source),
                )
            })?;
            builder.add(glob);
        }
        let ignored = builder.build().map_err(|source| {
            WhamError::input_validation(
                "INPUT.IGNORE_PATTERN",
                format!("failed to compile ignore patterns: {}", source),
            )
        })?;
        Ok(Self { ignored })
    }

    pub fn allows(&self, file_name: &Path) -> bool {
        !self.ignored.is_match(file_name)
    }
}

impl Default for InputFilter {
    fn default() -> Self {
        Self {
            ignored: GlobSet::empty(),
        }
    }
}

/// Regular files directly inside `dir`, in directory listing order unless
/// `sorted`. Directories and symlinks are skipped.
pub fn discover_inputs(dir: &Path, filter: &InputFilter, sorted: bool) -> WhamResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| listing_error(dir, source))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| listing_error(dir, source))?;
        let file_type = entry
            .file_type()
            .map_err(|source| listing_error(dir, source))?;
        if !file_type.is_file() {
            continue;
        }
        if !filter.allows(Path::new(&entry.file_name())) {
            continue;
        }
        inputs.push(entry.path());
    }

    if sorted {
        inputs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(inputs)
}

fn listing_error(dir: &Path, source: std::io::Error) -> WhamError {
    WhamError::io_system(
        "IO.INPUT_LISTING",
        format!("failed to list inputs in '{}': {}", dir.display(), source),
    )
}
