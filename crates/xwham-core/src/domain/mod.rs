pub mod errors;

pub use errors::{WhamError, WhamErrorCategory, WhamResult};

use serde::Serialize;
use std::ffi::OsString;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Durations collected from the operator, in femtoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunParameters {
    pub total_duration: f64,
    pub step_size: f64,
    pub equil_duration: f64,
}

impl RunParameters {
    pub fn new(total_duration: f64, step_size: f64, equil_duration: f64) -> Self {
        Self {
            total_duration,
            step_size,
            equil_duration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameCounts {
    pub total_frames: i64,
    pub equil_frames: i64,
}

impl FrameCounts {
    pub fn new(total_frames: i64, equil_frames: i64) -> Self {
        Self {
            total_frames,
            equil_frames,
        }
    }

    /// Number of rows in the frame index; zero when equilibration covers the run.
    pub fn production_frames(&self) -> u64 {
        let span = i128::from(self.total_frames) - i128::from(self.equil_frames);
        u64::try_from(span.max(0)).unwrap_or(u64::MAX)
    }

    /// Last line removed from each joined table before the index is prepended.
    pub fn trim_through_line(&self) -> i64 {
        self.equil_frames.saturating_add(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Radius,
    Potential,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Radius, Metric::Potential];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Radius => "radius",
            Self::Potential => "potential",
        }
    }

    pub const fn marker(self) -> &'static [u8] {
        match self {
            Self::Radius => b"Radius",
            Self::Potential => b"POT  ENERGY",
        }
    }

    /// Half-open byte window sliced out of every matching line.
    pub const fn window(self) -> (usize, usize) {
        match self {
            Self::Radius => (30, 48),
            Self::Potential => (25, 45),
        }
    }

    pub const fn appends_newline(self) -> bool {
        matches!(self, Self::Potential)
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Radius => "rad",
            Self::Potential => "pot",
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStage {
    Raw,
    Extracted,
    Joined,
    Trimmed,
    Final,
}

impl FileStage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Extracted => "extracted",
            Self::Joined => "joined",
            Self::Trimmed => "trimmed",
            Self::Final => "final",
        }
    }
}

impl Display for FileStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Derived artifact paths for one input log. Each suffix is appended to the
/// full file name, so `run.log` yields `run.log.rad`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputArtifacts {
    pub input: PathBuf,
    pub radius: PathBuf,
    pub potential: PathBuf,
    pub joined: PathBuf,
    pub table: PathBuf,
}

impl InputArtifacts {
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        Self {
            radius: with_suffix(&input, Metric::Radius.suffix()),
            potential: with_suffix(&input, Metric::Potential.suffix()),
            joined: with_suffix(&input, "tmp"),
            table: with_suffix(&input, "wham"),
            input,
        }
    }

    pub fn column(&self, metric: Metric) -> &Path {
        match metric {
            Metric::Radius => &self.radius,
            Metric::Potential => &self.potential,
        }
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}
