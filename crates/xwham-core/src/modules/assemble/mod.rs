mod columns;

use crate::domain::{FileStage, FrameCounts, InputArtifacts, WhamError};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

pub use columns::{delete_line_range, paste_columns};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableAssembly {
    pub joined_rows: usize,
    pub trimmed_rows: usize,
    pub table_rows: usize,
}

/// The furthest stage a file reached before an assembly step failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyFailure {
    pub reached: FileStage,
    pub error: WhamError,
}

/// Joins a file's radius and potential columns, drops the equilibration
/// rows, then prepends the shared frame index as `<input>.wham`.
pub fn assemble_table(
    artifacts: &InputArtifacts,
    frame_index: &Path,
    counts: &FrameCounts,
) -> Result<TableAssembly, AssemblyFailure> {
    let joined_rows = paste_columns(&[&artifacts.radius, &artifacts.potential], &artifacts.joined)
        .map_err(|error| AssemblyFailure {
            reached: FileStage::Extracted,
            error,
        })?;
    debug!(table = %artifacts.joined.display(), joined_rows, "joined columns");

    let trimmed_rows = delete_line_range(&artifacts.joined, 1, counts.trim_through_line())
        .map_err(|error| AssemblyFailure {
            reached: FileStage::Joined,
            error,
        })?;
    debug!(table = %artifacts.joined.display(), trimmed_rows, "trimmed equilibration rows");

    let table_rows = paste_columns(&[frame_index, artifacts.joined.as_path()], &artifacts.table).map_err(
        |error| AssemblyFailure {
            reached: FileStage::Trimmed,
            error,
        },
    )?;
    debug!(table = %artifacts.table.display(), table_rows, "wrote final table");

    Ok(TableAssembly {
        joined_rows,
        trimmed_rows,
        table_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::assemble_table;
    use crate::domain::{FileStage, FrameCounts, InputArtifacts};
    use crate::modules::frame_index::write_frame_index;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builds_index_prefixed_table_after_trim() {
        let temp = TempDir::new().expect("tempdir should be created");
        let counts = FrameCounts::new(6, 1);
        let frame_index = temp.path().join("seq.out");
        write_frame_index(&frame_index, &counts).expect("index");

        let artifacts = InputArtifacts::for_input(temp.path().join("w1.log"));
        fs::write(&artifacts.radius, "r1\nr2\nr3\nr4\nr5\nr6\n").expect("radius");
        fs::write(&artifacts.potential, "p1\np2\np3\np4\np5\np6\n").expect("potential");

        let assembly = assemble_table(&artifacts, &frame_index, &counts).expect("assemble");

        assert_eq!(assembly.joined_rows, 6);
        assert_eq!(assembly.trimmed_rows, 4);
        assert_eq!(assembly.table_rows, 4);
        assert_eq!(
            fs::read_to_string(&artifacts.joined).expect("tmp"),
            "r3\tp3\nr4\tp4\nr5\tp5\nr6\tp6\n"
        );
        assert_eq!(
            fs::read_to_string(&artifacts.table).expect("wham"),
            "1\tr3\tp3\n2\tr4\tp4\n3\tr5\tp5\n4\tr6\tp6\n"
        );
    }

    #[test]
    fn missing_column_stops_at_extracted_stage() {
        let temp = TempDir::new().expect("tempdir should be created");
        let counts = FrameCounts::new(4, 1);
        let frame_index = temp.path().join("seq.out");
        write_frame_index(&frame_index, &counts).expect("index");
        let artifacts = InputArtifacts::for_input(temp.path().join("w1.log"));
        fs::write(&artifacts.radius, "r1\n").expect("radius");

        let failure = assemble_table(&artifacts, &frame_index, &counts)
            .expect_err("missing potential column should fail");

        assert_eq!(failure.reached, FileStage::Extracted);
        assert_eq!(failure.error.placeholder(), "IO.TABLE_READ");
        assert!(!artifacts.table.exists());
    }

    #[test]
    fn unaddressable_trim_stops_at_joined_stage() {
        let temp = TempDir::new().expect("tempdir should be created");
        let counts = FrameCounts::new(5, -2);
        let frame_index = temp.path().join("seq.out");
        write_frame_index(&frame_index, &counts).expect("index");
        let artifacts = InputArtifacts::for_input(temp.path().join("w1.log"));
        fs::write(&artifacts.radius, "r1\nr2\n").expect("radius");
        fs::write(&artifacts.potential, "p1\np2\n").expect("potential");

        let failure = assemble_table(&artifacts, &frame_index, &counts)
            .expect_err("negative end address should fail");

        assert_eq!(failure.reached, FileStage::Joined);
        assert_eq!(failure.error.placeholder(), "INPUT.TRIM_RANGE");
        assert_eq!(
            fs::read_to_string(&artifacts.joined).expect("tmp"),
            "r1\tp1\nr2\tp2\n"
        );
        assert!(!artifacts.table.exists());
    }

    #[test]
    fn missing_frame_index_stops_at_trimmed_stage() {
        let temp = TempDir::new().expect("tempdir should be created");
        let counts = FrameCounts::new(4, 0);
        let artifacts = InputArtifacts::for_input(temp.path().join("w1.log"));
        fs::write(&artifacts.radius, "r1\nr2\n").expect("radius");
        fs::write(&artifacts.potential, "p1\np2\n").expect("potential");

        let failure = assemble_table(&artifacts, &temp.path().join("seq.out"), &counts)
            .expect_err("missing frame index should fail");

        assert_eq!(failure.reached, FileStage::Trimmed);
        assert_eq!(
            fs::read_to_string(&artifacts.joined).expect("tmp"),
            "r2\tp2\n"
        );
    }
}
