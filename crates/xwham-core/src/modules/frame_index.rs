use crate::domain::{FrameCounts, WhamError, WhamResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `1..=production_frames`, one per line, replacing any existing file.
/// Returns the number of lines written.
pub fn write_frame_index(path: &Path, counts: &FrameCounts) -> WhamResult<u64> {
    let rows = counts.production_frames();
    let file = File::create(path).map_err(|source| frame_index_error(path, source))?;
    let mut writer = BufWriter::new(file);

    for frame in 1..=rows {
        writeln!(writer, "{}", frame).map_err(|source| frame_index_error(path, source))?;
    }
    writer
        .flush()
        .map_err(|source| frame_index_error(path, source))?;

    Ok(rows)
}

fn frame_index_error(path: &Path, source: std::io::Error) -> WhamError {
    WhamError::io_system(
        "IO.FRAME_INDEX_WRITE",
        format!(
            "failed to write frame index '{}': {}",
            path.display(),
            source
        ),
    )
}
