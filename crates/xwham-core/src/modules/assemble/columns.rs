use crate::common::constants::JOIN_DELIMITER;
use crate::domain::{WhamError, WhamResult};
use std::fs;
use std::path::Path;

/// Line `i` of `output` is line `i` of every input joined by a tab. Stops at
/// the shortest input. Returns the number of rows written.
pub fn paste_columns<P: AsRef<Path>>(inputs: &[P], output: &Path) -> WhamResult<usize> {
    let sources = inputs
        .iter()
        .map(|path| read_table(path.as_ref()))
        .collect::<WhamResult<Vec<_>>>()?;
    let columns = sources
        .iter()
        .map(|bytes| split_lines(bytes))
        .collect::<Vec<_>>();
    let rows = columns.iter().map(Vec::len).min().unwrap_or(0);

    let mut joined = Vec::new();
    for row in 0..rows {
        for (index, column) in columns.iter().enumerate() {
            if index > 0 {
                joined.push(JOIN_DELIMITER);
            }
            joined.extend_from_slice(column[row]);
        }
        joined.push(b'\n');
    }

    fs::write(output, joined).map_err(|source| {
        WhamError::io_system(
            "IO.JOIN_WRITE",
            format!("failed to write joined table '{}': {}", output.display(), source),
        )
    })?;
    Ok(rows)
}

/// Removes lines `first..=last` (1-based) from `path` in place. A `last`
/// before `first` removes only line `first`; a negative `last` is not an
/// address and leaves the file untouched. Returns the remaining line count.
pub fn delete_line_range(path: &Path, first: i64, last: i64) -> WhamResult<usize> {
    if first < 1 || last < 0 {
        return Err(WhamError::input_validation(
            "INPUT.TRIM_RANGE",
            format!("line range {},{} is not addressable", first, last),
        ));
    }
    let last = last.max(first);

    let bytes = read_table(path)?;
    let mut kept = Vec::with_capacity(bytes.len());
    let mut remaining = 0;
    for (index, line) in bytes.split_inclusive(|byte| *byte == b'\n').enumerate() {
        let number = index as i64 + 1;
        if (first..=last).contains(&number) {
            continue;
        }
        kept.extend_from_slice(line);
        remaining += 1;
    }

    fs::write(path, kept).map_err(|source| {
        WhamError::io_system(
            "IO.TRIM_WRITE",
            format!("failed to rewrite trimmed table '{}': {}", path.display(), source),
        )
    })?;
    Ok(remaining)
}

fn read_table(path: &Path) -> WhamResult<Vec<u8>> {
    fs::read(path).map_err(|source| {
        WhamError::io_system(
            "IO.TABLE_READ",
            format!("failed to read table '{}': {}", path.display(), source),
        )
    })
}

/// Lines without their terminators; a trailing unterminated fragment counts.
fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines = bytes.split(|byte| *byte == b'\n').collect::<Vec<_>>();
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        lines.pop();
    }
    lines
}
