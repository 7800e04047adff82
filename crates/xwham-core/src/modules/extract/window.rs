/// True when `marker` occurs anywhere in `line`.
pub(crate) fn contains_marker(line: &[u8], marker: &[u8]) -> bool {
    if marker.is_empty() {
        return true;
    }
    line.windows(marker.len()).any(|candidate| candidate == marker)
}

/// Bytes `[start, end)` of `line`, clamped to the line length.
pub(crate) fn byte_window(line: &[u8], start: usize, end: usize) -> &[u8] {
    let end = end.min(line.len());
    let start = start.min(end);
    &line[start..end]
}
