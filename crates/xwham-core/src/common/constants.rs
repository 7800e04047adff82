/// Shared frame index written once per run and prepended to every table.
pub const FRAME_INDEX_FILE: &str = "seq.out";

/// Column separator used by every join.
pub const JOIN_DELIMITER: u8 = b'\t';

/// Extraction tasks launched per input pair (radius and potential for each file).
pub const TASKS_PER_PAIR: usize = 4;
