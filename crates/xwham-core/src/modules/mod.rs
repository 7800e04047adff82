pub mod assemble;
pub mod batch;
pub mod derive;
pub mod discovery;
pub mod extract;
pub mod frame_index;
pub mod schedule;
pub mod serialization;

pub use batch::{BatchReport, BatchRunner, render_human_summary, run_batch};
pub use derive::{derive_frame_counts, frame_count};
pub use serialization::{render_report_json, write_report};
