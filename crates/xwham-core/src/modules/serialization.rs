use super::batch::BatchReport;
use crate::domain::{WhamError, WhamResult};
use std::fs;
use std::path::Path;

pub fn render_report_json(report: &BatchReport) -> WhamResult<String> {
    serde_json::to_string_pretty(report).map_err(|source| {
        WhamError::internal(
            "SYS.REPORT_SERIALIZE",
            format!("failed to serialize run report: {}", source),
        )
    })
}

pub fn write_report(path: &Path, report: &BatchReport) -> WhamResult<()> {
    let mut content = render_report_json(report)?;
    content.push('\n');

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| {
            WhamError::io_system(
                "IO.REPORT_DIRECTORY",
                format!(
                    "failed to create report directory '{}': {}",
                    parent.display(),
                    source
                ),
            )
        })?;
    }

    fs::write(path, content).map_err(|source| {
        WhamError::io_system(
            "IO.REPORT_WRITE",
            format!("failed to write run report '{}': {}", path.display(), source),
        )
    })
}
