// ghost-telemetry - platform/fs.rs
//
// Report file output. Thin wrapper over std::fs so the core renderer
// stays free of filesystem access.

use crate::core::export::write_report;
use crate::core::model::Report;
use crate::util::error::ExportError;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Write `report` into `dir` under its generated file name.
///
/// The file is created or truncated; a report from the same clock second
/// is overwritten. `dir` is created if missing.
/// Returns the full path written.
pub fn write_report_file(report: &Report, dir: &Path) -> Result<PathBuf, ExportError> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| ExportError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(dir = %dir.display(), "Created output directory");
    }

    let path = dir.join(report.file_name());
    if path.exists() {
        tracing::debug!(path = %path.display(), "Overwriting report from the same second");
    }

    let file = File::create(&path).map_err(|e| ExportError::Io {
        path: path.clone(),
        source: e,
    })?;
    let lines = write_report(report, BufWriter::new(file), &path)?;

    tracing::info!(path = %path.display(), lines, "Report written");
    Ok(path)
}
