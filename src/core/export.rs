// ghost-telemetry - core/export.rs
//
// Plain-text rendering of a telemetry report.
// Core layer: writes to any Write trait object.
//
// Layout (separator = 60 '='):
//
//   ============================================================
//   GHOST Shell Telemetry Report
//   Generated: <YYYYMMDD_HHMMSS>
//   ============================================================
//   <blank>
//   <matched lines...>
//   <blank>
//   ============================================================
//   End of Report
//   ============================================================

use crate::core::model::Report;
use crate::util::constants;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// One separator line, without the newline.
pub fn separator() -> String {
    std::iter::repeat(constants::SEPARATOR_CHAR)
        .take(constants::SEPARATOR_WIDTH)
        .collect()
}

/// Write `report` as text to `writer`.
///
/// `export_path` is only used to give I/O errors context.
/// Returns the number of body lines written.
pub fn write_report<W: Write>(
    report: &Report,
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let io_err = |e: std::io::Error| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    };
    let sep = separator();

    writeln!(writer, "{sep}").map_err(io_err)?;
    writeln!(writer, "{}", constants::REPORT_TITLE).map_err(io_err)?;
    writeln!(writer, "{}{}", constants::GENERATED_LABEL, report.timestamp()).map_err(io_err)?;
    writeln!(writer, "{sep}").map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    for line in &report.lines {
        writeln!(writer, "{line}").map_err(io_err)?;
    }

    writeln!(writer).map_err(io_err)?;
    writeln!(writer, "{sep}").map_err(io_err)?;
    writeln!(writer, "{}", constants::REPORT_END).map_err(io_err)?;
    writeln!(writer, "{sep}").map_err(io_err)?;

    writer.flush().map_err(io_err)?;

    Ok(report.lines.len())
}

/// Render `report` to a `String`.
pub fn render_report(report: &Report) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(report, &mut buf, Path::new(""));
    String::from_utf8_lossy(&buf).into_owned()
}
