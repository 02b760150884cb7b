// ghost-telemetry - app/exporter.rs
//
// The export pipeline: read the log source, keep GHOST-tagged lines,
// stamp the report, write it. Strictly linear; any failure aborts.

use crate::core::filter::{normalize_newlines, split_lines, TagFilter};
use crate::core::model::Report;
use crate::platform::fs::write_report_file;
use crate::platform::source::LogSource;
use crate::util::error::Result;
use crate::util::logging::preview;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

/// What a successful export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Full path of the written report.
    pub path: PathBuf,
    /// Report file name (`ghost_telemetry_<timestamp>.txt`).
    pub file_name: String,
    /// Timestamp used in both the header and the file name.
    pub timestamp: String,
    /// Number of tagged lines written.
    pub matched: usize,
    /// Number of lines the source produced.
    pub total_lines: usize,
}

impl ExportOutcome {
    /// The single line printed to stdout on success.
    pub fn confirmation(&self) -> String {
        format!("✅ Telemetry exported: {}", self.file_name)
    }
}

/// Export a telemetry report stamped with the current local time.
pub fn export_telemetry<S: LogSource + ?Sized>(
    source: &S,
    output_dir: &Path,
) -> Result<ExportOutcome> {
    export_telemetry_at(source, output_dir, Local::now().naive_local())
}

/// Export a telemetry report stamped with `now`.
///
/// Two calls whose `now` falls in the same second write the same file name;
/// the later call overwrites the earlier report.
pub fn export_telemetry_at<S: LogSource + ?Sized>(
    source: &S,
    output_dir: &Path,
    now: NaiveDateTime,
) -> Result<ExportOutcome> {
    let raw = source.produce_log_text()?;
    let text = normalize_newlines(&raw);
    let total_lines = split_lines(&text).len();

    let filter = TagFilter::default();
    let lines = filter.apply(&text);
    tracing::info!(
        source = %source.describe(),
        tag = filter.tag(),
        total_lines,
        matched = lines.len(),
        "Filtered log text"
    );
    for line in &lines {
        tracing::trace!(line = preview(line), "Matched");
    }

    let report = Report::new(lines, now);
    let path = write_report_file(&report, output_dir)?;

    Ok(ExportOutcome {
        path,
        file_name: report.file_name(),
        timestamp: report.timestamp().to_string(),
        matched: report.lines.len(),
        total_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::source::StaticLogSource;
    use crate::util::error::{GhostError, SourceError};
    use chrono::NaiveDate;

    struct BrokenSource;

    impl LogSource for BrokenSource {
        fn describe(&self) -> String {
            "broken".to_string()
        }

        fn produce_log_text(&self) -> std::result::Result<String, SourceError> {
            Err(SourceError::Spawn {
                program: "dmesg".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            })
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 30)
            .and_then(|d| d.and_hms_opt(12, 0, 1))
            .unwrap()
    }

    #[test]
    fn test_outcome_describes_report() {
        let dir = tempfile::tempdir().unwrap();
        let src = StaticLogSource::new("a\n[GHOST] one\nb\n");
        let outcome = export_telemetry_at(&src, dir.path(), noon()).unwrap();
        assert_eq!(outcome.file_name, "ghost_telemetry_20250930_120001.txt");
        assert_eq!(outcome.timestamp, "20250930_120001");
        assert_eq!(outcome.matched, 1);
        assert_eq!(outcome.total_lines, 3);
        assert_eq!(outcome.path, dir.path().join(&outcome.file_name));
    }

    #[test]
    fn test_total_lines_uses_filter_line_breaks() {
        let dir = tempfile::tempdir().unwrap();
        let src = StaticLogSource::new("a\r\n[GHOST] one\rb\n\n[GHOST] two");
        let outcome = export_telemetry_at(&src, dir.path(), noon()).unwrap();
        assert_eq!(outcome.total_lines, 5);
        assert_eq!(outcome.matched, 2);
    }

    #[test]
    fn test_empty_source_has_no_lines() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = export_telemetry_at(&StaticLogSource::default(), dir.path(), noon()).unwrap();
        assert_eq!(outcome.total_lines, 0);
        assert_eq!(outcome.matched, 0);
    }

    #[test]
    fn test_confirmation_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = export_telemetry_at(&StaticLogSource::default(), dir.path(), noon()).unwrap();
        assert_eq!(
            outcome.confirmation(),
            "✅ Telemetry exported: ghost_telemetry_20250930_120001.txt"
        );
    }

    #[test]
    fn test_source_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_telemetry_at(&BrokenSource, dir.path(), noon()).unwrap_err();
        assert!(matches!(err, GhostError::Source(_)), "got {err:?}");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_works_through_trait_object() {
        let dir = tempfile::tempdir().unwrap();
        let src: Box<dyn LogSource> = Box::new(StaticLogSource::new("[GHOST] boxed\n"));
        let outcome = export_telemetry_at(src.as_ref(), dir.path(), noon()).unwrap();
        assert_eq!(outcome.matched, 1);
    }
}
