// ghost-telemetry - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.

use crate::util::constants;
use chrono::NaiveDateTime;

// =============================================================================
// Report
// =============================================================================

/// One telemetry report: the matched lines plus the moment it was generated.
///
/// Created once per invocation and written once. Only the rendered
/// timestamp is kept, so the header and the file name can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Matched log lines, verbatim, in the order the source produced them.
    pub lines: Vec<String>,

    /// Generation time rendered as `YYYYMMDD_HHMMSS`.
    timestamp: String,
}

impl Report {
    pub fn new(lines: Vec<String>, generated_at: NaiveDateTime) -> Self {
        let timestamp = generated_at
            .format(constants::TIMESTAMP_FORMAT)
            .to_string();
        Self { lines, timestamp }
    }

    /// Seconds-resolution timestamp used in both the header and file name.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// File name of the report: `ghost_telemetry_<YYYYMMDD_HHMMSS>.txt`.
    pub fn file_name(&self) -> String {
        format!(
            "{}{}.{}",
            constants::REPORT_FILE_PREFIX,
            self.timestamp,
            constants::REPORT_FILE_EXTENSION
        )
    }
}
