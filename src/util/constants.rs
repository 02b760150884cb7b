// ghost-telemetry - util/constants.rs
//
// Single source of truth for named constants, report layout, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ghost-telemetry";

/// Application identifier used for config directories.
pub const APP_ID: &str = "ghost-telemetry";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Log source
// =============================================================================

/// Diagnostic-log-dump command invoked when config does not name one.
pub const DEFAULT_LOG_COMMAND: &str = "dmesg";

/// Literal marker identifying GHOST log lines. Matched as a plain substring.
pub const GHOST_TAG: &str = "[GHOST]";

/// Maximum number of stderr bytes from a failed command kept in the error.
pub const MAX_STDERR_CAPTURE: usize = 4 * 1024;

// =============================================================================
// Report layout
// =============================================================================

/// Width of the `=` separator lines framing the header and footer.
pub const SEPARATOR_WIDTH: usize = 60;

/// Separator glyph.
pub const SEPARATOR_CHAR: char = '=';

/// Title line of the report header.
pub const REPORT_TITLE: &str = "GHOST Shell Telemetry Report";

/// Label preceding the generation timestamp in the header.
pub const GENERATED_LABEL: &str = "Generated: ";

/// Closing line of the report footer.
pub const REPORT_END: &str = "End of Report";

/// chrono format for the report timestamp (`YYYYMMDD_HHMMSS`, local time).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Report file name prefix.
pub const REPORT_FILE_PREFIX: &str = "ghost_telemetry_";

/// Report file extension, without the dot.
pub const REPORT_FILE_EXTENSION: &str = "txt";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept at `warn` so a normal run prints nothing to stderr.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Levels accepted by `[logging] level` in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum length of a log line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default report output directory (the invocation's working directory).
pub const DEFAULT_OUTPUT_DIR: &str = ".";
