// ghost-telemetry - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr only. Stdout carries the single confirmation line.

use tracing_subscriber::EnvFilter;

/// Build the env filter for the given inputs.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default.
fn build_filter(debug_flag: bool, config_level: Option<&str>) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = build_filter(debug_flag, config_level);

    // try_init: a second call (tests, embedding) keeps the first subscriber.
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init()
        .is_ok();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        installed,
        "Logging initialised"
    );
}

/// Shorten a log line for debug output.
///
/// Truncates on a char boundary at `DEBUG_MAX_LINE_PREVIEW` bytes or fewer.
pub fn preview(line: &str) -> &str {
    let max = super::constants::DEBUG_MAX_LINE_PREVIEW;
    if line.len() <= max {
        return line;
    }
    let mut end = max;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::DEBUG_MAX_LINE_PREVIEW;

    #[test]
    fn test_preview_short_line_unchanged() {
        assert_eq!(preview("[GHOST] ok"), "[GHOST] ok");
    }

    #[test]
    fn test_preview_truncates_long_line() {
        let line = "x".repeat(DEBUG_MAX_LINE_PREVIEW + 50);
        assert_eq!(preview(&line).len(), DEBUG_MAX_LINE_PREVIEW);
    }

    #[test]
    fn test_preview_respects_char_boundary() {
        // 'é' is two bytes; an odd offset forces the boundary walk.
        let line = format!("a{}", "é".repeat(DEBUG_MAX_LINE_PREVIEW));
        let p = preview(&line);
        assert!(p.len() <= DEBUG_MAX_LINE_PREVIEW);
        assert!(line.starts_with(p));
    }
}
