// ghost-telemetry - platform/source.rs
//
// Diagnostic-log sources. `LogSource` is the seam the exporter reads
// through; `CommandLogSource` runs a real command (dmesg by default),
// tests substitute canned text.

use crate::core::filter::normalize_newlines;
use crate::util::constants;
use crate::util::error::SourceError;
use std::process::Command;

/// Anything that can produce raw diagnostic log text.
pub trait LogSource {
    /// Human-readable name for log output and errors.
    fn describe(&self) -> String;

    /// Produce the full log text. Failures are fatal to the export.
    fn produce_log_text(&self) -> Result<String, SourceError>;
}

/// Runs an external command and captures its standard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLogSource {
    program: String,
    args: Vec<String>,
}

impl Default for CommandLogSource {
    fn default() -> Self {
        Self::new(constants::DEFAULT_LOG_COMMAND, Vec::<String>::new())
    }
}

impl CommandLogSource {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl LogSource for CommandLogSource {
    fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    fn produce_log_text(&self) -> Result<String, SourceError> {
        tracing::debug!(program = %self.program, args = ?self.args, "Running log command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| SourceError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            let mut stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            if stderr.len() > constants::MAX_STDERR_CAPTURE {
                let mut end = constants::MAX_STDERR_CAPTURE;
                while !stderr.is_char_boundary(end) {
                    end -= 1;
                }
                stderr.truncate(end);
            }
            return Err(SourceError::ExitStatus {
                program: self.program.clone(),
                status: output.status,
                stderr,
            });
        }

        // Kernel messages are not guaranteed to be valid UTF-8.
        let decoded = String::from_utf8_lossy(&output.stdout);
        let text = normalize_newlines(&decoded).into_owned();
        tracing::debug!(
            program = %self.program,
            bytes = output.stdout.len(),
            "Captured log command output"
        );
        Ok(text)
    }
}

/// Fixed text, for tests and for feeding a previously saved log dump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLogSource {
    text: String,
}

impl StaticLogSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl LogSource for StaticLogSource {
    fn describe(&self) -> String {
        "static text".to_string()
    }

    fn produce_log_text(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_dmesg() {
        let src = CommandLogSource::default();
        assert_eq!(src.program(), "dmesg");
        assert!(src.args().is_empty());
        assert_eq!(src.describe(), "dmesg");
    }

    #[test]
    fn test_describe_includes_args() {
        let src = CommandLogSource::new("journalctl", ["-k", "--no-pager"]);
        assert_eq!(src.describe(), "journalctl -k --no-pager");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let src = CommandLogSource::new("ghost-telemetry-no-such-command", Vec::<String>::new());
        let err = src.produce_log_text().unwrap_err();
        assert!(
            matches!(err, SourceError::Spawn { .. }),
            "expected Spawn, got {err:?}"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout() {
        let src = CommandLogSource::new("sh", ["-c", "printf 'a\\n[GHOST] b\\n'"]);
        assert_eq!(src.produce_log_text().unwrap(), "a\n[GHOST] b\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_line_endings_normalised() {
        let src = CommandLogSource::new("sh", ["-c", "printf '[GHOST] a\\r\\nb\\rc\\n'"]);
        assert_eq!(src.produce_log_text().unwrap(), "[GHOST] a\nb\nc\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_utf8_replaced() {
        let src = CommandLogSource::new("sh", ["-c", "printf '\\377[GHOST] x\\n'"]);
        assert_eq!(src.produce_log_text().unwrap(), "\u{FFFD}[GHOST] x\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_error_with_stderr() {
        let src = CommandLogSource::new("sh", ["-c", "echo 'permission denied' >&2; exit 3"]);
        match src.produce_log_text().unwrap_err() {
            SourceError::ExitStatus { status, stderr, .. } => {
                assert_eq!(status.code(), Some(3));
                assert!(stderr.contains("permission denied"));
            }
            other => panic!("expected ExitStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_static_source_returns_text() {
        let src = StaticLogSource::new("[GHOST] x\n");
        assert_eq!(src.produce_log_text().unwrap(), "[GHOST] x\n");
    }
}
