// ghost-telemetry - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every failure here is fatal to the export; `main` reports the chain
// and exits non-zero.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Top-level error type for all exporter operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum GhostError {
    /// The diagnostic-log-dump command could not be run or failed.
    Source(SourceError),

    /// Writing the report failed.
    Export(ExportError),
}

impl fmt::Display for GhostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "Log source error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for GhostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Source errors
// ---------------------------------------------------------------------------

/// Errors raised while invoking the diagnostic-log-dump command.
#[derive(Debug)]
pub enum SourceError {
    /// The command is missing or not executable.
    Spawn { program: String, source: io::Error },

    /// The command ran but exited abnormally.
    ExitStatus {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn { program, source } => {
                write!(f, "Failed to run '{program}': {source}")
            }
            Self::ExitStatus {
                program,
                status,
                stderr,
            } => {
                write!(f, "'{program}' exited with {status}")?;
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    write!(f, ": {stderr}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            Self::ExitStatus { .. } => None,
        }
    }
}

impl From<SourceError> for GhostError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing the report file.
#[derive(Debug)]
pub enum ExportError {
    /// The output directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },

    /// I/O error creating or writing the report file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, source } => write!(
                f,
                "Cannot create output directory '{}': {source}",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "Report I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for GhostError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Problems found while loading configuration.
///
/// Never propagated: the loader renders them into warnings and falls back
/// to defaults, so there is no `GhostError` variant for them.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Render an error and its full `source()` chain on one line.
pub fn display_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        let text = cause.to_string();
        // Wrappers above already embed their cause's message.
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        current = cause.source();
    }
    out
}

/// Convenience type alias for exporter results.
pub type Result<T> = std::result::Result<T, GhostError>;
