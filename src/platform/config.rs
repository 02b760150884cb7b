// ghost-telemetry - platform/config.rs
//
// Config directory resolution and config.toml loading with validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::platform::source::CommandLogSource;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ghost-telemetry configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/ghost-telemetry/)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    /// Runs before logging is initialised, so problems come back as warnings
    /// for the caller to replay.
    pub fn resolve() -> (Self, Vec<String>) {
        Self::from_project_dirs(ProjectDirs::from("", "", constants::APP_ID))
    }

    fn from_project_dirs(proj_dirs: Option<ProjectDirs>) -> (Self, Vec<String>) {
        match proj_dirs {
            Some(proj_dirs) => {
                let config_dir = proj_dirs.config_dir().to_path_buf();
                (Self { config_dir }, Vec::new())
            }
            None => (
                Self {
                    config_dir: PathBuf::from("."),
                },
                vec![
                    "Could not determine platform directories, using current directory"
                        .to_string(),
                ],
            ),
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[source]` section.
    pub source: SourceSection,
    /// `[report]` section.
    pub report: ReportSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[source]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// Diagnostic-log-dump command.
    pub command: Option<String>,
    /// Arguments passed to the command.
    pub args: Option<Vec<String>>,
}

/// `[report]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Directory reports are written to.
    pub output_dir: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration.
///
/// Invalid values in config.toml produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Log-dump program.
    pub log_command: String,
    /// Log-dump arguments.
    pub log_args: Vec<String>,
    /// Report output directory.
    pub output_dir: PathBuf,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_command: constants::DEFAULT_LOG_COMMAND.to_string(),
            log_args: Vec::new(),
            output_dir: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Build the command source this config describes.
    pub fn log_source(&self) -> CommandLogSource {
        CommandLogSource::new(self.log_command.clone(), self.log_args.clone())
    }
}

/// Load and validate the config file at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a warning.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let config = validate(raw, &mut warnings);
    (config, warnings)
}

/// Validate each field, accumulating all problems rather than stopping at
/// the first.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Source: command --
    if let Some(command) = raw.source.command {
        if command.trim().is_empty() {
            warnings.push(out_of_range(
                "[source] command",
                &command,
                "a non-empty program name",
                constants::DEFAULT_LOG_COMMAND,
            ));
        } else {
            config.log_command = command;
        }
    }

    // -- Source: args --
    if let Some(args) = raw.source.args {
        config.log_args = args;
    }

    // -- Report: output_dir --
    if let Some(dir) = raw.report.output_dir {
        if dir.is_empty() {
            warnings.push(out_of_range(
                "[report] output_dir",
                &dir,
                "a directory path",
                constants::DEFAULT_OUTPUT_DIR,
            ));
        } else {
            config.output_dir = PathBuf::from(dir);
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(out_of_range(
                "[logging] level",
                &level,
                &constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    config
}

fn out_of_range(field: &str, value: &str, expected: &str, default: &str) -> String {
    let err = ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    };
    format!("{err}. Using default ({default}).")
}
