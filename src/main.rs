// ghost-telemetry - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Running the export and printing the confirmation

use clap::Parser;
use ghost_telemetry::{app, platform, util};
use std::path::PathBuf;

/// ghost-telemetry - Export GHOST-tagged kernel log lines to a report.
///
/// Runs the diagnostic log dump (dmesg by default), keeps every line
/// containing "[GHOST]", and writes ghost_telemetry_<YYYYMMDD_HHMMSS>.txt
/// into the current directory.
#[derive(Parser, Debug)]
#[command(name = "ghost-telemetry", version, about)]
struct Cli {
    /// Directory to write the report into (default: current directory).
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Paths and config are read before logging exists; their warnings are
    // replayed once the subscriber is installed.
    let mut startup_warnings = Vec::new();
    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => {
            let (paths, warnings) = platform::config::PlatformPaths::resolve();
            startup_warnings.extend(warnings);
            paths.config_file()
        }
    };
    let (config, config_warnings) = platform::config::load_config(&config_path);
    startup_warnings.extend(config_warnings);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::debug!(
        version = util::constants::APP_VERSION,
        config = %config_path.display(),
        config_found = config_path.is_file(),
        "ghost-telemetry starting"
    );
    for warning in &startup_warnings {
        tracing::warn!(warning = %warning, "Startup warning");
    }

    // Output directory: CLI override > config > current directory
    let output_dir = cli.output_dir.unwrap_or_else(|| config.output_dir.clone());
    let source = config.log_source();

    match app::exporter::export_telemetry(&source, &output_dir) {
        Ok(outcome) => {
            println!("{}", outcome.confirmation());
        }
        Err(e) => {
            tracing::error!(error = %e, "Telemetry export failed");
            eprintln!("Error: {}", util::error::display_chain(&e));
            std::process::exit(1);
        }
    }
}
