//! Command-line interface for venvrun.

use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use crate::report::{self, ScanReport};
use crate::runner::{LaunchError, Launcher};
use crate::scan;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Zero-config launcher for Python scripts.
///
/// Venvrun detects a Python interpreter, provisions a local virtual
/// environment, infers third-party packages from the script's import
/// lines, installs them with pip, and runs the script with output
/// streamed to the console.
#[derive(Parser)]
#[command(name = "venvrun")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Provision an environment and run a Python script
    #[command(visible_alias = "exec")]
    Run(RunArgs),
    /// Print the third-party packages a script imports
    Scan(ScanArgs),
}

/// Arguments for the run command.
#[derive(Parser)]
pub struct RunArgs {
    /// Path to the Python script
    pub path: PathBuf,

    /// Provision the environment but skip package installation
    #[arg(long)]
    pub skip_install: bool,
}

/// Arguments for the scan command.
#[derive(Parser)]
pub struct ScanArgs {
    /// Path to the Python script
    pub path: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Run the run command.
pub fn run_run(args: &RunArgs) -> anyhow::Result<i32> {
    if !args.path.is_file() {
        eprintln!("Error: not a readable file: {}", args.path.display());
        return Ok(EXIT_ERROR);
    }

    let launcher = Launcher::new(&args.path).skip_install(args.skip_install);
    match launcher.launch() {
        Ok(()) => {
            report::write_run_success();
            Ok(EXIT_SUCCESS)
        }
        Err(LaunchError::ScriptFailed { code }) => {
            report::write_run_failure(code);
            // Pass the script's own exit code through when the OS gave us one.
            Ok(if code > 0 { code } else { EXIT_FAILED })
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            Ok(EXIT_ERROR)
        }
    }
}

/// Run the scan command.
pub fn run_scan(args: &ScanArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    if !args.path.is_file() {
        eprintln!("Error: not a readable file: {}", args.path.display());
        return Ok(EXIT_ERROR);
    }

    let source = match std::fs::read_to_string(&args.path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", args.path.display(), e);
            return Ok(EXIT_ERROR);
        }
    };

    let report = ScanReport::new(&args.path, scan::scan(&source));

    match args.format.as_str() {
        "json" => report::write_scan_json(&report)?,
        _ => report::write_scan_pretty(&report),
    }

    Ok(EXIT_SUCCESS)
}
