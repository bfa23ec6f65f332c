//! Console output for venvrun.
//!
//! Two surfaces: the step-by-step status lines of the launch pipeline
//! (colored, with a spinner while an external command runs), and the
//! scan report in pretty or JSON form.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::python::Interpreter;

/// Write the launch header: program name, script, interpreter.
pub fn write_header(script: &Path, interpreter: &Interpreter) {
    println!();
    print!("  ");
    print!("{}", "venvrun".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Script:      ".dimmed());
    println!("{}", script.display().to_string().green());
    print!("  {}", "Interpreter: ".dimmed());
    println!("{} {}", interpreter.command, interpreter.version.dimmed());
    println!();
}

/// Start a spinner for a long-running external step.
///
/// The caller clears it with `finish_and_clear` and prints the final
/// status line through `step_done` or `step_fail`.
pub fn step_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner().with_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}").expect("valid spinner template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print a completed step.
pub fn step_done(msg: &str) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print a failed step.
pub fn step_fail(msg: &str) {
    println!("  {} {}", "✖".red(), msg.red());
}

/// Banner printed immediately before the script runs.
pub fn write_launch_banner() {
    println!();
    println!("  {}", "Launching script...".cyan().bold());
    println!();
}

/// Final line after the script exits cleanly.
pub fn write_run_success() {
    println!();
    println!("  {}", "Script execution completed".green().bold());
    println!();
}

/// Final line after the script exits non-zero.
pub fn write_run_failure(code: i32) {
    println!();
    println!(
        "  {} {}",
        "Script execution failed".red().bold(),
        format!("(exit code {})", code).dimmed()
    );
    println!();
}

// =============================================================================
// Scan report
// =============================================================================

/// JSON document emitted by `scan --format json`.
#[derive(Serialize, Deserialize)]
pub struct ScanReport {
    pub file: String,
    pub count: usize,
    pub packages: Vec<String>,
}

impl ScanReport {
    pub fn new(file: &Path, packages: Vec<String>) -> Self {
        Self {
            file: file.display().to_string(),
            count: packages.len(),
            packages,
        }
    }
}

/// Write the scan result as pretty JSON.
pub fn write_scan_json(report: &ScanReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Write the scan result for human eyes.
pub fn write_scan_pretty(report: &ScanReport) {
    println!();
    print!("  {}", "File: ".dimmed());
    println!("{}", report.file);
    println!();

    if report.packages.is_empty() {
        println!("  {}", "No external packages required".green());
    } else {
        println!(
            "  {} ({}):",
            "Packages to install".bold(),
            report.count.to_string().cyan()
        );
        for package in &report.packages {
            println!("    {}", package);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_scan_report_shape() {
        let report = ScanReport::new(
            &PathBuf::from("app.py"),
            vec!["requests".to_string(), "flask".to_string()],
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["file"], "app.py");
        assert_eq!(json["count"], 2);
        assert_eq!(json["packages"][0], "requests");
        assert_eq!(json["packages"][1], "flask");
    }
}
