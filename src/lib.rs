//! Venvrun - zero-config launcher for Python scripts.
//!
//! Given a script path, venvrun detects a Python interpreter,
//! provisions an isolated `venv`, statically scans the script's import
//! lines to infer required third-party packages, installs them with
//! pip, and runs the script with output streamed through.
//!
//! # Architecture
//!
//! - `scan`: import scanner - the one piece of real logic, a
//!   line-anchored regex heuristic with a fixed stdlib exclusion set
//! - `python`: interpreter discovery (`python3`, then `python`)
//! - `venv`: environment provisioning and in-environment pip/python
//! - `runner`: the sequential launch pipeline and its error taxonomy
//! - `report`: console output (colored status lines, scan reports)
//! - `cli`: clap command surface and exit codes

pub mod cli;
pub mod python;
pub mod report;
pub mod runner;
pub mod scan;
pub mod venv;

pub use python::Interpreter;
pub use report::ScanReport;
pub use runner::{LaunchError, Launcher, Step};
pub use scan::scan;
pub use venv::Toolchain;
