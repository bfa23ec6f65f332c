//! Virtual environment provisioning and in-environment tooling.
//!
//! The environment lives at a fixed relative path. Creation is
//! idempotent: an existing directory is reused without modification.
//! Rather than shelling through an activation script, commands run the
//! environment's own `python` and `pip` binaries directly.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::python::Interpreter;

/// Fixed name of the environment directory, relative to the cwd.
pub const VENV_DIR: &str = "venv";

/// Resolved paths to the environment's interpreter and pip.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub python: PathBuf,
    pub pip: PathBuf,
}

/// Whether an environment already exists at `dir`.
pub fn exists(dir: &Path) -> bool {
    dir.exists()
}

/// Create a virtual environment at `dir` with the given interpreter.
///
/// On failure the returned string carries the child's stderr (or the
/// spawn error) for the caller's report.
pub fn create(interpreter: &Interpreter, dir: &Path) -> Result<(), String> {
    let output = Command::new(&interpreter.command)
        .args(["-m", "venv"])
        .arg(dir)
        .output()
        .map_err(|e| e.to_string())?;

    if !output.status.success() {
        return Err(String::from_utf8_lossy(&output.stderr).trim().to_string());
    }
    Ok(())
}

/// Resolve the `python` and `pip` binaries inside an environment.
///
/// Checks the Unix layout (`bin/`) then the Windows layout
/// (`Scripts/`); if neither is present yet, falls back to the layout
/// native to the current platform.
pub fn toolchain(dir: &Path) -> Toolchain {
    let bin = dir.join("bin");
    let scripts = dir.join("Scripts");

    if bin.join("python").exists() {
        Toolchain {
            python: bin.join("python"),
            pip: bin.join("pip"),
        }
    } else if scripts.join("python.exe").exists() {
        Toolchain {
            python: scripts.join("python.exe"),
            pip: scripts.join("pip.exe"),
        }
    } else if cfg!(windows) {
        Toolchain {
            python: scripts.join("python.exe"),
            pip: scripts.join("pip.exe"),
        }
    } else {
        Toolchain {
            python: bin.join("python"),
            pip: bin.join("pip"),
        }
    }
}

/// Install one package into the environment with pip.
///
/// Failure carries the child's stderr; the caller aborts the remaining
/// queue on the first error.
pub fn install_package(toolchain: &Toolchain, package: &str) -> Result<(), String> {
    let output = Command::new(&toolchain.pip)
        .args(["install", package])
        .output()
        .map_err(|e| e.to_string())?;

    if !output.status.success() {
        return Err(String::from_utf8_lossy(&output.stderr).trim().to_string());
    }
    Ok(())
}
