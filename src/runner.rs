//! Launch pipeline: read, locate, provision, install, run.
//!
//! Every step is a blocking external call; the first failure aborts
//! the rest. The resolved interpreter and environment paths travel in
//! explicit records, never ambient state, and the install/run sequence
//! is built as a plain value before anything is spawned.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

use crate::python::{self, Interpreter};
use crate::report;
use crate::scan;
use crate::venv::{self, Toolchain};

/// Failure modes of the launch pipeline.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("cannot read {path}: {detail}")]
    Unreadable { path: String, detail: String },
    #[error("neither python3 nor python was found on PATH")]
    NoInterpreter,
    #[error("virtual environment creation failed: {0}")]
    VenvCreate(String),
    #[error("failed to install {package}: {detail}")]
    Install { package: String, detail: String },
    #[error("failed to invoke {program}: {detail}")]
    Invoke { program: String, detail: String },
    #[error("script exited with code {code}")]
    ScriptFailed { code: i32 },
}

/// One step of the launch sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Install a package into the environment.
    Install { package: String },
    /// Run the target script with the environment's interpreter.
    Run { script: PathBuf },
}

/// Executes the launch pipeline for one script.
pub struct Launcher {
    script: PathBuf,
    venv_dir: PathBuf,
    skip_install: bool,
}

impl Launcher {
    /// Create a launcher for the given script.
    pub fn new<P: AsRef<Path>>(script: P) -> Self {
        Self {
            script: script.as_ref().to_path_buf(),
            venv_dir: PathBuf::from(venv::VENV_DIR),
            skip_install: false,
        }
    }

    /// Set whether package installation is skipped.
    pub fn skip_install(mut self, skip: bool) -> Self {
        self.skip_install = skip;
        self
    }

    /// Build the ordered step sequence for a scanned package list:
    /// one install per package in scan order, then the run step.
    pub fn plan(&self, packages: &[String]) -> Vec<Step> {
        let mut steps = Vec::new();
        if !self.skip_install {
            for package in packages {
                steps.push(Step::Install {
                    package: package.clone(),
                });
            }
        }
        steps.push(Step::Run {
            script: self.script.clone(),
        });
        steps
    }

    /// Run the full pipeline.
    ///
    /// The caller has already checked that the script path exists;
    /// everything after that is handled here.
    pub fn launch(&self) -> Result<(), LaunchError> {
        let source = fs::read_to_string(&self.script).map_err(|e| LaunchError::Unreadable {
            path: self.script.display().to_string(),
            detail: e.to_string(),
        })?;

        let interpreter = python::locate().ok_or(LaunchError::NoInterpreter)?;
        report::write_header(&self.script, &interpreter);

        let toolchain = self.provision(&interpreter)?;

        let packages = scan::scan(&source);
        if packages.is_empty() {
            report::step_done("No external packages required");
        } else if self.skip_install {
            report::step_done(&format!(
                "Found {} package(s), installation skipped",
                packages.len()
            ));
        } else {
            report::step_done(&format!("Found {} package(s) to install", packages.len()));
        }

        for step in self.plan(&packages) {
            match step {
                Step::Install { package } => install_step(&toolchain, &package)?,
                Step::Run { script } => run_step(&toolchain, &script)?,
            }
        }
        Ok(())
    }

    /// Ensure the environment exists and resolve its toolchain.
    fn provision(&self, interpreter: &Interpreter) -> Result<Toolchain, LaunchError> {
        let spinner = report::step_spinner("Checking virtual environment...");

        if venv::exists(&self.venv_dir) {
            spinner.finish_and_clear();
            report::step_done("Virtual environment already exists");
        } else {
            spinner.set_message("Creating virtual environment...");
            match venv::create(interpreter, &self.venv_dir) {
                Ok(()) => {
                    spinner.finish_and_clear();
                    report::step_done("Virtual environment created");
                }
                Err(detail) => {
                    spinner.finish_and_clear();
                    report::step_fail("Virtual environment creation failed");
                    return Err(LaunchError::VenvCreate(detail));
                }
            }
        }

        Ok(venv::toolchain(&self.venv_dir))
    }
}

/// Install one package, with per-package console status.
fn install_step(toolchain: &Toolchain, package: &str) -> Result<(), LaunchError> {
    let spinner = report::step_spinner(&format!("Installing {}...", package));
    match venv::install_package(toolchain, package) {
        Ok(()) => {
            spinner.finish_and_clear();
            report::step_done(&format!("Installed {}", package));
            Ok(())
        }
        Err(detail) => {
            spinner.finish_and_clear();
            report::step_fail(&format!("Failed to install {}", package));
            Err(LaunchError::Install {
                package: package.to_string(),
                detail,
            })
        }
    }
}

/// Run the script with stdio inherited so output streams through live.
fn run_step(toolchain: &Toolchain, script: &Path) -> Result<(), LaunchError> {
    report::write_launch_banner();

    let status = Command::new(&toolchain.python)
        .arg(script)
        .status()
        .map_err(|e| LaunchError::Invoke {
            program: toolchain.python.display().to_string(),
            detail: e.to_string(),
        })?;

    if !status.success() {
        return Err(LaunchError::ScriptFailed {
            code: status.code().unwrap_or(-1),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_installs_in_scan_order_then_runs() {
        let launcher = Launcher::new("app.py");
        let packages = vec!["requests".to_string(), "flask".to_string()];
        let steps = launcher.plan(&packages);

        assert_eq!(
            steps,
            vec![
                Step::Install {
                    package: "requests".to_string()
                },
                Step::Install {
                    package: "flask".to_string()
                },
                Step::Run {
                    script: PathBuf::from("app.py")
                },
            ]
        );
    }

    #[test]
    fn test_plan_without_packages_is_run_only() {
        let launcher = Launcher::new("app.py");
        let steps = launcher.plan(&[]);
        assert_eq!(
            steps,
            vec![Step::Run {
                script: PathBuf::from("app.py")
            }]
        );
    }

    #[test]
    fn test_plan_skip_install_drops_install_steps() {
        let launcher = Launcher::new("app.py").skip_install(true);
        let steps = launcher.plan(&["requests".to_string()]);
        assert_eq!(
            steps,
            vec![Step::Run {
                script: PathBuf::from("app.py")
            }]
        );
    }

    #[test]
    fn test_scanned_source_plans_one_install_per_external_package() {
        let source = "import requests\nimport sys\nimport os\n";
        let packages = crate::scan::scan(source);
        let launcher = Launcher::new("fetch.py");
        let steps = launcher.plan(&packages);

        assert_eq!(
            steps,
            vec![
                Step::Install {
                    package: "requests".to_string()
                },
                Step::Run {
                    script: PathBuf::from("fetch.py")
                },
            ]
        );
    }
}
