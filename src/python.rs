//! Interpreter discovery.
//!
//! Probes candidate interpreter names in a fixed priority order and
//! keeps the probed version line for display.

use std::process::Command;

/// Candidate interpreter names, tried in order.
const CANDIDATES: &[&str] = &["python3", "python"];

/// A usable Python interpreter found on PATH.
#[derive(Debug, Clone)]
pub struct Interpreter {
    /// Command name the interpreter answers to (`python3` or `python`).
    pub command: String,
    /// Trimmed output of `--version`, e.g. `Python 3.12.1`.
    pub version: String,
}

/// Find a Python interpreter, first probe that exits zero wins.
pub fn locate() -> Option<Interpreter> {
    for cmd in CANDIDATES {
        if let Some(version) = probe(cmd) {
            return Some(Interpreter {
                command: cmd.to_string(),
                version,
            });
        }
    }
    None
}

/// Run `<cmd> --version` and return the version line on success.
fn probe(cmd: &str) -> Option<String> {
    let output = Command::new(cmd).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(parse_version_line(&output.stdout))
}

/// Trim a `--version` probe's stdout down to the version line.
fn parse_version_line(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_line() {
        assert_eq!(parse_version_line(b"Python 3.12.1\n"), "Python 3.12.1");
        assert_eq!(parse_version_line(b"  Python 3.8.0  "), "Python 3.8.0");
        assert_eq!(parse_version_line(b""), "");
    }
}
