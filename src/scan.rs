//! Import extraction from Python source text.
//!
//! A line-oriented heuristic, not a parser: a single regex matched at
//! the start of each line picks up `import x` and `from x` statements,
//! and the top-level segment of the dotted path is the installable
//! package name. Names shipped with the interpreter are filtered out.

use lazy_static::lazy_static;
use phf::phf_set;
use regex::Regex;
use std::collections::HashSet;

/// Module names assumed available without installation.
static EXCLUDED_MODULES: phf::Set<&'static str> = phf_set! {
    "sys", "os", "time", "datetime", "json", "re",
};

lazy_static! {
    // Anchored at the true start of the line: indented imports are
    // intentionally not matched, and the capture must begin with a
    // name character, so relative imports (`from .x`) never match.
    static ref IMPORT_RE: Regex =
        Regex::new(r"(?m)^(?:import|from)\s+([A-Za-z0-9_][A-Za-z0-9_.]*)").unwrap();
}

/// Scan source text for third-party packages referenced by imports.
///
/// Returns the top-level package segment of each matched import, in
/// first-seen order, deduplicated, with excluded (interpreter-bundled)
/// names removed. Pure: no I/O, no error conditions; text with no
/// import-like lines yields an empty list.
///
/// Only the first dotted path on a matching line is taken, so
/// `import a, b` contributes `a` and `from x import y` contributes
/// `x`. Lines inside strings or comments that happen to start with an
/// import keyword are matched like any other line.
pub fn scan(text: &str) -> Vec<String> {
    let mut packages = Vec::new();
    let mut seen = HashSet::new();

    for caps in IMPORT_RE.captures_iter(text) {
        let dotted = match caps.get(1) {
            Some(m) => m.as_str(),
            None => continue,
        };
        let top = dotted.split('.').next().unwrap_or(dotted);
        if EXCLUDED_MODULES.contains(top) {
            continue;
        }
        if seen.insert(top.to_string()) {
            packages.push(top.to_string());
        }
    }

    packages
}
