//! Scan driver: one sequential pass fusing traversal and rule evaluation.
//!
//! Files are evaluated strictly in traversal order; each file's findings
//! are handed to the sink callback before the next file is touched. The
//! summary counts every evaluated file, not only the offending ones.

use crate::config::RuleConfig;
use crate::error::ScanError;
use crate::models::{Finding, ScanResult, Severity, Summary};
use crate::rules;
use crate::walker::Walker;
use std::path::Path;

/// Run the audit over `root`.
///
/// `on_file` receives the 1-based ordinal and leaf name of every evaluated
/// file (progress reporting). `on_finding` receives each finding as it is
/// produced, in traversal order, and may fail when persisting it.
pub fn run_scan(
    root: &Path,
    cfg: &RuleConfig,
    mut on_file: impl FnMut(usize, &str),
    mut on_finding: impl FnMut(&Finding) -> Result<(), ScanError>,
) -> Result<ScanResult, ScanError> {
    let walker = Walker::new(root)?;
    let descriptors = walker.collect()?;

    let mut findings: Vec<Finding> = Vec::new();
    let mut files = 0usize;
    for desc in &descriptors {
        files += 1;
        on_file(files, &desc.name);
        for f in rules::evaluate(desc, cfg) {
            on_finding(&f)?;
            findings.push(f);
        }
    }

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warnings = findings.len() - errors;
    Ok(ScanResult {
        findings,
        summary: Summary {
            errors,
            warnings,
            files,
        },
    })
}
