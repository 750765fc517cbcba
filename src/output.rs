//! Console rendering for scan results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries the
//! findings and a top-level summary; progress lines are emitted only in
//! human mode so JSON stdout stays parseable.

use crate::models::{ScanResult, Severity};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Per-file progress line during the walk.
pub fn progress_line(ordinal: usize, name: &str) {
    println!("{ordinal}.  {name}");
}

/// Print scan results in the requested format, followed in human mode by
/// the summary line and the support-documentation pointer.
pub fn print_scan(res: &ScanResult, output: &str, report_path: &Path, support_url: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_scan_json(res)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for f in &res.findings {
                let sev = match f.severity {
                    Severity::Error => {
                        if color {
                            "⟦error⟧".red().bold().to_string()
                        } else {
                            "⟦error⟧".to_string()
                        }
                    }
                    Severity::Warning => {
                        if color {
                            "⟦warn⟧".yellow().bold().to_string()
                        } else {
                            "⟦warn⟧".to_string()
                        }
                    }
                };
                let icon = match f.severity {
                    Severity::Error => {
                        if color {
                            "✖".red().to_string()
                        } else {
                            "✖".to_string()
                        }
                    }
                    Severity::Warning => {
                        if color {
                            "▲".yellow().to_string()
                        } else {
                            "▲".to_string()
                        }
                    }
                };
                let name = if color {
                    f.file_name.clone().bold().to_string()
                } else {
                    f.file_name.clone()
                };
                if f.token.is_empty() {
                    println!("{} {} {} — {}", icon, sev, name, f.message);
                } else {
                    println!("{} {} {} ❲{}❳ — {}", icon, sev, name, f.token, f.message);
                }
            }

            let mut summary = format!(
                "{} issues discovered parsing {} files.",
                res.summary.issues(),
                res.summary.files
            );
            if res.summary.issues() > 0 {
                summary.push_str(&format!(
                    "  Refer to {} for additional details.",
                    report_path.display()
                ));
            }
            println!();
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{summary}");
            }
            println!();
            println!(
                "For additional information on file and folder name restrictions see also {support_url}."
            );
        }
    }
}

/// Compose the scan JSON object (pure) for testing/snapshot purposes.
pub fn compose_scan_json(res: &ScanResult) -> JsonVal {
    // Directly serialize ScanResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Finding, Summary};

    #[test]
    fn test_compose_scan_json_shape() {
        let res = ScanResult {
            findings: vec![Finding {
                severity: Severity::Warning,
                file_name: "_draft.md".to_string(),
                token: "_".to_string(),
                path: "/share/docs/_draft.md".to_string(),
                message: "msg".to_string(),
            }],
            summary: Summary {
                errors: 0,
                warnings: 1,
                files: 4,
            },
        };
        let out = compose_scan_json(&res);
        assert_eq!(out["summary"]["warnings"], 1);
        assert_eq!(out["summary"]["files"], 4);
        assert_eq!(out["findings"][0]["severity"], "Warning");
        assert_eq!(out["findings"][0]["token"], "_");
        assert_eq!(out["findings"][0]["path"], "/share/docs/_draft.md");
    }

    #[test]
    fn test_compose_scan_json_empty_run() {
        let res = ScanResult {
            findings: Vec::new(),
            summary: Summary {
                errors: 0,
                warnings: 0,
                files: 0,
            },
        };
        let out = compose_scan_json(&res);
        assert_eq!(out["findings"].as_array().map(Vec::len), Some(0));
        assert_eq!(out["summary"]["errors"], 0);
    }
}
