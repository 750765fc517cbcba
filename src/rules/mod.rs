//! Rule evaluation engine.
//!
//! Checks are modeled as an ordered list of tagged rule variants evaluated
//! by a small dispatcher. The forbidden-substring check is additive and
//! always runs; the remaining checks form an exclusive chain where the
//! first match wins: forbidden extension, reserved name, forbidden
//! characters, leading underscore, consecutive periods, trailing period,
//! empty file, oversized file, name length, path length. The chain order
//! decides which single explanation a user sees when several rules apply
//! to the same file.

pub mod charset;
pub mod properties;
pub mod structure;
pub mod tokens;

use crate::config::RuleConfig;
use crate::models::{Finding, Severity};
use crate::walker::FileDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Checks in the exclusive chain, tagged by what they detect.
pub enum Rule {
    ForbiddenExtension,
    ReservedName,
    ForbiddenCharacters,
    LeadingUnderscore,
    ConsecutivePeriods,
    TrailingPeriod,
    EmptyFile,
    OversizedFile,
    NameLength,
    PathLength,
}

/// Exclusive-chain evaluation order. The first rule that matches a file
/// wins and the rest are skipped for that file.
pub const EXCLUSIVE_RULES: &[Rule] = &[
    Rule::ForbiddenExtension,
    Rule::ReservedName,
    Rule::ForbiddenCharacters,
    Rule::LeadingUnderscore,
    Rule::ConsecutivePeriods,
    Rule::TrailingPeriod,
    Rule::EmptyFile,
    Rule::OversizedFile,
    Rule::NameLength,
    Rule::PathLength,
];

impl Rule {
    /// Apply this rule to one file. `lower` is the lowercased leaf name.
    fn apply(self, desc: &FileDescriptor, cfg: &RuleConfig, lower: &str) -> Option<Finding> {
        match self {
            Rule::ForbiddenExtension => {
                tokens::extension_match(&cfg.forbidden_extensions, &desc.extension.to_lowercase())
                    .map(|ext| {
                        finding(
                            Severity::Error,
                            desc,
                            ext,
                            format!(
                                "Files cannot be of the following type {ext}. With Microsoft 365 Group-connected Team sites you cannot upload these files."
                            ),
                        )
                    })
            }
            Rule::ReservedName => tokens::reserved_match(&cfg.reserved_names, lower).map(|name| {
                finding(
                    Severity::Error,
                    desc,
                    name,
                    format!(
                        "File names cannot be '{name}'. This name is reserved by the sync backend. Also avoid reserved names followed immediately by an extension; for example NUL.txt is not recommended."
                    ),
                )
            }),
            Rule::ForbiddenCharacters => {
                let toks = charset::find_forbidden(&cfg.pattern, lower);
                if toks.is_empty() {
                    None
                } else {
                    let joined = toks.join(" ");
                    Some(finding(
                        Severity::Error,
                        desc,
                        &joined,
                        format!(
                            "You cannot use the following characters anywhere in a file name: {joined}."
                        ),
                    ))
                }
            }
            Rule::LeadingUnderscore => structure::has_leading_underscore(&desc.name).then(|| {
                finding(
                    Severity::Warning,
                    desc,
                    "_",
                    "If you use an underscore character (_) at the beginning of a file name the file will be a hidden file when using Open in Explorer.".to_string(),
                )
            }),
            Rule::ConsecutivePeriods => structure::has_consecutive_periods(&desc.name).then(|| {
                finding(
                    Severity::Error,
                    desc,
                    "..",
                    "You cannot use the period character consecutively in the middle of a file name.".to_string(),
                )
            }),
            Rule::TrailingPeriod => structure::has_trailing_period(&desc.name).then(|| {
                finding(
                    Severity::Warning,
                    desc,
                    ".",
                    "Do not end a file or directory name with a period. The Windows shell and user interface do not support such names even when the underlying file system does.".to_string(),
                )
            }),
            Rule::EmptyFile => properties::is_empty(desc).then(|| {
                finding(Severity::Error, desc, "", "Files cannot be empty.".to_string())
            }),
            Rule::OversizedFile => {
                properties::exceeds_max_size(desc, cfg.max_file_size_bytes).then(|| {
                    finding(
                        Severity::Error,
                        desc,
                        "",
                        format!(
                            "Files cannot be larger than {}GB.",
                            cfg.max_file_size_bytes / 1024 / 1024 / 1024
                        ),
                    )
                })
            }
            Rule::NameLength => properties::name_exceeds(desc, cfg.max_name_length).then(|| {
                finding(
                    Severity::Error,
                    desc,
                    "",
                    format!("File names cannot exceed {} characters.", cfg.max_name_length),
                )
            }),
            Rule::PathLength => properties::path_exceeds(desc, cfg.max_name_length).then(|| {
                finding(
                    Severity::Warning,
                    desc,
                    "",
                    format!(
                        "The full path is limited to {} characters including the parent folders. Consider flattening or reducing the folder structure path length.",
                        cfg.max_name_length
                    ),
                )
            }),
        }
    }
}

fn finding(severity: Severity, desc: &FileDescriptor, token: &str, message: String) -> Finding {
    Finding {
        severity,
        file_name: desc.name.clone(),
        token: token.to_string(),
        path: desc.path.clone(),
        message,
    }
}

/// Evaluate every rule against one file.
///
/// The substring pass contributes one finding per configured substring that
/// occurs in the name, regardless of what else matches. The exclusive chain
/// then contributes at most one further finding. A clean file yields an
/// empty vec. Pure function of its inputs.
pub fn evaluate(desc: &FileDescriptor, cfg: &RuleConfig) -> Vec<Finding> {
    let lower = desc.name.to_lowercase();
    let mut findings: Vec<Finding> = Vec::new();

    for sub in tokens::substring_matches(&cfg.forbidden_substrings, &lower) {
        findings.push(finding(
            Severity::Error,
            desc,
            sub,
            format!("File names cannot contain '{sub}' anywhere in the name."),
        ));
    }

    for rule in EXCLUSIVE_RULES {
        if let Some(f) = rule.apply(desc, cfg, &lower) {
            findings.push(f);
            break;
        }
    }

    findings
}
