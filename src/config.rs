//! Configuration discovery and effective settings resolution.
//!
//! Synaudit reads `synaudit.toml|yaml|yml` from the working directory and
//! merges it with CLI flags to produce an `Effective` config. Defaults:
//! - `report`: `synaudit-results.csv`
//! - `output`: `human`
//! - `legacy|append`: false
//! - `[rules]` thresholds and lists: the stock backend restrictions
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::ScanError;
use crate::rules::charset::Charset;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 100 GB ceiling on individual file uploads.
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 107_374_182_400;
/// Shared ceiling for leaf-name and full-path character length.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 400;
pub const DEFAULT_REPORT_FILE: &str = "synaudit-results.csv";
pub const DEFAULT_SUPPORT_URL: &str = "https://support.microsoft.com/office/invalid-file-names-and-file-types-in-onedrive-and-sharepoint-64883a5d-228e-48f5-b3d2-eb39e07630fa";

/// Names the backend refuses outright regardless of extension: device-name
/// legacies plus sync-internal files.
const DEFAULT_RESERVED_NAMES: &[&str] = &[
    "Icon", ".lock", "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6",
    "COM7", "COM8", "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8",
    "LPT9", "desktop.ini", "thumbs.db", "ehtumbs.db",
];

const DEFAULT_FORBIDDEN_EXTENSIONS: &[&str] = &[
    ".aspx", ".asmx", ".ascx", ".master", ".xap", ".swf", ".jar", ".xsf", ".htc", ".tmp",
    ".ds_store",
];

const DEFAULT_FORBIDDEN_SUBSTRINGS: &[&str] = &["_vti_"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Rule threshold and list overrides under `[rules]`. Lists replace the
/// defaults when present.
pub struct RulesCfg {
    pub max_file_size_bytes: Option<u64>,
    pub max_name_length: Option<usize>,
    pub reserved_names: Option<Vec<String>>,
    pub forbidden_extensions: Option<Vec<String>>,
    pub forbidden_substrings: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `synaudit.toml|yaml`.
pub struct SynauditConfig {
    pub legacy: Option<bool>,
    pub append: Option<bool>,
    pub output: Option<String>,
    pub report: Option<String>,
    pub support_url: Option<String>,
    #[serde(default)]
    pub rules: Option<RulesCfg>,
}

#[derive(Debug)]
/// Immutable rule parameters passed by reference into the evaluator.
pub struct RuleConfig {
    pub charset: Charset,
    /// Compiled forbidden-character pattern for `charset`.
    pub pattern: Regex,
    pub max_file_size_bytes: u64,
    pub max_name_length: usize,
    /// Lowercased, deduplicated.
    pub reserved_names: Vec<String>,
    /// Lowercased, deduplicated, leading dot included.
    pub forbidden_extensions: Vec<String>,
    /// Lowercased, deduplicated.
    pub forbidden_substrings: Vec<String>,
    pub support_url: String,
}

impl RuleConfig {
    /// Build the rule set from a preset charset plus `[rules]` overrides.
    /// Thresholds must be positive; comparison lists are normalized to
    /// lowercase with duplicates removed.
    pub fn new(
        charset: Charset,
        overrides: RulesCfg,
        support_url: String,
    ) -> Result<Self, ScanError> {
        let max_file_size_bytes = overrides
            .max_file_size_bytes
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_BYTES);
        if max_file_size_bytes == 0 {
            return Err(ScanError::config("rules.max_file_size_bytes must be positive"));
        }
        let max_name_length = overrides.max_name_length.unwrap_or(DEFAULT_MAX_NAME_LENGTH);
        if max_name_length == 0 {
            return Err(ScanError::config("rules.max_name_length must be positive"));
        }

        let pattern = Regex::new(charset.pattern())
            .map_err(|e| ScanError::config(format!("invalid character pattern: {e}")))?;

        Ok(Self {
            charset,
            pattern,
            max_file_size_bytes,
            max_name_length,
            reserved_names: normalize_list(overrides.reserved_names, DEFAULT_RESERVED_NAMES),
            forbidden_extensions: normalize_list(
                overrides.forbidden_extensions,
                DEFAULT_FORBIDDEN_EXTENSIONS,
            ),
            forbidden_substrings: normalize_list(
                overrides.forbidden_substrings,
                DEFAULT_FORBIDDEN_SUBSTRINGS,
            ),
            support_url,
        })
    }
}

/// Lowercase and deduplicate a comparison list, preserving first-seen
/// order; `defaults` apply when no override is configured.
fn normalize_list(values: Option<Vec<String>>, defaults: &[&str]) -> Vec<String> {
    let source: Vec<String> = match values {
        Some(v) => v,
        None => defaults.iter().map(|s| (*s).to_string()).collect(),
    };
    let mut out: Vec<String> = Vec::new();
    for v in source {
        let lower = v.trim().to_lowercase();
        if !lower.is_empty() && !out.contains(&lower) {
            out.push(lower);
        }
    }
    out
}

#[derive(Debug)]
/// Fully-resolved configuration used by the scan command after applying
/// precedence.
pub struct Effective {
    pub root: PathBuf,
    pub append: bool,
    pub output: String,
    pub report: PathBuf,
    pub rules: RuleConfig,
}

/// Load `SynauditConfig` from `synaudit.toml` or `synaudit.yaml|yml` if
/// present in `dir`.
pub fn load_config(dir: &Path) -> Option<SynauditConfig> {
    let toml_path = dir.join("synaudit.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: SynauditConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["synaudit.yaml", "synaudit.yml"] {
        let p = dir.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: SynauditConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and
/// defaults. `config_dir` is where the config file is looked up (the
/// working directory in the binary).
pub fn resolve_effective(
    config_dir: &Path,
    root: &str,
    cli_legacy: Option<bool>,
    cli_append: Option<bool>,
    cli_output: Option<&str>,
    cli_report: Option<&str>,
) -> Result<Effective, ScanError> {
    let cfg = load_config(config_dir).unwrap_or_default();

    let legacy = cli_legacy.or(cfg.legacy).unwrap_or(false);
    let append = cli_append.or(cfg.append).unwrap_or(false);
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let report = cli_report
        .map(|s| s.to_string())
        .or(cfg.report)
        .unwrap_or_else(|| DEFAULT_REPORT_FILE.to_string());
    let support_url = cfg
        .support_url
        .unwrap_or_else(|| DEFAULT_SUPPORT_URL.to_string());

    let charset = if legacy {
        Charset::Legacy
    } else {
        Charset::Standard
    };
    let rules = RuleConfig::new(charset, cfg.rules.unwrap_or_default(), support_url)?;

    Ok(Effective {
        root: PathBuf::from(root),
        append,
        output,
        report: PathBuf::from(report),
        rules,
    })
}
