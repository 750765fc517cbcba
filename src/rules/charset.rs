//! Forbidden-character matching for file names.
//!
//! Two pattern presets exist: the standard set current tenants reject and a
//! legacy superset older site collections also refused. A run of adjacent
//! forbidden characters is reported as a single token.

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Forbidden-character pattern preset.
pub enum Charset {
    /// Characters the sync backend rejects today.
    #[default]
    Standard,
    /// Standard plus `# % ~ { }` for legacy site collections.
    Legacy,
}

impl Charset {
    /// Regex source for this preset. The `+` quantifier folds adjacent
    /// forbidden characters into one reported token.
    pub fn pattern(self) -> &'static str {
        match self {
            Charset::Standard => r#"[\\|*:?/<>"]+"#,
            Charset::Legacy => r##"[\\|*:?/<>"#%~{}]+"##,
        }
    }
}

/// Collect every distinct pattern match in `name`, in first-occurrence
/// order. An empty result means the name is clean.
pub fn find_forbidden(pattern: &Regex, name: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for m in pattern.find_iter(name) {
        let tok = m.as_str().to_string();
        if !tokens.contains(&tok) {
            tokens.push(tok);
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regex(cs: Charset) -> Regex {
        Regex::new(cs.pattern()).unwrap()
    }

    #[test]
    fn test_every_distinct_character_reported_in_order() {
        let re = regex(Charset::Standard);
        assert_eq!(find_forbidden(&re, "a:b*c.txt"), vec![":", "*"]);
    }

    #[test]
    fn test_repeated_character_reported_once() {
        let re = regex(Charset::Standard);
        assert_eq!(find_forbidden(&re, "a:b:c"), vec![":"]);
    }

    #[test]
    fn test_adjacent_run_is_one_token() {
        let re = regex(Charset::Standard);
        assert_eq!(find_forbidden(&re, "a::b"), vec!["::"]);
    }

    #[test]
    fn test_clean_name_yields_nothing() {
        let re = regex(Charset::Standard);
        assert!(find_forbidden(&re, "quarterly-report.xlsx").is_empty());
    }

    #[test]
    fn test_legacy_adds_hash_and_percent() {
        let std_re = regex(Charset::Standard);
        let legacy_re = regex(Charset::Legacy);
        assert!(find_forbidden(&std_re, "budget#2024%final").is_empty());
        assert_eq!(find_forbidden(&legacy_re, "budget#2024%final"), vec!["#", "%"]);
    }
}
