//! Fixed-list name checks: reserved names, forbidden extensions, and
//! forbidden substrings.
//!
//! Comparison lists are lowercased and deduplicated at configuration time;
//! callers pass the lowercased leaf name or extension.

/// Exact match of the whole file name against the reserved list. The name
/// must equal a reserved entry outright; a reserved stem followed by an
/// extension does not match.
pub fn reserved_match<'a>(reserved: &'a [String], lower_name: &str) -> Option<&'a str> {
    reserved
        .iter()
        .find(|n| n.as_str() == lower_name)
        .map(String::as_str)
}

/// Exact match of the extension (leading dot included) against the
/// forbidden-extension list.
pub fn extension_match<'a>(extensions: &'a [String], lower_ext: &str) -> Option<&'a str> {
    if lower_ext.is_empty() {
        return None;
    }
    extensions
        .iter()
        .find(|e| e.as_str() == lower_ext)
        .map(String::as_str)
}

/// Every configured substring contained in the name, at most once per
/// configured entry regardless of how often it occurs.
pub fn substring_matches<'a>(substrings: &'a [String], lower_name: &str) -> Vec<&'a str> {
    substrings
        .iter()
        .filter(|s| lower_name.contains(s.as_str()))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_reserved_is_exact_not_prefix() {
        let reserved = list(&["con", "nul"]);
        assert_eq!(reserved_match(&reserved, "con"), Some("con"));
        assert_eq!(reserved_match(&reserved, "content"), None);
        assert_eq!(reserved_match(&reserved, "nul.txt"), None);
    }

    #[test]
    fn test_extension_match_needs_extension() {
        let exts = list(&[".tmp", ".swf"]);
        assert_eq!(extension_match(&exts, ".tmp"), Some(".tmp"));
        assert_eq!(extension_match(&exts, ".txt"), None);
        assert_eq!(extension_match(&exts, ""), None);
    }

    #[test]
    fn test_substring_reported_once_per_entry() {
        let subs = list(&["_vti_"]);
        assert_eq!(substring_matches(&subs, "_vti_foo_vti_bar"), vec!["_vti_"]);
        assert!(substring_matches(&subs, "plain").is_empty());
    }
}
