//! Shape checks on the bare file name, independent of any token list.

/// Sync clients hide files whose name starts with an underscore.
pub fn has_leading_underscore(name: &str) -> bool {
    name.starts_with('_')
}

/// Two or more consecutive periods anywhere in the name.
pub fn has_consecutive_periods(name: &str) -> bool {
    name.contains("..")
}

/// Name ends with a period.
pub fn has_trailing_period(name: &str) -> bool {
    name.ends_with('.')
}
