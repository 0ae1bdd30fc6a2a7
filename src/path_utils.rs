use std::path::MAIN_SEPARATOR;

pub(crate) fn contains_separator(pattern: &str) -> bool {
    pattern.contains(MAIN_SEPARATOR)
}

/// Strip exactly one trailing separator, if present.
pub(crate) fn strip_trailing_separator(pattern: &str) -> &str {
    pattern.strip_suffix(MAIN_SEPARATOR).unwrap_or(pattern)
}

/// Strip exactly one leading separator, if present.
pub(crate) fn strip_leading_separator(pattern: &str) -> &str {
    pattern.strip_prefix(MAIN_SEPARATOR).unwrap_or(pattern)
}

/// True when `path` lies beneath the directory named by `prefix`,
/// i.e. `path` starts with `prefix` followed by a separator.
pub(crate) fn is_descendant_of(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with(MAIN_SEPARATOR))
}
