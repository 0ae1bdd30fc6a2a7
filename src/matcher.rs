use glob::{MatchOptions, Pattern};
use lazy_static::lazy_static;
use tracing::warn;

use crate::glob_entries::GlobEntries;
use crate::path_utils;

const DOUBLE_AST: &str = "**";

lazy_static! {
    // fnmatch(3) FNM_PATHNAME semantics: wildcards never cross a separator.
    static ref PATHNAME_OPTIONS: MatchOptions = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
}

/// Evaluates one raw rule line against one candidate path.
///
/// A blank or comment line never matches. A malformed glob or a failed
/// directory enumeration downgrades to "no match" for this rule only.
pub(crate) fn matches_rule(rule: &str, path: &str, entries: &impl GlobEntries) -> bool {
    // A blank line matches nothing, so it can serve as a separator for
    // readability.
    if rule.is_empty() {
        return false;
    }

    // A line starting with # is a comment. Escaping a literal leading # is
    // not handled.
    if rule.starts_with('#') {
        return false;
    }

    // Trailing spaces are insignificant. Escaped trailing spaces are not
    // handled.
    let rule = rule.strip_suffix(' ').unwrap_or(rule);

    // A "!" prefix negates this rule's own verdict.
    let negated = rule.starts_with('!');
    let rule = rule.strip_prefix('!').unwrap_or(rule);

    // A trailing separator means the rule names a directory. The separator
    // is stripped and the remainder matched as an ordinary pattern; no
    // file-vs-directory check is made against the filesystem.
    let rule = path_utils::strip_trailing_separator(rule);

    if rule.contains(DOUBLE_AST) {
        let matched = eval_double_ast(rule, path);
        return if negated { !matched } else { matched };
    }

    // Without a separator the rule is a shell glob expanded against the
    // entries currently on disk; it matches when the candidate equals one of
    // them exactly.
    if !path_utils::contains_separator(rule) {
        let found = match entries.matching(rule) {
            Ok(names) => names.iter().any(|name| name == path),
            Err(report) => {
                warn!("glob expansion failed for {rule:?}: {report:?}");
                return false;
            }
        };

        // A rule naming a directory covers everything beneath it, even when
        // the rule is negated.
        if !found && path_utils::is_descendant_of(path, rule) {
            return true;
        }

        return if negated { !found } else { found };
    }

    // With a separator the rule is matched against the candidate as a string,
    // wildcards stopping at separator boundaries.
    let matched = match Pattern::new(rule) {
        Ok(pattern) => pattern.matches_with(path, *PATHNAME_OPTIONS),
        Err(error) => {
            warn!("invalid glob {rule:?}: {error}");
            return false;
        }
    };

    if !matched && path_utils::is_descendant_of(path, rule) {
        return true;
    }

    if negated { !matched } else { matched }
}

fn eval_double_ast(pattern: &str, mut value: &str) -> bool {
    // A leading "**" matches in all directories: "**/foo" matches "foo"
    // anywhere in the tree, including as the tail of a longer final segment.
    if let Some(suffix) = pattern.strip_prefix(DOUBLE_AST) {
        return value.ends_with(path_utils::strip_leading_separator(suffix));
    }

    // A trailing "**" matches everything inside: "abc/**" matches every path
    // under "abc", at any depth.
    if let Some(prefix) = pattern.strip_suffix(DOUBLE_AST) {
        return value.starts_with(prefix);
    }

    // An interior "**" matches zero or more directories: "a/**/b" matches
    // "a/b", "a/x/b", "a/x/y/b". Walk the segments left to right against the
    // unconsumed tail of the candidate.
    let parts: Vec<&str> = pattern.split(DOUBLE_AST).collect();
    let last = parts.len() - 1;
    for (i, &part) in parts.iter().enumerate() {
        if i == 0 {
            if !value.starts_with(part) {
                return false;
            }
        } else if i == last {
            return value.ends_with(path_utils::strip_leading_separator(part));
        } else if !value.contains(part) {
            return false;
        }

        match value.find(part) {
            Some(index) => value = &value[index + part.len()..],
            None => return false,
        }
    }

    // Any other run of consecutive asterisks is invalid.
    false
}
