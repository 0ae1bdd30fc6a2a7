use std::path::Path;

use tracing::debug;

use crate::glob_entries::{FsGlobEntries, GlobEntries};
use crate::matcher;

/// The ordered rule lines of one ignore file.
///
/// Rules keep file order and the first matching rule decides; later rules,
/// negations included, are not consulted once a rule matches.
pub struct PatternSet {
    rules: Vec<String>,
}

impl PatternSet {
    /// Splits `contents` on newlines, keeping every line verbatim. Blank and
    /// comment lines are skipped during matching, not here.
    pub fn from_contents(contents: &str) -> Self {
        Self {
            rules: contents.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Reads rules from the ignore file at `path`. A missing or unreadable
    /// file means "ignore nothing" and yields an empty set, never an error.
    pub fn from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_contents(&contents),
            Err(error) => {
                debug!("no ignore file at {}: {error}", path.display());
                Self::empty()
            }
        }
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True iff some rule, in file order, matches `path`. Glob rules without
    /// a separator are expanded against the current working directory.
    pub fn matches(&self, path: &str) -> bool {
        self.matches_with(path, &FsGlobEntries)
    }

    /// Like [`matches`](Self::matches), with a caller-supplied directory
    /// listing capability.
    pub fn matches_with(&self, path: &str, entries: &impl GlobEntries) -> bool {
        self.rules.iter().any(|rule| matcher::matches_rule(rule, path, entries))
    }
}

#[cfg(test)]
mod tests {
    use error_stack::Result;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::glob_entries::Error;

    struct NoEntries;

    impl GlobEntries for NoEntries {
        fn matching(&self, _pattern: &str) -> Result<Vec<String>, Error> {
            Ok(vec![])
        }
    }

    #[test]
    fn from_contents_keeps_every_line_in_order() {
        let set = PatternSet::from_contents("# header\n\nbuild/\n*.log");
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn from_file_missing_means_empty_set() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let set = PatternSet::from_file(&tmp_dir.path().join(".iserverignore"));
        assert!(set.is_empty());
        assert!(!set.matches_with("anything", &NoEntries));
    }

    #[test]
    fn from_file_reads_rules() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let ignore_path = tmp_dir.path().join(".iserverignore");
        std::fs::write(&ignore_path, "secrets/\n").unwrap();

        let set = PatternSet::from_file(&ignore_path);
        assert!(set.matches_with("secrets/key.pem", &NoEntries));
        assert!(!set.matches_with("public/index.html", &NoEntries));
    }

    #[test]
    fn first_matching_rule_wins() {
        // A later negation cannot re-include a path already matched.
        let set = PatternSet::from_contents("**/secret\n!**/secret");
        assert!(set.matches_with("a/secret", &NoEntries));
    }

    #[test]
    fn blank_and_comment_lines_change_nothing() {
        let with_noise = PatternSet::from_contents("# comment\n\nbuild/\n");
        let without = PatternSet::from_contents("build/");
        for path in ["build/a.o", "src/main.rs"] {
            assert_eq!(
                with_noise.matches_with(path, &NoEntries),
                without.matches_with(path, &NoEntries),
                "path={path:?}"
            );
        }
    }

    #[test]
    fn matching_is_idempotent() {
        let set = PatternSet::from_contents("a/**/b");
        assert_eq!(set.matches_with("a/x/b", &NoEntries), set.matches_with("a/x/b", &NoEntries));
    }
}
