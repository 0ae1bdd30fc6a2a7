//! Gitignore-style path matching: load glob rules from an ignore file and
//! test candidate paths against them, first matching rule wins.

pub mod glob_entries;
mod matcher;
mod path_utils;
mod pattern_set;

pub use glob_entries::{FsGlobEntries, GlobEntries};
pub use pattern_set::PatternSet;
