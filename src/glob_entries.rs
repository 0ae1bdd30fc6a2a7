use core::fmt;

use error_stack::{Context, Result, ResultExt};

/// Enumerates the filesystem entries currently matching a shell glob.
///
/// Rule evaluation needs "which entries does this glob expand to right now"
/// for rules without a path separator. It is injected as a capability so the
/// evaluator itself stays pure and tests can supply a canned listing.
pub trait GlobEntries {
    fn matching(&self, pattern: &str) -> Result<Vec<String>, Error>;
}

#[derive(Debug)]
pub enum Error {
    Pattern,
    Enumeration,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pattern => fmt.write_str("Error::Pattern"),
            Error::Enumeration => fmt.write_str("Error::Enumeration"),
        }
    }
}

impl Context for Error {}

/// Enumeration against the real filesystem, relative to the process working
/// directory for relative patterns.
#[derive(Debug, Default)]
pub struct FsGlobEntries;

impl GlobEntries for FsGlobEntries {
    fn matching(&self, pattern: &str) -> Result<Vec<String>, Error> {
        let paths = glob::glob(pattern).change_context(Error::Pattern)?;

        let mut entries: Vec<String> = Vec::new();
        for path in paths {
            let path = path.change_context(Error::Enumeration)?;
            entries.push(path.to_string_lossy().into_owned());
        }
        Ok(entries)
    }
}
