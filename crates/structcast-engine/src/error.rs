use std::fmt;

/// Result type for structcast-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a report
#[derive(Debug)]
pub enum Error {
    /// An exclusion pattern failed to compile
    Pattern {
        pattern: String,
        source: regex::Error,
    },
    /// The root value is not a record, even after stripping one optional level
    InvalidRootKind { found: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pattern { pattern, source } => {
                write!(f, "invalid exclusion pattern {:?}: {}", pattern, source)
            }
            Error::InvalidRootKind { found } => {
                write!(f, "root value must be a record, found {}", found)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Pattern { source, .. } => Some(source),
            Error::InvalidRootKind { .. } => None,
        }
    }
}
