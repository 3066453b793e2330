//! Error and result types shared across the crate.
//!
//! Parsing a single line fails with a [`FormatError`]; everything that touches
//! the cache (loading, convenience lookups) fails with a [`PasswdError`].

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use thiserror::Error;

/// Number of colon-separated fields in a passwd line.
pub const FIELD_COUNT: usize = 7;

pub type Result<T> = std::result::Result<T, PasswdError>;

/// Numeric column of a passwd line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Uid,
    Gid,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Uid => write!(f, "uid"),
            Field::Gid => write!(f, "gid"),
        }
    }
}

/// A line that is not a well-formed passwd entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("passwd line had wrong number of fields {found} != {}", FIELD_COUNT)]
    FieldCount { found: usize },

    #[error("passwd line had badly formatted {field} '{value}'")]
    InvalidNumber { field: Field, value: String },
}

#[derive(Debug, Error)]
pub enum PasswdError {
    /// The account file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line failed to parse while malformed lines abort the load.
    #[error("line {line}: {source}")]
    Malformed {
        /// 1-based line number in the source file.
        line: usize,
        #[source]
        source: FormatError,
    },

    #[error("no such user with username '{username}'")]
    NotFound { username: String },
}

impl PasswdError {
    pub fn not_found(username: impl Into<String>) -> Self {
        PasswdError::NotFound {
            username: username.into(),
        }
    }

    /// True for the expected "no such user" outcome of a convenience lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PasswdError::NotFound { .. })
    }
}
