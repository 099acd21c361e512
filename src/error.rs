//! Errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error as ThisError;

/// An error raised by URL construction, serialization or configuration loading.
///
/// Irregular inputs (odd percent-encoding, malformed URLs, unmatched brackets
/// in query strings) never produce this error; they are handled on a
/// best-effort basis. This error is reserved for structurally impossible
/// requests and for configuration failures.
#[derive(Debug, ThisError)]
#[error(transparent)]
pub struct Error {
    /// Inner error representation.
    #[from]
    repr: ErrorRepr,
}

impl Error {
    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match &self.repr {
            ErrorRepr::NotAbsolute(_) | ErrorRepr::MissingServerVar(_) => {
                ErrorKind::InvalidArgument
            }
            ErrorRepr::SegmentWithSlash(_) => ErrorKind::Domain,
            ErrorRepr::AmbiguousPath(_) => ErrorKind::AmbiguousPath,
            ErrorRepr::Io { .. }
            | ErrorRepr::MalformedRecord { .. }
            | ErrorRepr::EmptyIndexList { .. } => ErrorKind::Config,
        }
    }

    /// Creates an error for a URL that was required to be absolute.
    pub(crate) fn not_absolute(url: &str) -> Self {
        ErrorRepr::NotAbsolute(url.to_owned()).into()
    }

    /// Creates an error for a missing server variable.
    pub(crate) fn missing_server_var(key: &'static str) -> Self {
        ErrorRepr::MissingServerVar(key).into()
    }

    /// Creates an error for a path segment containing a slash.
    pub(crate) fn segment_with_slash(segment: &str) -> Self {
        ErrorRepr::SegmentWithSlash(segment.to_owned()).into()
    }

    /// Creates an error for a path that would be read back as an authority.
    pub(crate) fn ambiguous_path(path: &str) -> Self {
        ErrorRepr::AmbiguousPath(path.to_owned()).into()
    }

    /// Creates an error for an unreadable configuration source.
    pub(crate) fn io(source_name: impl Into<PathBuf>, source: io::Error) -> Self {
        ErrorRepr::Io {
            source_name: source_name.into(),
            source,
        }
        .into()
    }

    /// Creates an error for a malformed configuration record.
    pub(crate) fn malformed_record(
        source_name: impl Into<PathBuf>,
        line: usize,
        reason: &'static str,
    ) -> Self {
        ErrorRepr::MalformedRecord {
            source_name: source_name.into(),
            line,
            reason,
        }
        .into()
    }

    /// Creates an error for a directory index source with no entries.
    pub(crate) fn empty_index_list(source_name: impl Into<PathBuf>) -> Self {
        ErrorRepr::EmptyIndexList {
            source_name: source_name.into(),
        }
        .into()
    }
}

/// Internal representation of [`Error`].
#[derive(Debug, ThisError)]
enum ErrorRepr {
    /// A base URL was not absolute.
    #[error("URL must be absolute: {0}")]
    NotAbsolute(String),
    /// A required server variable was missing.
    #[error("invalid server variables: missing {0:?} key")]
    MissingServerVar(&'static str),
    /// A path segment contained a slash.
    #[error("path segment may not have slashes: {0}")]
    SegmentWithSlash(String),
    /// A path without authority started with two slashes.
    #[error("the path cannot begin with two slash characters without an authority: {0}")]
    AmbiguousPath(String),
    /// A configuration source could not be read.
    #[error("couldn't read {}", source_name.display())]
    Io {
        /// Name (usually the path) of the source.
        source_name: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A configuration record could not be understood.
    #[error("invalid record at line {line} of {}: {reason}", source_name.display())]
    MalformedRecord {
        /// Name (usually the path) of the source.
        source_name: PathBuf,
        /// One-based line number.
        line: usize,
        /// What is wrong with the record.
        reason: &'static str,
    },
    /// A directory index source had no entries.
    #[error("no directory index names found in {}", source_name.display())]
    EmptyIndexList {
        /// Name (usually the path) of the source.
        source_name: PathBuf,
    },
}

/// Error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The caller passed an unusable argument, such as a relative base URL.
    InvalidArgument,
    /// A value violated its domain, such as a path segment with a slash.
    Domain,
    /// A path starting with `//` had to be written without an authority.
    AmbiguousPath,
    /// A configuration source was unreadable or malformed.
    Config,
}
