//! Error types for store operations and filename matching.

use thiserror::Error;
use timestamp::TimestampError;

/// Errors from `FileStore` operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No versions of the file exist. Returned by
    /// [`FileStore::last_version`](crate::FileStore::last_version); distinct
    /// from an empty-but-existing directory (which yields an empty listing)
    /// and from filesystem failures.
    #[error("no version found")]
    NoVersions,

    /// An underlying filesystem error, propagated unchanged. A missing file
    /// in `read`/`remove` surfaces here with kind
    /// [`std::io::ErrorKind::NotFound`].
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a filename does not match a logical file.
///
/// [`detect`](crate::detect) reports each failure mode separately so that a
/// caller can chain several file types against one filename and learn which
/// (if any) matches — and, when none does, why each candidate was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// The filename does not start with the file's base name.
    #[error("filename {filename:?} does not match file name {expected:?}")]
    NameMismatch { filename: String, expected: String },

    /// The base name is not followed by a dot.
    #[error("filename {filename:?} has invalid format, expected dot after name")]
    MissingDot { filename: String },

    /// Fewer than two dot-separated tokens follow the base name, so there
    /// is no extension/timestamp boundary.
    #[error("filename {filename:?} has invalid format, expected ext.timestamp")]
    MissingTimestamp { filename: String },

    /// The reassembled extension does not equal the expected one.
    #[error("filename {filename:?} has extension {actual:?} but expected {expected:?}")]
    ExtensionMismatch {
        filename: String,
        actual: String,
        expected: String,
    },

    /// The final token is not a canonical timestamp.
    #[error("filename {filename:?} has invalid timestamp: {source}")]
    BadTimestamp {
        filename: String,
        source: TimestampError,
    },
}
