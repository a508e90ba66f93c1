//! The `VersionedFile` capability contract and the path codec.
//!
//! A logical file is identified by three strings — directory, base name,
//! extension — and nothing else. The store never constructs these values
//! itself; callers implement the trait (directly, or through
//! [`FileRegistry`](crate::FileRegistry) constructors) and the store turns
//! the contract plus a [`Timestamp`] into a concrete on-disk path.

use std::path::PathBuf;
use timestamp::Timestamp;

/// The contract a caller-defined logical file type must satisfy.
///
/// Pure data: the three accessors expose a root-relative directory, a base
/// filename, and an extension, and nothing here touches the filesystem.
pub trait VersionedFile: std::fmt::Debug {
    /// Directory path relative to the store root.
    ///
    /// May contain `/`. Example: `"2023/league"` or `"catalog"`.
    fn dir(&self) -> String;

    /// Base filename without extension or timestamp.
    ///
    /// Must not contain the path separator.
    /// Example: `"league"` or `"roster-12-2023-10-19"`.
    fn name(&self) -> String;

    /// File extension without the leading dot. May be multi-segment for
    /// compressed files, already dot-joined. Must not be empty.
    ///
    /// Examples: `"json"`, `"txt"`, `"csv.gz"`.
    fn ext(&self) -> String;
}

/// Builds the canonical root-relative path for one version of a file:
/// `{dir}/{name}.{ext}.{timestamp}`.
///
/// This is the single source of truth for on-disk naming; the scanner in
/// [`crate::scan`] is its inverse. The extension is inserted verbatim, so a
/// multi-segment extension contributes multiple dot-separated tokens to the
/// filename.
///
/// Example: `2023/league/league.txt.20231019140523`.
pub fn version_path(file: &dyn VersionedFile, version: Timestamp) -> PathBuf {
    PathBuf::from(format!(
        "{}/{}.{}.{}",
        file.dir(),
        file.name(),
        file.ext(),
        version
    ))
}
