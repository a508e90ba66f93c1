//! # Store — versioned local file store
//!
//! Stores arbitrary typed "files" in a local directory tree where every
//! write produces a new, immutably named, timestamped version instead of
//! overwriting prior content. There is no version index other than the
//! filesystem itself: the directory listing **is** the registry of
//! versions.
//!
//! ## Architecture
//!
//! ```text
//! Caller
//!   |
//!   |  Box<dyn VersionedFile>  (dir / name / ext capability contract,
//!   |                           built directly or via FileRegistry)
//!   v
//! ┌───────────────────────────────────────────────┐
//! │                  FILESTORE                    │
//! │                                               │
//! │ io.rs   → write / read / remove               │
//! │           path_exists / mkdir_all             │
//! │              |                                │
//! │              v                                │
//! │          version_path() codec                 │
//! │          {dir}/{name}.{ext}.{timestamp}       │
//! │                                               │
//! │ scan.rs → versions / find / last_version      │
//! │           has_some   (directory listing →     │
//! │                       ordered Timestamps)     │
//! │           detect     (single filename →       │
//! │                       Timestamp | why not)    │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module         | Purpose                                              |
//! |----------------|------------------------------------------------------|
//! | [`lib.rs`]     | `FileStore` struct, constructor, accessors           |
//! | [`file`]       | `VersionedFile` trait + `version_path` codec         |
//! | [`scan`]       | version discovery and filename matching              |
//! | [`io`]         | byte transfer and directory helpers                  |
//! | [`registry`]   | type-tag → constructor registry                      |
//! | [`error`]      | `StoreError` / `DetectError`                         |
//!
//! ## Filename Convention
//!
//! Every version lives at `{dir}/{name}.{ext}.{timestamp}` relative to the
//! store root, where the extension may itself contain dots (`csv.gz`) and
//! the timestamp is the canonical 14-digit form. Example:
//! `2023/league/league.txt.20231019140523`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use store::{FileStore, VersionedFile};
//!
//! #[derive(Debug)]
//! struct LeagueFile {
//!     season: i32,
//! }
//!
//! impl VersionedFile for LeagueFile {
//!     fn dir(&self) -> String {
//!         format!("{}/league", self.season)
//!     }
//!     fn name(&self) -> String {
//!         "league".to_string()
//!     }
//!     fn ext(&self) -> String {
//!         "txt".to_string()
//!     }
//! }
//!
//! let store = FileStore::new("./data");
//! let file = LeagueFile { season: 2023 };
//! let ts = store.write(&file, b"standings").unwrap();
//! let latest = store.last_version(&file).unwrap();
//! assert_eq!(latest, ts);
//! ```

mod error;
mod file;
mod io;
mod registry;
mod scan;

pub use error::{DetectError, StoreError};
pub use file::{version_path, VersionedFile};
pub use registry::{Constructor, FileArgs, FileKind, FileRegistry, RegistryError};
pub use scan::detect;
pub use timestamp::{Timestamp, TimestampError};

use std::path::{Path, PathBuf};

/// A versioned file store rooted at a single directory.
///
/// All paths handed to the store (`VersionedFile::dir()`, the `dir`
/// argument of [`FileStore::find`], the helpers) are interpreted relative
/// to this root. The store holds no other state; every operation is a
/// direct, blocking filesystem call.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`. The directory does not need to
    /// exist yet; `write` creates what it needs.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns the store's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a root-relative path to an absolute (or cwd-relative)
    /// filesystem path.
    pub(crate) fn resolve<P: AsRef<Path>>(&self, rel: P) -> PathBuf {
        self.root.join(rel)
    }
}

#[cfg(test)]
mod tests;
