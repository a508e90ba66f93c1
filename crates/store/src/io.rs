//! Byte transfer and directory helpers.
//!
//! Once the path codec has produced a concrete path, everything here is a
//! thin pass-through to blocking `std::fs` calls. Filesystem errors
//! propagate unchanged; there is no retry.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::error::StoreError;
use crate::file::{version_path, VersionedFile};
use crate::FileStore;
use timestamp::Timestamp;

impl FileStore {
    /// Writes `data` as a new version of `file` and returns the generated
    /// timestamp.
    ///
    /// The file's directory is created first (recursively, idempotent) and
    /// the version timestamp is taken from the current wall clock. Two
    /// writes of the same logical file within the same second address the
    /// same path; the second overwrites the first.
    pub fn write(&self, file: &dyn VersionedFile, data: &[u8]) -> Result<Timestamp, StoreError> {
        debug!(
            "writing file {}/{}.{}.?",
            file.dir(),
            file.name(),
            file.ext()
        );
        self.mkdir_all(file.dir())?;
        let ts = Timestamp::now();
        fs::write(self.resolve(version_path(file, ts)), data)?;
        Ok(ts)
    }

    /// Reads the version of `file` identified by `ts`.
    ///
    /// # Errors
    ///
    /// A missing version surfaces as [`StoreError::Io`] with kind
    /// [`io::ErrorKind::NotFound`].
    pub fn read(&self, file: &dyn VersionedFile, ts: Timestamp) -> Result<Vec<u8>, StoreError> {
        debug!(
            "reading file {}/{}.{}.{}",
            file.dir(),
            file.name(),
            file.ext(),
            ts
        );
        Ok(fs::read(self.resolve(version_path(file, ts)))?)
    }

    /// Deletes the version of `file` identified by `ts`.
    ///
    /// # Errors
    ///
    /// A missing version surfaces as [`StoreError::Io`] with kind
    /// [`io::ErrorKind::NotFound`].
    pub fn remove(&self, file: &dyn VersionedFile, ts: Timestamp) -> Result<(), StoreError> {
        debug!(
            "removing file {}/{}.{}.{}",
            file.dir(),
            file.name(),
            file.ext(),
            ts
        );
        Ok(fs::remove_file(self.resolve(version_path(file, ts)))?)
    }

    /// Returns whether a root-relative path exists.
    ///
    /// Not-found maps to `Ok(false)`; any other stat failure (permission
    /// denied, not-a-directory) surfaces as an error.
    pub fn path_exists<P: AsRef<Path>>(&self, rel: P) -> Result<bool, StoreError> {
        match fs::metadata(self.resolve(rel)) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Creates a root-relative directory and all parents. Idempotent.
    pub fn mkdir_all<P: AsRef<Path>>(&self, rel: P) -> Result<(), StoreError> {
        Ok(fs::create_dir_all(self.resolve(rel))?)
    }
}
