//! Version discovery: directory scans and single-filename matching.
//!
//! The version scanner is the inverse of the path codec in
//! [`crate::file`]. It answers two questions: which entries in a directory
//! are versions of a given logical file, and does one specific filename
//! match (and if not, why not).
//!
//! Matching a candidate filename against a file proceeds in order:
//!
//! 1. the candidate must start with `name()` exactly (byte comparison);
//! 2. the next character must be `.`;
//! 3. the remainder splits on `.` into at least two tokens;
//! 4. all tokens but the last, rejoined with `.`, must equal `ext()` —
//!    this is how a multi-segment extension such as `csv.gz` is validated
//!    as a unit, and why segment order matters;
//! 5. the last token must parse as a canonical [`Timestamp`].
//!
//! [`detect`] applies all five steps to one filename and reports which step
//! rejected it. [`FileStore::find`] applies the same match to a directory
//! listing, additionally skipping entries that are directories.
//! [`FileStore::versions`] is deliberately looser: it applies steps 1-2 and
//! requires only that the final token parse as a timestamp, accepting any
//! extension under the matching prefix.

use std::fs;
use std::io;
use tracing::warn;

use crate::error::{DetectError, StoreError};
use crate::file::VersionedFile;
use crate::FileStore;
use timestamp::Timestamp;

/// Checks whether `filename` matches `file`'s naming pattern and extracts
/// the version timestamp. No filesystem access.
///
/// Expected shape: `name.ext.timestamp` or `name.ext1.ext2.timestamp`.
///
/// # Errors
///
/// Each rejection reason is a distinct [`DetectError`] variant, so a caller
/// can try several logical file types against one filename and inspect why
/// each candidate failed.
pub fn detect(filename: &str, file: &dyn VersionedFile) -> Result<Timestamp, DetectError> {
    let fname = file.name();
    let fext = file.ext();

    let rest = filename
        .strip_prefix(&fname)
        .ok_or_else(|| DetectError::NameMismatch {
            filename: filename.to_string(),
            expected: fname.clone(),
        })?;

    let rest = rest.strip_prefix('.').ok_or_else(|| DetectError::MissingDot {
        filename: filename.to_string(),
    })?;

    let tokens: Vec<&str> = rest.split('.').collect();
    // At least extension.timestamp after the name.
    let (ts_token, ext_tokens) = match tokens.split_last() {
        Some((ts_token, ext_tokens)) if !ext_tokens.is_empty() => (ts_token, ext_tokens),
        _ => {
            return Err(DetectError::MissingTimestamp {
                filename: filename.to_string(),
            })
        }
    };

    // Rejoin everything before the timestamp and compare as a unit; no
    // reordering or backtracking across segments.
    let actual = ext_tokens.join(".");
    if actual != fext {
        return Err(DetectError::ExtensionMismatch {
            filename: filename.to_string(),
            actual,
            expected: fext,
        });
    }

    Timestamp::parse(ts_token).map_err(|source| DetectError::BadTimestamp {
        filename: filename.to_string(),
        source,
    })
}

impl FileStore {
    /// Returns all versions of `file`, newest first.
    ///
    /// Matching is by name prefix plus a parseable trailing timestamp; the
    /// extension is not validated token-by-token (use [`FileStore::find`]
    /// for the strict match). Entries whose prefix matches but which carry
    /// no dot after the name, or whose final token is not a timestamp, are
    /// logged and skipped.
    ///
    /// A missing directory yields an empty vector, not an error.
    pub fn versions(&self, file: &dyn VersionedFile) -> Result<Vec<Timestamp>, StoreError> {
        let dir = file.dir();
        let entries = match self.sorted_entries(&dir)? {
            Some(entries) => entries,
            None => return Ok(Vec::new()),
        };

        let fname = file.name();
        let mut versions = Vec::new();
        for (entry_name, _) in &entries {
            let rest = match entry_name.strip_prefix(&fname) {
                Some(rest) => rest,
                None => continue,
            };
            // next char has to be a dot
            let rest = match rest.strip_prefix('.') {
                Some(rest) => rest,
                None => {
                    warn!("unexpected file: {}/{}", dir, entry_name);
                    continue;
                }
            };
            let last = rest.rsplit('.').next().unwrap_or(rest);
            match Timestamp::parse(last) {
                Ok(ts) => versions.push(ts),
                Err(_) => warn!("unexpected timestamp for file: {}/{}", dir, entry_name),
            }
        }
        Ok(versions)
    }

    /// Searches an explicit directory for versions of `file`, newest first.
    ///
    /// Applies the full match (extension validated exactly); entries that
    /// are themselves directories are skipped regardless of name shape.
    /// Files with an invalid trailing timestamp are logged and skipped;
    /// other mismatches are skipped silently.
    ///
    /// A missing directory yields an empty vector, not an error.
    pub fn find(&self, dir: &str, file: &dyn VersionedFile) -> Result<Vec<Timestamp>, StoreError> {
        let entries = match self.sorted_entries(dir)? {
            Some(entries) => entries,
            None => return Ok(Vec::new()),
        };

        let mut results = Vec::new();
        for (entry_name, is_dir) in &entries {
            if *is_dir {
                continue;
            }
            match detect(entry_name, file) {
                Ok(ts) => results.push(ts),
                Err(DetectError::BadTimestamp { .. }) => {
                    warn!("unexpected timestamp for file: {}/{}", dir, entry_name);
                }
                Err(_) => {}
            }
        }
        Ok(results)
    }

    /// Returns the most recent version of `file`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NoVersions`] if no versions exist — distinct from the
    /// empty result a missing directory produces in [`FileStore::versions`].
    pub fn last_version(&self, file: &dyn VersionedFile) -> Result<Timestamp, StoreError> {
        self.versions(file)?
            .into_iter()
            .next()
            .ok_or(StoreError::NoVersions)
    }

    /// Returns `true` if at least one version of `file` exists.
    pub fn has_some(&self, file: &dyn VersionedFile) -> Result<bool, StoreError> {
        Ok(!self.versions(file)?.is_empty())
    }

    /// Lists `rel` and returns `(file_name, is_dir)` pairs sorted by name
    /// descending. The timestamp suffix is fixed-width, so descending name
    /// order is descending chronological order. Returns `None` if the
    /// directory does not exist.
    fn sorted_entries(&self, rel: &str) -> Result<Option<Vec<(String, bool)>>, StoreError> {
        let iter = match fs::read_dir(self.resolve(rel)) {
            Ok(iter) => iter,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for entry in iter {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            entries.push((entry.file_name().to_string_lossy().into_owned(), is_dir));
        }
        entries.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(Some(entries))
    }
}
