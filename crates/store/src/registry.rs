//! Type-tag → constructor registry.
//!
//! Callers register one constructor per file kind, then build
//! [`VersionedFile`] values by tag. Intended usage is
//! register-everything-then-construct; the map is guarded by a read-write
//! lock so concurrent registration and lookup are defined rather than
//! undefined.

use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::file::VersionedFile;

/// A caller-defined tag identifying a logical file type.
///
/// Callers declare their own constants:
///
/// ```rust
/// use store::FileKind;
///
/// const LEAGUE: FileKind = FileKind(0);
/// const ROSTER: FileKind = FileKind(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileKind(pub u32);

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Constructor arguments: type-erased values the constructor downcasts to
/// its parameter types.
pub type FileArgs<'a> = &'a [&'a dyn Any];

/// A function building a file value from type-erased arguments, supporting
/// parameterized file types (season numbers, team ids, dates).
pub type Constructor = Box<dyn Fn(FileArgs<'_>) -> Box<dyn VersionedFile> + Send + Sync>;

/// Errors from registry lookups.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// No constructor is registered for the kind. This is a caller
    /// programming error; construction cannot proceed.
    #[error("file kind {0} not registered")]
    Unregistered(FileKind),
}

/// Registry mapping file kinds to their constructors.
#[derive(Default)]
pub struct FileRegistry {
    constructors: RwLock<HashMap<FileKind, Constructor>>,
}

impl FileRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `constructor` for `kind`, replacing any previous
    /// registration.
    pub fn register(&self, kind: FileKind, constructor: Constructor) {
        self.constructors.write().insert(kind, constructor);
    }

    /// Builds a file value for `kind` from `args`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Unregistered`] if no constructor was registered for
    /// `kind`.
    pub fn construct(
        &self,
        kind: FileKind,
        args: FileArgs<'_>,
    ) -> Result<Box<dyn VersionedFile>, RegistryError> {
        let constructors = self.constructors.read();
        let constructor = constructors
            .get(&kind)
            .ok_or(RegistryError::Unregistered(kind))?;
        Ok(constructor(args))
    }
}

impl fmt::Debug for FileRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileRegistry")
            .field("registered", &self.constructors.read().len())
            .finish()
    }
}
