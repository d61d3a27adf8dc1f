//! # Record Store
//!
//! Persistence collaborator behind the student API. Implementations own the
//! canonical copy of every record; callers only ever see clones.

mod file;
mod memory;

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use super::model::Student;

pub use file::FileStudentStore;
pub use memory::InMemoryStudentStore;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Backing file exists but cannot be decoded
    #[error("Corrupt data file {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// Store selection is missing required settings
    #[error("Store misconfigured: {0}")]
    Misconfigured(String),

    /// A writer panicked while holding the record lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Keyed record store for students
///
/// `upsert` replaces any record sharing the identifier and assigns a fresh
/// one when the record has none. `delete_by_id` on an unknown identifier is
/// a successful no-op.
pub trait StudentStore: Send + Sync {
    /// Insert or replace a record, returning the stored copy
    fn upsert(&self, student: Student) -> StoreResult<Student>;

    /// Every record in the store's natural order
    fn find_all(&self) -> StoreResult<Vec<Student>>;

    /// Look up a single record
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Student>>;

    /// Remove a record if present
    fn delete_by_id(&self, id: &str) -> StoreResult<()>;

    /// Number of stored records
    fn count(&self) -> StoreResult<usize>;
}

/// Give the record an identifier if it lacks one and return the key
pub(crate) fn assign_id(student: &mut Student) -> String {
    match student.id() {
        Some(id) => id.to_string(),
        None => {
            let id = Uuid::new_v4().simple().to_string();
            student.set_id(id.clone());
            id
        }
    }
}
