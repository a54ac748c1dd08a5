//! Repository contracts and storage implementations.
//!
//! # Responsibility
//! - Define the CRUD contract shared by every record collection.
//! - Isolate storage details (lock-guarded maps, SQLite, upload files) from
//!   service orchestration.
//!
//! # Invariants
//! - `create` always assigns a fresh id; caller ids are discarded.
//! - `update` re-stamps the target id onto the replacement record.
//! - `delete` is idempotent and never reports NotFound.
//! - `list` returns records in insertion order.

pub mod file_store;
pub mod memory_repo;
pub mod user_repo;

use crate::db::DbError;
use crate::model::document::Document;
use crate::model::habit::Habit;
use crate::model::task::Task;
use crate::model::RecordId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by in-memory and SQLite storage.
#[derive(Debug)]
pub enum RepoError {
    /// No record of `kind` carries `id`.
    NotFound { kind: &'static str, id: String },
    /// A uniqueness rule rejected the write.
    Conflict(String),
    InvalidData(String),
    Db(DbError),
    /// A writer panicked while holding the collection lock.
    Poisoned(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Conflict(message) => write!(f, "conflict: {message}"),
            Self::InvalidData(message) => write!(f, "invalid record data: {message}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Poisoned(kind) => write!(f, "{kind} collection lock poisoned"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// A record that can live in a `Repository`.
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable kind used in NotFound messages (`Task`, `Habit`, ...).
    const KIND: &'static str;

    fn id(&self) -> Option<&str>;
    fn assign_id(&mut self, id: RecordId);
}

impl Record for Task {
    const KIND: &'static str = "Task";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

impl Record for Habit {
    const KIND: &'static str = "Habit";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }
}

impl Record for Document {
    const KIND: &'static str = "Document";

    fn id(&self) -> Option<&str> {
        Some(self.id.as_str())
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

/// CRUD contract over one record collection.
pub trait Repository<T: Record>: Send + Sync {
    /// Stores `record` under a freshly generated id and returns the stored copy.
    fn create(&self, record: T) -> RepoResult<T>;
    /// Stores `record` under the id it already carries.
    ///
    /// Fails with `InvalidData` when the record has no id and `Conflict` when
    /// the id is taken.
    fn insert(&self, record: T) -> RepoResult<T>;
    fn list(&self) -> RepoResult<Vec<T>>;
    fn get(&self, id: &str) -> RepoResult<T>;
    /// Replaces the record at `id`, forcing the stored id back to `id`.
    fn update(&self, id: &str, record: T) -> RepoResult<T>;
    /// Mutates the record at `id` in place and returns the result.
    fn update_with(&self, id: &str, apply: &mut dyn FnMut(&mut T)) -> RepoResult<T>;
    /// Removes the record at `id`. Returns whether anything was removed.
    fn delete(&self, id: &str) -> RepoResult<bool>;
}

impl<T: Record, R: Repository<T> + ?Sized> Repository<T> for Arc<R> {
    fn create(&self, record: T) -> RepoResult<T> {
        (**self).create(record)
    }

    fn insert(&self, record: T) -> RepoResult<T> {
        (**self).insert(record)
    }

    fn list(&self) -> RepoResult<Vec<T>> {
        (**self).list()
    }

    fn get(&self, id: &str) -> RepoResult<T> {
        (**self).get(id)
    }

    fn update(&self, id: &str, record: T) -> RepoResult<T> {
        (**self).update(id, record)
    }

    fn update_with(&self, id: &str, apply: &mut dyn FnMut(&mut T)) -> RepoResult<T> {
        (**self).update_with(id, apply)
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        (**self).delete(id)
    }
}
