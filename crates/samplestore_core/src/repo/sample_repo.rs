//! Sample repository contract shared by all storage backends.
//!
//! # Responsibility
//! - Define the eight CRUD operations of the persistence abstraction.
//! - Define the fault model shared by every backend.
//!
//! # Invariants
//! - Duplicate inserts and missing records surface as `Ok(false)` /
//!   `Ok(None)`, not as errors.
//! - Backends that do not support an operation return
//!   `RepoError::Unsupported` instead of silently reporting failure.

use crate::db::DbError;
use crate::model::sample::{Sample, SampleResult};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepoError>;

/// Fault raised by repository operations.
///
/// Ordinary "did not happen" outcomes (duplicate uid, no matching record)
/// are boolean results on the operations themselves.
#[derive(Debug)]
pub enum RepoError {
    /// File-backend construction refused because the target path is occupied.
    AlreadyExists(PathBuf),
    /// The backing file denies the required access mode.
    AccessDenied {
        path: PathBuf,
        access: &'static str,
    },
    /// Read/write/delete failure against the backing file.
    Io(std::io::Error),
    /// JSON encode/decode failure. Decode failures propagate instead of
    /// degrading to an empty collection.
    Serialization(serde_json::Error),
    /// Document store transport or bootstrap failure.
    Db(DbError),
    /// The selected backend does not implement this operation.
    Unsupported {
        backend: &'static str,
        operation: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists(path) => {
                write!(f, "repository file already exists at `{}`", path.display())
            }
            Self::AccessDenied { path, access } => {
                write!(f, "no {access} access on `{}`", path.display())
            }
            Self::Io(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Unsupported { backend, operation } => {
                write!(f, "`{operation}` is not supported by the {backend} backend")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::AlreadyExists(_) | Self::AccessDenied { .. } | Self::Unsupported { .. } => None,
        }
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
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

/// Polymorphic CRUD contract for sample persistence.
///
/// Implemented by the transient, document-store and file backends. The
/// contract is object-safe so the composition root can hand out
/// `Box<dyn SampleRepository>`.
pub trait SampleRepository: std::fmt::Debug {
    /// Returns every stored sample whose result equals `filter`; the
    /// wildcard `SampleResult::All` returns the full collection. Order is
    /// backend-defined.
    fn list_samples(&self, filter: SampleResult) -> RepoResult<Vec<Sample>>;

    /// Returns every stored sample regardless of result.
    fn list_all_samples(&self) -> RepoResult<Vec<Sample>> {
        self.list_samples(SampleResult::All)
    }

    /// Adds a new record. Returns `Ok(false)` when the sample carries the
    /// wildcard result or its uid is already present.
    fn insert_sample(&mut self, sample: Sample) -> RepoResult<bool>;

    /// Inserts each element independently through the single-insert rule.
    ///
    /// Returns `Ok(true)` only if every element was inserted. A partial
    /// failure still performs all non-conflicting insertions.
    fn insert_samples(&mut self, samples: Vec<Sample>) -> RepoResult<bool> {
        let mut inserted_all = true;
        for sample in samples {
            if !self.insert_sample(sample)? {
                inserted_all = false;
            }
        }
        Ok(inserted_all)
    }

    /// Replaces the stored `value` and `result` of the record sharing
    /// `updated`'s uid; uid and date stay untouched. Returns `Ok(false)`
    /// when no such record exists.
    fn update_sample(&mut self, updated: &Sample) -> RepoResult<bool>;

    /// Inserts the sample if absent, overwrites it if present.
    fn upsert_sample(&mut self, sample: Sample) -> RepoResult<bool>;

    /// Removes the record matching the argument. Returns `Ok(false)` when
    /// nothing matched.
    fn delete_sample(&mut self, sample: &Sample) -> RepoResult<bool>;

    /// Returns the record with the given uid, or `Ok(None)` if absent.
    fn retrieve(&self, uid: &str) -> RepoResult<Option<Sample>>;
}
