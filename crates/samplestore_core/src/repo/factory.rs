//! Backend selection for the composition root.
//!
//! # Responsibility
//! - Map an explicit backend configuration to one concrete repository.
//!
//! # Invariants
//! - This is the single substitution point; callers hold a
//!   `Box<dyn SampleRepository>` and never depend on a concrete backend.

use crate::db::open_store;
use crate::repo::document_repo::DocumentRepository;
use crate::repo::json_repo::JsonFileRepository;
use crate::repo::memory_repo::MemoryRepository;
use crate::repo::sample_repo::{RepoResult, SampleRepository};
use std::path::PathBuf;

/// Explicit backend configuration.
///
/// Replaces ambient host/port/home-directory defaults; every location a
/// backend touches is named here by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    /// Transient in-process storage.
    Memory,
    /// Embedded document collection at the given database path.
    DocumentStore { db_path: PathBuf },
    /// Flat-file JSON repository created at the given fresh path.
    JsonFile { file_path: PathBuf },
}

/// Opens the repository selected by `config`.
///
/// The JSON file variant creates a fresh repository file and fails with
/// `RepoError::AlreadyExists` on an occupied path; reattaching to an
/// existing file goes through `JsonFileRepository::open` directly.
pub fn open_repository(config: &BackendConfig) -> RepoResult<Box<dyn SampleRepository>> {
    match config {
        BackendConfig::Memory => Ok(Box::new(MemoryRepository::new())),
        BackendConfig::DocumentStore { db_path } => {
            let conn = open_store(db_path)?;
            Ok(Box::new(DocumentRepository::new(conn)))
        }
        BackendConfig::JsonFile { file_path } => {
            Ok(Box::new(JsonFileRepository::create(file_path)?))
        }
    }
}
