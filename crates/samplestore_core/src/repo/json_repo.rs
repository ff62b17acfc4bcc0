//! Flat-file JSON backend.
//!
//! # Responsibility
//! - Keep the whole collection as one JSON array in a single file.
//! - Delegate raw file lifecycle to `JsonFileHandler`.
//!
//! # Invariants
//! - Every mutating operation runs load -> mutate in memory -> persist the
//!   full collection; there is no incremental write path.
//! - Insertion order is preserved within one load cycle.
//! - A payload that fails to decode propagates as a serialization fault
//!   instead of degrading to an empty collection.

use crate::model::sample::{Sample, SampleResult};
use crate::repo::json_file::JsonFileHandler;
use crate::repo::sample_repo::{RepoError, RepoResult, SampleRepository};
use std::path::PathBuf;

const BACKEND: &str = "json-file";

/// Repository persisting samples as a JSON array on disk.
///
/// The repository exclusively owns its backing file until `close`.
#[derive(Debug)]
pub struct JsonFileRepository {
    handler: JsonFileHandler,
}

impl JsonFileRepository {
    /// Creates a repository at a fresh path.
    ///
    /// Fails with `RepoError::AlreadyExists` when the path is occupied,
    /// leaving the existing file untouched.
    pub fn create(path: impl Into<PathBuf>) -> RepoResult<Self> {
        Ok(Self {
            handler: JsonFileHandler::create(path)?,
        })
    }

    /// Attaches to a previously created repository file.
    pub fn open(path: impl Into<PathBuf>) -> RepoResult<Self> {
        Ok(Self {
            handler: JsonFileHandler::open(path)?,
        })
    }

    /// Explicit teardown: removes the backing file.
    pub fn close(self) -> RepoResult<()> {
        self.handler.delete()
    }

    fn load_collection(&self) -> RepoResult<Vec<Sample>> {
        let json = self.handler.load()?;
        Ok(serde_json::from_str(&json)?)
    }

    fn save_collection(&self, samples: &[Sample]) -> RepoResult<()> {
        let json = serde_json::to_string(samples)?;
        self.handler.save(&json)
    }
}

impl SampleRepository for JsonFileRepository {
    fn list_samples(&self, filter: SampleResult) -> RepoResult<Vec<Sample>> {
        let mut samples = self.load_collection()?;
        if filter != SampleResult::All {
            samples.retain(|sample| sample.result() == filter);
        }
        Ok(samples)
    }

    fn insert_sample(&mut self, sample: Sample) -> RepoResult<bool> {
        if sample.result() == SampleResult::All {
            return Ok(false);
        }

        let mut samples = self.load_collection()?;
        if samples.iter().any(|stored| stored.uid() == sample.uid()) {
            return Ok(false);
        }

        samples.push(sample);
        self.save_collection(&samples)?;
        Ok(true)
    }

    fn update_sample(&mut self, updated: &Sample) -> RepoResult<bool> {
        let mut samples = self.load_collection()?;

        // uid is assumed unique within the collection; the first match is
        // the only match.
        let mut matched = false;
        for stored in samples.iter_mut() {
            if stored.uid() == updated.uid() {
                stored.set_value(updated.value());
                stored.set_result(updated.result());
                matched = true;
                break;
            }
        }

        // The collection is persisted regardless; the return value alone
        // reflects whether a record matched.
        self.save_collection(&samples)?;
        Ok(matched)
    }

    fn upsert_sample(&mut self, _sample: Sample) -> RepoResult<bool> {
        Err(RepoError::Unsupported {
            backend: BACKEND,
            operation: "upsert_sample",
        })
    }

    fn delete_sample(&mut self, sample: &Sample) -> RepoResult<bool> {
        let mut samples = self.load_collection()?;

        let found = samples.iter().position(|stored| stored == sample);
        if let Some(index) = found {
            samples.remove(index);
        }

        self.save_collection(&samples)?;
        Ok(found.is_some())
    }

    fn retrieve(&self, _uid: &str) -> RepoResult<Option<Sample>> {
        Err(RepoError::Unsupported {
            backend: BACKEND,
            operation: "retrieve",
        })
    }
}
