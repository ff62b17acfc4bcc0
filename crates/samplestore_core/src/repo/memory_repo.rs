//! Transient in-process backend.
//!
//! # Responsibility
//! - Satisfy the full repository contract with a plain uid -> sample map.
//!
//! # Invariants
//! - Nothing survives the process; there is no persistence side channel.
//! - `retrieve` is the true lookup primitive; list operations derive from a
//!   full scan of the map values.

use crate::model::sample::{Sample, SampleResult};
use crate::repo::sample_repo::{RepoResult, SampleRepository};
use std::collections::HashMap;

/// In-memory repository keyed by sample uid.
///
/// Every operation is O(1) except the list operations, which scan all
/// stored values.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    samples: HashMap<String, Sample>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SampleRepository for MemoryRepository {
    fn list_samples(&self, filter: SampleResult) -> RepoResult<Vec<Sample>> {
        Ok(self
            .samples
            .values()
            .filter(|sample| filter == SampleResult::All || sample.result() == filter)
            .cloned()
            .collect())
    }

    fn insert_sample(&mut self, sample: Sample) -> RepoResult<bool> {
        if sample.result() == SampleResult::All {
            return Ok(false);
        }
        if self.samples.contains_key(sample.uid()) {
            return Ok(false);
        }

        self.samples.insert(sample.uid().to_string(), sample);
        Ok(true)
    }

    fn update_sample(&mut self, updated: &Sample) -> RepoResult<bool> {
        match self.samples.get_mut(updated.uid()) {
            Some(stored) => {
                stored.set_value(updated.value());
                stored.set_result(updated.result());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn upsert_sample(&mut self, sample: Sample) -> RepoResult<bool> {
        // The wildcard must never end up on a stored record, not even
        // through the overwrite path.
        if sample.result() == SampleResult::All {
            return Ok(false);
        }

        self.samples.insert(sample.uid().to_string(), sample);
        Ok(true)
    }

    fn delete_sample(&mut self, sample: &Sample) -> RepoResult<bool> {
        Ok(self.samples.remove(sample.uid()).is_some())
    }

    fn retrieve(&self, uid: &str) -> RepoResult<Option<Sample>> {
        Ok(self.samples.get(uid).cloned())
    }
}
