//! Document-store backend over the embedded sample collection.
//!
//! # Responsibility
//! - Project `Sample` to/from its named-field document representation.
//! - Delegate storage to the `samples` collection opened via `crate::db`.
//!
//! # Invariants
//! - Document identity is the `_id` field, enforced by the collection's
//!   unique index; a constraint hit on insert is a duplicate outcome, not a
//!   fault.
//! - Delete matches the full reconstructed document; any differing
//!   projected field means no match.

use crate::model::sample::{Sample, SampleResult};
use crate::repo::sample_repo::{RepoError, RepoResult, SampleRepository};
use rusqlite::{Connection, ErrorCode};
use serde::{Deserialize, Serialize};

const BACKEND: &str = "document-store";

/// Wire shape of one stored document.
///
/// Field names are part of the external collection format and are
/// independent of the file backend's on-disk shape.
#[derive(Debug, Serialize, Deserialize)]
struct SampleDocument {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "sampleValue")]
    value: f64,
    #[serde(rename = "sampleResult")]
    result: SampleResult,
    #[serde(rename = "sampleDate")]
    date: String,
}

fn sample_to_document(sample: &Sample) -> SampleDocument {
    SampleDocument {
        id: sample.uid().to_string(),
        value: sample.value(),
        result: sample.result(),
        date: sample.date().to_string(),
    }
}

fn document_to_sample(document: SampleDocument) -> Sample {
    Sample::with_uid(document.id, document.value, document.date, document.result)
}

/// Repository backed by the embedded document collection.
///
/// Owns one connection for its whole lifetime; callers open it through
/// `db::open_store` (or `db::open_store_in_memory` in tests) and hand it
/// over at construction.
#[derive(Debug)]
pub struct DocumentRepository {
    conn: Connection,
}

impl DocumentRepository {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    fn find_document_json(&self, uid: &str) -> RepoResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT doc FROM samples WHERE json_extract(doc, '$._id') = ?1;")?;
        let mut rows = stmt.query([uid])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    fn replace_document(&self, uid: &str, document: &SampleDocument) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE samples SET doc = ?1 WHERE json_extract(doc, '$._id') = ?2;",
            [serde_json::to_string(document)?, uid.to_string()],
        )?;
        Ok(changed > 0)
    }
}

impl SampleRepository for DocumentRepository {
    fn list_samples(&self, filter: SampleResult) -> RepoResult<Vec<Sample>> {
        // The wildcard queries the whole collection. Querying it as a
        // stored value would match nothing, since no document ever
        // persists the wildcard.
        let (sql, params) = if filter == SampleResult::All {
            ("SELECT doc FROM samples;", Vec::new())
        } else {
            (
                "SELECT doc FROM samples WHERE json_extract(doc, '$.sampleResult') = ?1;",
                vec![filter.as_str().to_string()],
            )
        };

        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(rusqlite::params_from_iter(params))?;
        let mut samples = Vec::new();

        while let Some(row) = rows.next()? {
            let doc_json: String = row.get(0)?;
            let document: SampleDocument = serde_json::from_str(&doc_json)?;
            samples.push(document_to_sample(document));
        }

        Ok(samples)
    }

    fn insert_sample(&mut self, sample: Sample) -> RepoResult<bool> {
        if sample.result() == SampleResult::All {
            return Ok(false);
        }

        let doc_json = serde_json::to_string(&sample_to_document(&sample))?;
        match self
            .conn
            .execute("INSERT INTO samples (doc) VALUES (?1);", [doc_json])
        {
            Ok(_) => Ok(true),
            Err(err) if err.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) => {
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn update_sample(&mut self, updated: &Sample) -> RepoResult<bool> {
        let Some(doc_json) = self.find_document_json(updated.uid())? else {
            return Ok(false);
        };

        let stored: SampleDocument = serde_json::from_str(&doc_json)?;
        let mut stored = document_to_sample(stored);
        stored.set_value(updated.value());
        stored.set_result(updated.result());

        self.replace_document(updated.uid(), &sample_to_document(&stored))
    }

    fn upsert_sample(&mut self, sample: Sample) -> RepoResult<bool> {
        if sample.result() == SampleResult::All {
            return Ok(false);
        }

        let document = sample_to_document(&sample);
        if self.replace_document(sample.uid(), &document)? {
            return Ok(true);
        }

        let doc_json = serde_json::to_string(&document)?;
        self.conn
            .execute("INSERT INTO samples (doc) VALUES (?1);", [doc_json])?;
        Ok(true)
    }

    fn delete_sample(&mut self, sample: &Sample) -> RepoResult<bool> {
        // Matches the full reconstructed document, not the uid alone. A
        // sample whose projected fields differ from the stored document
        // deletes nothing.
        let doc_json = serde_json::to_string(&sample_to_document(sample))?;
        let changed = self
            .conn
            .execute("DELETE FROM samples WHERE doc = ?1;", [doc_json])?;
        Ok(changed > 0)
    }

    fn retrieve(&self, _uid: &str) -> RepoResult<Option<Sample>> {
        Err(RepoError::Unsupported {
            backend: BACKEND,
            operation: "retrieve",
        })
    }
}
