//! Sample domain model.
//!
//! # Responsibility
//! - Represent one measurement taken from an abstract process.
//! - Keep identity (`uid`) stable across every storage backend.
//!
//! # Invariants
//! - `uid` is assigned at construction time and immutable thereafter.
//! - `set_result(SampleResult::All)` is a no-op; the wildcard is a filter
//!   value, never a stored classification.
//! - Equality is full-field (uid, date, result, exact value); ordering
//!   helpers compare by date string only.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Classification of a sample's outcome.
///
/// `All` is a wildcard meta-value recognized by list filters. Insert paths
/// reject it and `Sample::set_result` ignores it, so stored samples only
/// ever carry one of the concrete outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SampleResult {
    True,
    False,
    Uncertain,
    All,
}

impl SampleResult {
    /// Stable wire name, as stored by both the file and document formats.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Uncertain => "UNCERTAIN",
            Self::All => "ALL",
        }
    }
}

impl Display for SampleResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One measurement: stable uid, measured value, opaque date tag and result.
///
/// The date is deliberately kept as an uninterpreted string; validating or
/// parsing it is outside this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    uid: String,
    #[serde(rename = "sampleValue")]
    value: f64,
    #[serde(rename = "sampleDate")]
    date: String,
    #[serde(rename = "sampleResult")]
    result: SampleResult,
}

impl Sample {
    /// Creates a sample with a freshly generated unique id.
    pub fn new(value: f64, date: impl Into<String>, result: SampleResult) -> Self {
        Self::with_uid(Uuid::new_v4().to_string(), value, date, result)
    }

    /// Reconstructs a sample with a caller-provided uid.
    ///
    /// Used when rehydrating records from a backend; uniqueness of the uid
    /// is the caller's responsibility on this path.
    pub fn with_uid(
        uid: impl Into<String>,
        value: f64,
        date: impl Into<String>,
        result: SampleResult,
    ) -> Self {
        Self {
            uid: uid.into(),
            value,
            date: date.into(),
            result,
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn result(&self) -> SampleResult {
        self.result
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Replaces the classification, ignoring the wildcard.
    ///
    /// Setting `SampleResult::All` keeps the previous classification.
    pub fn set_result(&mut self, result: SampleResult) {
        if result == SampleResult::All {
            return;
        }
        self.result = result;
    }

    /// Date-only ordering used for sorting sample lists.
    ///
    /// Kept as a named helper instead of `Ord`: full-field equality and
    /// date-only ordering are mutually inconsistent under Rust's trait
    /// contracts.
    pub fn cmp_by_date(&self, other: &Sample) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl Display for Sample {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sample uid={} value={} date={} result={}",
            self.uid, self.value, self.date, self.result
        )
    }
}
