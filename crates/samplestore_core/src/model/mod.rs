//! Domain model for measurement samples.
//!
//! # Responsibility
//! - Define the canonical `Sample` record shared by every storage backend.
//! - Define the `SampleResult` classification including the wildcard filter.
//!
//! # Invariants
//! - A sample's `uid` is assigned at construction and never changes.
//! - `SampleResult::All` is a filter argument only; guarded mutation paths
//!   never store it on a sample.

pub mod sample;
