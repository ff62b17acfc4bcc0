//! Repository contract and storage backend implementations.
//!
//! # Responsibility
//! - Define the polymorphic CRUD contract every backend satisfies.
//! - Keep storage details (map, document collection, backing file) inside
//!   each backend module.
//!
//! # Invariants
//! - "not found" and "duplicate" conditions are boolean outcomes, never
//!   errors; `RepoError` is reserved for I/O, permission, serialization and
//!   unsupported-capability faults.
//! - Callers depend on `SampleRepository` only; one concrete backend is
//!   selected at the composition root (`factory`).

pub mod document_repo;
pub mod factory;
pub mod json_file;
pub mod json_repo;
pub mod memory_repo;
pub mod sample_repo;
