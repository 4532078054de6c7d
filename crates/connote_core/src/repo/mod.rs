//! Persistence layer contracts and implementations.
//!
//! # Responsibility
//! - Define the whole-collection persistence contract for session notes.
//! - Isolate file and serialization details from store orchestration.
//!
//! # Invariants
//! - Every save rewrites the full collection; there is no partial write.
//! - Load errors are reported as typed values, never panics.

pub mod notes_file;
