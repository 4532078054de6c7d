//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into session note-taking operations.
//! - Keep UI layers decoupled from storage details.

pub mod session_store;
