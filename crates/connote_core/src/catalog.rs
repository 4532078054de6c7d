//! Session catalog collaborator contract.
//!
//! # Responsibility
//! - Define the seam through which candidate conference sessions arrive.
//! - Keep catalog failures isolated from store integrity.
//!
//! # Invariants
//! - The store never calls the catalog itself; callers fetch candidates and
//!   pass one to `SessionStore::create_session_from_catalog`.
//! - An error or empty result leaves the note collection untouched.

use crate::model::catalog::CatalogSession;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure reported by a catalog implementation.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog backend could not be reached or answered unusably.
    Unavailable(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(details) => write!(f, "session catalog unavailable: {details}"),
        }
    }
}

impl Error for CatalogError {}

/// Source of candidate sessions for prefilling a new note session.
pub trait SessionCatalog {
    /// Fetches the current candidate list.
    fn fetch_sessions(&self) -> CatalogResult<Vec<CatalogSession>>;
}

/// Catalog that always returns an empty candidate list.
///
/// Default wiring for builds without a configured catalog backend; session
/// creation then falls back to manual entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyCatalog;

impl SessionCatalog for EmptyCatalog {
    fn fetch_sessions(&self) -> CatalogResult<Vec<CatalogSession>> {
        Ok(Vec::new())
    }
}
