//! Core domain logic for Connote conference session notes.
//! This crate is the single source of truth for business invariants.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use catalog::{CatalogError, CatalogResult, EmptyCatalog, SessionCatalog};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{CatalogResponse, CatalogSession};
pub use model::session::{
    DrawingElement, DrawingPath, ElementId, NoteElement, PhotoElement, Point, Session, SessionId,
    TextElement,
};
pub use repo::notes_file::{
    default_store_path, JsonNotesRepository, NotesRepository, RepoError, RepoResult,
    STORE_FILE_NAME,
};
pub use service::session_store::{SessionStore, UNTITLED_SESSION_TITLE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
