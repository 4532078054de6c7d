//! Notes persistence contract and JSON file implementation.
//!
//! # Responsibility
//! - Provide whole-collection save/load over a single store file.
//! - Keep serialization and filesystem details inside this boundary.
//!
//! # Invariants
//! - `save_all` overwrites the full document; no dirty-tracking exists.
//! - `load_all` distinguishes a missing file (`Ok(None)`) from an unreadable
//!   or unparseable one (typed error), so callers can apply recovery policy.

use crate::model::session::Session;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Well-known store file name inside the application data directory.
pub const STORE_FILE_NAME: &str = "connote_sessions.json";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for the session collection store.
#[derive(Debug)]
pub enum RepoError {
    /// Filesystem read/write failure.
    Io(io::Error),
    /// In-memory collection could not be serialized.
    Serialize(serde_json::Error),
    /// Store file exists but does not parse as a session collection.
    Deserialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store file I/O failed: {err}"),
            Self::Serialize(err) => write!(f, "session collection failed to serialize: {err}"),
            Self::Deserialize(err) => write!(f, "store file failed to parse: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Deserialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for RepoError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Repository interface for the full session collection.
pub trait NotesRepository {
    /// Serializes the entire collection and overwrites the store file.
    fn save_all(&self, sessions: &[Session]) -> RepoResult<()>;
    /// Loads the collection, or `Ok(None)` when no store file exists yet.
    fn load_all(&self) -> RepoResult<Option<Vec<Session>>>;
}

/// Returns the well-known store file path under `base_dir`.
pub fn default_store_path(base_dir: impl AsRef<Path>) -> PathBuf {
    base_dir.as_ref().join(STORE_FILE_NAME)
}

/// Single-file JSON repository holding the whole session collection.
pub struct JsonNotesRepository {
    path: PathBuf,
}

impl JsonNotesRepository {
    /// Creates a repository backed by the given store file path.
    ///
    /// The file and its parent directory are created lazily on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NotesRepository for JsonNotesRepository {
    fn save_all(&self, sessions: &[Session]) -> RepoResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(sessions).map_err(RepoError::Serialize)?;
        fs::write(&self.path, json)?;
        debug!(
            "event=file_save module=repo status=ok sessions={} path={}",
            sessions.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load_all(&self) -> RepoResult<Option<Vec<Session>>> {
        if !self.path.exists() {
            debug!(
                "event=file_load module=repo status=ok reason=missing_file path={}",
                self.path.display()
            );
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        let sessions = serde_json::from_str(&json).map_err(RepoError::Deserialize)?;
        Ok(Some(sessions))
    }
}

#[cfg(test)]
mod tests {
    use super::{default_store_path, JsonNotesRepository, NotesRepository, RepoError};
    use crate::model::session::{NoteElement, Session, TextElement};
    use tempfile::TempDir;

    #[test]
    fn load_reports_missing_file_as_none() {
        let dir = TempDir::new().expect("temp dir");
        let repo = JsonNotesRepository::new(default_store_path(dir.path()));
        assert!(repo.load_all().expect("load should succeed").is_none());
    }

    #[test]
    fn save_then_load_round_trips_collection() {
        let dir = TempDir::new().expect("temp dir");
        let repo = JsonNotesRepository::new(default_store_path(dir.path()));

        let mut session = Session::new("Deep dive", "DAT401", "R. Writer", "Databases");
        session
            .content
            .push(NoteElement::Text(TextElement::new("first", 0)));

        repo.save_all(std::slice::from_ref(&session))
            .expect("save should succeed");
        let loaded = repo
            .load_all()
            .expect("load should succeed")
            .expect("file should exist");
        assert_eq!(loaded, vec![session]);
    }

    #[test]
    fn save_creates_missing_parent_directory() {
        let dir = TempDir::new().expect("temp dir");
        let nested = dir.path().join("data").join("notes.json");
        let repo = JsonNotesRepository::new(&nested);

        repo.save_all(&[]).expect("save should succeed");
        assert!(nested.exists());
    }

    #[test]
    fn load_reports_parse_failure_as_deserialize_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = default_store_path(dir.path());
        std::fs::write(&path, "{not json").expect("write garbage");

        let repo = JsonNotesRepository::new(&path);
        match repo.load_all() {
            Err(RepoError::Deserialize(_)) => {}
            other => panic!("expected deserialize error, got {other:?}"),
        }
    }
}
