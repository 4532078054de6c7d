use connote_core::{
    default_store_path, DrawingPath, JsonNotesRepository, NotesRepository, Point, RepoError,
    RepoResult, Session, SessionStore, STORE_FILE_NAME,
};
use std::io;
use tempfile::TempDir;

#[test]
fn missing_file_initializes_empty_collection_and_writes_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = default_store_path(dir.path());
    assert!(!path.exists());

    let store = SessionStore::open(JsonNotesRepository::new(&path));

    assert!(store.sessions().is_empty());
    assert!(store.current_session().is_none());
    assert!(path.exists(), "initial empty store file should be written");

    let json = std::fs::read_to_string(&path).expect("read store file");
    let parsed: Vec<Session> = serde_json::from_str(&json).expect("file should be valid");
    assert!(parsed.is_empty());
}

#[test]
fn corrupt_file_resets_to_empty_and_next_save_succeeds() {
    let dir = TempDir::new().expect("temp dir");
    let path = default_store_path(dir.path());
    std::fs::write(&path, "{definitely not a session list").expect("write garbage");

    let mut store = SessionStore::open(JsonNotesRepository::new(&path));
    assert!(store.sessions().is_empty());

    store.create_session("Recovered", "", "", "");
    store.save();

    let reopened = SessionStore::open(JsonNotesRepository::new(&path));
    assert_eq!(reopened.sessions().len(), 1);
    assert_eq!(reopened.sessions()[0].title, "Recovered");
}

#[test]
fn collection_round_trips_across_store_instances() {
    let dir = TempDir::new().expect("temp dir");
    let path = default_store_path(dir.path());

    let mut store = SessionStore::open(JsonNotesRepository::new(&path));
    let id = store.create_session("日本語のノート ✏️", "DAT401", "Śpeaker", "Databases");
    store.add_text(id, "非ASCIIテキスト — emoji 🎤");
    store.add_photo(id, vec![0, 1, 2, 254, 255], "badge photo");
    store.add_drawing(
        id,
        vec![DrawingPath {
            points: vec![Point { x: 0.25, y: -3.5 }, Point { x: 101.0, y: 42.0 }],
            color: "red".to_string(),
            width: 1.5,
        }],
    );
    store.create_session("Second", "", "", "");

    let saved = store.sessions().to_vec();
    drop(store);

    let reopened = SessionStore::open(JsonNotesRepository::new(&path));
    assert_eq!(reopened.sessions(), saved.as_slice());
}

#[test]
fn default_store_path_uses_well_known_file_name() {
    let path = default_store_path("/data/app");
    assert!(path.ends_with(STORE_FILE_NAME));
}

/// Repository double whose saves always fail.
struct FailingRepository;

impl NotesRepository for FailingRepository {
    fn save_all(&self, _sessions: &[Session]) -> RepoResult<()> {
        Err(RepoError::Io(io::Error::new(io::ErrorKind::Other, "disk full")))
    }

    fn load_all(&self) -> RepoResult<Option<Vec<Session>>> {
        Ok(None)
    }
}

#[test]
fn save_failure_leaves_in_memory_state_as_source_of_truth() {
    let mut store = SessionStore::open(FailingRepository);

    let id = store.create_session("Unsaved", "", "", "");
    store.add_text(id, "still here");

    let session = store.session(id).expect("session survives failed saves");
    assert_eq!(session.content.len(), 1);
    assert_eq!(store.current_session_id(), Some(id));
}
