//! Session store: the single mutator of the note collection.
//!
//! # Responsibility
//! - Own the full session collection and the active-session pointer.
//! - Apply every mutation read-modify-write, then persist the whole
//!   collection through the repository.
//!
//! # Invariants
//! - `content` index order is authoritative for element ordering; element
//!   `position` is append-time provenance and is never renumbered.
//! - Missing session or element ids degrade to logged no-ops.
//! - Persist failures never mutate or roll back the in-memory collection.
//! - No operation panics.

use crate::model::catalog::CatalogSession;
use crate::model::session::{
    DrawingElement, DrawingPath, ElementId, NoteElement, PhotoElement, Session, SessionId,
    TextElement,
};
use crate::repo::notes_file::NotesRepository;
use log::{debug, error, info, warn};

/// Title applied when a session is created with an empty one.
pub const UNTITLED_SESSION_TITLE: &str = "Untitled Session";

/// In-memory session collection with write-through persistence.
///
/// Single-writer by construction: callers hold `&mut` for every mutation,
/// and each operation completes (including the save) before the next starts.
pub struct SessionStore<R: NotesRepository> {
    repo: R,
    sessions: Vec<Session>,
    current_session_id: Option<SessionId>,
}

impl<R: NotesRepository> SessionStore<R> {
    /// Opens the store and runs the load protocol against the backing file.
    ///
    /// A missing store file initializes an empty collection and writes an
    /// initial empty file. An unparseable file is discarded, logged, and
    /// replaced with a fresh empty one.
    pub fn open(repo: R) -> Self {
        let mut store = Self {
            repo,
            sessions: Vec::new(),
            current_session_id: None,
        };
        store.load();
        store
    }

    /// Full session collection in creation order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Active session, resolved against the live collection so it always
    /// reflects the latest mutation.
    pub fn current_session(&self) -> Option<&Session> {
        let id = self.current_session_id?;
        self.sessions.iter().find(|session| session.id == id)
    }

    /// Active session ID, when one is set.
    pub fn current_session_id(&self) -> Option<SessionId> {
        self.current_session_id
    }

    /// Finds one session by ID.
    pub fn session(&self, session_id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id == session_id)
    }

    /// Creates a new empty session, makes it active, and persists.
    ///
    /// An empty or whitespace title is replaced with
    /// [`UNTITLED_SESSION_TITLE`].
    pub fn create_session(
        &mut self,
        title: &str,
        session_code: &str,
        speaker: &str,
        track: &str,
    ) -> SessionId {
        let title = if title.trim().is_empty() {
            UNTITLED_SESSION_TITLE
        } else {
            title
        };
        let session = Session::new(title, session_code, speaker, track);
        let session_id = session.id;
        self.sessions.push(session);
        self.current_session_id = Some(session_id);
        info!("event=session_create module=store status=ok session={session_id}");
        self.save();
        session_id
    }

    /// Creates a session prefilled from a catalog candidate.
    ///
    /// Consumes `{title, session_code, speakers, track}`; all speaker names
    /// are joined into the single `speaker` line.
    pub fn create_session_from_catalog(&mut self, candidate: &CatalogSession) -> SessionId {
        self.create_session(
            &candidate.title,
            &candidate.session_code,
            &candidate.speaker_line(),
            &candidate.track,
        )
    }

    /// Appends a text element to the session's content log.
    pub fn add_text(&mut self, session_id: SessionId, content: &str) {
        self.append_element(session_id, "element_add_text", |position| {
            NoteElement::Text(TextElement::new(content, position))
        });
    }

    /// Appends a photo element with its image payload embedded inline.
    pub fn add_photo(&mut self, session_id: SessionId, image_data: Vec<u8>, caption: &str) {
        self.append_element(session_id, "element_add_photo", |position| {
            NoteElement::Photo(PhotoElement::new(image_data, caption, position))
        });
    }

    /// Appends a drawing element. An empty path list is allowed.
    pub fn add_drawing(&mut self, session_id: SessionId, paths: Vec<DrawingPath>) {
        self.append_element(session_id, "element_add_drawing", |position| {
            NoteElement::Drawing(DrawingElement::new(paths, position))
        });
    }

    /// Renames a session. No-op when the session does not exist.
    pub fn update_title(&mut self, session_id: SessionId, new_title: &str) {
        let Some(session) = self.session_mut(session_id, "session_rename") else {
            return;
        };
        session.title = new_title.to_string();
        session.touch();
        self.save();
    }

    /// Replaces the content of a text element in place.
    ///
    /// Element `id`, `timestamp` and `position` are preserved. No-op when
    /// the session or element is missing, or the element is not text.
    pub fn update_text(&mut self, session_id: SessionId, element_id: ElementId, new_content: &str) {
        let Some(session) = self.session_mut(session_id, "element_edit_text") else {
            return;
        };
        let Some(element) = session
            .content
            .iter_mut()
            .find(|element| element.id() == element_id)
        else {
            debug!(
                "event=element_edit_text module=store status=skip reason=element_not_found \
                 session={session_id} element={element_id}"
            );
            return;
        };
        let NoteElement::Text(text) = element else {
            debug!(
                "event=element_edit_text module=store status=skip reason=not_text \
                 session={session_id} element={element_id}"
            );
            return;
        };
        text.content = new_content.to_string();
        session.touch();
        self.save();
    }

    /// Removes the element with the given ID from the session's content.
    ///
    /// Idempotent: removing an ID that is already gone changes nothing.
    pub fn delete_element(&mut self, session_id: SessionId, element_id: ElementId) {
        let Some(session) = self.session_mut(session_id, "element_delete") else {
            return;
        };
        let before = session.content.len();
        session.content.retain(|element| element.id() != element_id);
        if session.content.len() == before {
            debug!(
                "event=element_delete module=store status=skip reason=element_not_found \
                 session={session_id} element={element_id}"
            );
            return;
        }
        session.touch();
        self.save();
    }

    /// Moves the element at `from_index` to land at `to_index`.
    ///
    /// Remove-then-reinsert semantics: on `[A, B, C, D]`, moving 0 to 2
    /// yields `[B, C, A, D]`. Out-of-bounds indices are a logged no-op.
    pub fn reorder_element(&mut self, session_id: SessionId, from_index: usize, to_index: usize) {
        let Some(session) = self.session_mut(session_id, "element_reorder") else {
            return;
        };
        let len = session.content.len();
        if from_index >= len || to_index >= len {
            warn!(
                "event=element_reorder module=store status=skip reason=index_out_of_bounds \
                 session={session_id} from={from_index} to={to_index} len={len}"
            );
            return;
        }
        let element = session.content.remove(from_index);
        session.content.insert(to_index, element);
        session.touch();
        self.save();
    }

    /// Removes a session from the collection.
    ///
    /// Clears the active-session pointer when it referenced this session.
    pub fn delete_session(&mut self, session_id: SessionId) {
        let before = self.sessions.len();
        self.sessions.retain(|session| session.id != session_id);
        if self.sessions.len() == before {
            debug!(
                "event=session_delete module=store status=skip reason=session_not_found \
                 session={session_id}"
            );
            return;
        }
        if self.current_session_id == Some(session_id) {
            self.current_session_id = None;
        }
        info!("event=session_delete module=store status=ok session={session_id}");
        self.save();
    }

    /// Serializes the full collection and overwrites the store file.
    ///
    /// A write failure is logged and swallowed; the in-memory collection
    /// stays the source of truth until the next successful save.
    pub fn save(&self) {
        if let Err(err) = self.repo.save_all(&self.sessions) {
            error!(
                "event=store_save module=store status=error sessions={} error={err}",
                self.sessions.len()
            );
        }
    }

    fn load(&mut self) {
        match self.repo.load_all() {
            Ok(Some(sessions)) => {
                info!(
                    "event=store_load module=store status=ok sessions={}",
                    sessions.len()
                );
                self.sessions = sessions;
            }
            Ok(None) => {
                info!("event=store_load module=store status=ok reason=missing_file sessions=0");
                self.sessions = Vec::new();
                // Write the initial empty file.
                self.save();
            }
            Err(err) => {
                // An unreadable store is discarded and replaced with a fresh
                // empty file; the parse error is the only surviving record.
                error!(
                    "event=store_load module=store status=error recovery=reset_empty error={err}"
                );
                self.sessions = Vec::new();
                self.save();
            }
        }
    }

    fn append_element(
        &mut self,
        session_id: SessionId,
        op: &'static str,
        build: impl FnOnce(usize) -> NoteElement,
    ) {
        let Some(session) = self.session_mut(session_id, op) else {
            return;
        };
        // Position is captured once at append time and never renumbered.
        let position = session.content.len();
        session.content.push(build(position));
        session.touch();
        self.save();
    }

    fn session_mut(&mut self, session_id: SessionId, op: &'static str) -> Option<&mut Session> {
        let found = self
            .sessions
            .iter_mut()
            .find(|session| session.id == session_id);
        if found.is_none() {
            debug!(
                "event={op} module=store status=skip reason=session_not_found session={session_id}"
            );
        }
        found
    }
}
