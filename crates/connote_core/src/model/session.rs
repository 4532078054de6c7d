//! Session note document model.
//!
//! # Responsibility
//! - Define the session aggregate and its ordered note elements.
//! - Provide constructors that assign stable identity and capture time.
//!
//! # Invariants
//! - `id` values are generated once at construction and never reused.
//! - `content` order is the single source of truth for display order.
//! - Element `position` is append-time provenance and is never renumbered.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for one session.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SessionId = Uuid;

/// Stable identifier for one note element within a session.
pub type ElementId = Uuid;

/// Returns the current wall-clock time in epoch milliseconds.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

/// One note-taking context: a titled, ordered log of captured elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Stable session ID, assigned at creation.
    pub id: SessionId,
    /// Display title.
    pub title: String,
    /// Conference session code (for example `ARC301`). May be empty.
    pub session_code: String,
    /// Speaker names joined into one display line. May be empty.
    pub speaker: String,
    /// Conference track name. May be empty.
    pub track: String,
    /// Captured elements in display/storage order.
    pub content: Vec<NoteElement>,
    /// Creation time in epoch milliseconds. Never changes.
    pub created_at: i64,
    /// Last mutation time in epoch milliseconds.
    pub updated_at: i64,
}

impl Session {
    /// Creates an empty session with generated identity and timestamps.
    pub fn new(
        title: impl Into<String>,
        session_code: impl Into<String>,
        speaker: impl Into<String>,
        track: impl Into<String>,
    ) -> Self {
        let now = now_epoch_ms();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            session_code: session_code.into(),
            speaker: speaker.into(),
            track: track.into(),
            content: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Finds one element by stable ID.
    pub fn element(&self, element_id: ElementId) -> Option<&NoteElement> {
        self.content
            .iter()
            .find(|element| element.id() == element_id)
    }

    /// Advances `updated_at` to now, never moving it backwards.
    pub(crate) fn touch(&mut self) {
        self.updated_at = now_epoch_ms().max(self.updated_at);
    }
}

/// One atomic captured unit of session content.
///
/// Closed set of kinds; consumers dispatch with exhaustive matches. The JSON
/// form carries a `type` discriminant of `text`, `photo` or `drawing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NoteElement {
    Text(TextElement),
    Photo(PhotoElement),
    Drawing(DrawingElement),
}

impl NoteElement {
    /// Stable element ID used for lookups, edits and deletion.
    pub fn id(&self) -> ElementId {
        match self {
            Self::Text(element) => element.id,
            Self::Photo(element) => element.id,
            Self::Drawing(element) => element.id,
        }
    }

    /// Capture time in epoch milliseconds.
    pub fn timestamp(&self) -> i64 {
        match self {
            Self::Text(element) => element.timestamp,
            Self::Photo(element) => element.timestamp,
            Self::Drawing(element) => element.timestamp,
        }
    }

    /// Content length of the owning session at append time.
    ///
    /// Provenance only: not renumbered on delete or reorder, so it can drift
    /// from the live index. `Session::content` order is authoritative.
    pub fn position(&self) -> usize {
        match self {
            Self::Text(element) => element.position,
            Self::Photo(element) => element.position,
            Self::Drawing(element) => element.position,
        }
    }
}

/// Plain text note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub id: ElementId,
    pub content: String,
    pub timestamp: i64,
    pub position: usize,
}

impl TextElement {
    /// Creates a text element with generated ID and capture time.
    pub fn new(content: impl Into<String>, position: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            timestamp: now_epoch_ms(),
            position,
        }
    }
}

/// Captured photo with the image payload embedded inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoElement {
    pub id: ElementId,
    /// Raw image bytes, stored inline as base64 in the JSON form.
    #[serde(with = "base64_bytes")]
    pub image_data: Vec<u8>,
    pub caption: String,
    pub timestamp: i64,
    pub position: usize,
}

impl PhotoElement {
    /// Creates a photo element with generated ID and capture time.
    pub fn new(image_data: Vec<u8>, caption: impl Into<String>, position: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_data,
            caption: caption.into(),
            timestamp: now_epoch_ms(),
            position,
        }
    }
}

/// Freehand drawing made of ordered stroke paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingElement {
    pub id: ElementId,
    pub paths: Vec<DrawingPath>,
    pub timestamp: i64,
    pub position: usize,
}

impl DrawingElement {
    /// Creates a drawing element with generated ID and capture time.
    ///
    /// An empty path list is allowed.
    pub fn new(paths: Vec<DrawingPath>, position: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            paths,
            timestamp: now_epoch_ms(),
            position,
        }
    }
}

/// One continuous stroke within a drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingPath {
    /// Stroke points in draw order.
    pub points: Vec<Point>,
    /// Color tag chosen at capture time (for example `black`).
    pub color: String,
    /// Stroke width in points.
    pub width: f64,
}

/// 2D coordinate in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

mod base64_bytes {
    //! Serde adapter storing binary payloads as base64 strings in JSON.

    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        STANDARD.encode(bytes).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
