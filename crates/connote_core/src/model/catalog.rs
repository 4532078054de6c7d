//! Conference catalog wire model.
//!
//! # Responsibility
//! - Mirror the external session-catalog payload shape.
//! - Provide the field mapping used when prefilling a new session.
//!
//! # Invariants
//! - Only `{title, session_code, speakers, track}` feed session creation;
//!   the remaining fields are display metadata for pickers.

use serde::{Deserialize, Serialize};

/// One candidate session as published by the conference catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSession {
    /// Catalog-side identifier. Distinct from local `SessionId`.
    pub id: String,
    pub title: String,
    /// Serialized as `sessionId` to match the catalog schema naming.
    #[serde(rename = "sessionId")]
    pub session_code: String,
    pub speakers: Vec<String>,
    pub track: String,
    pub description: String,
    /// Scheduled start in epoch milliseconds, when published.
    #[serde(default)]
    pub start_time: Option<i64>,
    /// Scheduled end in epoch milliseconds, when published.
    #[serde(default)]
    pub end_time: Option<i64>,
    pub location: String,
    pub level: String,
}

impl CatalogSession {
    /// Joins all speaker names into the single display line stored on a
    /// session's `speaker` field.
    pub fn speaker_line(&self) -> String {
        self.speakers.join(", ")
    }
}

/// Top-level catalog response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub sessions: Vec<CatalogSession>,
}

#[cfg(test)]
mod tests {
    use super::CatalogSession;

    #[test]
    fn speaker_line_joins_names_with_comma_space() {
        let candidate = CatalogSession {
            id: "c-1".to_string(),
            title: "Serverless patterns".to_string(),
            session_code: "SVS305".to_string(),
            speakers: vec!["A. One".to_string(), "B. Two".to_string()],
            track: "Serverless".to_string(),
            description: String::new(),
            start_time: None,
            end_time: None,
            location: String::new(),
            level: "300".to_string(),
        };
        assert_eq!(candidate.speaker_line(), "A. One, B. Two");
    }
}
