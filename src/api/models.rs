//! Records served by the transcription backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A persisted transcript
///
/// Created by the backend when an upload is processed; immutable afterwards.
/// Both text fields are always present (possibly empty for silent audio).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Backend-assigned identifier
    pub id: i64,

    /// Reference to the stored audio file (URL or path)
    pub original_audio: Option<String>,

    /// Raw transcribed text as produced by the speech model
    pub converted_text: String,

    /// Grammar-corrected text
    pub corrected_text: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Filename of the stored audio, derived server-side
    pub audio_filename: Option<String>,
}

impl Transcript {
    /// Short single-line preview of the corrected text for list views
    pub fn preview(&self, max_len: usize) -> String {
        let text = self.corrected_text.trim();
        let line = text.lines().next().unwrap_or("");

        if line.chars().count() <= max_len {
            line.to_string()
        } else {
            let truncated: String = line.chars().take(max_len.saturating_sub(3)).collect();
            format!("{}...", truncated)
        }
    }
}

/// Response from the health endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,

    /// Per-service status map, present when the backend is healthy
    #[serde(default)]
    pub services: HashMap<String, String>,

    /// Error detail, present when the backend is unhealthy
    #[serde(default)]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_parses_backend_json() {
        let json = r#"{
            "id": 42,
            "original_audio": "/media/audio/dictation-20250101T120000Z.wav",
            "converted_text": "hello world this are a test",
            "corrected_text": "Hello world, this is a test.",
            "created_at": "2025-01-01T12:00:03.512000Z",
            "updated_at": "2025-01-01T12:00:03.512000Z",
            "audio_filename": "dictation-20250101T120000Z.wav"
        }"#;

        let transcript: Transcript = serde_json::from_str(json).unwrap();
        assert_eq!(transcript.id, 42);
        assert_eq!(transcript.corrected_text, "Hello world, this is a test.");
        assert_eq!(
            transcript.audio_filename.as_deref(),
            Some("dictation-20250101T120000Z.wav")
        );
    }

    #[test]
    fn transcript_allows_null_audio_reference() {
        let json = r#"{
            "id": 7,
            "original_audio": null,
            "converted_text": "",
            "corrected_text": "",
            "created_at": "2025-01-01T12:00:00Z",
            "updated_at": "2025-01-01T12:00:00Z",
            "audio_filename": null
        }"#;

        let transcript: Transcript = serde_json::from_str(json).unwrap();
        assert!(transcript.original_audio.is_none());
        assert!(transcript.corrected_text.is_empty());
    }

    #[test]
    fn preview_truncates_long_text() {
        let json = r#"{
            "id": 1,
            "original_audio": null,
            "converted_text": "x",
            "corrected_text": "This is a rather long corrected transcript line.",
            "created_at": "2025-01-01T12:00:00Z",
            "updated_at": "2025-01-01T12:00:00Z",
            "audio_filename": null
        }"#;
        let transcript: Transcript = serde_json::from_str(json).unwrap();

        let preview = transcript.preview(20);
        assert!(preview.ends_with("..."));
        assert!(preview.chars().count() <= 20);
    }

    #[test]
    fn health_status_parses_both_shapes() {
        let healthy: HealthStatus = serde_json::from_str(
            r#"{"status": "healthy", "services": {"languagetool": "configured", "whisper": "configured"}}"#,
        )
        .unwrap();
        assert!(healthy.is_healthy());
        assert_eq!(healthy.services.len(), 2);

        let unhealthy: HealthStatus =
            serde_json::from_str(r#"{"status": "unhealthy", "error": "model load failed"}"#)
                .unwrap();
        assert!(!unhealthy.is_healthy());
        assert_eq!(unhealthy.error.as_deref(), Some("model load failed"));
    }
}
