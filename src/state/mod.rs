//! Session and transcript state machine
//!
//! All UI-visible state lives in immutable `AppState` snapshots. Discrete
//! events (start, stop, upload success/failure, delete success/failure)
//! produce a new snapshot; nothing mutates state in place. Both the CLI and
//! the TUI drive their display from these snapshots.

use std::time::Instant;

use crate::api::Transcript;

/// Phase of the recording session
///
/// Recording and upload are mutually exclusive per session: a new recording
/// cannot start while one is in progress or still being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderPhase {
    /// No session active
    Idle,
    /// Microphone capture in progress
    Recording { started_at: Instant },
    /// Capture finished; encoding and upload in flight
    Processing,
}

impl RecorderPhase {
    /// Elapsed recording time, if currently recording
    pub fn elapsed_secs(&self) -> Option<u64> {
        match self {
            RecorderPhase::Recording { started_at } => Some(started_at.elapsed().as_secs()),
            _ => None,
        }
    }
}

/// Discrete state-changing events
#[derive(Debug, Clone)]
pub enum Event {
    RecordingStarted,
    RecordingStopped,
    TranscriptsLoaded(Vec<Transcript>),
    UploadSucceeded(Box<Transcript>),
    UploadFailed(String),
    DeleteSucceeded(i64),
    DeleteFailed { id: i64, message: String },
    ErrorDismissed,
}

/// One snapshot of application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current recorder phase
    pub recorder: RecorderPhase,

    /// Transcript list, backend order with fresh uploads prepended
    pub transcripts: Vec<Transcript>,

    /// Dismissible error message surfaced to the user
    pub error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            recorder: RecorderPhase::Idle,
            transcripts: Vec::new(),
            error: None,
        }
    }

    /// Whether a new recording may start
    pub fn can_start(&self) -> bool {
        self.recorder == RecorderPhase::Idle
    }

    /// Apply an event, producing the next snapshot
    pub fn apply(&self, event: Event) -> AppState {
        let mut next = self.clone();

        match event {
            Event::RecordingStarted => {
                if self.can_start() {
                    next.recorder = RecorderPhase::Recording {
                        started_at: Instant::now(),
                    };
                    next.error = None;
                } else {
                    next.error = Some("A recording is already in progress".to_string());
                }
            }
            Event::RecordingStopped => {
                if matches!(self.recorder, RecorderPhase::Recording { .. }) {
                    next.recorder = RecorderPhase::Processing;
                }
            }
            Event::TranscriptsLoaded(transcripts) => {
                next.transcripts = transcripts;
            }
            Event::UploadSucceeded(transcript) => {
                next.recorder = RecorderPhase::Idle;
                next.transcripts.insert(0, *transcript);
                next.error = None;
            }
            Event::UploadFailed(message) => {
                next.recorder = RecorderPhase::Idle;
                next.error = Some(message);
            }
            Event::DeleteSucceeded(id) => {
                let before = next.transcripts.len();
                next.transcripts.retain(|t| t.id != id);
                if next.transcripts.len() == before {
                    next.error = Some(format!("Transcript {id} is no longer in the list"));
                }
            }
            Event::DeleteFailed { id, message } => {
                next.error = Some(format!("Failed to delete transcript {id}: {message}"));
            }
            Event::ErrorDismissed => {
                next.error = None;
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn transcript(id: i64) -> Transcript {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        Transcript {
            id,
            original_audio: None,
            converted_text: format!("raw {id}"),
            corrected_text: format!("corrected {id}"),
            created_at: at,
            updated_at: at,
            audio_filename: None,
        }
    }

    fn ids(state: &AppState) -> Vec<i64> {
        state.transcripts.iter().map(|t| t.id).collect()
    }

    #[test]
    fn upload_success_prepends_without_reordering() {
        let state = AppState::new()
            .apply(Event::TranscriptsLoaded(vec![transcript(3), transcript(2)]));

        let state = state.apply(Event::UploadSucceeded(Box::new(transcript(4))));

        assert_eq!(ids(&state), vec![4, 3, 2]);
        assert_eq!(state.recorder, RecorderPhase::Idle);
        assert!(state.error.is_none());
    }

    #[test]
    fn upload_failure_leaves_list_untouched_and_surfaces_error() {
        let state = AppState::new().apply(Event::TranscriptsLoaded(vec![transcript(1)]));
        let state = state.apply(Event::RecordingStarted);
        let state = state.apply(Event::RecordingStopped);

        let state = state.apply(Event::UploadFailed("connection refused".to_string()));

        assert_eq!(ids(&state), vec![1]);
        assert_eq!(state.recorder, RecorderPhase::Idle);
        assert_eq!(state.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn start_is_rejected_while_recording() {
        let state = AppState::new().apply(Event::RecordingStarted);
        assert!(matches!(state.recorder, RecorderPhase::Recording { .. }));

        let state = state.apply(Event::RecordingStarted);
        assert!(matches!(state.recorder, RecorderPhase::Recording { .. }));
        assert!(state.error.is_some());
    }

    #[test]
    fn start_is_rejected_while_processing() {
        let state = AppState::new()
            .apply(Event::RecordingStarted)
            .apply(Event::RecordingStopped);
        assert_eq!(state.recorder, RecorderPhase::Processing);
        assert!(!state.can_start());

        let state = state.apply(Event::RecordingStarted);
        assert_eq!(state.recorder, RecorderPhase::Processing);
        assert!(state.error.is_some());
    }

    #[test]
    fn delete_removes_only_the_target() {
        let state = AppState::new().apply(Event::TranscriptsLoaded(vec![
            transcript(5),
            transcript(4),
            transcript(3),
        ]));

        let state = state.apply(Event::DeleteSucceeded(4));

        assert_eq!(ids(&state), vec![5, 3]);
        assert!(state.error.is_none());
    }

    #[test]
    fn delete_of_missing_id_leaves_list_unchanged() {
        let state = AppState::new().apply(Event::TranscriptsLoaded(vec![transcript(1)]));

        let state = state.apply(Event::DeleteSucceeded(99));

        assert_eq!(ids(&state), vec![1]);
        assert!(state.error.is_some());
    }

    #[test]
    fn delete_failure_keeps_state_and_surfaces_error() {
        let state = AppState::new().apply(Event::TranscriptsLoaded(vec![transcript(1)]));

        let state = state.apply(Event::DeleteFailed {
            id: 1,
            message: "Not Found".to_string(),
        });

        assert_eq!(ids(&state), vec![1]);
        assert!(state.error.as_deref().unwrap().contains("transcript 1"));
    }

    #[test]
    fn error_is_dismissible() {
        let state = AppState::new().apply(Event::UploadFailed("boom".to_string()));
        assert!(state.error.is_some());

        let state = state.apply(Event::ErrorDismissed);
        assert!(state.error.is_none());
    }
}
