//! Main TUI application state and logic

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::prelude::*;

use crate::api::{HttpApiClient, TranscriptApi};
use crate::audio::{encode_wav, MicCapture};
use crate::config::Settings;
use crate::state::{AppState, Event, RecorderPhase};
use crate::tui::screens::{BrowserScreen, DashboardScreen, ViewerScreen};
use crate::tui::widgets::HelpPopup;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Dashboard,
    Browser,
    Viewer,
}

/// Main application state
///
/// Everything the screens display comes from the current `AppState`
/// snapshot; key handlers produce events and replace the snapshot.
pub struct App {
    settings: Settings,
    client: HttpApiClient,
    state: AppState,

    /// Active capture session, present only while recording
    capture: Option<MicCapture>,

    current_screen: AppScreen,
    previous_screen: Option<AppScreen>,
    show_help: bool,

    // Screen states
    dashboard: DashboardScreen,
    browser: BrowserScreen,
    viewer: ViewerScreen,
}

impl App {
    /// Create a new app instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = HttpApiClient::from_settings(&settings)?;

        Ok(Self {
            settings,
            client,
            state: AppState::new(),
            capture: None,
            current_screen: AppScreen::Dashboard,
            previous_screen: None,
            show_help: false,
            dashboard: DashboardScreen::new(),
            browser: BrowserScreen::new(),
            viewer: ViewerScreen::new(),
        })
    }

    /// Fetch the transcript list from the backend
    pub async fn load_transcripts(&mut self) {
        match self.client.list_transcripts().await {
            Ok(transcripts) => {
                self.apply(Event::TranscriptsLoaded(transcripts));
            }
            Err(e) => {
                self.surface_error(format!("Failed to load transcripts: {e}"));
            }
        }
        self.browser.clamp_selection(self.state.transcripts.len());
    }

    /// Apply a state event, replacing the current snapshot
    fn apply(&mut self, event: Event) {
        self.state = self.state.apply(event);
    }

    /// Surface a dismissible error outside the event set (device failures)
    fn surface_error(&mut self, message: String) {
        let mut next = self.state.clone();
        next.error = Some(message);
        self.state = next;
    }

    /// Draw the current screen
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let error = self.state.error.as_deref();

        match self.current_screen {
            AppScreen::Dashboard => {
                self.dashboard.draw(
                    frame,
                    area,
                    &self.state.recorder,
                    self.state.transcripts.first(),
                    error,
                );
            }
            AppScreen::Browser => {
                self.browser.draw(frame, area, &self.state.transcripts, error);
            }
            AppScreen::Viewer => {
                self.viewer.draw(frame, area, &self.settings, error);
            }
        }

        // Draw help popup if active
        if self.show_help {
            HelpPopup::draw(frame, area, self.current_screen);
        }
    }

    /// Handle key input
    pub async fn handle_key(&mut self, key: KeyCode) -> Result<()> {
        if self.show_help {
            self.show_help = false;
            return Ok(());
        }

        match self.current_screen {
            AppScreen::Dashboard => {
                self.handle_dashboard_key(key).await?;
            }
            AppScreen::Browser => {
                self.handle_browser_key(key).await?;
            }
            AppScreen::Viewer => {
                self.handle_viewer_key(key)?;
            }
        }

        Ok(())
    }

    /// Handle dashboard key input
    async fn handle_dashboard_key(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Char('r') | KeyCode::Enter => {
                self.toggle_recording().await;
            }
            KeyCode::Char('l') | KeyCode::Tab => {
                self.switch_screen(AppScreen::Browser);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle browser key input
    async fn handle_browser_key(&mut self, key: KeyCode) -> Result<()> {
        // Confirmation popup swallows all keys until answered
        if let Some(id) = self.browser.pending_delete() {
            match key {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.browser.cancel_delete();
                    self.delete_transcript(id).await;
                }
                _ => {
                    self.browser.cancel_delete();
                }
            }
            return Ok(());
        }

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.browser.previous(self.state.transcripts.len());
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.browser.next(self.state.transcripts.len());
            }
            KeyCode::Enter => {
                if let Some(transcript) = self.browser.selected(&self.state.transcripts) {
                    self.viewer.set_transcript(transcript.clone());
                    self.switch_screen(AppScreen::Viewer);
                }
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(transcript) = self.browser.selected(&self.state.transcripts) {
                    self.browser.request_delete(transcript.id);
                }
            }
            KeyCode::Char('r') => {
                self.load_transcripts().await;
            }
            KeyCode::Char('d') => {
                self.switch_screen(AppScreen::Dashboard);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle viewer key input
    fn handle_viewer_key(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.viewer.scroll_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.viewer.scroll_down();
            }
            KeyCode::PageUp => {
                self.viewer.page_up();
            }
            KeyCode::PageDown => {
                self.viewer.page_down();
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.viewer.scroll_to_top();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.viewer.scroll_to_bottom();
            }
            _ => {}
        }
        Ok(())
    }

    /// Toggle recording on/off
    ///
    /// Stopping encodes the capture to WAV and uploads it; the new transcript
    /// is prepended to the list on success.
    async fn toggle_recording(&mut self) {
        match self.state.recorder {
            RecorderPhase::Idle => {
                let mut capture = MicCapture::new(&self.settings);
                match capture.start() {
                    Ok(()) => {
                        self.capture = Some(capture);
                        self.apply(Event::RecordingStarted);
                    }
                    Err(e) => {
                        self.surface_error(e.to_string());
                    }
                }
            }
            RecorderPhase::Recording { .. } => {
                let Some(mut capture) = self.capture.take() else {
                    return;
                };
                let recording = capture.stop();
                self.apply(Event::RecordingStopped);

                let wav_bytes =
                    encode_wav(&recording.samples, recording.channels, recording.sample_rate);
                let filename = format!(
                    "dictation-{}.wav",
                    chrono::Utc::now().format("%Y%m%dT%H%M%SZ")
                );

                match self.client.transcribe(wav_bytes, &filename).await {
                    Ok(transcript) => {
                        self.apply(Event::UploadSucceeded(Box::new(transcript)));
                        self.browser.clamp_selection(self.state.transcripts.len());
                    }
                    Err(e) => {
                        self.apply(Event::UploadFailed(e.to_string()));
                    }
                }
            }
            RecorderPhase::Processing => {}
        }
    }

    /// Delete a transcript after the confirmation popup was accepted
    async fn delete_transcript(&mut self, id: i64) {
        match self.client.delete_transcript(id).await {
            Ok(()) => {
                self.apply(Event::DeleteSucceeded(id));
            }
            Err(e) => {
                self.apply(Event::DeleteFailed {
                    id,
                    message: e.to_string(),
                });
            }
        }
        self.browser.clamp_selection(self.state.transcripts.len());
    }

    /// Switch to a different screen
    fn switch_screen(&mut self, screen: AppScreen) {
        self.previous_screen = Some(self.current_screen);
        self.current_screen = screen;
    }

    /// Handle back navigation; dismisses errors and popups first
    pub fn handle_back(&mut self) {
        if self.state.error.is_some() {
            self.apply(Event::ErrorDismissed);
            return;
        }

        if self.browser.pending_delete().is_some() {
            self.browser.cancel_delete();
            return;
        }

        if let Some(prev) = self.previous_screen.take() {
            self.current_screen = prev;
        } else if self.current_screen != AppScreen::Dashboard {
            self.current_screen = AppScreen::Dashboard;
        }
    }

    /// Check if Esc should quit the app
    pub fn should_quit(&self) -> bool {
        self.current_screen == AppScreen::Dashboard
            && !self.show_help
            && self.state.error.is_none()
            && self.state.recorder == RecorderPhase::Idle
    }

    /// Check if 'q' may quit; refused while a recording is in flight
    pub fn can_quit(&self) -> bool {
        self.state.recorder == RecorderPhase::Idle
    }

    /// Toggle help popup
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
