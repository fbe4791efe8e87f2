//! dictate - A terminal voice-dictation client
//!
//! Records speech from the microphone, encodes it to PCM WAV, and submits it
//! to a transcription backend that returns both the raw transcript and a
//! grammar-corrected version.

pub mod api;
pub mod audio;
pub mod cli;
pub mod config;
pub mod state;
pub mod tui;

use thiserror::Error;

/// Main error type for dictate
#[derive(Error, Debug)]
pub enum DictateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Audio device error: {0}")]
    DeviceAccess(String),

    #[error("Audio capture error: {0}")]
    Capture(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DictateError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "dictate";
