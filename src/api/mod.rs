//! Backend API module for dictate
//!
//! The transcription backend is an external REST service; this module holds
//! the record types it serves and the HTTP client that talks to it.

mod client;
mod models;

pub use client::{HttpApiClient, TranscriptApi};
pub use models::{HealthStatus, Transcript};
