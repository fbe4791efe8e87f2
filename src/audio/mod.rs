//! Audio module for dictate
//!
//! Microphone capture (cpal) and canonical PCM WAV encoding. Capture
//! accumulates raw float samples in memory; the encoder turns a finished
//! recording into the WAV bytes the backend expects.

mod capture;
mod encoder;

pub use capture::{MicCapture, RecordedAudio};
pub use encoder::encode_wav;

/// Check whether any audio input device is present.
pub fn input_device_available() -> bool {
    use cpal::traits::HostTrait;
    cpal::default_host().default_input_device().is_some()
}
