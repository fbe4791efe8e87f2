//! Microphone capture using cpal
//!
//! Captures raw float PCM from the default (or configured) input device.
//! Samples arrive in discrete callback chunks which are accumulated in
//! arrival order; concatenating them reconstitutes the full recording.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream, StreamConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::Settings;
use crate::{DictateError, Result};

/// A finished recording: interleaved float samples plus the capture
/// parameters actually negotiated with the device.
#[derive(Debug, Clone)]
pub struct RecordedAudio {
    /// Interleaved samples in [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl RecordedAudio {
    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels as usize
        }
    }

    /// Recording duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.frames() as f64 / self.sample_rate as f64
        }
    }
}

/// Microphone capture session
///
/// The cpal stream is exclusively owned by this session and dropped (device
/// released) as soon as the session stops. One session produces at most one
/// recording.
pub struct MicCapture {
    /// Accumulated sample chunks, one entry per stream callback
    chunks: Arc<Mutex<Vec<Vec<f32>>>>,

    /// Audio stream
    stream: Option<Stream>,

    /// Whether recording is active
    recording: Arc<AtomicBool>,

    /// Requested sample rate
    sample_rate: u32,

    /// Requested number of channels
    channels: u16,

    /// Preferred device name (empty = default)
    device: String,
}

impl MicCapture {
    /// Create a new capture session from settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            chunks: Arc::new(Mutex::new(Vec::new())),
            stream: None,
            recording: Arc::new(AtomicBool::new(false)),
            sample_rate: settings.audio.sample_rate,
            channels: settings.audio.channels,
            device: settings.audio.device.clone(),
        }
    }

    /// Start capturing from the microphone
    ///
    /// On failure no session state is left behind: the chunk buffer stays
    /// empty and the recording flag stays unset.
    pub fn start(&mut self) -> Result<()> {
        let host = cpal::default_host();

        let device = if self.device.is_empty() {
            host.default_input_device()
                .ok_or_else(|| DictateError::DeviceAccess("No input device available".into()))?
        } else {
            find_device_by_name(&host, &self.device)?
        };

        tracing::info!(
            "Using audio device: {}",
            device.name().unwrap_or_default()
        );

        let supported_configs = device.supported_input_configs().map_err(|e| {
            DictateError::DeviceAccess(format!("Failed to query device configs: {e}"))
        })?;

        let config = find_suitable_config(supported_configs, self.sample_rate, self.channels)?;

        tracing::info!(
            "Audio config: {} Hz, {} channels, {:?}",
            config.sample_rate().0,
            config.channels(),
            config.sample_format()
        );

        let stream_config = StreamConfig {
            channels: config.channels(),
            sample_rate: config.sample_rate(),
            buffer_size: cpal::BufferSize::Default,
        };

        // Update actual values
        self.sample_rate = config.sample_rate().0;
        self.channels = config.channels();

        let chunks = self.chunks.clone();
        let recording = self.recording.clone();

        // Create stream based on sample format
        let stream = match config.sample_format() {
            SampleFormat::I8 => build_stream::<i8>(&device, &stream_config, chunks, recording)?,
            SampleFormat::I16 => build_stream::<i16>(&device, &stream_config, chunks, recording)?,
            SampleFormat::I32 => build_stream::<i32>(&device, &stream_config, chunks, recording)?,
            SampleFormat::U8 => build_stream::<u8>(&device, &stream_config, chunks, recording)?,
            SampleFormat::U16 => build_stream::<u16>(&device, &stream_config, chunks, recording)?,
            SampleFormat::U32 => build_stream::<u32>(&device, &stream_config, chunks, recording)?,
            SampleFormat::F32 => build_stream::<f32>(&device, &stream_config, chunks, recording)?,
            SampleFormat::F64 => build_stream::<f64>(&device, &stream_config, chunks, recording)?,
            format => {
                return Err(DictateError::Capture(format!(
                    "Unsupported sample format: {format:?}"
                )))
            }
        };

        stream
            .play()
            .map_err(|e| DictateError::Capture(format!("Failed to start audio stream: {e}")))?;

        self.recording.store(true, Ordering::SeqCst);
        self.stream = Some(stream);

        tracing::info!("Audio recording started");
        Ok(())
    }

    /// Stop capturing and return the accumulated recording
    ///
    /// The stream is dropped before the chunks are drained, so no callback
    /// can append after this point.
    pub fn stop(&mut self) -> RecordedAudio {
        self.recording.store(false, Ordering::SeqCst);
        self.stream.take();

        let mut chunks = match self.chunks.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let total: usize = chunks.iter().map(Vec::len).sum();
        let mut samples = Vec::with_capacity(total);
        for chunk in chunks.drain(..) {
            samples.extend_from_slice(&chunk);
        }

        tracing::info!(
            "Audio recording stopped ({} samples, {} Hz, {} channels)",
            samples.len(),
            self.sample_rate,
            self.channels
        );

        RecordedAudio {
            samples,
            channels: self.channels,
            sample_rate: self.sample_rate,
        }
    }

    /// Check if recording is active
    pub fn is_recording(&self) -> bool {
        self.recording.load(Ordering::SeqCst)
    }
}

impl Drop for MicCapture {
    fn drop(&mut self) {
        self.recording.store(false, Ordering::SeqCst);
        self.stream.take();
    }
}

/// Look up an input device by its configured name
fn find_device_by_name(host: &cpal::Host, name: &str) -> Result<cpal::Device> {
    let devices = host
        .input_devices()
        .map_err(|e| DictateError::DeviceAccess(format!("Failed to enumerate devices: {e}")))?;

    for device in devices {
        if device.name().map(|n| n == name).unwrap_or(false) {
            return Ok(device);
        }
    }

    Err(DictateError::DeviceAccess(format!(
        "Input device '{name}' not found"
    )))
}

/// Find a suitable audio configuration
fn find_suitable_config(
    configs: cpal::SupportedInputConfigs,
    target_sample_rate: u32,
    target_channels: u16,
) -> Result<cpal::SupportedStreamConfig> {
    let configs: Vec<_> = configs.collect();

    // Try to find exact match first
    for config in &configs {
        if config.channels() == target_channels
            && config.min_sample_rate().0 <= target_sample_rate
            && config.max_sample_rate().0 >= target_sample_rate
        {
            return Ok(config
                .clone()
                .with_sample_rate(cpal::SampleRate(target_sample_rate)));
        }
    }

    // Fall back to any config that supports the sample rate
    for config in &configs {
        if config.min_sample_rate().0 <= target_sample_rate
            && config.max_sample_rate().0 >= target_sample_rate
        {
            return Ok(config
                .clone()
                .with_sample_rate(cpal::SampleRate(target_sample_rate)));
        }
    }

    // Just use the first available config
    configs
        .into_iter()
        .next()
        .map(|c| c.with_max_sample_rate())
        .ok_or_else(|| {
            DictateError::DeviceAccess("No supported audio configuration found".into())
        })
}

/// Build an audio stream for a specific sample format
fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    chunks: Arc<Mutex<Vec<Vec<f32>>>>,
    recording: Arc<AtomicBool>,
) -> Result<Stream>
where
    T: cpal::Sample + cpal::SizedSample + 'static,
    f32: cpal::FromSample<T>,
{
    let err_fn = |err| tracing::error!("Audio stream error: {}", err);

    let stream = device
        .build_input_stream(
            config,
            move |data: &[T], _: &cpal::InputCallbackInfo| {
                if !recording.load(Ordering::SeqCst) {
                    return;
                }

                let chunk: Vec<f32> = data
                    .iter()
                    .map(|&sample| cpal::Sample::from_sample(sample))
                    .collect();

                if let Ok(mut guard) = chunks.lock() {
                    guard.push(chunk);
                }
            },
            err_fn,
            None,
        )
        .map_err(|e| DictateError::Capture(format!("Failed to build input stream: {e}")))?;

    Ok(stream)
}
