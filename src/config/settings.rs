//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Audio capture settings
    #[serde(default)]
    pub audio: AudioSettings,

    /// Transcription server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// TUI settings
    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Data directory for locally kept WAV copies
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Sample rate for recording (default: 16000, what the speech model expects)
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Number of audio channels (1 = mono, 2 = stereo)
    #[serde(default = "default_channels")]
    pub channels: u16,

    /// Preferred input device (empty = system default)
    #[serde(default)]
    pub device: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Base URL of the transcription backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    ///
    /// Transcription runs the speech model server-side, so uploads can take
    /// considerably longer than the other endpoints.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    /// Show raw (uncorrected) text alongside the corrected transcript
    #[serde(default = "default_true")]
    pub show_raw_text: bool,

    /// Number of transcripts fetched for the browser list
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,

    /// Color theme (dark, light)
    #[serde(default = "default_theme")]
    pub theme: String,
}

// Default value functions

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "dictate", "dictate")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.local/share/dictate"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sample_rate() -> u32 {
    16000
}

fn default_channels() -> u16 {
    1
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_true() -> bool {
    true
}

fn default_list_limit() -> usize {
    100
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            channels: default_channels(),
            device: String::new(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            show_raw_text: true,
            list_limit: default_list_limit(),
            theme: default_theme(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            audio: AudioSettings::default(),
            server: ServerSettings::default(),
            tui: TuiSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DICTATE_SERVER_URL") {
            if !url.trim().is_empty() {
                self.server.base_url = url;
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "dictate", "dictate")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the directory for locally kept WAV copies
    pub fn audio_dir(&self) -> PathBuf {
        self.general.data_dir.join("audio")
    }

    /// Ensure all required directories exist
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.general.data_dir)?;
        std::fs::create_dir_all(self.audio_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_capture_contract() {
        let settings = Settings::default();
        assert_eq!(settings.audio.sample_rate, 16000);
        assert_eq!(settings.audio.channels, 1);
    }

    #[test]
    fn defaults_point_at_local_server() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, "http://localhost:8000");
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            base_url = "http://example.com:9000"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.base_url, "http://example.com:9000");
        assert_eq!(settings.server.timeout_secs, 120);
        assert_eq!(settings.audio.sample_rate, 16000);
    }
}
