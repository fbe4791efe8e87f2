//! Configuration module for dictate
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::Settings;
