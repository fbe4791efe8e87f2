//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// dictate - Voice dictation with transcription and grammar correction
#[derive(Parser, Debug)]
#[command(name = "dictate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record from the microphone and upload for transcription
    Record {
        /// Write the encoded WAV here instead of the data directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List transcripts stored on the server
    List {
        /// Maximum number of transcripts to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// View a transcript's raw and corrected text
    View {
        /// Transcript ID
        id: i64,
    },

    /// Delete a transcript from the server
    Delete {
        /// Transcript ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Run diagnostic checks (backend health, audio devices)
    Doctor {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch the interactive TUI
    Tui,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., server.base_url)
        key: String,

        /// Value to set
        value: String,
    },
}
