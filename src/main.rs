//! dictate - Voice dictation with transcription and grammar correction
//!
//! Entry point for the dictate CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dictate::cli::{Cli, Commands};
use dictate::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            dictate::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            // Execute command
            match command {
                Commands::Record { output } => {
                    dictate::cli::commands::record(&settings, output).await?;
                }
                Commands::List { limit } => {
                    dictate::cli::commands::list_transcripts(&settings, limit).await?;
                }
                Commands::View { id } => {
                    dictate::cli::commands::view_transcript(&settings, id).await?;
                }
                Commands::Delete { id, yes } => {
                    dictate::cli::commands::delete_transcript(&settings, id, yes).await?;
                }
                Commands::Doctor { json } => {
                    dictate::cli::commands::run_doctor(&settings, json).await?;
                }
                Commands::Tui => {
                    dictate::tui::run(&settings).await?;
                }
                Commands::Config(config_cmd) => {
                    dictate::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
