//! CLI command implementations

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::AsyncBufReadExt;

use crate::api::{HttpApiClient, Transcript, TranscriptApi};
use crate::audio::{encode_wav, MicCapture};
use crate::cli::args::ConfigCommand;
use crate::config::Settings;

/// Record from the microphone, encode to WAV, and upload for transcription
pub async fn record(settings: &Settings, output: Option<PathBuf>) -> Result<()> {
    // Fail on configuration problems before touching the microphone.
    let client = HttpApiClient::from_settings(settings)?;

    let mut capture = MicCapture::new(settings);
    capture
        .start()
        .context("Could not start recording. Check that a microphone is connected.")?;

    println!("Recording... press Enter to stop (Ctrl-C also stops).");

    wait_for_stop().await?;

    let recording = capture.stop();
    println!(
        "Recorded {:.1}s of audio ({} Hz, {} channel{})",
        recording.duration_secs(),
        recording.sample_rate,
        recording.channels,
        if recording.channels == 1 { "" } else { "s" }
    );

    if recording.samples.is_empty() {
        tracing::warn!("Recording contains no samples; uploading anyway");
    }

    // Encoding always completes before the upload starts.
    let wav_bytes = encode_wav(&recording.samples, recording.channels, recording.sample_rate);
    let filename = format!("dictation-{}.wav", Utc::now().format("%Y%m%dT%H%M%SZ"));

    // Keep a local copy; the backend stores its own under the same name.
    let copy_path = match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            path
        }
        None => {
            settings.ensure_dirs()?;
            settings.audio_dir().join(&filename)
        }
    };
    std::fs::write(&copy_path, &wav_bytes)
        .with_context(|| format!("Failed to write WAV copy: {}", copy_path.display()))?;
    println!("Saved local copy: {}", copy_path.display());

    println!("Uploading for transcription...");
    let transcript = client.transcribe(wav_bytes, &filename).await?;

    println!();
    print_transcript(&transcript);

    Ok(())
}

/// Block until the user presses Enter or Ctrl-C
async fn wait_for_stop() -> Result<()> {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    tokio::select! {
        _ = lines.next_line() => {}
        _ = tokio::signal::ctrl_c() => {
            println!();
        }
    }

    Ok(())
}

/// List transcripts stored on the server
pub async fn list_transcripts(settings: &Settings, limit: usize) -> Result<()> {
    let client = HttpApiClient::from_settings(settings)?;
    let transcripts = client.list_transcripts().await?;

    if transcripts.is_empty() {
        println!("No transcripts yet");
        return Ok(());
    }

    println!("{:<6} {:<17} {}", "ID", "Date", "Text");
    println!("{}", "-".repeat(70));

    for transcript in transcripts.iter().take(limit) {
        println!(
            "{:<6} {:<17} {}",
            transcript.id,
            transcript.created_at.format("%Y-%m-%d %H:%M"),
            transcript.preview(45)
        );
    }

    Ok(())
}

/// View a transcript's raw and corrected text
pub async fn view_transcript(settings: &Settings, id: i64) -> Result<()> {
    let client = HttpApiClient::from_settings(settings)?;
    let transcript = client.get_transcript(id).await?;

    print_transcript(&transcript);
    Ok(())
}

/// Delete a transcript, asking for confirmation first
pub async fn delete_transcript(settings: &Settings, id: i64, yes: bool) -> Result<()> {
    if !yes && !confirm_deletion(id)? {
        println!("Deletion cancelled");
        return Ok(());
    }

    let client = HttpApiClient::from_settings(settings)?;
    client.delete_transcript(id).await?;

    println!("Transcript {} deleted", id);
    Ok(())
}

/// Prompt for deletion confirmation; anything but y/yes declines
fn confirm_deletion(id: i64) -> Result<bool> {
    print!("Delete transcript {}? This cannot be undone. [y/N] ", id);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn print_transcript(transcript: &Transcript) {
    println!("Transcript {}", transcript.id);
    println!(
        "Created: {}",
        transcript.created_at.format("%Y-%m-%d %H:%M")
    );
    if let Some(filename) = transcript.audio_filename.as_deref() {
        println!("Audio: {}", filename);
    }
    println!();
    println!("Raw:");
    println!("{}", transcript.converted_text);
    println!();
    println!("Corrected:");
    println!("{}", transcript.corrected_text);
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
        ConfigCommand::Set { key, value } => {
            // Simple key=value setting - would need more sophisticated implementation
            // for nested keys like "server.base_url"
            println!("Setting {}={}", key, value);
            println!("(Note: Manual config editing is recommended for now)");
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: &'static str,
    detail: String,
}

#[derive(Serialize)]
struct DoctorReport {
    server: String,
    sample_rate: u32,
    channels: u16,
    checks: Vec<DoctorCheck>,
    notes: Vec<String>,
}

/// Run diagnostic checks to help troubleshoot local setup issues.
pub async fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("dictate doctor");
    println!("server: {}", report.server);
    println!(
        "capture: {} Hz, {} channel{}",
        report.sample_rate,
        report.channels,
        if report.channels == 1 { "" } else { "s" }
    );
    println!();

    for check in &report.checks {
        println!("{:<12} {:<12} {}", check.name, check.status, check.detail);
    }

    if !report.notes.is_empty() {
        println!();
        for note in &report.notes {
            println!("{}", note);
        }
    }

    Ok(())
}

async fn collect_doctor_report(settings: &Settings) -> DoctorReport {
    let mut checks = Vec::new();
    let mut notes = Vec::new();

    // Microphone presence
    if crate::audio::input_device_available() {
        checks.push(DoctorCheck {
            name: "microphone",
            status: "ok",
            detail: "input device found".to_string(),
        });
    } else {
        checks.push(DoctorCheck {
            name: "microphone",
            status: "missing",
            detail: "no audio input device detected".to_string(),
        });
        notes.push("hint: connect a microphone or check your audio server.".to_string());
    }

    // Backend liveness
    match HttpApiClient::from_settings(settings) {
        Ok(client) => match client.health().await {
            Ok(health) if health.is_healthy() => {
                let services = if health.services.is_empty() {
                    "reachable".to_string()
                } else {
                    let mut names: Vec<_> = health.services.keys().cloned().collect();
                    names.sort();
                    format!("services: {}", names.join(", "))
                };
                checks.push(DoctorCheck {
                    name: "server",
                    status: "ok",
                    detail: services,
                });
            }
            Ok(health) => {
                checks.push(DoctorCheck {
                    name: "server",
                    status: "unhealthy",
                    detail: health.error.unwrap_or_else(|| "no detail given".to_string()),
                });
            }
            Err(e) => {
                checks.push(DoctorCheck {
                    name: "server",
                    status: "unreachable",
                    detail: e.to_string(),
                });
                notes.push(format!(
                    "hint: is the backend running at {}?",
                    settings.server.base_url
                ));
            }
        },
        Err(e) => {
            checks.push(DoctorCheck {
                name: "server",
                status: "misconfigured",
                detail: e.to_string(),
            });
        }
    }

    DoctorReport {
        server: settings.server.base_url.clone(),
        sample_rate: settings.audio.sample_rate,
        channels: settings.audio.channels,
        checks,
        notes,
    }
}
