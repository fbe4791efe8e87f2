//! HTTP client for the transcription backend

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use crate::api::models::{HealthStatus, Transcript};
use crate::config::Settings;
use crate::{DictateError, Result};

/// Backend API surface
///
/// Trait seam so command and UI logic can be driven by a stub in tests.
#[async_trait]
pub trait TranscriptApi: Send + Sync {
    /// Upload encoded WAV audio and receive the processed transcript
    async fn transcribe(&self, wav_bytes: Vec<u8>, filename: &str) -> Result<Transcript>;

    /// Fetch the full transcript collection, backend-ordered
    async fn list_transcripts(&self) -> Result<Vec<Transcript>>;

    /// Fetch a single transcript by id
    async fn get_transcript(&self, id: i64) -> Result<Transcript>;

    /// Delete a transcript by id
    async fn delete_transcript(&self, id: i64) -> Result<()>;

    /// Probe the backend liveness endpoint
    async fn health(&self) -> Result<HealthStatus>;
}

/// reqwest-backed client for the REST interface
pub struct HttpApiClient {
    http: Client,
    base_url: String,
}

impl HttpApiClient {
    /// Build a client from runtime settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings.server.base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(DictateError::Config(
                "server.base_url is empty. Set it in config or DICTATE_SERVER_URL.".into(),
            ));
        }

        let http = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(settings.server.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    fn transcribe_url(&self) -> String {
        format!("{}/api/transcribe/", self.base_url)
    }

    fn transcripts_url(&self) -> String {
        format!("{}/api/transcripts/", self.base_url)
    }

    fn transcript_url(&self, id: i64) -> String {
        format!("{}/api/transcripts/{}/", self.base_url, id)
    }

    fn health_url(&self) -> String {
        format!("{}/api/health/", self.base_url)
    }
}

#[async_trait]
impl TranscriptApi for HttpApiClient {
    async fn transcribe(&self, wav_bytes: Vec<u8>, filename: &str) -> Result<Transcript> {
        let part = Part::bytes(wav_bytes)
            .file_name(filename.to_string())
            .mime_str("audio/wav")?;
        let form = Form::new().part("audio", part);

        tracing::debug!("Uploading {} to backend", filename);

        let response = self
            .http
            .post(self.transcribe_url())
            .multipart(form)
            .send()
            .await?;

        let response = check_status(response).await?;
        let transcript: Transcript = response.json().await?;

        tracing::info!("Transcript {} created", transcript.id);
        Ok(transcript)
    }

    async fn list_transcripts(&self) -> Result<Vec<Transcript>> {
        let response = self.http.get(self.transcripts_url()).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn get_transcript(&self, id: i64) -> Result<Transcript> {
        let response = self.http.get(self.transcript_url(id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DictateError::NotFound(format!("transcript {id}")));
        }

        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn delete_transcript(&self, id: i64) -> Result<()> {
        let response = self.http.delete(self.transcript_url(id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DictateError::NotFound(format!("transcript {id}")));
        }

        check_status(response).await?;
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus> {
        let response = self.http.get(self.health_url()).send().await?;

        // The backend answers 503 with a body describing what is unhealthy,
        // which is still a well-formed health report.
        Ok(response.json().await?)
    }
}

/// Error detail shape used by the backend on failures
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Map a non-success response to an API error carrying the backend's message
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(api_error(status, &body))
}

fn api_error(status: StatusCode, body: &str) -> DictateError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    DictateError::Api {
        status: status.as_u16(),
        message,
    }
}
