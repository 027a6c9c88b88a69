use std::path::{Path, PathBuf};

use charchat_common::EnvVars;
use charchat_engine::{TranscribeError, Transcriber, Transcript};
use serde::Deserialize;
use uuid::Uuid;

use crate::env::SpeechEnv;

/// Client for the external speech-recognition service: POST the wav bytes,
/// get back `{"transcript": "..."}`. An empty transcript means the service
/// heard nothing it could make out.
#[derive(Clone)]
pub struct SpeechClient {
    http: reqwest::Client,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    transcript: String,
}

impl SpeechClient {
    pub fn new() -> Self {
        let env = SpeechEnv::load();
        Self::with_endpoint(env.speech_api_url)
    }

    pub fn with_endpoint(api_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url,
        }
    }

    async fn recognize(&self, audio_path: &Path) -> Result<Transcript, TranscribeError> {
        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| TranscribeError::Service(format!("cannot read audio file: {e}")))?;

        let response = self
            .http
            .post(format!("{}/recognize", self.api_url))
            .header("Content-Type", "audio/wav")
            .body(audio)
            .send()
            .await
            .map_err(|e| TranscribeError::Service(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranscribeError::Service(format!(
                "speech service returned {status}"
            )));
        }

        let parsed: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| TranscribeError::Service(e.to_string()))?;

        if parsed.transcript.trim().is_empty() {
            Ok(Transcript::Unintelligible)
        } else {
            Ok(Transcript::Text(parsed.transcript))
        }
    }
}

#[async_trait::async_trait]
impl Transcriber for SpeechClient {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcript, TranscribeError> {
        self.recognize(audio_path).await
    }
}

/// Extracts the audio track of a video file into a temporary wav via ffmpeg.
/// The caller owns the returned file and removes it when done.
pub async fn extract_audio_from_video(video_path: &Path) -> Result<PathBuf, TranscribeError> {
    let output = std::env::temp_dir().join(format!("{}.wav", Uuid::new_v4()));

    let status = tokio::process::Command::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg(video_path)
        .arg("-vn")
        .arg("-acodec")
        .arg("pcm_s16le")
        .arg("-ar")
        .arg("16000")
        .arg(&output)
        .status()
        .await
        .map_err(|e| TranscribeError::Extraction(format!("failed to run ffmpeg: {e}")))?;

    if !status.success() {
        return Err(TranscribeError::Extraction(format!(
            "ffmpeg exited with {status}"
        )));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn wav_fixture() -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}.wav", Uuid::new_v4()));
        tokio::fs::write(&path, b"RIFF....WAVE").await.unwrap();
        path
    }

    #[tokio::test]
    async fn recognized_speech_comes_back_as_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/recognize")
            .with_status(200)
            .with_body(r#"{"transcript": "tell me a joke"}"#)
            .create_async()
            .await;

        let path = wav_fixture().await;
        let client = SpeechClient::with_endpoint(server.url());
        let transcript = client.transcribe(&path).await.unwrap();
        assert_eq!(transcript, Transcript::Text("tell me a joke".to_string()));
        tokio::fs::remove_file(&path).await.ok();
    }

    #[tokio::test]
    async fn empty_transcript_is_unintelligible_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/recognize")
            .with_status(200)
            .with_body(r#"{"transcript": "  "}"#)
            .create_async()
            .await;

        let path = wav_fixture().await;
        let client = SpeechClient::with_endpoint(server.url());
        let transcript = client.transcribe(&path).await.unwrap();
        assert_eq!(transcript, Transcript::Unintelligible);
        tokio::fs::remove_file(&path).await.ok();
    }

    #[tokio::test]
    async fn service_failure_stays_a_typed_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/recognize")
            .with_status(503)
            .create_async()
            .await;

        let path = wav_fixture().await;
        let client = SpeechClient::with_endpoint(server.url());
        let err = client.transcribe(&path).await.unwrap_err();
        assert!(matches!(err, TranscribeError::Service(_)));
        tokio::fs::remove_file(&path).await.ok();
    }
}
