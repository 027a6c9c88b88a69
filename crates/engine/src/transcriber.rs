use std::path::Path;

use crate::error::TranscribeError;

/// Outcome of a transcription attempt. "The service could not make out any
/// words" is an ordinary outcome, kept separate from service failures so the
/// two causes are distinguishable even though the UI renders them the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    Text(String),
    Unintelligible,
}

/// External speech-recognition service, fed a local audio file path.
#[async_trait::async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcript, TranscribeError>;
}
