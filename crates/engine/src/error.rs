use thiserror::Error;

/// Typed failure causes for a chat turn. The HTTP layer flattens these to a
/// rendered message; the types stay distinct so callers and tests can tell
/// the causes apart.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Character '{0}' already exists!")]
    DuplicateName(String),

    #[error("Character not found.")]
    CharacterNotFound,

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("storage failure: {0}")]
    Store(#[from] sqlx::Error),
}

/// Failures from the external generation API. The `Http` display keeps the
/// status code in front so the surfaced message carries it verbatim.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("{status} - {body}")]
    Http { status: u16, body: String },

    #[error("Unexpected response format: {0}")]
    Malformed(String),

    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

/// Transcription failures. "Could not understand" is not an error at all
/// (see [`crate::Transcript`]); these are the genuinely broken cases.
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("speech service failure: {0}")]
    Service(String),

    #[error("failed to extract audio track: {0}")]
    Extraction(String),
}
