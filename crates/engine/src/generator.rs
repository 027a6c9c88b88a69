use crate::error::GeneratorError;

/// The external LLM service. One flat prompt in, one block of text out; no
/// streaming, no retries, no backoff.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
