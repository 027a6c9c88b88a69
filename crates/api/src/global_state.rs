use std::sync::Arc;

use anyhow::Result;
use charchat_clients::{GeminiClient, SpeechClient};
use charchat_common::EnvVars;
use charchat_database::{connect, init_schema, PgStore, PostgresEnv};
use charchat_engine::ChatEngine;

/// Everything a request handler needs, built once at startup and cloned per
/// request. Credentials are loaded here; a missing DATABASE_URL or
/// GEMINI_API_KEY aborts the process before it serves anything.
#[derive(Clone)]
pub struct GlobalState {
    pub engine: Arc<ChatEngine<PgStore, GeminiClient>>,
    pub generator: GeminiClient,
    pub speech: SpeechClient,
}

impl GlobalState {
    pub async fn new() -> Result<Self> {
        let postgres_env = PostgresEnv::load();
        let pool = connect(&postgres_env.database_url).await?;
        init_schema(&pool).await?;

        let generator = GeminiClient::new();
        let speech = SpeechClient::new();

        let engine = Arc::new(ChatEngine::new(PgStore::new(pool), generator.clone()));
        engine.seed_default_characters().await?;

        Ok(Self {
            engine,
            generator,
            speech,
        })
    }
}
