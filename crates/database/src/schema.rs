use anyhow::Result;
use sqlx::PgPool;

/// Tables are created from the entity definitions at startup; there is no
/// migration history. Every statement is idempotent so the bootstrap can run
/// on every boot.
const CREATE_TABLES_SQL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        description TEXT NOT NULL,
        prompt_template TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS conversation_turns (
        id BIGSERIAL PRIMARY KEY,
        character_id BIGINT NOT NULL REFERENCES characters(id),
        user_id BIGINT NOT NULL,
        chat_id TEXT,
        user_input TEXT,
        bot_response TEXT NOT NULL,
        created_at BIGINT NOT NULL
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_conversation_turns_user
        ON conversation_turns (user_id, created_at)
    "#,
];

pub async fn connect(database_url: &str) -> Result<PgPool> {
    let pool = PgPool::connect(database_url).await?;
    Ok(pool)
}

pub async fn init_schema(pool: &PgPool) -> Result<()> {
    for statement in CREATE_TABLES_SQL {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("database schema ready");
    Ok(())
}
