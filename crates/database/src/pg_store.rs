use charchat_common::get_current_timestamp;
use sqlx::PgPool;

use crate::models::{Character, ConversationTurn, NewTurn};
use crate::store::ChatStore;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ChatStore for PgStore {
    async fn insert_character(
        &self,
        name: &str,
        description: &str,
        prompt_template: &str,
    ) -> Result<Option<Character>, sqlx::Error> {
        // The unique constraint on `name` arbitrates duplicates; DO NOTHING
        // turns the conflict into a `None` instead of an error.
        let character = sqlx::query_as::<_, Character>(
            r#"
            INSERT INTO characters (name, description, prompt_template)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO NOTHING
            RETURNING id, name, description, prompt_template
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(prompt_template)
        .fetch_optional(&self.pool)
        .await?;

        Ok(character)
    }

    async fn character_by_name(&self, name: &str) -> Result<Option<Character>, sqlx::Error> {
        sqlx::query_as::<_, Character>(
            "SELECT id, name, description, prompt_template FROM characters WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
    }

    async fn list_characters(&self) -> Result<Vec<Character>, sqlx::Error> {
        sqlx::query_as::<_, Character>(
            "SELECT id, name, description, prompt_template FROM characters ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn record_turn(&self, turn: NewTurn) -> Result<ConversationTurn, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ConversationTurn>(
            r#"
            INSERT INTO conversation_turns
                (character_id, user_id, chat_id, user_input, bot_response, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, character_id, user_id, chat_id, user_input, bot_response, created_at
            "#,
        )
        .bind(turn.character_id)
        .bind(turn.user_id)
        .bind(&turn.chat_id)
        .bind(&turn.user_input)
        .bind(&turn.bot_response)
        .bind(get_current_timestamp())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    async fn turns_for_user(&self, user_id: i64) -> Result<Vec<ConversationTurn>, sqlx::Error> {
        sqlx::query_as::<_, ConversationTurn>(
            r#"
            SELECT id, character_id, user_id, chat_id, user_input, bot_response, created_at
            FROM conversation_turns
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }
}
