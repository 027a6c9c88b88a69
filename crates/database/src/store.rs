use crate::models::{Character, ConversationTurn, NewTurn};

/// Storage seam for the conversation engine. The engine only reads and
/// writes rows through this trait and never caches them beyond a single
/// request; all durable state is owned by the store.
#[async_trait::async_trait]
pub trait ChatStore: Send + Sync {
    /// Inserts a character, returning `None` when the name is already taken.
    async fn insert_character(
        &self,
        name: &str,
        description: &str,
        prompt_template: &str,
    ) -> Result<Option<Character>, sqlx::Error>;

    async fn character_by_name(&self, name: &str) -> Result<Option<Character>, sqlx::Error>;

    async fn list_characters(&self) -> Result<Vec<Character>, sqlx::Error>;

    /// Persists one completed turn, assigning its timestamp at write time.
    async fn record_turn(&self, turn: NewTurn) -> Result<ConversationTurn, sqlx::Error>;

    /// Every persisted turn for `user_id`, ascending by timestamp. Unbounded
    /// and deliberately not scoped by chat session or character.
    async fn turns_for_user(&self, user_id: i64) -> Result<Vec<ConversationTurn>, sqlx::Error>;
}
