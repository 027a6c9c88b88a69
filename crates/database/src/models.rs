use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persona the generator is asked to play. Seeded at startup or created
/// through the admin surface; never updated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub prompt_template: String,
}

/// One user input / bot response pair. Rows are append-only: every turn has
/// exactly one `bot_response`, while `user_input` may be absent when the
/// input was audio or video only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ConversationTurn {
    pub id: i64,
    pub character_id: i64,
    pub user_id: i64,
    pub chat_id: Option<String>,
    pub user_input: Option<String>,
    pub bot_response: String,
    pub created_at: i64,
}

/// Payload for persisting a freshly generated turn. `created_at` is assigned
/// by the store at write time.
#[derive(Debug, Clone)]
pub struct NewTurn {
    pub character_id: i64,
    pub user_id: i64,
    pub chat_id: String,
    pub user_input: Option<String>,
    pub bot_response: String,
}
