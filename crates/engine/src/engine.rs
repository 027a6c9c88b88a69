use charchat_database::{Character, ChatStore, ConversationTurn, NewTurn};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ChatError;
use crate::generator::Generator;
use crate::preload::default_characters;

/// What a chat turn hands back to the presentation layer. Every failure path
/// is already flattened into `text`; a turn never surfaces as a fault.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub text: String,
    pub chat_id: Option<String>,
}

/// The conversation engine: resolves the persona, assembles the context
/// prompt from the user's full prior history, calls the generator and
/// persists the completed turn.
pub struct ChatEngine<S, G> {
    store: S,
    generator: G,
}

/// Prompt layout: the persona template, then every prior turn rendered as
/// `User: {input}\nBot: {response}` joined by single spaces, then the
/// current turn left open for the generator to complete.
pub fn assemble_prompt(template: &str, turns: &[ConversationTurn], user_input: &str) -> String {
    let context = turns
        .iter()
        .map(|turn| {
            format!(
                "User: {}\nBot: {}",
                turn.user_input.as_deref().unwrap_or_default(),
                turn.bot_response
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("{template}\n{context}\nUser: {user_input}\nBot:")
}

impl<S: ChatStore, G: Generator> ChatEngine<S, G> {
    pub fn new(store: S, generator: G) -> Self {
        Self { store, generator }
    }

    /// Idempotent: inserts each fixed default persona unless a character of
    /// that name already exists. Called once at process startup.
    pub async fn seed_default_characters(&self) -> Result<(), ChatError> {
        for character in default_characters() {
            let inserted = self
                .store
                .insert_character(character.name, character.description, character.prompt_template)
                .await?;
            if inserted.is_some() {
                tracing::info!("seeded default character: {}", character.name);
            }
        }
        Ok(())
    }

    pub async fn add_character(
        &self,
        name: &str,
        description: &str,
        prompt_template: &str,
    ) -> Result<Character, ChatError> {
        self.store
            .insert_character(name, description, prompt_template)
            .await?
            .ok_or_else(|| ChatError::DuplicateName(name.to_string()))
    }

    /// Read-only snapshot of `(name, description)` pairs. A storage failure
    /// is logged and rendered as a single placeholder entry; callers never
    /// see the error itself.
    pub async fn list_characters(&self) -> Vec<(String, String)> {
        match self.store.list_characters().await {
            Ok(characters) => characters
                .into_iter()
                .map(|c| (c.name, c.description))
                .collect(),
            Err(e) => {
                tracing::error!("error retrieving characters: {e}");
                vec![("Error retrieving characters".to_string(), e.to_string())]
            }
        }
    }

    pub async fn history(&self, user_id: i64) -> Result<Vec<ConversationTurn>, ChatError> {
        Ok(self.store.turns_for_user(user_id).await?)
    }

    /// One chat turn. Context is keyed by `user_id`, not by `chat_id`:
    /// switching characters or sessions mid-stream still carries the user's
    /// full prior transcript.
    pub async fn chat(
        &self,
        character_name: &str,
        user_input: &str,
        user_id: i64,
        chat_id: Option<String>,
    ) -> ChatReply {
        let character = match self.store.character_by_name(character_name).await {
            Ok(Some(character)) => character,
            Ok(None) => {
                return ChatReply {
                    text: ChatError::CharacterNotFound.to_string(),
                    chat_id: None,
                }
            }
            Err(e) => {
                tracing::error!("error resolving character '{character_name}': {e}");
                return ChatReply {
                    text: format!("An unexpected error occurred: {e}"),
                    chat_id,
                };
            }
        };

        let chat_id = chat_id.unwrap_or_else(|| Uuid::new_v4().to_string());

        match self.run_turn(&character, user_input, user_id, &chat_id).await {
            Ok(text) => ChatReply {
                text,
                chat_id: Some(chat_id),
            },
            Err(ChatError::Generator(e)) => {
                tracing::error!("error from generation API: {e}");
                ChatReply {
                    text: format!("An error occurred while generating content: {e}"),
                    chat_id: Some(chat_id),
                }
            }
            Err(e) => {
                tracing::error!("unexpected error in chat turn: {e}");
                ChatReply {
                    text: format!("An unexpected error occurred: {e}"),
                    chat_id: Some(chat_id),
                }
            }
        }
    }

    /// The happy path: read context, release the store, call out, persist.
    /// A failed generator call persists nothing; a successful one persists
    /// exactly one row.
    async fn run_turn(
        &self,
        character: &Character,
        user_input: &str,
        user_id: i64,
        chat_id: &str,
    ) -> Result<String, ChatError> {
        let previous_turns = self.store.turns_for_user(user_id).await?;
        let prompt = assemble_prompt(&character.prompt_template, &previous_turns, user_input);

        let bot_response = self.generator.generate(&prompt).await?;

        let turn = self
            .store
            .record_turn(NewTurn {
                character_id: character.id,
                user_id,
                chat_id: chat_id.to_string(),
                user_input: Some(user_input.to_string()),
                bot_response: bot_response.clone(),
            })
            .await?;
        tracing::info!("saved conversation turn {} for chat_id {chat_id}", turn.id);

        Ok(bot_response)
    }
}
