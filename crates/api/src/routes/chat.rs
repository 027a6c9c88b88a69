use std::path::Path;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use charchat_clients::extract_audio_from_video;
use charchat_database::ChatStore;
use charchat_engine::{ChatEngine, Generator, Transcriber, Transcript};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::response::{AppError, AppSuccess};
use crate::GlobalState;

pub fn chat_routes() -> Router<GlobalState> {
    Router::new().route("/chat", post(chat))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub character_name: String,
    pub user_id: i64,
    pub message: Option<String>,
    /// Local paths, per the transcription service contract.
    pub audio_file: Option<String>,
    pub video_file: Option<String>,
    pub chat_id: Option<String>,
}

/// Splices a transcript onto whatever the user typed, space-separated.
fn splice_transcript(typed: &str, transcript: &str) -> String {
    if typed.is_empty() {
        transcript.to_string()
    } else {
        format!("{typed} {transcript}")
    }
}

fn fallback(message: &str, chat_id: Option<String>) -> AppSuccess {
    AppSuccess::new(
        StatusCode::OK,
        message,
        json!({ "response": message, "chat_id": chat_id }),
    )
}

async fn chat(
    State(state): State<GlobalState>,
    Json(payload): Json<ChatRequest>,
) -> Result<AppSuccess, AppError> {
    Ok(handle_chat_turn(&state.engine, &state.speech, payload).await)
}

/// The whole turn behind the route: optional transcription splice, then the
/// engine. Every fallback path returns before the engine is invoked, so a
/// failed transcription never reaches the generator.
async fn handle_chat_turn<S, G, T>(
    engine: &ChatEngine<S, G>,
    speech: &T,
    payload: ChatRequest,
) -> AppSuccess
where
    S: ChatStore,
    G: Generator,
    T: Transcriber,
{
    let mut final_input = payload.message.clone().unwrap_or_default();

    if let Some(audio_file) = &payload.audio_file {
        match speech.transcribe(Path::new(audio_file)).await {
            Ok(Transcript::Text(text)) => final_input = splice_transcript(&final_input, &text),
            // "Nothing intelligible" and "service down" render the same to
            // the user; only the logs keep them apart.
            Ok(Transcript::Unintelligible) => {
                tracing::warn!("could not understand audio: {audio_file}");
                return fallback("Could not understand audio.", payload.chat_id.clone());
            }
            Err(e) => {
                tracing::error!("speech service error for {audio_file}: {e}");
                return fallback("Could not understand audio.", payload.chat_id.clone());
            }
        }
    }

    if let Some(video_file) = &payload.video_file {
        match extract_audio_from_video(Path::new(video_file)).await {
            Ok(wav_path) => {
                match speech.transcribe(&wav_path).await {
                    Ok(Transcript::Text(text)) => {
                        final_input = splice_transcript(&final_input, &text)
                    }
                    Ok(Transcript::Unintelligible) => {
                        tracing::warn!("could not understand audio track of {video_file}")
                    }
                    Err(e) => tracing::error!("speech service error for {video_file}: {e}"),
                }
                tokio::fs::remove_file(&wav_path).await.ok();
            }
            Err(e) => {
                tracing::error!("audio extraction failed for {video_file}: {e}");
                return fallback("Failed to extract audio from video.", payload.chat_id.clone());
            }
        }
    }

    if final_input.trim().is_empty() {
        return AppSuccess::new(
            StatusCode::BAD_REQUEST,
            "Please provide a message, audio, or video!",
            json!(null),
        );
    }

    let reply = engine
        .chat(
            &payload.character_name,
            &final_input,
            payload.user_id,
            payload.chat_id,
        )
        .await;

    AppSuccess::new(
        StatusCode::OK,
        "Chat turn completed",
        json!({ "response": reply.text, "chat_id": reply.chat_id }),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use charchat_database::{Character, ConversationTurn, NewTurn};
    use charchat_engine::{GeneratorError, TranscribeError};

    use super::*;

    /// Store double holding one seeded persona; enough for a full turn.
    #[derive(Clone, Default)]
    struct OneCharacterStore {
        turns: Arc<Mutex<Vec<ConversationTurn>>>,
    }

    #[async_trait::async_trait]
    impl ChatStore for OneCharacterStore {
        async fn insert_character(
            &self,
            _name: &str,
            _description: &str,
            _prompt_template: &str,
        ) -> Result<Option<Character>, sqlx::Error> {
            Ok(None)
        }

        async fn character_by_name(&self, name: &str) -> Result<Option<Character>, sqlx::Error> {
            if name == "Chuck the Clown" {
                Ok(Some(Character {
                    id: 1,
                    name: name.to_string(),
                    description: "A funny clown who tells jokes and entertains.".to_string(),
                    prompt_template: "You are Chuck the Clown.".to_string(),
                }))
            } else {
                Ok(None)
            }
        }

        async fn list_characters(&self) -> Result<Vec<Character>, sqlx::Error> {
            Ok(vec![])
        }

        async fn record_turn(&self, turn: NewTurn) -> Result<ConversationTurn, sqlx::Error> {
            let row = ConversationTurn {
                id: 1,
                character_id: turn.character_id,
                user_id: turn.user_id,
                chat_id: Some(turn.chat_id),
                user_input: turn.user_input,
                bot_response: turn.bot_response,
                created_at: 0,
            };
            self.turns.lock().unwrap().push(row.clone());
            Ok(row)
        }

        async fn turns_for_user(&self, _user_id: i64) -> Result<Vec<ConversationTurn>, sqlx::Error> {
            Ok(self.turns.lock().unwrap().clone())
        }
    }

    #[derive(Clone)]
    struct RecordingGenerator {
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingGenerator {
        fn new() -> Self {
            Self {
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait::async_trait]
    impl Generator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("ok".to_string())
        }
    }

    /// Transcriber double with a canned outcome.
    enum StubSpeech {
        Text(&'static str),
        Unintelligible,
        ServiceDown,
    }

    #[async_trait::async_trait]
    impl Transcriber for StubSpeech {
        async fn transcribe(&self, _audio_path: &Path) -> Result<Transcript, TranscribeError> {
            match self {
                StubSpeech::Text(text) => Ok(Transcript::Text(text.to_string())),
                StubSpeech::Unintelligible => Ok(Transcript::Unintelligible),
                StubSpeech::ServiceDown => {
                    Err(TranscribeError::Service("connection refused".to_string()))
                }
            }
        }
    }

    fn audio_request() -> ChatRequest {
        ChatRequest {
            character_name: "Chuck the Clown".to_string(),
            user_id: 123,
            message: None,
            audio_file: Some("clip.wav".to_string()),
            video_file: None,
            chat_id: Some("existing-session".to_string()),
        }
    }

    #[tokio::test]
    async fn unintelligible_audio_short_circuits_before_the_generator() {
        let generator = RecordingGenerator::new();
        let store = OneCharacterStore::default();
        let engine = ChatEngine::new(store.clone(), generator.clone());

        let response = handle_chat_turn(&engine, &StubSpeech::Unintelligible, audio_request()).await;

        assert_eq!(response.message, "Could not understand audio.");
        assert_eq!(response.data["chat_id"], "existing-session");
        assert!(generator.prompts.lock().unwrap().is_empty());
        assert!(store.turns.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn speech_service_failure_renders_the_same_fallback() {
        let generator = RecordingGenerator::new();
        let store = OneCharacterStore::default();
        let engine = ChatEngine::new(store.clone(), generator.clone());

        let response = handle_chat_turn(&engine, &StubSpeech::ServiceDown, audio_request()).await;

        assert_eq!(response.message, "Could not understand audio.");
        assert!(generator.prompts.lock().unwrap().is_empty());
        assert!(store.turns.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn video_extraction_failure_short_circuits_before_the_generator() {
        let generator = RecordingGenerator::new();
        let store = OneCharacterStore::default();
        let engine = ChatEngine::new(store.clone(), generator.clone());

        let mut payload = audio_request();
        payload.audio_file = None;
        payload.video_file = Some("/nonexistent/clip.mp4".to_string());

        let response = handle_chat_turn(&engine, &StubSpeech::Unintelligible, payload).await;

        assert_eq!(response.message, "Failed to extract audio from video.");
        assert!(generator.prompts.lock().unwrap().is_empty());
        assert!(store.turns.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn transcribed_audio_is_spliced_into_the_turn() {
        let generator = RecordingGenerator::new();
        let store = OneCharacterStore::default();
        let engine = ChatEngine::new(store.clone(), generator.clone());

        let mut payload = audio_request();
        payload.message = Some("also".to_string());

        let response = handle_chat_turn(&engine, &StubSpeech::Text("a riddle"), payload).await;

        assert_eq!(response.data["response"], "ok");
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].ends_with("User: also a riddle\nBot:"));
    }

    #[test]
    fn transcript_replaces_empty_typed_input() {
        assert_eq!(splice_transcript("", "tell me a joke"), "tell me a joke");
    }

    #[test]
    fn transcript_is_appended_after_typed_input() {
        assert_eq!(splice_transcript("also", "a riddle"), "also a riddle");
    }
}
