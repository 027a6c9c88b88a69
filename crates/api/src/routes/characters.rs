use anyhow::anyhow;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use charchat_engine::ChatError;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::response::{AppError, AppSuccess};
use crate::GlobalState;

pub fn character_routes() -> Router<GlobalState> {
    Router::new()
        .route("/characters", get(list_characters))
        .route("/character", post(create_character))
}

async fn list_characters(State(state): State<GlobalState>) -> Result<AppSuccess, AppError> {
    let characters = state.engine.list_characters().await;
    Ok(AppSuccess::new(
        StatusCode::OK,
        "Characters fetched successfully",
        json!(characters),
    ))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCharacterRequest {
    pub name: String,
    pub description: String,
    pub prompt_template: String,
}

async fn create_character(
    State(state): State<GlobalState>,
    Json(payload): Json<CreateCharacterRequest>,
) -> Result<AppSuccess, AppError> {
    let character = state
        .engine
        .add_character(&payload.name, &payload.description, &payload.prompt_template)
        .await
        .map_err(|e| match e {
            ChatError::DuplicateName(_) => AppError::new(StatusCode::CONFLICT, anyhow!("{e}")),
            other => AppError::new(StatusCode::INTERNAL_SERVER_ERROR, other.into()),
        })?;

    Ok(AppSuccess::new(
        StatusCode::CREATED,
        &format!(
            "Character '{}' added successfully!\nDescription: {}",
            character.name, character.description
        ),
        json!({ "id": character.id }),
    ))
}
