use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use chrono::DateTime;
use serde_json::json;

use crate::response::{AppError, AppSuccess};
use crate::GlobalState;

pub fn history_routes() -> Router<GlobalState> {
    Router::new().route("/history/{user_id}", get(view_history))
}

async fn view_history(
    State(state): State<GlobalState>,
    Path(user_id): Path<i64>,
) -> Result<AppSuccess, AppError> {
    let turns = match state.engine.history(user_id).await {
        Ok(turns) => turns,
        Err(e) => {
            // Storage trouble degrades to an empty history, never a fault.
            tracing::error!("error retrieving chat history for user {user_id}: {e}");
            return Ok(AppSuccess::new(
                StatusCode::OK,
                "Chat history unavailable",
                json!([]),
            ));
        }
    };

    let entries: Vec<_> = turns
        .iter()
        .map(|turn| {
            let timestamp = DateTime::from_timestamp(turn.created_at, 0)
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default();
            json!({
                "id": turn.id,
                "chat_id": turn.chat_id,
                "entry": format!(
                    "User: {}\nBot: {} at {}",
                    turn.user_input.as_deref().unwrap_or_default(),
                    turn.bot_response,
                    timestamp,
                ),
            })
        })
        .collect();

    Ok(AppSuccess::new(
        StatusCode::OK,
        "Chat history fetched successfully",
        json!(entries),
    ))
}
