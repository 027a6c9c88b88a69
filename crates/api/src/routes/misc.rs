use axum::{extract::State, http::StatusCode, routing::get, Router};
use charchat_clients::PROBE_PROMPT;
use charchat_engine::Generator;
use serde_json::json;

use crate::response::{AppError, AppSuccess};
use crate::GlobalState;

pub fn misc_routes() -> Router<GlobalState> {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/status", get(api_status))
}

/// Probes the generation API with a canned prompt and reports reachability
/// as text, exactly what the status tab renders.
async fn api_status(State(state): State<GlobalState>) -> Result<AppSuccess, AppError> {
    match state.generator.generate(PROBE_PROMPT).await {
        Ok(_) => Ok(AppSuccess::new(
            StatusCode::OK,
            "API connection successful!",
            json!({ "reachable": true }),
        )),
        Err(e) => {
            tracing::warn!("generation API probe failed: {e}");
            Ok(AppSuccess::new(
                StatusCode::OK,
                "API connection failed!",
                json!({ "reachable": false }),
            ))
        }
    }
}
