use axum::{http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::response::{AppError, AppSuccess};
use crate::GlobalState;

pub fn auth_routes() -> Router<GlobalState> {
    Router::new().route("/signin", post(sign_in))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignInRequest {
    pub user_id: String,
}

/// There is no user table; sign-in only validates that the id is numeric
/// and echoes it back for the client to carry on subsequent requests.
async fn sign_in(Json(payload): Json<SignInRequest>) -> Result<AppSuccess, AppError> {
    match payload.user_id.trim().parse::<i64>() {
        Ok(user_id) => Ok(AppSuccess::new(
            StatusCode::OK,
            &format!("Welcome, User {user_id}!"),
            json!({ "user_id": user_id }),
        )),
        Err(_) => Ok(AppSuccess::new(
            StatusCode::BAD_REQUEST,
            "Please enter a valid numeric User ID (e.g., 123)!",
            json!(null),
        )),
    }
}
