use anyhow::Result;
use axum::Router;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use charchat_api::{
    auth_routes, character_routes, chat_routes, history_routes, misc_routes, setup_tracing,
    GlobalState,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup_tracing();

    let cors = CorsLayer::very_permissive();
    let trace = TraceLayer::new_for_http();

    // Connects, bootstraps the schema and seeds the default personas;
    // refuses to start on a missing DATABASE_URL or GEMINI_API_KEY.
    let state = GlobalState::new().await?;

    let app = Router::new()
        .merge(auth_routes())
        .merge(character_routes())
        .merge(chat_routes())
        .merge(history_routes())
        .merge(misc_routes())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(3600)))
        .layer(cors)
        .layer(trace)
        .with_state(state);

    let port: u16 = std::env::var("PORT")
        .unwrap_or("3033".into())
        .parse()
        .expect("failed to convert to number");

    let listener = tokio::net::TcpListener::bind(format!(":::{port}")).await?;

    tracing::info!("LISTENING ON {port}");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
