use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hfchat_backend::{config::AppConfig, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hfchat_backend=debug")),
        )
        .init();

    let config = AppConfig::from_env()?;
    info!(space = %config.space_id, url = %config.space_url, "starting chatbot backend");

    let state = Arc::new(AppState::bootstrap(&config).await?);
    if !state.resolver.has_client() {
        warn!("gradio client unavailable, replies come from the raw api or mock responses");
    }

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "chatbot backend listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
