use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, HealthResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // An unreadable body is reported like any other internal failure.
    let Json(payload) = payload.map_err(|e| AppError::Internal(e.body_text()))?;

    let trimmed = payload.trimmed();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    let resolution = state.resolver.resolve(trimmed).await;
    info!(origin = ?resolution.origin, "chat reply resolved");

    Ok(Json(ChatResponse::reply(resolution.reply, trimmed)))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
