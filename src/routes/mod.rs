// src/routes/mod.rs
pub mod chat;

use std::any::Any;

use crate::{error::internal_failure, state::SharedState};
use axum::{
    Router,
    response::Response,
    routing::{get, post},
};
use chat::{chat_handler, health_handler};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// `/` and any other unmatched GET is served from `static_dir`.
pub fn create_router(static_dir: &str) -> Router<SharedState> {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(%detail, "handler panicked");
    internal_failure()
}
