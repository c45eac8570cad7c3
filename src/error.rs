// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::{ChatResponse, ErrorBody};

/// Message sent to the browser for any failure it cannot act on.
pub const GENERIC_FAILURE: &str = "Failed to get response from AI. Please try again.";

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The cause is logged, the client only sees [`GENERIC_FAILURE`].
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response()
            }
            AppError::Internal(cause) => {
                tracing::error!(%cause, "chat request failed");
                internal_failure()
            }
        }
    }
}

pub fn internal_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ChatResponse::failure(GENERIC_FAILURE)),
    )
        .into_response()
}

/// Why a remote strategy produced no reply. Never leaves the resolver.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("empty result")]
    EmptyResult,

    #[error("remote error: {0}")]
    Remote(String),
}
