// src/services/space_api.rs
//! Direct HTTP access to the Space, bypassing the structured client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use super::resolver::ChatStrategy;
use crate::error::UpstreamError;

/// Index of the chat function in the Space's function table.
pub const CHAT_FN_INDEX: u32 = 0;

#[derive(Serialize)]
struct PredictRequest<'a> {
    data: [&'a str; 1],
    fn_index: u32,
}

#[derive(Deserialize)]
struct PredictResponse {
    data: Option<Vec<Value>>,
}

#[derive(Clone, Debug)]
pub struct SpaceApi {
    http: Client,
    base_url: String,
}

impl SpaceApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url: base_url.into() })
    }

    pub async fn predict(&self, message: &str) -> Result<String, UpstreamError> {
        let url = format!("{}/api/predict", self.base_url);

        let resp = self
            .http
            .post(&url)
            .json(&PredictRequest { data: [message], fn_index: CHAT_FN_INDEX })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(UpstreamError::Status(resp.status().as_u16()));
        }

        let body: PredictResponse = resp
            .json()
            .await
            .map_err(|e| UpstreamError::Malformed(format!("predict body: {e}")))?;

        body.data
            .and_then(|data| data.into_iter().next())
            .and_then(reply_text)
            .ok_or(UpstreamError::EmptyResult)
    }
}

#[async_trait]
impl ChatStrategy for SpaceApi {
    fn name(&self) -> &'static str {
        "raw_api"
    }

    async fn attempt(&self, message: &str) -> Result<String, UpstreamError> {
        self.predict(message).await
    }
}

/// Text of a single output slot. Non-string values are kept as their JSON text.
pub fn reply_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// One-shot reachability check of the Space's base URL. Only logs.
pub async fn probe(base_url: &str, timeout: Duration) -> bool {
    let result = match Client::builder().timeout(timeout).build() {
        Ok(http) => http.get(base_url).send().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(resp) if resp.status().is_success() => {
            info!(url = base_url, "space is accessible");
            true
        }
        Ok(resp) => {
            warn!(
                url = base_url,
                status = resp.status().as_u16(),
                "space returned unexpected status"
            );
            false
        }
        Err(e) => {
            warn!(url = base_url, error = %e, "could not reach space");
            false
        }
    }
}
