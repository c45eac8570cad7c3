// src/services/gradio_client.rs
//! Structured client for a Gradio Space, using its named-endpoint call protocol:
//! `POST {prefix}/call/{api}` queues the job, `GET {prefix}/call/{api}/{event_id}`
//! streams server-sent events until `complete` or `error`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::resolver::ChatStrategy;
use super::space_api::reply_text;
use crate::error::UpstreamError;

/// Named endpoint of the Space's chat function.
pub const CHAT_API_NAME: &str = "/chat";

#[derive(Deserialize)]
struct SpaceConfig {
    #[serde(default)]
    api_prefix: Option<String>,
}

#[derive(Deserialize)]
struct QueuedCall {
    event_id: String,
}

#[derive(Clone, Debug)]
pub struct GradioClient {
    http: Client,
    base_url: String,
    api_prefix: String,
}

impl GradioClient {
    /// Fetches the Space config once; fails if the Space does not answer like a Gradio app.
    pub async fn connect(
        space_id: &str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let resp = http.get(format!("{base_url}/config")).send().await?;
        if !resp.status().is_success() {
            return Err(UpstreamError::Status(resp.status().as_u16()));
        }
        let config: SpaceConfig = resp
            .json()
            .await
            .map_err(|e| UpstreamError::Malformed(format!("space config: {e}")))?;

        let api_prefix = config
            .api_prefix
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_string();

        info!(space = space_id, %base_url, %api_prefix, "gradio client initialized");

        Ok(Self {
            http,
            base_url,
            api_prefix,
        })
    }

    pub async fn predict(&self, api_name: &str, message: &str) -> Result<String, UpstreamError> {
        let endpoint = format!(
            "{}{}/call/{}",
            self.base_url,
            self.api_prefix,
            api_name.trim_start_matches('/')
        );

        let resp = self
            .http
            .post(&endpoint)
            .json(&json!({ "data": [message] }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(UpstreamError::Status(resp.status().as_u16()));
        }
        let queued: QueuedCall = resp
            .json()
            .await
            .map_err(|e| UpstreamError::Malformed(format!("call response: {e}")))?;
        debug!(event_id = %queued.event_id, "call queued");

        let resp = self
            .http
            .get(format!("{endpoint}/{}", queued.event_id))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(UpstreamError::Status(resp.status().as_u16()));
        }
        let body = resp.text().await?;

        parse_event_stream(&body)
    }
}

#[async_trait]
impl ChatStrategy for GradioClient {
    fn name(&self) -> &'static str {
        "gradio_client"
    }

    async fn attempt(&self, message: &str) -> Result<String, UpstreamError> {
        self.predict(CHAT_API_NAME, message).await
    }
}

/// Picks the result out of a finished call's event stream.
pub fn parse_event_stream(body: &str) -> Result<String, UpstreamError> {
    let mut event = "";

    for line in body.lines() {
        if let Some(kind) = line.strip_prefix("event:") {
            event = kind.trim();
        } else if let Some(data) = line.strip_prefix("data:") {
            let data = data.trim();
            match event {
                "complete" => {
                    let outputs: Vec<Value> = serde_json::from_str(data)
                        .map_err(|e| UpstreamError::Malformed(format!("complete event: {e}")))?;
                    return outputs
                        .into_iter()
                        .next()
                        .and_then(reply_text)
                        .ok_or(UpstreamError::EmptyResult);
                }
                "error" => return Err(UpstreamError::Remote(data.to_string())),
                // generating / heartbeat
                _ => {}
            }
        }
    }

    Err(UpstreamError::Malformed(
        "event stream ended without a result".to_string(),
    ))
}
