// src/state.rs
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use crate::config::AppConfig;
use crate::services::{
    gradio_client::GradioClient,
    resolver::{ChatStrategy, Resolver},
    space_api::{self, SpaceApi},
};

pub type SharedState = Arc<AppState>;

#[derive(Debug)]
pub struct AppState {
    pub resolver: Resolver,
}

impl AppState {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    /// Probes the Space and tries to build the structured client, once.
    /// Neither failure is fatal: without a client the resolver skips that strategy for good.
    pub async fn bootstrap(config: &AppConfig) -> Result<Self> {
        space_api::probe(&config.space_url, config.probe_timeout).await;

        let connected =
            GradioClient::connect(&config.space_id, &config.space_url, config.client_timeout).await;
        let client: Option<Arc<dyn ChatStrategy>> = match connected {
            Ok(client) => Some(Arc::new(client) as Arc<dyn ChatStrategy>),
            Err(e) => {
                warn!(
                    space = %config.space_id,
                    error = %e,
                    "could not initialize gradio client, continuing without it"
                );
                None
            }
        };

        let raw = SpaceApi::new(config.space_url.clone(), config.predict_timeout)
            .context("building raw api http client")?;

        Ok(Self::new(Resolver::new(client, Arc::new(raw))))
    }
}
