// src/config.rs
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_SPACE_ID: &str = "markobinario/flaskbot";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub space_id: String,
    pub space_url: String,
    pub predict_timeout: Duration,
    pub client_timeout: Duration,
    pub probe_timeout: Duration,
    pub static_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            space_id: DEFAULT_SPACE_ID.to_string(),
            space_url: space_url(DEFAULT_SPACE_ID),
            predict_timeout: Duration::from_secs(30),
            client_timeout: Duration::from_secs(30),
            probe_timeout: Duration::from_secs(10),
            static_dir: "public".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let space_id = lookup("HF_SPACE_ID").unwrap_or(defaults.space_id);
        let space_url = lookup("HF_SPACE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| space_url(&space_id));

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            space_id,
            space_url,
            predict_timeout: secs(&lookup, "PREDICT_TIMEOUT_SECS", defaults.predict_timeout)?,
            client_timeout: secs(&lookup, "CLIENT_TIMEOUT_SECS", defaults.client_timeout)?,
            probe_timeout: secs(&lookup, "PROBE_TIMEOUT_SECS", defaults.probe_timeout)?,
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
        })
    }
}

fn secs(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Duration,
) -> Result<Duration> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .with_context(|| format!("{key} must be a whole number of seconds, got {raw:?}")),
        None => Ok(default),
    }
}

/// Public host of a Hugging Face Space: `owner/name` -> `https://owner-name.hf.space`.
pub fn space_url(space_id: &str) -> String {
    let host: String = space_id
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '/' | '_' | '.' => '-',
            other => other,
        })
        .collect();
    format!("https://{host}.hf.space")
}
