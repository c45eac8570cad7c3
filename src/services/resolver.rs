// src/services/resolver.rs
use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::mock_reply::mock_reply;
use crate::error::UpstreamError;

/// A remote way of getting a reply for a chat message.
#[async_trait]
pub trait ChatStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn attempt(&self, message: &str) -> Result<String, UpstreamError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyOrigin {
    StructuredClient,
    RawApi,
    Mock,
}

#[derive(Clone, Debug)]
pub struct Resolution {
    pub reply: String,
    pub origin: ReplyOrigin,
}

/// Ordered fallback: structured client, raw transport, then the local stub.
#[derive(Clone)]
pub struct Resolver {
    client: Option<Arc<dyn ChatStrategy>>,
    raw: Arc<dyn ChatStrategy>,
}

impl Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("client", &self.client.as_ref().map(|c| c.name()))
            .field("raw", &self.raw.name())
            .finish()
    }
}

impl Resolver {
    /// `client` is `None` when the structured client could not be built at startup.
    pub fn new(client: Option<Arc<dyn ChatStrategy>>, raw: Arc<dyn ChatStrategy>) -> Self {
        Self { client, raw }
    }

    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Never fails. First strategy with a non-blank reply wins.
    pub async fn resolve(&self, message: &str) -> Resolution {
        if let Some(client) = &self.client {
            if let Some(reply) = attempt(client.as_ref(), message).await {
                return Resolution {
                    reply,
                    origin: ReplyOrigin::StructuredClient,
                };
            }
        }

        debug!("trying direct api call");
        if let Some(reply) = attempt(self.raw.as_ref(), message).await {
            return Resolution {
                reply,
                origin: ReplyOrigin::RawApi,
            };
        }

        info!("remote strategies exhausted, using mock response");
        Resolution {
            reply: mock_reply(message),
            origin: ReplyOrigin::Mock,
        }
    }
}

// Some = reply, None = no result. Failures only get logged.
async fn attempt(strategy: &dyn ChatStrategy, message: &str) -> Option<String> {
    let outcome = match strategy.attempt(message).await {
        Ok(reply) if reply.trim().is_empty() => Err(UpstreamError::EmptyResult),
        other => other,
    };

    match outcome {
        Ok(reply) => Some(reply),
        Err(e) => {
            warn!(strategy = strategy.name(), error = %e, "strategy produced no reply");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_reply::candidates;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed(Option<&'static str>, AtomicUsize);

    impl Fixed {
        fn ok(reply: &'static str) -> Arc<Self> {
            Arc::new(Self(Some(reply), AtomicUsize::new(0)))
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self(None, AtomicUsize::new(0)))
        }

        fn calls(&self) -> usize {
            self.1.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatStrategy for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn attempt(&self, _message: &str) -> Result<String, UpstreamError> {
            self.1.fetch_add(1, Ordering::SeqCst);
            self.0
                .map(str::to_string)
                .ok_or_else(|| UpstreamError::Remote("boom".to_string()))
        }
    }

    #[tokio::test]
    async fn client_reply_short_circuits() {
        let client = Fixed::ok("from client");
        let raw = Fixed::ok("from raw");
        let resolver = Resolver::new(Some(client.clone()), raw.clone());

        let res = resolver.resolve("hi").await;
        assert_eq!(res.reply, "from client");
        assert_eq!(res.origin, ReplyOrigin::StructuredClient);
        assert_eq!(raw.calls(), 0);
    }

    #[tokio::test]
    async fn missing_client_goes_straight_to_raw() {
        let raw = Fixed::ok("from raw");
        let resolver = Resolver::new(None, raw.clone());

        let res = resolver.resolve("hi").await;
        assert_eq!(res.origin, ReplyOrigin::RawApi);
        assert_eq!(raw.calls(), 1);
    }

    #[tokio::test]
    async fn blank_reply_counts_as_no_result() {
        let resolver = Resolver::new(Some(Fixed::ok("   ")), Fixed::ok("from raw"));
        assert_eq!(resolver.resolve("hi").await.reply, "from raw");
    }

    #[tokio::test]
    async fn both_failing_yields_mock() {
        let client = Fixed::failing();
        let raw = Fixed::failing();
        let resolver = Resolver::new(Some(client.clone()), raw.clone());

        let res = resolver.resolve("hello").await;
        assert_eq!(res.origin, ReplyOrigin::Mock);
        assert!(candidates("hello").contains(&res.reply));
        assert_eq!((client.calls(), raw.calls()), (1, 1));
    }
}
