//! Retry wrapper — timeouts and exponential backoff around any responder.
//!
//! Transport failures (`Timeout`, `Network`) are retried until the budget is
//! spent; malformed or internally broken replies are returned immediately,
//! since asking again would not change the outcome.

use async_trait::async_trait;
use cryochat_config::RetryConfig;
use cryochat_core::error::ResponderError;
use cryochat_core::{Complexity, Message, Responder};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// A responder that retries its inner responder on transient failures.
pub struct RetryingResponder {
    name: String,
    inner: Arc<dyn Responder>,
    max_retries: u32,
    initial_backoff: Duration,
    attempt_timeout: Duration,
}

impl RetryingResponder {
    /// Wrap `inner` with two retries, 250ms initial backoff and a 10s
    /// per-attempt timeout.
    pub fn new(inner: Arc<dyn Responder>) -> Self {
        Self::from_config(inner, &RetryConfig::default())
    }

    pub fn from_config(inner: Arc<dyn Responder>, config: &RetryConfig) -> Self {
        Self {
            name: format!("retrying({})", inner.name()),
            inner,
            max_retries: config.max_retries,
            initial_backoff: config.initial_backoff(),
            attempt_timeout: config.attempt_timeout(),
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }
}

#[async_trait]
impl Responder for RetryingResponder {
    fn name(&self) -> &str {
        &self.name
    }

    async fn respond(
        &self,
        query: &str,
        complexity: Complexity,
    ) -> std::result::Result<Message, ResponderError> {
        let attempts = self.max_retries.saturating_add(1);
        let mut backoff = self.initial_backoff;
        let mut last_error = ResponderError::Internal("no attempt was made".into());

        for attempt in 1..=attempts {
            match tokio::time::timeout(self.attempt_timeout, self.inner.respond(query, complexity))
                .await
            {
                Ok(Ok(reply)) => {
                    if attempt > 1 {
                        info!(responder = %self.inner.name(), attempt, "Retry: succeeded");
                    }
                    return Ok(reply);
                }
                Ok(Err(e)) if !e.is_retryable() => {
                    warn!(responder = %self.inner.name(), error = %e, "Retry: fatal error, giving up");
                    return Err(e);
                }
                Ok(Err(e)) => {
                    warn!(
                        responder = %self.inner.name(),
                        attempt,
                        total = attempts,
                        error = %e,
                        "Retry: attempt failed"
                    );
                    last_error = e;
                }
                Err(_) => {
                    warn!(
                        responder = %self.inner.name(),
                        attempt,
                        total = attempts,
                        timeout_ms = self.attempt_timeout.as_millis() as u64,
                        "Retry: attempt timed out"
                    );
                    last_error = ResponderError::Timeout(format!(
                        "Responder '{}' did not answer within {}ms",
                        self.inner.name(),
                        self.attempt_timeout.as_millis()
                    ));
                }
            }

            if attempt < attempts {
                tokio::time::sleep(backoff).await;
                backoff = backoff.saturating_mul(2);
            }
        }

        Err(last_error)
    }
}
