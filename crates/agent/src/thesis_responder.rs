//! The keyword-matching responder that answers from the thesis.
//!
//! No model and no I/O are involved: the question is ranked against the
//! content store and the composer assembles the reply. The only suspension
//! point is a fixed delay that stands in for a remote call, during which the
//! front-end shows its typing indicator.

use async_trait::async_trait;
use cryochat_config::AppConfig;
use cryochat_core::error::ResponderError;
use cryochat_core::{Complexity, Message, Responder};
use cryochat_knowledge::{ContentStore, Matcher, compose};
use std::time::Duration;

/// Answers questions from a [`ContentStore`].
#[derive(Debug, Clone)]
pub struct ThesisResponder {
    matcher: Matcher,
    delay: Duration,
}

impl ThesisResponder {
    /// Simulated thinking time used when none is configured.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

    pub fn new(store: ContentStore) -> Self {
        Self {
            matcher: Matcher::new(store),
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// Build a responder over the thesis store using the configured delay.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(ContentStore::thesis()).with_delay(config.response_delay())
    }

    /// Set the artificial delay. `Duration::ZERO` skips the wait entirely.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Build the reply immediately, without the artificial delay.
    pub fn reply(&self, query: &str, complexity: Complexity) -> Message {
        let ranked = self.matcher.find(query);
        let composition = compose(query, &ranked, complexity);

        let mut reply = Message::bot(composition.text)
            .with_related_questions(composition.related_questions);
        reply.citations = composition.citations;
        reply
    }
}

impl Default for ThesisResponder {
    fn default() -> Self {
        Self::new(ContentStore::thesis())
    }
}

#[async_trait]
impl Responder for ThesisResponder {
    fn name(&self) -> &str {
        "thesis"
    }

    async fn respond(
        &self,
        query: &str,
        complexity: Complexity,
    ) -> std::result::Result<Message, ResponderError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.reply(query, complexity))
    }
}
