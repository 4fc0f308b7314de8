//! Responder trait — the abstraction over whatever produces replies.
//!
//! The presentation layer hands a question and a complexity tier to a
//! `Responder` and eventually gets back a bot [`Message`]. Today the only
//! implementation is the in-process keyword matcher; a remote retrieval or
//! generation backend would implement the same trait.

use async_trait::async_trait;

use crate::complexity::Complexity;
use crate::error::ResponderError;
use crate::message::Message;

/// The core Responder trait.
#[async_trait]
pub trait Responder: Send + Sync {
    /// A human-readable name for this responder (e.g., "thesis").
    fn name(&self) -> &str;

    /// Produce the reply for one question.
    async fn respond(
        &self,
        query: &str,
        complexity: Complexity,
    ) -> std::result::Result<Message, ResponderError>;
}
