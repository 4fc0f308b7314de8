//! Session — the transcript and its single-request gate.
//!
//! The transcript is append-only apart from the typing placeholder, which is
//! removed when its turn settles. While a turn is pending every further
//! submission is refused with [`SessionError::Busy`]; nothing is queued.
//!
//! Front-ends that need to render while waiting drive a turn by hand:
//!
//! ```text
//! let turn = session.begin(text)?;        // user message + placeholder
//! match responder.respond(..).await {
//!     Ok(reply) => session.complete(turn, reply),
//!     Err(_)    => session.fail(turn),      // placeholder dropped, no reply
//! }
//! ```
//!
//! [`Session::submit`] does the same in one call.

use cryochat_core::error::SessionError;
use cryochat_core::{Complexity, Message, Responder};
use cryochat_knowledge::greeting;
use tracing::{debug, warn};

/// A turn that has been accepted and is waiting for its reply.
///
/// Not `Clone`: a turn settles exactly once.
#[derive(Debug)]
pub struct PendingTurn {
    query: String,
    complexity: Complexity,
    placeholder_id: String,
}

impl PendingTurn {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }
}

/// One user's conversation with the assistant.
#[derive(Debug, Clone)]
pub struct Session {
    transcript: Vec<Message>,
    pending: Option<String>,
    complexity: Complexity,
}

impl Session {
    /// Start a conversation with the greeting message.
    pub fn new(complexity: Complexity) -> Self {
        Self {
            transcript: vec![greeting()],
            pending: None,
            complexity,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    /// Switch tiers. Applies to turns begun afterwards.
    pub fn set_complexity(&mut self, complexity: Complexity) {
        self.complexity = complexity;
    }

    /// The most recent settled bot message.
    pub fn last_reply(&self) -> Option<&Message> {
        self.transcript
            .iter()
            .rev()
            .find(|m| m.is_bot() && !m.is_typing)
    }

    /// Accept `text` as the next question.
    pub fn begin(&mut self, text: &str) -> Result<PendingTurn, SessionError> {
        if text.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if self.pending.is_some() {
            debug!("Session: rejected submission while a reply is pending");
            return Err(SessionError::Busy);
        }

        let placeholder = Message::typing();
        let placeholder_id = placeholder.id.clone();

        self.transcript.push(Message::user(text));
        self.transcript.push(placeholder);
        self.pending = Some(placeholder_id.clone());

        debug!(complexity = %self.complexity, "Session: turn started");

        Ok(PendingTurn {
            query: text.to_string(),
            complexity: self.complexity,
            placeholder_id,
        })
    }

    /// Replace the turn's placeholder with `reply` and re-open the gate.
    pub fn complete(&mut self, turn: PendingTurn, reply: Message) {
        if self.settle(&turn) {
            self.transcript.push(reply);
        }
    }

    /// Drop the turn's placeholder without a reply and re-open the gate.
    pub fn fail(&mut self, turn: PendingTurn) {
        self.settle(&turn);
    }

    fn settle(&mut self, turn: &PendingTurn) -> bool {
        if self.pending.as_deref() != Some(turn.placeholder_id.as_str()) {
            warn!(placeholder = %turn.placeholder_id, "Session: ignoring stale turn");
            return false;
        }
        self.transcript.retain(|m| m.id != turn.placeholder_id);
        self.pending = None;
        true
    }

    /// Run one full turn against `responder` and return the reply.
    ///
    /// On failure the placeholder is removed, nothing is appended, and the
    /// session accepts input again so the user can retry.
    pub async fn submit(
        &mut self,
        responder: &dyn Responder,
        text: &str,
    ) -> cryochat_core::Result<Message> {
        let turn = self.begin(text)?;

        match responder.respond(turn.query(), turn.complexity()).await {
            Ok(reply) => {
                debug!(
                    responder = %responder.name(),
                    citations = reply.citations.as_ref().map_or(0, Vec::len),
                    "Session: reply received"
                );
                self.complete(turn, reply.clone());
                Ok(reply)
            }
            Err(e) => {
                warn!(responder = %responder.name(), error = %e, "Session: turn failed");
                self.fail(turn);
                Err(e.into())
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Complexity::default())
    }
}
