//! Message domain type.
//!
//! A `Message` is the record handed to the presentation layer for every turn:
//! the user's question, the typing placeholder, and the bot's reply all share
//! this shape. Its JSON form is the external contract of the assistant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::section::Citation;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sender {
    /// The person asking questions
    User,
    /// The thesis assistant
    Bot,
}

/// A single entry in the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique, time-ordered message ID
    pub id: String,

    /// The body text
    pub text: String,

    /// Who sent this message
    pub sender: Sender,

    /// Timestamp
    pub timestamp: DateTime<Utc>,

    /// Sections the reply drew on (at most two). Absent rather than empty
    /// when nothing matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,

    /// Suggested follow-up questions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_questions: Option<Vec<String>>,

    /// Transient placeholder shown while a reply is pending
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_typing: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Fresh message id. UUIDv7 embeds the creation time, so ids sort in the
/// order messages were created.
pub fn new_message_id() -> String {
    Uuid::now_v7().to_string()
}

impl Message {
    fn new(sender: Sender, text: String) -> Self {
        Self {
            id: new_message_id(),
            text,
            sender,
            timestamp: Utc::now(),
            citations: None,
            related_questions: None,
            is_typing: false,
        }
    }

    /// Create a new user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text.into())
    }

    /// Create a new bot message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text.into())
    }

    /// Create the empty bot placeholder displayed while a reply is pending.
    pub fn typing() -> Self {
        Self {
            is_typing: true,
            ..Self::new(Sender::Bot, String::new())
        }
    }

    /// Attach citations, keeping the field absent when there are none.
    pub fn with_citations(mut self, citations: Vec<Citation>) -> Self {
        self.citations = if citations.is_empty() { None } else { Some(citations) };
        self
    }

    /// Attach suggested follow-up questions.
    pub fn with_related_questions<I, S>(mut self, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_questions = Some(questions.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_message() {
        let msg = Message::user("Hello, thesis!");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "Hello, thesis!");
        assert!(msg.citations.is_none());
        assert!(!msg.is_typing);
    }

    #[test]
    fn typing_placeholder_is_empty_bot_message() {
        let msg = Message::typing();
        assert!(msg.is_bot());
        assert!(msg.is_typing);
        assert!(msg.text.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let a = Message::bot("a");
        let b = Message::bot("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn empty_citations_stay_absent() {
        let msg = Message::bot("No match").with_citations(vec![]);
        assert!(msg.citations.is_none());
    }

    #[test]
    fn json_shape_matches_reply_contract() {
        let citation = Citation {
            id: "mobility".into(),
            text: "Mobility at Cryogenic Temperatures".into(),
            section: "Chapter 2".into(),
            page: 31,
        };
        let msg = Message::bot("Answer")
            .with_citations(vec![citation])
            .with_related_questions(["One?", "Two?"]);
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["sender"], "BOT");
        assert_eq!(json["citations"][0]["page"], 31);
        assert_eq!(json["relatedQuestions"][1], "Two?");
        assert!(json.get("isTyping").is_none());
    }

    #[test]
    fn absent_fields_are_omitted() {
        let json = serde_json::to_value(Message::bot("Sorry")).unwrap();
        assert!(json.get("citations").is_none());
        assert!(json.get("relatedQuestions").is_none());
    }

    #[test]
    fn typing_flag_survives_serialization() {
        let json = serde_json::to_string(&Message::typing()).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_typing);
        assert_eq!(parsed.sender, Sender::Bot);
    }
}
