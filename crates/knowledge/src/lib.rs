//! Thesis knowledge for cryochat.
//!
//! There is no vector index behind the assistant: the [`store`] holds five
//! hand-picked sections of the thesis, the [`matcher`] ranks them by keyword
//! overlap with the question, and the [`composer`] turns the ranking into
//! reply text, citations and follow-up suggestions.
//!
//! ```text
//! question ──► Matcher::rank ──► compose ──► Composition { text, citations, related_questions }
//!                  ▲
//!            ContentStore (static)
//! ```

pub mod composer;
pub mod matcher;
pub mod store;
pub mod thesis;

pub use composer::{Composition, compose, follow_up_questions};
pub use matcher::{Matcher, ScoredSection, tokenize};
pub use store::{ContentStore, StoreError, THESIS_SECTIONS};
pub use thesis::{SUGGESTED_QUESTIONS, THESIS, ThesisInfo, greeting};
