//! # cryochat Core
//!
//! Domain types, traits, and error definitions for the cryochat thesis
//! assistant. This crate has **no runtime dependencies** — it defines the
//! domain model that the knowledge, agent and CLI crates build on.
//!
//! ## Design Philosophy
//!
//! The reply pipeline is defined behind the [`Responder`] trait. The
//! in-process keyword responder lives in `cryochat-agent`; a real retrieval
//! or generation backend can be dropped in behind the same seam without the
//! presentation layer noticing.

pub mod complexity;
pub mod error;
pub mod message;
pub mod responder;
pub mod section;

// Re-export key types at crate root for ergonomics
pub use complexity::Complexity;
pub use error::{Error, Result};
pub use message::{Message, Sender};
pub use responder::Responder;
pub use section::{Citation, Section};
