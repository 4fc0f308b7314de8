//! Error types for the cryochat domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all cryochat operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Responder errors ---
    #[error("Responder error: {0}")]
    Responder(#[from] ResponderError),

    // --- Session errors ---
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures while producing a reply for one turn.
///
/// The keyword responder never produces these; they exist for backends that
/// do real I/O behind the [`Responder`](crate::Responder) seam.
#[derive(Debug, Clone, Error)]
pub enum ResponderError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unexpected failure while composing a reply: {0}")]
    Internal(String),
}

impl ResponderError {
    /// Transport failures are worth another attempt; a malformed or
    /// internally broken reply is fatal for the turn.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Network(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("A reply is still pending; wait for it before sending another message")]
    Busy,

    #[error("Cannot send an empty message")]
    EmptyInput,
}

/// Returned when a complexity tier name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown complexity tier '{0}' (expected 'simple' or 'rigorous')")]
pub struct UnknownComplexity(pub String);
