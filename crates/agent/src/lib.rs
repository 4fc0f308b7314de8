//! Conversation orchestration for cryochat.
//!
//! One turn flows through three pieces:
//!
//! 1. **[`Session`]** accepts the user's text, refusing it while another
//!    reply is still pending, and shows a typing placeholder
//! 2. **A [`Responder`](cryochat_core::Responder)** produces the reply:
//!    [`ThesisResponder`] matches the question against the thesis after a
//!    short artificial delay, optionally wrapped in a [`RetryingResponder`]
//! 3. **[`Session`]** swaps the placeholder for the reply, or drops it if
//!    the responder failed, and re-opens for input

pub mod retry;
pub mod session;
pub mod thesis_responder;

pub use retry::RetryingResponder;
pub use session::{PendingTurn, Session};
pub use thesis_responder::ThesisResponder;
