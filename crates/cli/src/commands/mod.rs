//! Subcommand implementations.

pub mod ask;
pub mod chat;
pub mod onboard;
pub mod sections;
pub mod status;

use std::sync::Arc;
use std::time::Duration;

use cryochat_agent::{RetryingResponder, ThesisResponder};
use cryochat_config::AppConfig;
use cryochat_core::Responder;

/// Load the config, turning errors into a message the user can act on.
fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    Ok(config)
}

/// The thesis responder configured for this run.
fn thesis_responder(config: &AppConfig, no_delay: bool) -> ThesisResponder {
    let responder = ThesisResponder::from_config(config);
    if no_delay {
        responder.with_delay(Duration::ZERO)
    } else {
        responder
    }
}

/// Wrap a responder in the configured retry policy.
fn with_retries(responder: ThesisResponder, config: &AppConfig) -> Arc<dyn Responder> {
    Arc::new(RetryingResponder::from_config(Arc::new(responder), &config.retry))
}
