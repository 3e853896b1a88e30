//! Guild chat bot
//!
//! Connects to the chat gateway with a bot token and answers `!ping`.
//! Runs until the gateway connection ends.

mod handler;

use serenity::Client;

pub use handler::PingHandler;

use crate::error::{BotError, ConfigError, Result};

/// Build the chat client and run it.
///
/// # Errors
/// Returns an error if the token is empty, the client cannot be built, or
/// the gateway connection fails.
pub async fn run(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(ConfigError::MissingBotToken.into());
    }

    let intents = PingHandler::intents();
    log::debug!("Building chat client with intents: {:?}", intents);

    let mut client = Client::builder(token, intents)
        .event_handler(PingHandler)
        .await
        .map_err(|e| BotError::Build(e.to_string()))?;

    log::info!("Starting chat bot");
    client
        .start()
        .await
        .map_err(|e| BotError::Gateway(e.to_string()))?;

    Ok(())
}
