//! `bot` command: run the chat responder

use crate::error::{ConfigError, Result};

/// Run the chat bot with the token from `--token` / `DISCORD_TOKEN`.
pub async fn run(token: Option<String>) -> Result<()> {
    let token = token.ok_or(ConfigError::MissingBotToken)?;
    crate::bot::run(&token).await
}
