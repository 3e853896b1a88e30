//! Serenity event handler for the guild chat bot.

use serenity::all::Ready;
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::channel::Message;
use serenity::model::gateway::GatewayIntents;

/// Command that triggers the liveness reply
pub const PING_COMMAND: &str = "!ping";

/// Reply sent for [`PING_COMMAND`]
pub const PING_REPLY: &str = "Pong!";

/// Reply to send for an incoming message, if any.
///
/// Only an exact `!ping` from a non-bot author gets an answer.
pub fn reply_for(content: &str, author_is_bot: bool) -> Option<&'static str> {
    if author_is_bot {
        return None;
    }
    (content == PING_COMMAND).then_some(PING_REPLY)
}

/// Event handler answering `!ping` with `Pong!`.
pub struct PingHandler;

impl PingHandler {
    /// Required gateway intents for the bot.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
    }
}

#[async_trait]
impl EventHandler for PingHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        log::info!("Logged in as {}", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let Some(reply) = reply_for(&msg.content, msg.author.bot) else {
            return;
        };

        if let Err(e) = msg.channel_id.say(&ctx.http, reply).await {
            log::error!("Failed to send reply in channel {}: {}", msg.channel_id, e);
        }
    }
}
