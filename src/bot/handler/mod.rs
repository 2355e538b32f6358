use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;

use crate::command::dispatch::InteractionDispatcher;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub dispatcher: InteractionDispatcher,
    /// Guild the commands are published to, `None` for global
    pub publish_scope: Option<GuildId>,
}

impl Handler {
    pub fn new(dispatcher: InteractionDispatcher, publish_scope: Option<GuildId>) -> Self {
        Self {
            dispatcher,
            publish_scope,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self.dispatcher.registry(), self.publish_scope, ctx, ready).await;
    }

    /// Called for every slash command (and any other interaction) sent to the bot
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.dispatcher, ctx, interaction).await;
    }
}
