//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the handshake completes. The bot uses
//! it to publish its slash commands, since the HTTP client is only guaranteed to
//! be authenticated by then.

use serenity::all::{Context, GuildId, Ready};

use crate::command::registry::CommandRegistry;

/// Handles the ready event when the bot connects to Discord.
///
/// Publishes every registered command to `scope` (globally when `None`). A failed
/// publish is logged; previously published commands stay in place on Discord's
/// side and the bot keeps serving them.
///
/// # Arguments
/// - `registry` - Commands to publish
/// - `scope` - Guild to publish to, or `None` for global
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    registry: &CommandRegistry,
    scope: Option<GuildId>,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if registry.is_empty() {
        tracing::warn!("No commands registered, publishing clears all commands");
    }

    match registry.publish(&*ctx.http, scope).await {
        Ok(count) => match scope {
            Some(guild_id) => {
                tracing::info!("Published {} commands to guild {}", count, guild_id)
            }
            None => tracing::info!("Published {} commands globally", count),
        },
        Err(e) => tracing::error!("Error registering commands: {}", e),
    }
}
