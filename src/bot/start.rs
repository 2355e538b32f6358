use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler,
    command::{dispatch::InteractionDispatcher, registry::CommandRegistry},
    config::Config,
    error::AppError,
};

/// Builds the Discord client with the command dispatcher attached.
///
/// # Arguments
/// - `config` - Application configuration providing the bot token and publish scope
/// - `registry` - Registered slash commands
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, registry: Arc<CommandRegistry>) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(InteractionDispatcher::new(registry), config.publish_scope());

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot, blocking until the client shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
