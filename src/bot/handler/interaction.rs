use serenity::all::{Context, Interaction};

use crate::{command::dispatch::InteractionDispatcher, error::command::DispatchError};

/// Handle an inbound interaction
pub async fn handle_interaction_create(
    dispatcher: &InteractionDispatcher,
    ctx: Context,
    interaction: Interaction,
) {
    match dispatcher.dispatch(&*ctx.http, &interaction).await {
        Ok(outcome) => {
            tracing::debug!("Interaction {} dispatched: {:?}", interaction.id(), outcome)
        }
        Err(e @ DispatchError::InvalidInteraction(_)) => {
            tracing::warn!("Interaction {} rejected: {}", interaction.id(), e)
        }
        Err(e) => tracing::error!("Interaction {} failed: {}", interaction.id(), e),
    }
}
