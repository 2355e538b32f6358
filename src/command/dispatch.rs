//! Routing of inbound interactions to command handlers.
//!
//! Every interaction that reaches the dispatcher gets exactly one visible answer
//! when Discord allows it: the handler's own reply, a not-found notice, or an
//! error description. The only silent case is a failing handler whose error reply
//! and fallback edit are both rejected, which is reported as
//! [`DispatchError::Unrecoverable`].

use std::sync::Arc;

use serenity::all::Interaction;

use crate::{
    command::registry::CommandRegistry,
    error::command::{CommandError, DispatchError},
};

use super::session::{Reply, ReplyTarget, Session};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Error";
pub const COMMAND_NOT_FOUND_MESSAGE: &str = "Command not found";

/// How a successful dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The handler ran and sent its own reply.
    Executed,
    /// No command with the invoked name is registered.
    CommandNotFound,
    /// The handler failed and the error was sent as the initial response.
    ErrorReported,
    /// The handler failed after responding, so its response was edited to the error.
    ErrorEdited,
}

#[derive(Clone)]
pub struct InteractionDispatcher {
    registry: Arc<CommandRegistry>,
}

impl InteractionDispatcher {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Processes a single interaction and executes the matching command.
    ///
    /// # Returns
    /// - `Ok(DispatchOutcome)` - The user received a response
    /// - `Err(DispatchError::InvalidInteraction)` - Not an application command; the
    ///   user was sent a generic error
    /// - `Err(DispatchError::Respond)` - A dispatcher notice could not be delivered
    /// - `Err(DispatchError::Unrecoverable)` - Handler failed and its error could be
    ///   neither sent nor edited in
    pub async fn dispatch(
        &self,
        session: &dyn Session,
        interaction: &Interaction,
    ) -> Result<DispatchOutcome, DispatchError> {
        let target = ReplyTarget::from(interaction);

        let Interaction::Command(command) = interaction else {
            session
                .respond(&target, Reply::new(INTERNAL_ERROR_MESSAGE))
                .await
                .map_err(|e| DispatchError::Respond(Box::new(e)))?;

            return Err(DispatchError::InvalidInteraction(interaction.kind()));
        };

        let name = command.data.name.as_str();

        let Some(handler) = self
            .registry
            .lookup(name)
            .and_then(|command| command.handler.clone())
        else {
            tracing::debug!("Received interaction for unknown command '{}'", name);

            session
                .respond(&target, Reply::new(COMMAND_NOT_FOUND_MESSAGE))
                .await
                .map_err(|e| DispatchError::Respond(Box::new(e)))?;

            return Ok(DispatchOutcome::CommandNotFound);
        };

        match handler.execute(session, command).await {
            Ok(()) => Ok(DispatchOutcome::Executed),
            Err(err) => {
                tracing::warn!("Command '{}' failed: {}", name, err);
                report_failure(session, &target, name, &err).await
            }
        }
    }
}

/// Tells the user a handler failed.
///
/// Tries a fresh response first. Discord rejects that when the handler already
/// responded, in which case the existing response is edited once instead.
async fn report_failure(
    session: &dyn Session,
    target: &ReplyTarget,
    name: &str,
    err: &CommandError,
) -> Result<DispatchOutcome, DispatchError> {
    let content = format!("Error executing command: {}", err);

    if session.respond(target, Reply::new(&content)).await.is_ok() {
        return Ok(DispatchOutcome::ErrorReported);
    }

    match session.edit_response(target, &content).await {
        Ok(()) => Ok(DispatchOutcome::ErrorEdited),
        Err(source) => Err(DispatchError::Unrecoverable {
            command: name.to_string(),
            source: Box::new(source),
        }),
    }
}
