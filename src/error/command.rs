use serenity::all::InteractionType;
use thiserror::Error;

/// Failure reason returned by a command handler.
///
/// The dispatcher turns this into the error message shown to the user, so the
/// display text should make sense to someone running the command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A Discord API call made by the handler failed.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for CommandError {
    fn from(err: serenity::Error) -> Self {
        CommandError::Discord(Box::new(err))
    }
}

/// Failure publishing the registered commands to Discord.
///
/// Either step failing aborts the whole publish; nothing is sent partially.
#[derive(Error, Debug)]
pub enum PublishError {
    /// Resolving the bot's own user (and with it the application ID) failed.
    #[error("Failed to get current user: {0}")]
    CurrentUser(#[source] Box<serenity::Error>),

    /// The bulk overwrite call was rejected.
    #[error("Failed to bulk register commands: {0}")]
    BulkOverwrite(#[source] Box<serenity::Error>),
}

/// Failure dispatching a single interaction.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Something other than an application command reached the dispatcher.
    ///
    /// The user has already been sent a generic error reply when this is returned.
    #[error("Invalid interaction type: {0:?}")]
    InvalidInteraction(InteractionType),

    /// A reply sent by the dispatcher itself (not-found or invalid interaction
    /// notice) could not be delivered.
    #[error("Failed to respond to interaction: {0}")]
    Respond(#[source] Box<serenity::Error>),

    /// A handler failed and neither the error reply nor the fallback edit could
    /// be delivered, so the user saw nothing.
    #[error("Failed to respond with error for command '{command}': {source}")]
    Unrecoverable {
        /// Name of the command whose handler failed
        command: String,
        /// The failure of the fallback edit
        #[source]
        source: Box<serenity::Error>,
    },
}
