//! Slash commands: definitions, registry and interaction dispatch.
//!
//! A [`Command`] pairs the metadata Discord needs to show the command with the
//! [`CommandHandler`] that runs it. Commands are registered once at startup in the
//! [`registry::CommandRegistry`], published to Discord when the bot becomes ready,
//! and resolved per interaction by the [`dispatch::InteractionDispatcher`].

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption};

use crate::error::command::CommandError;

use self::session::Session;

pub mod clears;
pub mod dispatch;
pub mod ping;
pub mod registry;
pub mod session;

#[cfg(test)]
mod test;

/// Runs a command invocation.
///
/// On success the handler has sent its own reply. On failure the dispatcher takes
/// care of telling the user, so handlers return errors instead of reporting them.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(
        &self,
        session: &dyn Session,
        interaction: &CommandInteraction,
    ) -> Result<(), CommandError>;
}

/// A typed option accepted by a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOptionSpec {
    pub kind: CommandOptionType,
    pub name: String,
    pub description: String,
    pub required: bool,
}

impl CommandOptionSpec {
    pub fn new(
        kind: CommandOptionType,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            required: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// What Discord displays for a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMetadata {
    pub name: String,
    pub description: String,
    pub options: Vec<CommandOptionSpec>,
}

impl CommandMetadata {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    pub fn option(mut self, option: CommandOptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Converts the metadata into the builder sent on publish.
    pub fn to_create_command(&self) -> CreateCommand {
        self.options.iter().fold(
            CreateCommand::new(&self.name).description(&self.description),
            |command, option| {
                command.add_option(
                    CreateCommandOption::new(option.kind, &option.name, &option.description)
                        .required(option.required),
                )
            },
        )
    }
}

/// A slash command ready to be registered.
///
/// `handler` is optional only so that a missing handler can be caught at
/// registration; the registry refuses commands without one.
#[derive(Clone)]
pub struct Command {
    pub metadata: CommandMetadata,
    pub handler: Option<Arc<dyn CommandHandler>>,
}

impl Command {
    pub fn new(metadata: CommandMetadata, handler: impl CommandHandler + 'static) -> Self {
        Self {
            metadata,
            handler: Some(Arc::new(handler)),
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("metadata", &self.metadata)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}
