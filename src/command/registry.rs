use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use serenity::all::{ApplicationId, CreateCommand, GuildId};

use crate::{command::Command, error::command::PublishError};

use super::session::Session;

/// Name-keyed store of the bot's slash commands.
///
/// Commands are registered during startup and read by every interaction after
/// that. The map sits behind an `RwLock` so a late registration can never race a
/// lookup; lookups clone the `Arc` out and release the lock before any handler
/// runs.
#[derive(Default)]
pub struct CommandRegistry {
    commands: RwLock<HashMap<String, Arc<Command>>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command, replacing any earlier command with the same name.
    ///
    /// # Panics
    /// - If the command name is empty
    /// - If the command has no handler
    ///
    /// Both are programming errors and must stop the bot from starting.
    pub fn register(&self, command: Command) {
        if command.name().is_empty() {
            panic!("Cannot register command: name is empty");
        }
        if command.handler.is_none() {
            panic!(
                "Cannot register command '{}': handler is not set",
                command.name()
            );
        }

        let mut commands = self
            .commands
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        commands.insert(command.name().to_string(), Arc::new(command));
    }

    /// Retrieves a command by name.
    pub fn lookup(&self, name: &str) -> Option<Arc<Command>> {
        self.commands
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.commands
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builders for every registered command, ordered by name.
    fn create_commands(&self) -> Vec<CreateCommand> {
        let commands = self.commands.read().unwrap_or_else(PoisonError::into_inner);

        let mut names: Vec<&String> = commands.keys().collect();
        names.sort();

        names
            .into_iter()
            .map(|name| commands[name].metadata.to_create_command())
            .collect()
    }

    /// Sends all registered commands to Discord using a bulk overwrite.
    ///
    /// Pass `None` as the scope to publish globally, which takes up to an hour to
    /// propagate; a guild scope is applied immediately. The bot's own user is
    /// looked up first to obtain the application ID. If either call fails nothing
    /// else is attempted.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of commands published
    /// - `Err(PublishError::CurrentUser)` - Bot user lookup failed
    /// - `Err(PublishError::BulkOverwrite)` - Discord rejected the overwrite
    pub async fn publish(
        &self,
        session: &dyn Session,
        scope: Option<GuildId>,
    ) -> Result<usize, PublishError> {
        let commands = self.create_commands();
        let count = commands.len();

        let user_id = session
            .current_user_id()
            .await
            .map_err(|e| PublishError::CurrentUser(Box::new(e)))?;

        session
            .overwrite_commands(ApplicationId::new(user_id.get()), scope, commands)
            .await
            .map_err(|e| PublishError::BulkOverwrite(Box::new(e)))?;

        Ok(count)
    }
}
