use async_trait::async_trait;
use serenity::all::CommandInteraction;

use crate::{
    command::{Command, CommandHandler, CommandMetadata},
    error::command::CommandError,
};

use super::session::{Reply, ReplyTarget, Session};

pub const PONG: &str = "Pong!";

/// Liveness check that always answers "Pong!".
pub struct PingCommand;

impl PingCommand {
    pub fn command() -> Command {
        Command::new(
            CommandMetadata::new("ping", "Responds with Pong!"),
            PingCommand,
        )
    }
}

#[async_trait]
impl CommandHandler for PingCommand {
    async fn execute(
        &self,
        session: &dyn Session,
        interaction: &CommandInteraction,
    ) -> Result<(), CommandError> {
        session
            .respond(&ReplyTarget::from(interaction), Reply::new(PONG))
            .await?;

        Ok(())
    }
}
