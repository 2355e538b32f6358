//! The Discord capability used by command handlers and the dispatcher.
//!
//! Handlers never talk to serenity's HTTP client directly. They go through the
//! [`Session`] trait, which covers exactly the calls this bot makes: replying to
//! an interaction, editing that reply, resolving the bot's own user and bulk
//! overwriting the published slash commands. Production uses serenity's [`Http`];
//! tests substitute a recording mock.

use async_trait::async_trait;
use serenity::{
    all::{
        ApplicationId, CommandInteraction, CreateCommand, CreateInteractionResponse,
        CreateInteractionResponseMessage, EditInteractionResponse, GuildId, Interaction,
        InteractionId, UserId,
    },
    builder::Builder,
    http::Http,
};

/// Addresses the reply channel of a single interaction.
///
/// Discord allows one initial response per interaction ID and any number of
/// edits through the interaction token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTarget {
    pub id: InteractionId,
    pub token: String,
}

impl From<&Interaction> for ReplyTarget {
    fn from(interaction: &Interaction) -> Self {
        Self {
            id: interaction.id(),
            token: interaction.token().to_string(),
        }
    }
}

impl From<&CommandInteraction> for ReplyTarget {
    fn from(interaction: &CommandInteraction) -> Self {
        Self {
            id: interaction.id,
            token: interaction.token.clone(),
        }
    }
}

/// A message sent as the initial response to an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub ephemeral: bool,
}

impl Reply {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }

    /// Only the invoking user will see the reply.
    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    fn into_response(self) -> CreateInteractionResponse {
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(self.content)
                .ephemeral(self.ephemeral),
        )
    }
}

#[async_trait]
pub trait Session: Send + Sync {
    /// Sends the initial response. Fails if the interaction was already answered.
    async fn respond(&self, target: &ReplyTarget, reply: Reply) -> Result<(), serenity::Error>;

    /// Replaces the content of the existing initial response.
    async fn edit_response(
        &self,
        target: &ReplyTarget,
        content: &str,
    ) -> Result<(), serenity::Error>;

    /// ID of the bot user, which doubles as the application ID.
    async fn current_user_id(&self) -> Result<UserId, serenity::Error>;

    /// Replaces every published command, globally when `scope` is `None`.
    async fn overwrite_commands(
        &self,
        application_id: ApplicationId,
        scope: Option<GuildId>,
        commands: Vec<CreateCommand>,
    ) -> Result<(), serenity::Error>;
}

#[async_trait]
impl Session for Http {
    async fn respond(&self, target: &ReplyTarget, reply: Reply) -> Result<(), serenity::Error> {
        reply
            .into_response()
            .execute(self, (target.id, target.token.as_str()))
            .await
    }

    async fn edit_response(
        &self,
        target: &ReplyTarget,
        content: &str,
    ) -> Result<(), serenity::Error> {
        EditInteractionResponse::new()
            .content(content)
            .execute(self, target.token.as_str())
            .await?;

        Ok(())
    }

    async fn current_user_id(&self) -> Result<UserId, serenity::Error> {
        let user = self.get_current_user().await?;

        Ok(user.id)
    }

    async fn overwrite_commands(
        &self,
        application_id: ApplicationId,
        scope: Option<GuildId>,
        commands: Vec<CreateCommand>,
    ) -> Result<(), serenity::Error> {
        // Command endpoints are routed through the application ID held by Http
        self.set_application_id(application_id);

        match scope {
            Some(guild_id) => self.create_guild_commands(guild_id, &commands).await?,
            None => self.create_global_commands(&commands).await?,
        };

        Ok(())
    }
}
