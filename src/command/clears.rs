//! `/getclears` - checks FFLogs for a character's clear of an encounter.

use async_trait::async_trait;
use serenity::all::{CommandInteraction, CommandOptionType};

use crate::{
    command::{Command, CommandHandler, CommandMetadata, CommandOptionSpec},
    error::command::CommandError,
    service::fflogs::clear::ClearLookup,
};

use super::session::{Reply, ReplyTarget, Session};

const LODESTONE_ID_OPTION: &str = "lodestone_id";
const ENCOUNTER_ID_OPTION: &str = "encounter_id";

pub const INVALID_OPTIONS_MESSAGE: &str = "Invalid options provided. Please ensure both lodestoneId and encounterId are provided and valid.";
pub const LOOKUP_FAILED_MESSAGE: &str = "Error retrieving player clears. Please try again later.";
pub const CLEARED_MESSAGE: &str = "Player has at least 1 clear for the specified encounter!";
pub const NOT_CLEARED_MESSAGE: &str = "Player has no clears for the specified encounter.";

pub struct GetClearsCommand {
    lookup: ClearLookup,
}

impl GetClearsCommand {
    pub fn new(lookup: ClearLookup) -> Self {
        Self { lookup }
    }

    pub fn command(lookup: ClearLookup) -> Command {
        let metadata = CommandMetadata::new(
            "getclears",
            "Retrieves the number of clears for a specified player.",
        )
        .option(
            CommandOptionSpec::new(
                CommandOptionType::Integer,
                LODESTONE_ID_OPTION,
                "The Lodestone ID of the player to retrieve clears for.",
            )
            .required(true),
        )
        .option(
            CommandOptionSpec::new(
                CommandOptionType::Integer,
                ENCOUNTER_ID_OPTION,
                "The encounter ID to check for",
            )
            .required(true),
        );

        Command::new(metadata, Self::new(lookup))
    }
}

/// Reads the Lodestone and encounter IDs; `None` if either is missing or zero.
fn parse_options(interaction: &CommandInteraction) -> Option<(i64, i64)> {
    let mut lodestone_id = 0;
    let mut encounter_id = 0;

    for option in &interaction.data.options {
        match option.name.as_str() {
            LODESTONE_ID_OPTION => lodestone_id = option.value.as_i64().unwrap_or_default(),
            ENCOUNTER_ID_OPTION => encounter_id = option.value.as_i64().unwrap_or_default(),
            _ => {}
        }
    }

    (lodestone_id != 0 && encounter_id != 0).then_some((lodestone_id, encounter_id))
}

#[async_trait]
impl CommandHandler for GetClearsCommand {
    async fn execute(
        &self,
        session: &dyn Session,
        interaction: &CommandInteraction,
    ) -> Result<(), CommandError> {
        let target = ReplyTarget::from(interaction);

        let Some((lodestone_id, encounter_id)) = parse_options(interaction) else {
            session
                .respond(&target, Reply::new(INVALID_OPTIONS_MESSAGE).ephemeral())
                .await?;
            return Ok(());
        };

        let content = match self.lookup.check_clear(lodestone_id, encounter_id).await {
            Ok(true) => CLEARED_MESSAGE,
            Ok(false) => NOT_CLEARED_MESSAGE,
            Err(e) => {
                tracing::error!(
                    "Failed to check clears for Lodestone ID {} on encounter {}: {}",
                    lodestone_id,
                    encounter_id,
                    e
                );
                LOOKUP_FAILED_MESSAGE
            }
        };

        session.respond(&target, Reply::new(content)).await?;

        Ok(())
    }
}
