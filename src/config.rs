use std::str::FromStr;

use serenity::all::GuildId;

use crate::error::{config::ConfigError, AppError};

const FFLOGS_TOKEN_URL: &str = "https://www.fflogs.com/oauth/token";
const FFLOGS_API_URL: &str = "https://www.fflogs.com/api/v2/client";

/// Deployment mode selected through the `ENV` variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::InvalidEnvVar {
                name: "ENV".to_string(),
                value: other.to_string(),
                reason: "must be 'development' or 'production'".to_string(),
            }),
        }
    }
}

pub struct Config {
    pub environment: Environment,

    pub discord_token: String,
    pub discord_test_guild_id: Option<GuildId>,

    pub fflogs_client_id: String,
    pub fflogs_client_secret: String,

    pub fflogs_token_url: String,
    pub fflogs_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require =
            |key: &str| lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let environment = require("ENV")?.parse()?;

        let discord_test_guild_id = match lookup("DISCORD_TEST_GUILD_ID") {
            Some(value) if !value.is_empty() => Some(parse_guild_id(&value)?),
            _ => None,
        };

        Ok(Self {
            environment,
            discord_token: require("DISCORD_TOKEN")?,
            discord_test_guild_id,
            fflogs_client_id: require("FFLOGS_CLIENT_ID")?,
            fflogs_client_secret: require("FFLOGS_CLIENT_SECRET")?,
            fflogs_token_url: FFLOGS_TOKEN_URL.to_string(),
            fflogs_api_url: FFLOGS_API_URL.to_string(),
        })
    }

    /// Guild that slash commands are published to.
    ///
    /// Development publishes to the test guild only, since guild commands update
    /// instantly. Production (or development without a test guild) publishes
    /// globally, which Discord can take up to an hour to propagate.
    pub fn publish_scope(&self) -> Option<GuildId> {
        match self.environment {
            Environment::Development => self.discord_test_guild_id,
            Environment::Production => None,
        }
    }
}

fn parse_guild_id(value: &str) -> Result<GuildId, ConfigError> {
    match value.parse::<u64>() {
        Ok(id) if id != 0 => Ok(GuildId::new(id)),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "DISCORD_TEST_GUILD_ID".to_string(),
            value: value.to_string(),
            reason: "must be a non-zero Discord snowflake".to_string(),
        }),
    }
}
