//! Error types for the bot.
//!
//! Each concern owns its own error enum (credentials, ranking lookups, command
//! publishing and dispatch, configuration). `AppError` aggregates the errors
//! that can abort startup and is what `main` returns.

pub mod auth;
pub mod command;
pub mod config;
pub mod lookup;

use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError};

/// Top-level application error type.
///
/// Only startup paths produce this error. Once the bot is connected, failures
/// are handled and logged at the event handler instead of bubbling up here.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The initial FFLogs token exchange failed.
    ///
    /// The bot cannot answer clear lookups without a token, so this is fatal
    /// at startup.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// An endpoint URL constant failed to parse.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
