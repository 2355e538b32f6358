use thiserror::Error;

use crate::error::auth::AuthError;

/// Failures executing the character rankings query.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Transport failure or non-2xx status from the GraphQL endpoint.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The GraphQL endpoint answered with an `errors` array.
    #[error("FFLogs query failed: {0}")]
    Upstream(String),

    /// The response carried neither `data` nor `errors`.
    #[error("FFLogs response did not contain any data")]
    MissingData,

    /// FFLogs has no character with the requested Lodestone ID.
    #[error("No FFLogs character found for Lodestone ID {0}")]
    CharacterNotFound(i64),
}

/// The embedded encounter rankings payload could not be read as a JSON object.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to parse encounter rankings: {0}")]
    EncounterRankings(#[from] serde_json::Error),
}

/// Any failure while checking whether a character cleared an encounter.
#[derive(Error, Debug)]
pub enum ClearError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
