use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};

use crate::{
    error::lookup::{ClearError, ParseError},
    service::fflogs::credential::CredentialManager,
};

/// Answers whether a character has cleared an encounter.
#[derive(Clone)]
pub struct ClearLookup {
    credentials: Arc<CredentialManager>,
}

impl ClearLookup {
    pub fn new(credentials: Arc<CredentialManager>) -> Self {
        Self { credentials }
    }

    /// Checks whether the character has at least one recorded kill of the encounter.
    ///
    /// Refreshes the FFLogs token first if it has expired. Failures are returned
    /// as-is without retrying.
    ///
    /// # Arguments
    /// - `lodestone_id` - Lodestone ID of the character
    /// - `encounter_id` - FFLogs encounter ID
    ///
    /// # Returns
    /// - `Ok(true)` - Rankings report more than zero kills
    /// - `Ok(false)` - No kills, or no `totalKills` in the rankings
    /// - `Err(ClearError::Auth)` - Token refresh failed
    /// - `Err(ClearError::Lookup)` - Query failed
    /// - `Err(ClearError::Parse)` - Rankings payload is not a JSON object
    pub async fn check_clear(
        &self,
        lodestone_id: i64,
        encounter_id: i64,
    ) -> Result<bool, ClearError> {
        let client = self.credentials.ensure_fresh(Utc::now()).await?;

        let rankings = client.encounter_rankings(lodestone_id, encounter_id).await?;
        let cleared = has_cleared(&rankings)?;

        tracing::debug!(
            "Lodestone ID {} cleared encounter {}: {}",
            lodestone_id,
            encounter_id,
            cleared
        );

        Ok(cleared)
    }
}

/// Reads `totalKills` from an encounter rankings payload.
///
/// Rankings differ in shape between encounter types, so only `totalKills` is
/// looked at. Anything but a positive number counts as not cleared.
pub fn has_cleared(rankings: &str) -> Result<bool, ParseError> {
    let rankings: Map<String, Value> = serde_json::from_str(rankings)?;

    Ok(rankings
        .get("totalKills")
        .and_then(Value::as_f64)
        .is_some_and(|kills| kills > 0.0))
}
