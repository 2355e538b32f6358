//! FFLogs API response fixtures.
//!
//! Bodies match what the FFLogs token endpoint and GraphQL client API return, for
//! mounting on a mock HTTP server or feeding mocked rankings clients.

use serde_json::{json, Value};

/// Encounter rankings payload with the given kill count.
///
/// `None` omits `totalKills` entirely, as FFLogs does for characters without
/// any parses of the encounter.
pub fn encounter_rankings(total_kills: Option<f64>) -> Value {
    let mut rankings = json!({
        "bestAmount": 0,
        "medianPerformance": null,
        "averagePerformance": null,
        "ranks": [],
    });

    if let Some(kills) = total_kills {
        rankings["totalKills"] = json!(kills);
    }

    rankings
}

/// GraphQL response carrying a character's encounter rankings.
pub fn character_rankings_response(lodestone_id: i64, rankings: Value) -> Value {
    json!({
        "data": {
            "characterData": {
                "character": {
                    "lodestoneID": lodestone_id,
                    "encounterRankings": rankings,
                }
            }
        }
    })
}

/// GraphQL response for a Lodestone ID FFLogs does not know.
pub fn character_not_found_response() -> Value {
    json!({
        "data": {
            "characterData": {
                "character": null
            }
        }
    })
}

/// GraphQL response reporting query errors.
pub fn graphql_error_response(messages: &[&str]) -> Value {
    let errors: Vec<Value> = messages
        .iter()
        .map(|message| json!({ "message": message }))
        .collect();

    json!({
        "errors": errors,
        "data": null,
    })
}

/// Successful client-credentials token response.
pub fn token_response(access_token: &str, expires_in: u64) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "bearer",
        "expires_in": expires_in,
    })
}
