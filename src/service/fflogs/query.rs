use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Fetches a character's rankings for one encounter.
///
/// `encounterRankings` is a JSON scalar whose shape differs between encounter
/// types, so it is kept as raw JSON and interpreted by the caller.
pub const CHARACTER_RANKINGS_QUERY: &str = "query CharacterRankings($lodestoneId: Int!, $encounterId: Int!) {
  characterData {
    character(lodestoneID: $lodestoneId) {
      lodestoneID
      encounterRankings(encounterID: $encounterId)
    }
  }
}";

/// Request body POSTed to the GraphQL endpoint.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRankingsVariables {
    pub lodestone_id: i64,
    pub encounter_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRankingsData {
    pub character_data: CharacterData,
}

#[derive(Debug, Deserialize)]
pub struct CharacterData {
    pub character: Option<Character>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(rename = "lodestoneID")]
    pub lodestone_id: i64,
    pub encounter_rankings: Box<RawValue>,
}
