use std::sync::Arc;

use async_trait::async_trait;
use oauth2::AccessToken;
use url::Url;

use crate::{
    error::lookup::LookupError,
    service::fflogs::{
        credential::Credential,
        query::{
            CharacterRankingsData, CharacterRankingsVariables, GraphQlRequest, GraphQlResponse,
            CHARACTER_RANKINGS_QUERY,
        },
    },
};

/// Query capability bound to a single access token.
#[async_trait]
pub trait RankingsClient: Send + Sync {
    /// Raw `encounterRankings` JSON for a character and encounter.
    async fn encounter_rankings(
        &self,
        lodestone_id: i64,
        encounter_id: i64,
    ) -> Result<String, LookupError>;
}

/// Builds a new [`RankingsClient`] for a freshly issued credential.
pub trait RankingsConnector: Send + Sync {
    fn connect(&self, credential: &Credential) -> Arc<dyn RankingsClient>;
}

/// Connector producing [`FflogsClient`]s that share one HTTP connection pool.
pub struct FflogsConnector {
    http_client: reqwest::Client,
    api_url: Url,
}

impl FflogsConnector {
    pub fn new(http_client: reqwest::Client, api_url: Url) -> Self {
        Self {
            http_client,
            api_url,
        }
    }
}

impl RankingsConnector for FflogsConnector {
    fn connect(&self, credential: &Credential) -> Arc<dyn RankingsClient> {
        Arc::new(FflogsClient {
            http_client: self.http_client.clone(),
            api_url: self.api_url.clone(),
            access_token: credential.access_token.clone(),
        })
    }
}

/// GraphQL client for the FFLogs v2 client API.
pub struct FflogsClient {
    http_client: reqwest::Client,
    api_url: Url,
    access_token: AccessToken,
}

#[async_trait]
impl RankingsClient for FflogsClient {
    async fn encounter_rankings(
        &self,
        lodestone_id: i64,
        encounter_id: i64,
    ) -> Result<String, LookupError> {
        let request = GraphQlRequest {
            query: CHARACTER_RANKINGS_QUERY,
            variables: CharacterRankingsVariables {
                lodestone_id,
                encounter_id,
            },
        };

        let response = self
            .http_client
            .post(self.api_url.clone())
            .bearer_auth(self.access_token.secret())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<GraphQlResponse<CharacterRankingsData>>()
            .await?;

        if !response.errors.is_empty() {
            let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
            return Err(LookupError::Upstream(messages.join("; ")));
        }

        let character = response
            .data
            .ok_or(LookupError::MissingData)?
            .character_data
            .character
            .ok_or(LookupError::CharacterNotFound(lodestone_id))?;

        tracing::debug!(
            "Fetched encounter {} rankings for Lodestone ID {}",
            encounter_id,
            character.lodestone_id
        );

        Ok(character.encounter_rankings.get().to_string())
    }
}
