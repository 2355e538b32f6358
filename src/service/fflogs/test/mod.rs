use std::{
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use oauth2::{AccessToken, RequestTokenError};
use serde_json::Value;
use test_utils::fixture::fflogs::{
    character_not_found_response, character_rankings_response, encounter_rankings,
    graphql_error_response, token_response,
};
use url::Url;
use wiremock::{
    matchers::{body_partial_json, body_string_contains, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    config::Config,
    error::{
        auth::AuthError,
        lookup::{ClearError, LookupError},
    },
    service::fflogs::{
        clear::ClearLookup,
        client::{FflogsConnector, RankingsClient, RankingsConnector},
        credential::{ClientCredentialsExchange, Credential, CredentialManager, TokenExchange},
    },
    startup::{init_credentials, setup_oauth_client, setup_reqwest_client},
};


/// Token exchange that issues numbered tokens without any network access.
///
/// The n-th successful exchange returns the token `token-n`.
pub struct MockExchange {
    expiry: DateTime<Utc>,
    failures_remaining: AtomicUsize,
    reject: Arc<AtomicBool>,
    delay: Option<Duration>,
    exchanges: Arc<AtomicUsize>,
}

impl MockExchange {
    /// Issues tokens that expire at a fixed instant.
    pub fn expiring_at(expiry: DateTime<Utc>) -> Self {
        Self {
            expiry,
            failures_remaining: AtomicUsize::new(0),
            reject: Arc::new(AtomicBool::new(false)),
            delay: None,
            exchanges: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Issues tokens valid for an hour from now.
    pub fn valid_for_an_hour() -> Self {
        Self::expiring_at(Utc::now() + TimeDelta::hours(1))
    }

    /// Rejects the next `count` exchanges before succeeding again.
    pub fn failing(self, count: usize) -> Self {
        self.failures_remaining.store(count, Ordering::SeqCst);
        self
    }

    /// Switch that rejects every exchange while set.
    pub fn rejection(&self) -> Arc<AtomicBool> {
        self.reject.clone()
    }

    /// Makes every exchange take `delay` to complete.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Counter of attempted exchanges, including rejected ones.
    pub fn exchanges(&self) -> Arc<AtomicUsize> {
        self.exchanges.clone()
    }
}

#[async_trait]
impl TokenExchange for MockExchange {
    async fn exchange(&self) -> Result<Credential, AuthError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let attempt = self.exchanges.fetch_add(1, Ordering::SeqCst) + 1;

        let rejected = self.reject.load(Ordering::SeqCst)
            || self
                .failures_remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
        if rejected {
            return Err(RequestTokenError::Other("invalid_client".to_string()).into());
        }

        Ok(Credential {
            access_token: AccessToken::new(format!("token-{}", attempt)),
            expiry: self.expiry,
        })
    }
}

/// A query seen by a `MockRankingsClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    pub token: String,
    pub lodestone_id: i64,
    pub encounter_id: i64,
}

/// What every `MockRankingsClient` answers with.
#[derive(Debug, Clone)]
pub enum MockRankings {
    /// Returns the given raw rankings JSON.
    Payload(String),
    /// Fails as if FFLogs returned GraphQL errors.
    Upstream(&'static str),
}

impl MockRankings {
    pub fn kills(total_kills: Option<f64>) -> Self {
        Self::Payload(encounter_rankings(total_kills).to_string())
    }
}

/// Rankings client that records queries together with the token it was built for.
pub struct MockRankingsClient {
    token: String,
    rankings: MockRankings,
    queries: Arc<Mutex<Vec<RecordedQuery>>>,
}

#[async_trait]
impl RankingsClient for MockRankingsClient {
    async fn encounter_rankings(
        &self,
        lodestone_id: i64,
        encounter_id: i64,
    ) -> Result<String, LookupError> {
        self.queries.lock().unwrap().push(RecordedQuery {
            token: self.token.clone(),
            lodestone_id,
            encounter_id,
        });

        match &self.rankings {
            MockRankings::Payload(payload) => Ok(payload.clone()),
            MockRankings::Upstream(message) => Err(LookupError::Upstream(message.to_string())),
        }
    }
}

/// Connector building a new `MockRankingsClient` per credential.
pub struct MockConnector {
    rankings: MockRankings,
    connections: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<RecordedQuery>>>,
}

impl MockConnector {
    pub fn new(rankings: MockRankings) -> Self {
        Self {
            rankings,
            connections: Arc::new(AtomicUsize::new(0)),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn connections(&self) -> Arc<AtomicUsize> {
        self.connections.clone()
    }

    pub fn queries(&self) -> Arc<Mutex<Vec<RecordedQuery>>> {
        self.queries.clone()
    }
}

impl RankingsConnector for MockConnector {
    fn connect(&self, credential: &Credential) -> Arc<dyn RankingsClient> {
        self.connections.fetch_add(1, Ordering::SeqCst);

        Arc::new(MockRankingsClient {
            token: credential.access_token.secret().clone(),
            rankings: self.rankings.clone(),
            queries: self.queries.clone(),
        })
    }
}

/// Clear lookup backed entirely by mocks, plus the query log of its clients.
pub fn mock_clear_lookup(rankings: MockRankings) -> (ClearLookup, Arc<Mutex<Vec<RecordedQuery>>>) {
    let connector = MockConnector::new(rankings);
    let queries = connector.queries();
    let manager = CredentialManager::new(MockExchange::valid_for_an_hour(), connector);

    (ClearLookup::new(Arc::new(manager)), queries)
}

/// Fixed reference instant for expiry tests.
pub fn issued_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Production configuration pointing both FFLogs endpoints at `server`.
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::from_lookup(|name| match name {
        "ENV" => Some("production".to_string()),
        "DISCORD_TOKEN" => Some("discord-token".to_string()),
        "FFLOGS_CLIENT_ID" => Some("client-id".to_string()),
        "FFLOGS_CLIENT_SECRET" => Some("client-secret".to_string()),
        _ => None,
    })
    .unwrap();

    config.fflogs_token_url = format!("{}/oauth/token", server.uri());
    config.fflogs_api_url = format!("{}/api/v2/client", server.uri());
    config
}
