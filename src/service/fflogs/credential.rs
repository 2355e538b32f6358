//! FFLogs access token lifecycle.
//!
//! FFLogs issues short-lived bearer tokens through the OAuth2 client-credentials
//! grant. The [`CredentialManager`] holds the current token together with the
//! query client bound to it and replaces both whenever the token has expired.
//! Refreshing is pull-based: callers invoke [`CredentialManager::ensure_fresh`]
//! right before talking to FFLogs and there is no background timer.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use oauth2::{
    basic::BasicTokenType, AccessToken, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use tokio::sync::RwLock;

use crate::{
    error::auth::AuthError,
    service::fflogs::client::{RankingsClient, RankingsConnector},
    startup::OAuth2Client,
};

/// An access token and the instant it stops being valid.
#[derive(Debug, Clone)]
pub struct Credential {
    pub access_token: AccessToken,
    pub expiry: DateTime<Utc>,
}

impl Credential {
    /// Builds a credential from a token response received at `issued_at`.
    ///
    /// A response without `expires_in` is treated as already expired, so the next
    /// call exchanges again instead of trusting a token of unknown lifetime.
    pub fn from_token_response(
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let lifetime = token
            .expires_in()
            .and_then(|expires_in| TimeDelta::from_std(expires_in).ok())
            .unwrap_or_else(TimeDelta::zero);

        Self {
            access_token: token.access_token().clone(),
            expiry: issued_at + lifetime,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expiry
    }
}

/// Obtains a new [`Credential`] from the token endpoint.
#[async_trait]
pub trait TokenExchange: Send + Sync {
    async fn exchange(&self) -> Result<Credential, AuthError>;
}

/// OAuth2 client-credentials exchange against the FFLogs token endpoint.
pub struct ClientCredentialsExchange {
    oauth_client: OAuth2Client,
    http_client: reqwest::Client,
}

impl ClientCredentialsExchange {
    pub fn new(oauth_client: OAuth2Client, http_client: reqwest::Client) -> Self {
        Self {
            oauth_client,
            http_client,
        }
    }
}

#[async_trait]
impl TokenExchange for ClientCredentialsExchange {
    async fn exchange(&self) -> Result<Credential, AuthError> {
        let issued_at = Utc::now();

        let token = self
            .oauth_client
            .exchange_client_credentials()
            .request_async(&self.http_client)
            .await?;

        Ok(Credential::from_token_response(&token, issued_at))
    }
}

/// A credential and the client built from it. Always replaced as a pair.
#[derive(Clone)]
struct BoundClient {
    credential: Credential,
    client: Arc<dyn RankingsClient>,
}

/// Owns the FFLogs access token and the query client bound to it.
///
/// The token and client live in one slot so readers always see a matching pair.
/// Refreshes happen under the slot's write lock and re-check expiry after
/// acquiring it, so concurrent callers that all found a stale token trigger a
/// single exchange between them.
pub struct CredentialManager {
    exchange: Box<dyn TokenExchange>,
    connector: Box<dyn RankingsConnector>,
    bound: RwLock<Option<BoundClient>>,
}

impl CredentialManager {
    /// Creates a manager without a credential; the first `ensure_fresh` acquires one.
    pub fn new(
        exchange: impl TokenExchange + 'static,
        connector: impl RankingsConnector + 'static,
    ) -> Self {
        Self {
            exchange: Box::new(exchange),
            connector: Box::new(connector),
            bound: RwLock::new(None),
        }
    }

    /// Exchanges the client credentials for a new access token.
    ///
    /// Does not touch the stored credential; use `ensure_fresh` for that.
    pub async fn acquire(&self) -> Result<Credential, AuthError> {
        self.exchange.exchange().await
    }

    /// Returns a query client bound to a credential valid at `now`.
    ///
    /// Exchanges a new token and rebuilds the client if there is no credential yet
    /// or it expired at or before `now`; otherwise returns the current client. A
    /// failed exchange leaves the previous pair in place and is retried by the
    /// next call.
    ///
    /// # Returns
    /// - `Ok(Arc<dyn RankingsClient>)` - Client bound to a valid token
    /// - `Err(AuthError)` - The token exchange failed
    pub async fn ensure_fresh(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Arc<dyn RankingsClient>, AuthError> {
        if let Some(bound) = self.bound.read().await.as_ref() {
            if !bound.credential.is_expired(now) {
                return Ok(bound.client.clone());
            }
        }

        let mut slot = self.bound.write().await;

        // Another caller may have refreshed while we waited for the lock
        if let Some(bound) = slot.as_ref() {
            if !bound.credential.is_expired(now) {
                return Ok(bound.client.clone());
            }
        }

        let credential = self.acquire().await?;
        let client = self.connector.connect(&credential);

        tracing::debug!("Refreshed FFLogs access token, expires at {}", credential.expiry);

        *slot = Some(BoundClient {
            credential,
            client: client.clone(),
        });

        Ok(client)
    }

    /// Expiry of the current credential, if one has been acquired.
    pub async fn expiry(&self) -> Option<DateTime<Utc>> {
        self.bound
            .read()
            .await
            .as_ref()
            .map(|bound| bound.credential.expiry)
    }
}
