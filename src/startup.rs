use std::sync::Arc;

use chrono::Utc;
use oauth2::{basic::BasicClient, ClientId, ClientSecret, EndpointNotSet, EndpointSet, TokenUrl};
use url::Url;

use crate::{
    command::{clears::GetClearsCommand, ping::PingCommand, registry::CommandRegistry},
    config::Config,
    error::AppError,
    service::fflogs::{
        clear::ClearLookup,
        client::FflogsConnector,
        credential::{ClientCredentialsExchange, CredentialManager},
    },
};

/// Type alias for the OAuth2 client configured for the FFLogs token endpoint.
///
/// Only the token URL is set; client credentials need no authorization endpoint.
pub(crate) type OAuth2Client =
    BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Builds the shared HTTP client.
///
/// Redirects are disabled, as the oauth2 crate recommends for token requests.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client used for the FFLogs client-credentials exchange.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.fflogs_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.fflogs_client_secret.clone()))
        .set_token_uri(TokenUrl::new(config.fflogs_token_url.clone())?);

    Ok(client)
}

/// Creates the FFLogs credential manager and acquires the first token.
///
/// The bot cannot answer lookups without a token, so a failed exchange here
/// aborts startup instead of waiting for the first lookup.
pub async fn init_credentials(
    config: &Config,
    oauth_client: OAuth2Client,
    http_client: reqwest::Client,
) -> Result<Arc<CredentialManager>, AppError> {
    let api_url = Url::parse(&config.fflogs_api_url)?;

    let manager = CredentialManager::new(
        ClientCredentialsExchange::new(oauth_client, http_client.clone()),
        FflogsConnector::new(http_client, api_url),
    );

    manager.ensure_fresh(Utc::now()).await?;

    Ok(Arc::new(manager))
}

/// Registers every slash command the bot serves.
pub fn build_registry(lookup: ClearLookup) -> Arc<CommandRegistry> {
    let registry = CommandRegistry::new();

    registry.register(PingCommand::command());
    registry.register(GetClearsCommand::command(lookup));

    Arc::new(registry)
}
