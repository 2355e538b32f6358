mod bot;
mod command;
mod config;
mod error;
mod service;
mod startup;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, service::fflogs::clear::ClearLookup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    // Clear lookups need an initial FFLogs token
    let credentials = startup::init_credentials(&config, oauth_client, http_client).await?;
    if let Some(expiry) = credentials.expiry().await {
        tracing::info!("Acquired FFLogs access token, expires at {}", expiry);
    }

    let registry = startup::build_registry(ClearLookup::new(credentials));
    tracing::info!("Registered {} commands", registry.len());

    let client = bot::start::init_bot(&config, registry).await?;

    bot::start::start_bot(client).await
}
