//! FFLogs ranking service integration.
//!
//! FFLogs exposes a GraphQL API authenticated with OAuth2 client credentials.
//! The pieces are layered bottom-up:
//!
//! - [`credential`] - Access token lifecycle: exchange, expiry check and rebuilding
//!   the query client whenever the token changes
//! - [`client`] - The GraphQL client bound to one access token
//! - [`query`] - The character rankings query and its response shape
//! - [`clear`] - Turns a rankings payload into "has this character cleared it"

pub mod clear;
pub mod client;
pub mod credential;
pub mod query;

#[cfg(test)]
pub(crate) mod test;
