use oauth2::{
    basic::BasicErrorResponseType, HttpClientError, RequestTokenError, StandardErrorResponse,
};
use thiserror::Error;

/// Error returned by oauth2 when a token request made through reqwest fails.
pub type TokenRequestError = RequestTokenError<
    HttpClientError<reqwest::Error>,
    StandardErrorResponse<BasicErrorResponseType>,
>;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The client-credentials exchange with the FFLogs token endpoint failed.
    ///
    /// Covers network failures, rejected client credentials and any non-2xx
    /// response. Fatal during startup; at runtime the next lookup simply tries
    /// the exchange again.
    #[error("Failed to exchange client credentials for an access token: {0}")]
    TokenExchange(#[source] Box<TokenRequestError>),
}

impl From<TokenRequestError> for AuthError {
    fn from(err: TokenRequestError) -> Self {
        AuthError::TokenExchange(Box::new(err))
    }
}
