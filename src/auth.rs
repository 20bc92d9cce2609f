//! Authentication modes and the OAuth bearer-token lifecycle.

use std::time::Instant;

use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tokio::sync::Mutex;
use url::Url;

use crate::error::{JamaError, Result};

/// Refresh the token once less than this many seconds of lifetime remain.
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// Path of the OAuth token endpoint, relative to the host (not the API
/// version prefix).
pub(crate) const TOKEN_PATH: &str = "/rest/oauth/token";

/// Credentials for a Jama Connect instance.
///
/// The variant selects the authentication mode for the whole lifetime of
/// the client: `Basic` attaches the pair to every request as HTTP basic
/// auth; `ClientCredentials` mints short-lived OAuth bearer tokens.
#[derive(Clone)]
pub enum Credentials {
    /// Username/password sent as basic auth on every request.
    Basic { username: String, password: String },
    /// OAuth2 client id/secret, used only against the token endpoint.
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .finish_non_exhaustive(),
            Self::ClientCredentials { client_id, .. } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .finish_non_exhaustive(),
        }
    }
}

/// A cached bearer token. Replaced, never mutated in place.
struct Token {
    access_token: String,
    acquired_at: Instant,
    expires_in: u64,
}

impl Token {
    fn remaining_secs(&self) -> i64 {
        self.expires_in as i64 - self.acquired_at.elapsed().as_secs() as i64
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// Attaches credentials to outgoing requests.
///
/// In OAuth mode this owns the single cached [`Token`]; the mutex keeps
/// the at-most-one-valid-token invariant under concurrent calls.
pub(crate) enum Authenticator {
    Basic { username: String, password: String },
    OAuth(TokenCache),
}

impl Authenticator {
    pub(crate) fn new(credentials: Credentials, host_url: &Url) -> Result<Self> {
        match credentials {
            Credentials::Basic { username, password } => Ok(Self::Basic { username, password }),
            Credentials::ClientCredentials {
                client_id,
                client_secret,
            } => {
                let token_url = host_url.join(TOKEN_PATH)?;
                Ok(Self::OAuth(TokenCache {
                    client_id,
                    client_secret,
                    token_url,
                    token: Mutex::new(None),
                }))
            }
        }
    }

    /// Attach the credentials for this mode to an outgoing request,
    /// refreshing the bearer token first when needed.
    pub(crate) async fn apply(&self, request: RequestBuilder, http: &Client) -> Result<RequestBuilder> {
        match self {
            Self::Basic { username, password } => Ok(request.basic_auth(username, Some(password))),
            Self::OAuth(cache) => {
                let token = cache.ensure_valid_token(http).await?;
                Ok(request.bearer_auth(token))
            }
        }
    }

    /// Eagerly acquire the first token. No-op in basic mode.
    pub(crate) async fn prime(&self, http: &Client) -> Result<()> {
        if let Self::OAuth(cache) = self {
            cache.ensure_valid_token(http).await?;
        }
        Ok(())
    }
}

pub(crate) struct TokenCache {
    client_id: String,
    client_secret: String,
    token_url: Url,
    token: Mutex<Option<Token>>,
}

impl TokenCache {
    /// Return a bearer token with at least the safety margin of lifetime
    /// left, minting a fresh one when the cache is empty or expiring.
    async fn ensure_valid_token(&self, http: &Client) -> Result<String> {
        let mut slot = self.token.lock().await;

        if let Some(token) = slot.as_ref() {
            if token.remaining_secs() >= TOKEN_REFRESH_MARGIN_SECS {
                return Ok(token.access_token.clone());
            }
            // Once renewal is attempted the old token is never reused,
            // even if the refresh fails mid-flight.
            slot.take();
            tracing::debug!("bearer token expiring, requesting a fresh one");
        }

        let token = self.fetch_token(http).await?;
        let value = token.access_token.clone();
        *slot = Some(token);
        Ok(value)
    }

    async fn fetch_token(&self, http: &Client) -> Result<Token> {
        // Stamp the acquisition time before the request goes out so that
        // request latency never overstates the remaining lifetime.
        let acquired_at = Instant::now();

        let response = http
            .post(self.token_url.clone())
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|err| JamaError::TokenUnauthorized(err.to_string()))?;

        let status = response.status();
        if !matches!(status.as_u16(), 200 | 201) {
            tracing::error!(status = status.as_u16(), "failed to retrieve OAuth token");
            return Err(JamaError::TokenUnauthorized(format!(
                "token endpoint returned {status}"
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|err| JamaError::TokenUnauthorized(err.to_string()))?;

        Ok(Token {
            access_token: body.access_token,
            acquired_at,
            expires_in: body.expires_in,
        })
    }
}
