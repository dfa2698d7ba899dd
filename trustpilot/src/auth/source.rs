//! Cached token source with transparent refresh.
//!
//! # Design
//! One `TokenSource` is shared by the client across all requests and is the
//! only mutable state in the library. The cached token lives behind an async
//! `RwLock`: readers return it while it is still fresh, and a refresh takes
//! the write lock and re-checks before exchanging, so concurrent callers
//! never trigger duplicate token-endpoint exchanges.

use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

use super::types::{PasswordGrantConfig, TokenErrorResponse, TokenResponse, TokenSet};
use crate::client::error::{check_status, Error};

/// Seconds before expiry at which the cached token is refreshed.
const EXPIRY_LEEWAY_SECS: i64 = 300;

/// Cached OAuth2 token source for the password grant.
#[derive(Debug)]
pub struct TokenSource {
    http: reqwest::Client,
    token_url: Url,
    credentials: PasswordGrantConfig,
    current: RwLock<TokenSet>,
}

impl TokenSource {
    /// Performs the initial password-grant exchange and caches the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange fails; the failure is classified by
    /// the token endpoint's HTTP status.
    pub async fn new(
        http: reqwest::Client,
        token_url: Url,
        credentials: PasswordGrantConfig,
    ) -> Result<Self, Error> {
        let initial = password_exchange(&http, &token_url, &credentials).await?;
        debug!("acquired initial access token");

        Ok(Self {
            http,
            token_url,
            credentials,
            current: RwLock::new(initial),
        })
    }

    /// Returns a valid access token, refreshing the cached one if it is
    /// within [`EXPIRY_LEEWAY_SECS`] of expiry.
    ///
    /// Refresh uses the `refresh_token` grant when the server issued a
    /// refresh token, and re-runs the password grant otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the refresh exchange fails.
    pub async fn access_token(&self) -> Result<String, Error> {
        {
            let current = self.current.read().await;
            if !current.is_expired(EXPIRY_LEEWAY_SECS) {
                return Ok(current.access_token.clone());
            }
        }

        let mut current = self.current.write().await;
        // Another caller may have refreshed while we waited for the lock.
        if current.is_expired(EXPIRY_LEEWAY_SECS) {
            let refreshed = match current.refresh_token.clone() {
                Some(ref refresh_token) => {
                    refresh_exchange(&self.http, &self.token_url, &self.credentials, refresh_token)
                        .await?
                }
                None => password_exchange(&self.http, &self.token_url, &self.credentials).await?,
            };
            debug!("refreshed access token");
            *current = refreshed;
        }

        Ok(current.access_token.clone())
    }
}

async fn password_exchange(
    http: &reqwest::Client,
    token_url: &Url,
    credentials: &PasswordGrantConfig,
) -> Result<TokenSet, Error> {
    let params = [
        ("grant_type", "password"),
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("username", credentials.username.as_str()),
        ("password", credentials.password.as_str()),
    ];
    token_request(http, token_url, &params).await
}

async fn refresh_exchange(
    http: &reqwest::Client,
    token_url: &Url,
    credentials: &PasswordGrantConfig,
    refresh_token: &str,
) -> Result<TokenSet, Error> {
    let params = [
        ("grant_type", "refresh_token"),
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("refresh_token", refresh_token),
    ];
    token_request(http, token_url, &params).await
}

/// Executes one form-encoded token-endpoint exchange.
///
/// Non-success responses are classified through the shared status mapping,
/// carrying the server's RFC 6749 error message when one can be extracted.
async fn token_request(
    http: &reqwest::Client,
    token_url: &Url,
    params: &[(&str, &str)],
) -> Result<TokenSet, Error> {
    let response = http.post(token_url.clone()).form(params).send().await?;

    let status = response.status();
    let body = response.text().await?;

    let message = if status.is_success() {
        None
    } else {
        token_error_message(&body)
    };
    check_status(status, message)?;

    let token: TokenResponse =
        serde_json::from_str(&body).map_err(|e| Error::Deserialization(e.to_string()))?;
    Ok(token.into())
}

/// Renders a failed token response body as a message, preferring the RFC 6749
/// error object and falling back to the raw body.
fn token_error_message(body: &str) -> Option<String> {
    if let Ok(error) = serde_json::from_str::<TokenErrorResponse>(body) {
        return Some(error.to_string());
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_message_rfc_object() {
        let message = token_error_message(
            r#"{"error": "invalid_client", "error_description": "Client authentication failed"}"#,
        );
        assert_eq!(
            message,
            Some("invalid_client: Client authentication failed".to_string())
        );
    }

    #[test]
    fn test_token_error_message_plain_body() {
        assert_eq!(
            token_error_message("upstream unavailable"),
            Some("upstream unavailable".to_string())
        );
    }

    #[test]
    fn test_token_error_message_empty_body() {
        assert_eq!(token_error_message(""), None);
        assert_eq!(token_error_message("  \n"), None);
    }
}
