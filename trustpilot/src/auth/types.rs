//! OAuth2 token types.
//!
//! Provides the password-grant credential set, the RFC 6749 token-endpoint
//! response shapes, and the cached token representation with expiry tracking.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Credentials for the OAuth2 password grant.
#[derive(Debug, Clone)]
pub struct PasswordGrantConfig {
    /// OAuth2 client id.
    pub client_id: String,

    /// OAuth2 client secret.
    pub client_secret: String,

    /// Resource-owner username.
    pub username: String,

    /// Resource-owner password.
    pub password: String,
}

impl PasswordGrantConfig {
    /// Creates a new credential set.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Token response from the authorization server (RFC 6749 §5.1).
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// The bearer access token.
    pub access_token: String,

    /// Refresh token, when the server issues one.
    pub refresh_token: Option<String>,

    /// Access token lifetime in seconds; zero or absent means no expiry.
    #[serde(default)]
    pub expires_in: i64,
}

/// A cached access token with its computed expiry.
#[derive(Debug, Clone)]
pub struct TokenSet {
    /// The bearer access token.
    pub access_token: String,

    /// Refresh token, when one was issued.
    pub refresh_token: Option<String>,

    /// Absolute expiration timestamp; `None` means the token never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenSet {
    /// Creates a token set, computing `expires_at` from a lifetime in
    /// seconds. A non-positive lifetime means no expiry.
    #[must_use]
    pub fn new(access_token: String, refresh_token: Option<String>, expires_in: i64) -> Self {
        let expires_at = if expires_in > 0 {
            Some(Utc::now() + chrono::Duration::seconds(expires_in))
        } else {
            None
        };

        Self {
            access_token,
            refresh_token,
            expires_at,
        }
    }

    /// Whether the token is expired or will expire within the threshold.
    #[must_use]
    pub fn is_expired(&self, threshold_seconds: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() + chrono::Duration::seconds(threshold_seconds) >= expires_at,
            None => false,
        }
    }
}

impl From<TokenResponse> for TokenSet {
    fn from(response: TokenResponse) -> Self {
        Self::new(
            response.access_token,
            response.refresh_token,
            response.expires_in,
        )
    }
}

/// Error response from the authorization server (RFC 6749 §5.2).
#[derive(Debug, Deserialize)]
pub struct TokenErrorResponse {
    /// Machine-readable error code (e.g. `invalid_grant`).
    pub error: String,

    /// Optional human-readable description.
    pub error_description: Option<String>,
}

impl fmt::Display for TokenErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_description {
            Some(description) => write!(f, "{}: {}", self.error, description),
            None => write!(f, "{}", self.error),
        }
    }
}
