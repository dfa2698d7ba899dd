//! Client configuration.
//!
//! Provides configuration options for the HTTP client.

use std::time::Duration;

use url::Url;

use super::error::Error;
use crate::auth::PasswordGrantConfig;

/// Default base URL for the general Trustpilot API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.trustpilot.com/v1/";

/// Default base URL for the invitation API.
pub const DEFAULT_INVITATION_API_BASE_URL: &str = "https://invitations-api.trustpilot.com/v1/";

/// Default OAuth2 token endpoint.
pub const DEFAULT_TOKEN_URL: &str =
    "https://api.trustpilot.com/v1/oauth/oauth-business-users-for-applications/accesstoken";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration.
///
/// Immutable once a [`super::TrustpilotClient`] is constructed from it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the general API.
    pub api_base_url: String,

    /// Base URL for the invitation API.
    pub invitation_api_base_url: String,

    /// OAuth2 token endpoint.
    pub token_url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// Emit wire-level request/response dumps as tracing events.
    pub debug: bool,

    /// OAuth2 password-grant credentials. When unset, requests are issued
    /// without authentication.
    pub auth: Option<PasswordGrantConfig>,

    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            invitation_api_base_url: DEFAULT_INVITATION_API_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            debug: false,
            auth: None,
            user_agent: format!("trustpilot/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Sets the general API base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Sets the invitation API base URL.
    #[must_use]
    pub fn with_invitation_api_base_url(
        mut self,
        invitation_api_base_url: impl Into<String>,
    ) -> Self {
        self.invitation_api_base_url = invitation_api_base_url.into();
        self
    }

    /// Sets the OAuth2 token endpoint.
    #[must_use]
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables wire-level request/response logging.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Supplies password-grant credentials, enabling authentication.
    #[must_use]
    pub fn with_auth(mut self, auth: PasswordGrantConfig) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if any URL is empty, has a non-HTTP
    /// scheme, or does not parse, or if supplied credentials have empty
    /// fields.
    pub fn validate(&self) -> Result<(), Error> {
        validate_url(&self.api_base_url, "api_base_url")?;
        validate_url(&self.invitation_api_base_url, "invitation_api_base_url")?;
        validate_url(&self.token_url, "token_url")?;

        if let Some(ref auth) = self.auth {
            for (value, field) in [
                (&auth.client_id, "client_id"),
                (&auth.client_secret, "client_secret"),
                (&auth.username, "username"),
                (&auth.password, "password"),
            ] {
                if value.is_empty() {
                    return Err(Error::InvalidConfig(format!("{field} cannot be empty")));
                }
            }
        }

        Ok(())
    }
}

fn validate_url(value: &str, field: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::InvalidConfig(format!("{field} cannot be empty")));
    }

    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(Error::InvalidConfig(format!(
            "{field} must start with http:// or https://"
        )));
    }

    Url::parse(value)
        .map_err(|e| Error::InvalidConfig(format!("{field} is not a valid URL: {e}")))?;

    Ok(())
}
