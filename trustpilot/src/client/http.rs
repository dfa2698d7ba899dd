//! HTTP client implementation.
//!
//! Provides the main HTTP client for the Trustpilot invitation API. Every
//! operation runs the same pipeline: resolve the request URL against the
//! invitation API base, serialize the body, attach a bearer token when
//! authentication is configured, execute, decode, and map the status code
//! onto the error taxonomy.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::config::ClientConfig;
use super::error::{check_status, Error};
use super::Trustpilot;
use crate::auth::TokenSource;
use crate::types::{
    CreateInvitationRequest, CreateInvitationResponse, ListTemplatesRequest,
    ListTemplatesResponse,
};

/// Error payload returned by the invitation API.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: String,
}

/// HTTP client for the Trustpilot invitation API.
#[derive(Debug, Clone)]
pub struct TrustpilotClient {
    config: ClientConfig,
    invitation_api_base_url: Url,
    http: reqwest::Client,
    token_source: Option<Arc<TokenSource>>,
}

impl TrustpilotClient {
    /// Creates a new client with the given configuration.
    ///
    /// When password-grant credentials are configured, the OAuth2 token
    /// exchange runs here; a failed exchange fails construction, so a
    /// returned client is always able to authenticate.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the HTTP client
    /// cannot be created, or the initial token exchange fails.
    pub async fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;

        let invitation_api_base_url =
            Url::parse(&config.invitation_api_base_url).map_err(|e| {
                Error::InvalidConfig(format!("invitation_api_base_url is not a valid URL: {e}"))
            })?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Request)?;

        let token_source = match config.auth {
            Some(ref auth) => {
                let token_url = Url::parse(&config.token_url).map_err(|e| {
                    Error::InvalidConfig(format!("token_url is not a valid URL: {e}"))
                })?;
                let source = TokenSource::new(http.clone(), token_url, auth.clone()).await?;
                Some(Arc::new(source))
            }
            None => None,
        };

        Ok(Self {
            config,
            invitation_api_base_url,
            http,
            token_source,
        })
    }

    /// Creates a new client with default configuration (no authentication).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub async fn with_defaults() -> Result<Self, Error> {
        Self::new(ClientConfig::default()).await
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a review-invitation email to a consumer.
    ///
    /// # Errors
    ///
    /// Returns an error if the business unit id is empty, the request fails,
    /// or the server rejects it.
    pub async fn create_invitation(
        &self,
        request: &CreateInvitationRequest,
    ) -> Result<CreateInvitationResponse, Error> {
        let path = business_unit_path(&request.business_unit_id, "email-invitations")?;
        let url = self.invitation_url(&path)?;
        self.request(Method::POST, url, Some(request)).await
    }

    /// Lists the invitation templates available to a business unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the business unit id is empty, the request fails,
    /// or the server rejects it.
    pub async fn list_templates(
        &self,
        request: &ListTemplatesRequest,
    ) -> Result<ListTemplatesResponse, Error> {
        let path = business_unit_path(&request.business_unit_id, "templates")?;
        let url = self.invitation_url(&path)?;
        self.request(Method::GET, url, None::<&()>).await
    }

    /// Resolves a path against the invitation API base URL.
    ///
    /// Standard relative-reference resolution: a relative path appends to the
    /// base path, a leading-slash path replaces it.
    fn invitation_url(&self, path: &str) -> Result<Url, Error> {
        self.invitation_api_base_url
            .join(path)
            .map_err(|e| Error::InvalidArgument(Some(format!("invalid request path {path:?}: {e}"))))
    }

    /// Builds, executes, and decodes one request.
    async fn request<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let payload = match body {
            Some(body) => Some(
                serde_json::to_string(body).map_err(|e| Error::Serialization(e.to_string()))?,
            ),
            None => None,
        };

        let mut builder = self.http.request(method, url);
        if let Some(ref json) = payload {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(json.clone());
        }

        if let Some(ref source) = self.token_source {
            // A stale cached token triggers a refresh here; a failed fetch
            // short-circuits before any request is issued.
            let token = source.access_token().await?;
            builder = builder.bearer_auth(token);
        }

        let request = builder.build().map_err(Error::Request)?;
        if self.config.debug {
            debug!(
                target: "trustpilot::wire",
                method = %request.method(),
                url = %request.url(),
                headers = ?request.headers(),
                body = payload.as_deref().unwrap_or(""),
                "request"
            );
        }

        let response = self.http.execute(request).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body_text = response.text().await?;
        if self.config.debug {
            debug!(
                target: "trustpilot::wire",
                status = status.as_u16(),
                headers = ?headers,
                body = %body_text,
                "response"
            );
        }

        let message = if status.is_success() {
            None
        } else {
            error_message(&body_text)
        };
        check_status(status, message)?;

        if body_text.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&body_text).map_err(|e| Error::Deserialization(e.to_string()))
    }
}

#[async_trait]
impl Trustpilot for TrustpilotClient {
    async fn create_invitation(
        &self,
        request: &CreateInvitationRequest,
    ) -> Result<CreateInvitationResponse, Error> {
        TrustpilotClient::create_invitation(self, request).await
    }

    async fn list_templates(
        &self,
        request: &ListTemplatesRequest,
    ) -> Result<ListTemplatesResponse, Error> {
        TrustpilotClient::list_templates(self, request).await
    }
}

/// Builds the business-unit-scoped resource path shared by both operations.
fn business_unit_path(business_unit_id: &str, resource: &str) -> Result<String, Error> {
    if business_unit_id.is_empty() {
        return Err(Error::InvalidArgument(Some(
            "business unit id must not be empty".to_string(),
        )));
    }
    Ok(format!("private/business-units/{business_unit_id}/{resource}"))
}

/// Extracts the server's human-readable message from an error body, if any.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .map(|e| e.message)
}

#[cfg(test)]
mod tests {
    use super::super::config::DEFAULT_API_BASE_URL;
    use super::*;

    async fn client_with_invitation_base(base: &str) -> TrustpilotClient {
        TrustpilotClient::new(ClientConfig::default().with_invitation_api_base_url(base))
            .await
            .expect("client creation")
    }

    #[tokio::test]
    async fn test_relative_path_appends_to_base() {
        let client = client_with_invitation_base("https://host/v1/").await;
        let url = client
            .invitation_url("private/business-units/123/email-invitations")
            .expect("join");
        assert_eq!(
            url.as_str(),
            "https://host/v1/private/business-units/123/email-invitations"
        );
    }

    #[tokio::test]
    async fn test_leading_slash_path_replaces_base_path() {
        let client = client_with_invitation_base("https://host/v1/").await;
        let url = client
            .invitation_url("/private/business-units/123/email-invitations")
            .expect("join");
        assert_eq!(
            url.as_str(),
            "https://host/private/business-units/123/email-invitations"
        );
    }

    #[test]
    fn test_business_unit_path() {
        assert_eq!(
            business_unit_path("123", "email-invitations").expect("path"),
            "private/business-units/123/email-invitations"
        );
        assert_eq!(
            business_unit_path("123", "templates").expect("path"),
            "private/business-units/123/templates"
        );
    }

    #[test]
    fn test_empty_business_unit_id_is_invalid_argument() {
        let err = business_unit_path("", "templates").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(Some(_))));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message": "'Consumer Email' is not in the correct format."}"#),
            Some("'Consumer Email' is not in the correct format.".to_string())
        );
        assert_eq!(error_message("not json"), None);
        assert_eq!(error_message(""), None);
    }

    #[tokio::test]
    async fn test_with_defaults_has_no_token_source() {
        let client = TrustpilotClient::with_defaults().await.expect("client creation");
        assert!(client.token_source.is_none());
    }

    #[tokio::test]
    async fn test_config_access() {
        let client = TrustpilotClient::with_defaults().await.expect("client creation");
        assert_eq!(client.config().api_base_url, DEFAULT_API_BASE_URL);
    }

    #[tokio::test]
    async fn test_invalid_config_fails_construction() {
        let result =
            TrustpilotClient::new(ClientConfig::default().with_invitation_api_base_url("")).await;
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
