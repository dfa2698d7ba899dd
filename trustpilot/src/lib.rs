//! Trustpilot SDK - Rust client library for the Trustpilot review platform.
//!
//! This crate provides a typed HTTP client for the Trustpilot
//! review-invitation REST API, covering two operations:
//!
//! - [`TrustpilotClient::create_invitation`] — send a review-invitation email
//!   to a consumer on behalf of a business unit.
//! - [`TrustpilotClient::list_templates`] — list the invitation templates
//!   available to a business unit.
//!
//! Authentication uses the OAuth2 password grant: the client exchanges
//! resource-owner credentials for a bearer token at construction time, then
//! caches and refreshes that token transparently across requests.
//!
//! # Core Types
//!
//! - [`ClientConfig`] — base URLs, token endpoint, timeout, debug flag
//! - [`PasswordGrantConfig`] — OAuth2 password-grant credentials
//! - [`Trustpilot`] — the two-operation trait, implemented by
//!   [`TrustpilotClient`] and substitutable by test doubles
//! - [`Error`] — the flat error taxonomy surfaced by every operation
//!
//! # Example
//!
//! ```rust,ignore
//! use trustpilot::{ClientConfig, CreateInvitationRequest, PasswordGrantConfig, TrustpilotClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auth = PasswordGrantConfig::new(
//!         "client-id",
//!         "client-secret",
//!         "apiuser@example.com",
//!         "password",
//!     );
//!     let client = TrustpilotClient::new(ClientConfig::default().with_auth(auth)).await?;
//!
//!     client
//!         .create_invitation(&CreateInvitationRequest {
//!             business_unit_id: "123".to_string(),
//!             consumer_email: "jane@example.com".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod types;

pub use auth::PasswordGrantConfig;
pub use client::{ClientConfig, Error, Trustpilot, TrustpilotClient};
pub use types::{
    CreateInvitationRequest, CreateInvitationResponse, ListTemplatesRequest,
    ListTemplatesResponse, ServiceReviewInvitation, Template,
};
