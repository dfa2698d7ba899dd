//! HTTP client for the Trustpilot invitation API.
//!
//! This module provides the configured client, its error taxonomy, and the
//! [`Trustpilot`] trait that abstracts the two API operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use trustpilot::{ClientConfig, ListTemplatesRequest, TrustpilotClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TrustpilotClient::with_defaults().await?;
//!
//!     let templates = client
//!         .list_templates(&ListTemplatesRequest {
//!             business_unit_id: "123".to_string(),
//!         })
//!         .await?;
//!     println!("Found {} templates", templates.templates.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;

use async_trait::async_trait;

use crate::types::{
    CreateInvitationRequest, CreateInvitationResponse, ListTemplatesRequest,
    ListTemplatesResponse,
};

pub use config::ClientConfig;
pub use error::Error;
pub use http::TrustpilotClient;

/// The Trustpilot API surface.
///
/// Implemented by [`TrustpilotClient`]; test doubles can implement it to
/// stand in for the real client behind `dyn Trustpilot`.
#[async_trait]
pub trait Trustpilot {
    /// Sends a review-invitation email to a consumer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    async fn create_invitation(
        &self,
        request: &CreateInvitationRequest,
    ) -> Result<CreateInvitationResponse, Error>;

    /// Lists the invitation templates available to a business unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    async fn list_templates(
        &self,
        request: &ListTemplatesRequest,
    ) -> Result<ListTemplatesResponse, Error>;
}
