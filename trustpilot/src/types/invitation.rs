//! Review-invitation request and response types.
//!
//! Provides the body types for the invitation endpoint.

use serde::{Deserialize, Serialize};

/// Request to send a review-invitation email to a consumer.
///
/// Only `business_unit_id` and `consumer_email` are required; everything else
/// is optional and omitted from the JSON body when unset.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationRequest {
    /// Business unit the invitation is sent on behalf of. Path parameter,
    /// never serialized into the request body.
    #[serde(skip_serializing)]
    pub business_unit_id: String,

    /// Email address of the consumer being invited. Required.
    pub consumer_email: String,

    /// Reply-to address for the invitation email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    /// The customer's internal reference number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,

    /// Display name of the consumer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_name: Option<String>,

    /// Locale of the invitation email (e.g. "en-US").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Location the invitation relates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    /// Sender email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_email: Option<String>,

    /// Sender display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,

    /// Service-review specific invitation settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_review_invitation: Option<ServiceReviewInvitation>,
}

/// Service-review settings nested inside an invitation request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReviewInvitation {
    /// Preferred send time in ISO-8601 UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_send_time: Option<String>,

    /// URI the consumer is redirected to after leaving the review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,

    /// Free-form tags attached to the invitation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Template to render the invitation email with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

/// Acknowledgement returned by the invitation endpoint.
///
/// The API currently returns an empty object (or no body at all) on success.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateInvitationResponse {}
