//! Wire types for the Trustpilot invitation API.
//!
//! Request types serialize to the camelCase JSON bodies the API expects;
//! response types deserialize from the JSON the API returns.

pub mod invitation;
pub mod template;

pub use invitation::{
    CreateInvitationRequest, CreateInvitationResponse, ServiceReviewInvitation,
};
pub use template::{ListTemplatesRequest, ListTemplatesResponse, Template};
