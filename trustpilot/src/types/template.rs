//! Invitation-template types.
//!
//! Provides the types returned by the template-listing endpoint.

use serde::{Deserialize, Serialize};

/// Request to list the invitation templates available to a business unit.
#[derive(Debug, Clone, Default)]
pub struct ListTemplatesRequest {
    /// Business unit whose templates are listed. Path parameter; the request
    /// carries no body.
    pub business_unit_id: String,
}

/// Templates available to a business unit, in server order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTemplatesResponse {
    /// The template records.
    #[serde(default)]
    pub templates: Vec<Template>,
}

/// A named, locale-specific invitation template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Template id.
    pub id: String,

    /// Human-readable template name.
    pub name: String,

    /// Whether this is the business unit's default template.
    pub is_default_template: bool,

    /// Locale of the template (e.g. "en-US").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Template type.
    #[serde(rename = "type")]
    pub kind: String,
}
