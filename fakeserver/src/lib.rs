//! In-process fake Trustpilot server.
//!
//! Serves canned responses for the invitation API routes and a minimal OAuth2
//! token endpoint, and records what it saw (bearer tokens, grant types, token
//! request counts) so tests can assert on client behavior. Test fixture only.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// A template record as served by the templates route.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub is_default_template: bool,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
struct TokenRequest {
    grant_type: String,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// Canned state served by the fake Trustpilot routes.
#[derive(Debug)]
pub struct FakeServer {
    /// The only business unit the server knows; other ids get 404.
    pub business_unit_id: String,
    /// Access token issued by the token route.
    pub access_token: String,
    /// Refresh token issued alongside the access token.
    pub refresh_token: String,
    /// Lifetime reported for issued tokens, in seconds.
    pub expires_in: i64,
    /// Templates returned by the templates route.
    pub templates: Vec<Template>,

    token_requests: AtomicUsize,
    last_grant_type: Mutex<Option<String>>,
    last_authorization: Mutex<Option<String>>,
}

impl FakeServer {
    pub fn new(business_unit_id: impl Into<String>) -> Self {
        Self {
            business_unit_id: business_unit_id.into(),
            access_token: "fake-access-token".to_string(),
            refresh_token: "fake-refresh-token".to_string(),
            expires_in: 3600,
            templates: Vec::new(),
            token_requests: AtomicUsize::new(0),
            last_grant_type: Mutex::new(None),
            last_authorization: Mutex::new(None),
        }
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = access_token.into();
        self
    }

    pub fn with_expires_in(mut self, expires_in: i64) -> Self {
        self.expires_in = expires_in;
        self
    }

    pub fn with_templates(mut self, templates: Vec<Template>) -> Self {
        self.templates = templates;
        self
    }

    /// Number of requests the token route has served.
    pub fn token_request_count(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
    }

    /// Grant type of the most recent token request.
    pub fn last_grant_type(&self) -> Option<String> {
        self.last_grant_type.lock().expect("last_grant_type poisoned").clone()
    }

    /// Bearer token seen on the most recent invitation-API request, if any.
    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization.lock().expect("last_authorization poisoned").clone()
    }

    fn record_authorization(&self, headers: &HeaderMap) {
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string);
        *self.last_authorization.lock().expect("last_authorization poisoned") = token;
    }
}

pub fn app(state: Arc<FakeServer>) -> Router {
    Router::new()
        .route(
            "/v1/private/business-units/{id}/email-invitations",
            post(create_invitation),
        )
        .route(
            "/v1/private/business-units/{id}/templates",
            get(list_templates),
        )
        .route(
            "/v1/oauth/oauth-business-users-for-applications/accesstoken",
            post(issue_token),
        )
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: Arc<FakeServer>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn create_invitation(
    State(state): State<Arc<FakeServer>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    state.record_authorization(&headers);
    if id != state.business_unit_id {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({})))
}

async fn list_templates(
    State(state): State<Arc<FakeServer>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    state.record_authorization(&headers);
    if id != state.business_unit_id {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({ "templates": state.templates })))
}

async fn issue_token(
    State(state): State<Arc<FakeServer>>,
    Form(request): Form<TokenRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    state.token_requests.fetch_add(1, Ordering::SeqCst);
    *state.last_grant_type.lock().expect("last_grant_type poisoned") =
        Some(request.grant_type.clone());

    let granted = match request.grant_type.as_str() {
        "password" => {
            request.username.as_deref().is_some_and(|u| !u.is_empty())
                && request.password.as_deref().is_some_and(|p| !p.is_empty())
        }
        "refresh_token" => request.refresh_token.as_deref().is_some_and(|t| !t.is_empty()),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "unsupported_grant_type" })),
            ))
        }
    };
    if !granted {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_request" })),
        ));
    }

    Ok(Json(json!({
        "access_token": state.access_token,
        "refresh_token": state.refresh_token,
        "token_type": "bearer",
        "expires_in": state.expires_in,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_serializes_wire_names() {
        let template = Template {
            id: "t1".to_string(),
            name: "Default".to_string(),
            is_default_template: true,
            locale: "en-US".to_string(),
            kind: "standard".to_string(),
        };
        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json["isDefaultTemplate"], true);
        assert_eq!(json["type"], "standard");
        assert_eq!(json["locale"], "en-US");
    }

    #[test]
    fn defaults_are_usable() {
        let server = FakeServer::new("123");
        assert_eq!(server.business_unit_id, "123");
        assert_eq!(server.access_token, "fake-access-token");
        assert_eq!(server.token_request_count(), 0);
        assert!(server.last_authorization().is_none());
    }
}
