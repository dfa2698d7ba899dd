use std::sync::Arc;

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use trustpilot_fakeserver::{app, FakeServer, Template};

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(body.to_string())
        .unwrap()
}

fn sample_templates() -> Vec<Template> {
    vec![
        Template {
            id: "t1".to_string(),
            name: "Default".to_string(),
            is_default_template: true,
            locale: "en-US".to_string(),
            kind: "standard".to_string(),
        },
        Template {
            id: "t2".to_string(),
            name: "Seasonal".to_string(),
            is_default_template: false,
            locale: "da-DK".to_string(),
            kind: "custom".to_string(),
        },
    ]
}

// --- token route ---

#[tokio::test]
async fn token_route_issues_password_grant() {
    let state = Arc::new(FakeServer::new("123").with_access_token("tok-1"));
    let resp = app(state.clone())
        .oneshot(form_request(
            "/v1/oauth/oauth-business-users-for-applications/accesstoken",
            "grant_type=password&client_id=c&client_secret=s&username=u&password=p",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let token = body_json(resp).await;
    assert_eq!(token["access_token"], "tok-1");
    assert_eq!(token["refresh_token"], "fake-refresh-token");
    assert_eq!(token["expires_in"], 3600);

    assert_eq!(state.token_request_count(), 1);
    assert_eq!(state.last_grant_type().as_deref(), Some("password"));
}

#[tokio::test]
async fn token_route_accepts_refresh_grant() {
    let state = Arc::new(FakeServer::new("123"));
    let resp = app(state.clone())
        .oneshot(form_request(
            "/v1/oauth/oauth-business-users-for-applications/accesstoken",
            "grant_type=refresh_token&client_id=c&client_secret=s&refresh_token=fake-refresh-token",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(state.last_grant_type().as_deref(), Some("refresh_token"));
}

#[tokio::test]
async fn token_route_rejects_unknown_grant_type() {
    let state = Arc::new(FakeServer::new("123"));
    let resp = app(state)
        .oneshot(form_request(
            "/v1/oauth/oauth-business-users-for-applications/accesstoken",
            "grant_type=client_credentials&client_id=c&client_secret=s",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "unsupported_grant_type");
}

#[tokio::test]
async fn token_route_rejects_missing_credentials() {
    let state = Arc::new(FakeServer::new("123"));
    let resp = app(state)
        .oneshot(form_request(
            "/v1/oauth/oauth-business-users-for-applications/accesstoken",
            "grant_type=password&client_id=c&client_secret=s",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "invalid_request");
}

// --- invitation route ---

#[tokio::test]
async fn invitation_route_returns_empty_object() {
    let state = Arc::new(FakeServer::new("123"));
    let resp = app(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/private/business-units/123/email-invitations")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(r#"{"consumerEmail":"jane@example.com"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body, serde_json::json!({}));
}

#[tokio::test]
async fn invitation_route_unknown_business_unit_404() {
    let state = Arc::new(FakeServer::new("123"));
    let resp = app(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/private/business-units/999/email-invitations")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invitation_route_records_bearer_token() {
    let state = Arc::new(FakeServer::new("123"));
    let resp = app(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/private/business-units/123/email-invitations")
                .header(http::header::AUTHORIZATION, "Bearer abc")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(state.last_authorization().as_deref(), Some("abc"));
}

// --- templates route ---

#[tokio::test]
async fn templates_route_returns_canned_templates() {
    let state = Arc::new(FakeServer::new("123").with_templates(sample_templates()));
    let resp = app(state)
        .oneshot(
            Request::builder()
                .uri("/v1/private/business-units/123/templates")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["templates"].as_array().unwrap().len(), 2);
    assert_eq!(body["templates"][0]["isDefaultTemplate"], true);
    assert_eq!(body["templates"][1]["type"], "custom");
}

#[tokio::test]
async fn templates_route_unknown_business_unit_404() {
    let state = Arc::new(FakeServer::new("123"));
    let resp = app(state)
        .oneshot(
            Request::builder()
                .uri("/v1/private/business-units/999/templates")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
