//! Integration tests for bearer token authentication.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_missing_credentials_rejected_before_store() {
    let app = TestApp::new();
    app.add_file(1, "a.txt", "text/plain", 10, 1);

    let response = app.get("/search", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!({ "error": "Authorization header is required" }));
    assert_eq!(app.store.calls(), 0);
}

#[tokio::test]
async fn test_empty_header_and_query_rejected() {
    let app = TestApp::new();

    let response = app
        .get_with_headers("/search?auth=", &[("Authorization", String::new())])
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Authorization header is required");
    assert_eq!(app.store.calls(), 0);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = TestApp::new();

    let response = app.get("/search", Some("not-a-token")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!({ "error": "Invalid or expired token" }));
    assert_eq!(app.store.calls(), 0);
}

#[tokio::test]
async fn test_bare_header_token_accepted() {
    let app = TestApp::new();
    app.add_file(4, "mine.txt", "text/plain", 10, 1);

    let response = app
        .get_with_headers("/search", &[("Authorization", app.token(4))])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["pagination"]["total_files"], 1);
}

#[tokio::test]
async fn test_query_token_matches_header_token() {
    let app = TestApp::new();
    app.add_file(7, "one.png", "image/png", 100, 1);
    app.add_file(7, "two.png", "image/png", 200, 2);
    app.add_file(8, "other.png", "image/png", 300, 3);
    let token = app.token(7);

    let via_header = app.get("/search?mime_type=image/png", Some(&token)).await;
    let via_query = app
        .get(&format!("/search?mime_type=image/png&auth={token}"), None)
        .await;

    assert_eq!(via_header.status, StatusCode::OK);
    assert_eq!(via_query.status, StatusCode::OK);
    assert_eq!(via_header.body, via_query.body);
    assert_eq!(via_query.body["pagination"]["total_files"], 2);
}

#[tokio::test]
async fn test_header_takes_precedence_over_query() {
    let app = TestApp::new();
    app.add_file(1, "first.txt", "text/plain", 10, 1);
    app.add_file(2, "second.txt", "text/plain", 10, 1);

    let response = app
        .get(&format!("/search?auth={}", app.token(2)), Some(&app.token(1)))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["files"][0]["filename"], "first.txt");
}

#[tokio::test]
async fn test_expired_token_rejected_on_both_transports() {
    let app = TestApp::new();
    let expired = app.token_with_expiry(3, -600);

    let via_header = app.get("/search", Some(&expired)).await;
    let via_query = app.get(&format!("/search?auth={expired}"), None).await;

    for response in [via_header, via_query] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["error"], "Invalid or expired token");
    }
    assert_eq!(app.store.calls(), 0);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    use jsonwebtoken::{EncodingKey, Header, encode};

    let app = TestApp::new();
    let claims = filevault_auth::Claims {
        user_id: 1,
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: None,
    };
    let forged = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"wrong")).unwrap();

    let response = app.get("/files", Some(&forged)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_every_protected_route_requires_auth() {
    let app = TestApp::new();

    for path in ["/search", "/files", "/stats"] {
        let response = app.get(path, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let response = app.get("/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();
    let response = app.get("/nope", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_repeated_auth_param_uses_first_value() {
    let app = TestApp::new();
    app.add_file(5, "first.txt", "text/plain", 10, 1);

    let path = format!("/search?auth={}&auth=not-a-token", app.token(5));
    let response = app.get_with_headers(&path, &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["pagination"]["total_files"], 1);

    let path = format!("/search?auth=not-a-token&auth={}", app.token(5));
    let response = app.get_with_headers(&path, &[]).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!({ "error": "Invalid or expired token" }));
}
