//! Integration tests for the authentication flow.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_success() {
    let subject = Uuid::new_v4();
    let app = TestApp::new(vec![TestApp::admin_record(subject)]);

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "identifier": "admin@x.cl",
                "secret": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].as_str().is_some());
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = TestApp::new(vec![]);

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "identifier": "ghost",
                "secret": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"].as_str().unwrap(),
        "Usuario no encontrado."
    );
}

#[tokio::test]
async fn test_login_inactive_user() {
    let mut record = TestApp::admin_record(Uuid::new_v4());
    record.active = false;
    let app = TestApp::new(vec![record]);

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "identifier": "admin",
                "secret": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"].as_str().unwrap(),
        "Usuario inactivo o no encontrado."
    );
}

#[tokio::test]
async fn test_login_empty_identifier_is_bad_request() {
    let app = TestApp::new(vec![]);

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "identifier": "",
                "secret": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validate_token_returns_claims() {
    let subject = Uuid::new_v4();
    let app = TestApp::new(vec![TestApp::admin_record(subject)]);
    let token = app.login("admin@x.cl", "password123").await;

    let response = app
        .request("GET", "/auth/validate-token", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["user_id"].as_str().unwrap(),
        subject.to_string()
    );
    assert_eq!(response.body["data"]["role"].as_str().unwrap(), "1");
}

#[tokio::test]
async fn test_validate_token_without_header() {
    let app = TestApp::new(vec![]);

    let response = app.request("GET", "/auth/validate-token", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_validate_token_garbage_token() {
    let app = TestApp::new(vec![]);

    let response = app
        .request("GET", "/auth/validate-token", None, Some("not-a-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = TestApp::new(vec![TestApp::admin_record(Uuid::new_v4())]);
    let token = app.login("admin", "password123").await;

    // Token is valid before logout.
    let response = app
        .request("GET", "/auth/validate-token", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("POST", "/auth/logout", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["message"].as_str().unwrap(),
        "Sesión cerrada con éxito."
    );

    // Signature and expiry still hold, but the token is now blocked.
    let response = app
        .request("GET", "/auth/validate-token", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"].as_str().unwrap(),
        "Token bloqueado o sesión cerrada."
    );
}

#[tokio::test]
async fn test_logout_with_invalid_token() {
    let app = TestApp::new(vec![]);

    let response = app
        .request("POST", "/auth/logout", None, Some("not-a-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_repeated_logins_issue_distinct_tokens() {
    let app = TestApp::new(vec![TestApp::admin_record(Uuid::new_v4())]);

    let first = app.login("admin", "password123").await;
    let second = app.login("admin", "password123").await;

    assert_ne!(first, second);

    // Revoking one leaves the other active.
    app.request("POST", "/auth/logout", None, Some(&first)).await;

    let response = app
        .request("GET", "/auth/validate-token", None, Some(&first))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/auth/validate-token", None, Some(&second))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
