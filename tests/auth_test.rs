//! Integration tests for the signup and login flow.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn signup_success() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "username": "alice",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn signup_duplicate_username_conflicts() {
    let app = helpers::TestApp::new();
    app.signup("alice", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "username": "alice",
                "password": "different",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn signup_empty_username_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "username": "",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_success_returns_token() {
    let app = helpers::TestApp::new();
    app.signup("alice", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "alice",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["access_token"].is_string());
    assert_eq!(response.body["data"]["token_type"], "bearer");
}

#[tokio::test]
async fn login_wrong_password_unauthorized() {
    let app = helpers::TestApp::new();
    app.signup("alice", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "alice",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_unknown_user_gets_same_error_as_wrong_password() {
    let app = helpers::TestApp::new();
    app.signup("alice", "password123").await;

    let unknown = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "password123",
            })),
            None,
        )
        .await;

    let wrong = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "alice",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body["message"], wrong.body["message"]);
}

#[tokio::test]
async fn requests_without_token_are_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/posts", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/posts", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_for_unknown_subject_is_unauthorized() {
    let app = helpers::TestApp::new();

    // Signed with the right secret but for a user who never registered.
    let tokens = postbox_auth::jwt::TokenService::new(&app.config.auth);
    let issued = tokens.issue("ghost").unwrap();

    let response = app
        .request("GET", "/api/posts", None, Some(&issued.token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_needs_no_auth() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
