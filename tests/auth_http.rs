//! Login and signup against a mock auth API.

use serde_json::json;
use taskboard_ui::core::error::{ApiError, AuthError};
use taskboard_ui::core::services::{ApiClient, AuthService, Credentials, HttpAuthService};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn auth_for(server: &MockServer) -> HttpAuthService {
    HttpAuthService::new(ApiClient::new(&server.uri()).unwrap())
}

fn credentials() -> Credentials {
    Credentials::new("ada@example.com", "hunter2")
}

#[tokio::test]
async fn login_returns_the_issued_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "ada@example.com", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
        .expect(1)
        .mount(&server)
        .await;

    let token = auth_for(&server).login(&credentials()).await.unwrap();
    assert_eq!(token.as_str(), "abc123");
}

#[tokio::test]
async fn login_rejection_is_reported_as_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid credentials"})))
        .mount(&server)
        .await;

    let err = auth_for(&server).login(&credentials()).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(err.to_string(), "Incorrect email/password");
}

#[tokio::test]
async fn signup_rejection_is_reported_as_signup_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "User already exists"})))
        .mount(&server)
        .await;

    let err = auth_for(&server).signup(&credentials()).await.unwrap_err();
    assert!(matches!(err, AuthError::SignupRejected));
}

#[tokio::test]
async fn empty_token_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": "  "})))
        .mount(&server)
        .await;

    let err = auth_for(&server).signup(&credentials()).await.unwrap_err();
    assert!(matches!(err, AuthError::Api(ApiError::Decode(_))));
}
