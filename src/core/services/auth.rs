use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::api_client::ApiClient;
use super::session::AuthToken;
use crate::core::error::{ApiError, AuthError};

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// Issues session tokens.
#[async_trait(?Send)]
pub trait AuthService {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, AuthError>;

    async fn signup(&self, credentials: &Credentials) -> Result<AuthToken, AuthError>;
}

#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: ApiClient,
}

impl HttpAuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn request_token(&self, path: &str, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        let response: TokenResponse = self.client.post_json_for(path, credentials).await?;
        AuthToken::new(response.token).ok_or_else(|| ApiError::Decode("empty token in response".to_string()))
    }
}

// Rejections by the service become the user-facing variants; transport
// problems stay as they are.
fn classify(err: ApiError, rejected: AuthError) -> AuthError {
    match err {
        ApiError::Unauthorized | ApiError::Status { .. } => rejected,
        other => AuthError::Api(other),
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, AuthError> {
        let token = self
            .request_token("/api/auth/login", credentials)
            .await
            .map_err(|e| {
                tracing::warn!("Login failed: {}", e);
                classify(e, AuthError::InvalidCredentials)
            })?;
        tracing::info!("Logged in");
        Ok(token)
    }

    async fn signup(&self, credentials: &Credentials) -> Result<AuthToken, AuthError> {
        let token = self
            .request_token("/api/auth/signup", credentials)
            .await
            .map_err(|e| {
                tracing::warn!("Signup failed: {}", e);
                classify(e, AuthError::SignupRejected)
            })?;
        tracing::info!("Account created");
        Ok(token)
    }
}
