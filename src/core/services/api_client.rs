use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::session::AuthToken;
use crate::core::error::ApiError;

const MAX_ERROR_BODY: usize = 200;

/// Thin REST client. Carries the credentials it was built with and attaches
/// them to every request; nothing is read from ambient state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<AuthToken>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: AuthToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Generic request executor with status mapping
    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match &self.token {
            Some(token) => request.header(AUTHORIZATION, token.as_str()),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }

        let message: String = response
            .text()
            .await
            .unwrap_or_default()
            .chars()
            .take(MAX_ERROR_BODY)
            .collect();
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", path);
        let response = self.execute(self.http.get(self.url(path))).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        tracing::debug!("POST {}", path);
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    /// POST a body and decode the JSON reply.
    pub async fn post_json_for<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post_json(path, body)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        tracing::debug!("PUT {}", path);
        self.execute(self.http.put(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Response, ApiError> {
        tracing::debug!("DELETE {}", path);
        self.execute(self.http.delete(self.url(path))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_must_be_http() {
        assert!(matches!(ApiClient::new("ftp://x"), Err(ApiError::InvalidBaseUrl(_))));
        assert!(ApiClient::new("localhost:5000").is_err());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("https://api.example.com/ ").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.url("/api/tasks/"), "https://api.example.com/api/tasks/");
    }
}
