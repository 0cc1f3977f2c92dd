//! Error types for the task board client

use crate::core::models::TaskStatus;
use thiserror::Error;

/// A local board operation referenced state the board does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The dragged task is not where the gesture says it came from
    #[error("task {task_id} not found in column '{column}' at index {index}")]
    TaskNotAtSource {
        task_id: String,
        column: TaskStatus,
        index: usize,
    },
}

/// Failures talking to the remote REST API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// The store rejected the session credentials
    #[error("not authorized")]
    Unauthorized,

    /// Any other non-success response
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// A status change the remote store did not confirm
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("status change of task {task_id} to '{status}' was not confirmed: {source}")]
    NotConfirmed {
        task_id: String,
        status: TaskStatus,
        #[source]
        source: ApiError,
    },
}

impl SyncError {
    pub fn task_id(&self) -> &str {
        match self {
            SyncError::NotConfirmed { task_id, .. } => task_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Incorrect email/password")]
    InvalidCredentials,

    #[error("Invalid email/password or account already exists or password is short")]
    SignupRejected,

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
