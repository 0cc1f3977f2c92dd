use async_trait::async_trait;
use serde_json::Value;

use super::api_client::ApiClient;
use super::session::AuthToken;
use crate::core::config::AppConfig;
use crate::core::error::ApiError;
use crate::core::models::{Task, TaskDraft, TaskStatus};

/// A fetched record that could not be decoded into a task.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub task_id: Option<String>,
    pub reason: String,
}

/// Result of a fetch-all: the decodable tasks plus whatever was left out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedTasks {
    pub tasks: Vec<Task>,
    pub rejected: Vec<RejectedRecord>,
}

impl FetchedTasks {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            rejected: Vec::new(),
        }
    }
}

/// Decode raw records one by one so a single bad record (for example an
/// unknown status literal) does not fail the whole fetch.
pub fn decode_tasks(records: Vec<Value>) -> FetchedTasks {
    let mut fetched = FetchedTasks::default();
    for record in records {
        let task_id = record
            .get("_id")
            .and_then(Value::as_str)
            .map(str::to_string);
        match serde_json::from_value::<Task>(record) {
            Ok(task) => fetched.tasks.push(task),
            Err(e) => fetched.rejected.push(RejectedRecord {
                task_id,
                reason: e.to_string(),
            }),
        }
    }
    fetched
}

/// CRUD over the authenticated owner's task records.
#[async_trait(?Send)]
pub trait TaskStore {
    async fn fetch_all(&self) -> Result<FetchedTasks, ApiError>;

    async fn create(&self, draft: &TaskDraft) -> Result<(), ApiError>;

    async fn update(&self, task_id: &str, draft: &TaskDraft) -> Result<(), ApiError>;

    /// Change only the status field of one task.
    async fn update_status(&self, task_id: &str, status: TaskStatus) -> Result<(), ApiError>;

    async fn delete(&self, task_id: &str) -> Result<(), ApiError>;
}

/// Task store backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    client: ApiClient,
}

impl HttpTaskStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// A store that acts with the given session's credentials.
    pub fn for_session(config: &AppConfig, token: &AuthToken) -> Result<Self, ApiError> {
        let client = ApiClient::new(&config.api_base_url)?.with_token(token.clone());
        Ok(Self::new(client))
    }
}

#[async_trait(?Send)]
impl TaskStore for HttpTaskStore {
    async fn fetch_all(&self) -> Result<FetchedTasks, ApiError> {
        let records: Vec<Value> = self.client.get_json("/api/tasks/").await?;
        let fetched = decode_tasks(records);
        tracing::info!(
            tasks = fetched.tasks.len(),
            rejected = fetched.rejected.len(),
            "fetched tasks"
        );
        Ok(fetched)
    }

    async fn create(&self, draft: &TaskDraft) -> Result<(), ApiError> {
        self.client.post_json("/api/tasks/", draft).await?;
        tracing::info!(title = %draft.title, "task created");
        Ok(())
    }

    async fn update(&self, task_id: &str, draft: &TaskDraft) -> Result<(), ApiError> {
        self.client
            .put_json(&format!("/api/tasks/{task_id}"), draft)
            .await?;
        tracing::info!(task_id, "task updated");
        Ok(())
    }

    async fn update_status(&self, task_id: &str, status: TaskStatus) -> Result<(), ApiError> {
        self.client
            .put_json(
                &format!("/api/tasks/{task_id}"),
                &serde_json::json!({ "status": status }),
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, task_id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/api/tasks/{task_id}")).await?;
        tracing::info!(task_id, "task deleted");
        Ok(())
    }
}
