//! HTTP task store against a mock REST API.

use serde_json::json;
use taskboard_ui::core::config::AppConfig;
use taskboard_ui::core::error::ApiError;
use taskboard_ui::core::models::{Priority, TaskDraft, TaskStatus};
use taskboard_ui::core::services::{ApiClient, AuthToken, HttpTaskStore, TaskStore};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_for(server: &MockServer) -> HttpTaskStore {
    let config = AppConfig {
        api_base_url: server.uri(),
        ..AppConfig::default()
    };
    let token = AuthToken::new("secret-token").unwrap();
    HttpTaskStore::for_session(&config, &token).unwrap()
}

#[tokio::test]
async fn fetch_all_decodes_tasks_and_sends_the_raw_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/"))
        .and(header("authorization", "secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "_id": "a1",
                "title": "Write report",
                "description": "Quarterly numbers",
                "status": "In Progress",
                "priority": "High",
                "dueDate": "2024-05-10T00:00:00.000Z",
                "userId": "u1"
            },
            {"_id": "a2", "title": "Archive", "status": "Archived", "userId": "u1"},
            {"_id": "a3", "title": "Plan", "status": "To Do", "userId": "u1"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let fetched = store_for(&server).fetch_all().await.unwrap();

    assert_eq!(fetched.tasks.len(), 2);
    let first = &fetched.tasks[0];
    assert_eq!(first.id, "a1");
    assert_eq!(first.status, TaskStatus::InProgress);
    assert_eq!(first.priority, Priority::High);
    assert_eq!(first.due_label(), "May 10, 2024");
    assert_eq!(fetched.tasks[1].priority, Priority::Medium);

    assert_eq!(fetched.rejected.len(), 1);
    assert_eq!(fetched.rejected[0].task_id.as_deref(), Some("a2"));
}

#[tokio::test]
async fn update_status_puts_only_the_status_field() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/tasks/a1"))
        .and(body_json(json!({"status": "Completed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "a1"})))
        .expect(1)
        .mount(&server)
        .await;

    store_for(&server)
        .update_status("a1", TaskStatus::Completed)
        .await
        .unwrap();
}

#[tokio::test]
async fn create_posts_the_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tasks/"))
        .and(body_json(json!({
            "title": "New task",
            "description": "",
            "status": "To Do",
            "priority": "Low"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"_id": "n1"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut draft = TaskDraft::new("New task");
    draft.priority = Priority::Low;
    store_for(&server).create(&draft).await.unwrap();
}

#[tokio::test]
async fn rejected_credentials_map_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid token"))
        .mount(&server)
        .await;

    let err = store_for(&server).fetch_all().await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
}

#[tokio::test]
async fn server_errors_carry_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/a1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let err = store_for(&server).delete("a1").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: "database unavailable".to_string(),
        }
    );
}

#[tokio::test]
async fn delete_hits_the_task_resource() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/tasks/a1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    store_for(&server).delete("a1").await.unwrap();
}

#[tokio::test]
async fn unauthenticated_client_sends_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tasks/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let store = HttpTaskStore::new(ApiClient::new(&server.uri()).unwrap());
    store.fetch_all().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}
