pub mod api_client;
pub mod auth;
pub mod session;
pub mod storage;
pub mod task_store;

pub use api_client::ApiClient;
pub use auth::{AuthService, Credentials, HttpAuthService};
pub use session::{AuthToken, Session};
pub use task_store::{decode_tasks, FetchedTasks, HttpTaskStore, RejectedRecord, TaskStore};
