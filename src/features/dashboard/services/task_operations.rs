use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::error::ApiError;
use crate::core::models::{Task, TaskDraft};
use crate::core::services::TaskStore;

/// Reactive state shared by the dashboard task operations.
#[derive(Clone, Copy)]
pub struct TaskListState {
    pub tasks: RwSignal<Vec<Task>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub on_unauthorized: Callback<()>,
}

impl TaskListState {
    fn report(&self, context: &str, err: ApiError) {
        tracing::error!("{}: {}", context, err);
        if matches!(err, ApiError::Unauthorized) {
            self.on_unauthorized.run(());
        } else {
            self.error.set(Some(format!("{context}: {err}")));
        }
    }
}

// Fetch every task for the signed-in user
pub fn load_tasks(store: Rc<dyn TaskStore>, state: TaskListState) {
    state.loading.set(true);
    spawn_local(async move {
        match store.fetch_all().await {
            Ok(fetched) => {
                for rejected in &fetched.rejected {
                    tracing::warn!(
                        task_id = rejected.task_id.as_deref().unwrap_or("<none>"),
                        "skipping task record: {}",
                        rejected.reason
                    );
                }
                state.error.set(None);
                state.tasks.set(fetched.tasks);
            }
            Err(e) => state.report("Failed to load tasks", e),
        }
        state.loading.set(false);
    });
}

// Create a task, then reload so the list carries the server-assigned id
pub fn create_task(store: Rc<dyn TaskStore>, draft: TaskDraft, state: TaskListState) {
    spawn_local(async move {
        match store.create(&draft).await {
            Ok(()) => load_tasks(store, state),
            Err(e) => state.report("Failed to create task", e),
        }
    });
}

pub fn update_task(store: Rc<dyn TaskStore>, task_id: String, draft: TaskDraft, state: TaskListState) {
    spawn_local(async move {
        match store.update(&task_id, &draft).await {
            Ok(()) => load_tasks(store, state),
            Err(e) => state.report("Failed to update task", e),
        }
    });
}

pub fn delete_task(store: Rc<dyn TaskStore>, task_id: String, state: TaskListState) {
    spawn_local(async move {
        match store.delete(&task_id).await {
            Ok(()) => {
                // Drop it locally as well; the reload confirms
                state.tasks.update(|tasks| tasks.retain(|t| t.id != task_id));
                load_tasks(store, state);
            }
            Err(e) => state.report("Failed to delete task", e),
        }
    });
}
