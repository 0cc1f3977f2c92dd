use std::rc::Rc;

use leptos::prelude::*;

use crate::core::models::{Task, TaskDraft};
use crate::core::services::TaskStore;
use crate::features::dashboard::services::{
    create_task, delete_task, load_tasks, update_task, TaskListState,
};

#[derive(Clone, Copy)]
pub struct TasksHook {
    pub tasks: RwSignal<Vec<Task>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub create_task: Callback<TaskDraft>,
    pub update_task: Callback<(String, TaskDraft)>,
    pub delete_task: Callback<String>,
    pub reload: Callback<()>,
}

pub fn use_tasks(store: Rc<dyn TaskStore>, on_unauthorized: Callback<()>) -> TasksHook {
    let state = TaskListState {
        tasks: RwSignal::new(Vec::new()),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
        on_unauthorized,
    };
    let store = StoredValue::new_local(store);

    // Load tasks on mount
    load_tasks(store.get_value(), state);

    let create = Callback::new(move |draft: TaskDraft| {
        if let Some(store) = store.try_get_value() {
            create_task(store, draft, state);
        }
    });

    let update = Callback::new(move |(task_id, draft): (String, TaskDraft)| {
        if let Some(store) = store.try_get_value() {
            update_task(store, task_id, draft, state);
        }
    });

    let delete = Callback::new(move |task_id: String| {
        if let Some(store) = store.try_get_value() {
            delete_task(store, task_id, state);
        }
    });

    let reload = Callback::new(move |_: ()| {
        if let Some(store) = store.try_get_value() {
            load_tasks(store, state);
        }
    });

    TasksHook {
        tasks: state.tasks,
        loading: state.loading,
        error: state.error,
        create_task: create,
        update_task: update,
        delete_task: delete,
        reload,
    }
}
