use std::rc::Rc;

use leptos::html::Dialog;
use leptos::prelude::*;

use crate::app::{session_store, sign_out, AppView};
use crate::components::{ConfirmDeleteDialog, EditTaskModal, TaskModal};
use crate::core::config::AppConfig;
use crate::core::models::Task;
use crate::core::services::{Session, TaskStore};
use crate::features::dashboard::{
    filter_and_sort, use_tasks, DashboardTaskCard, FilterSortOptions, SortKey, StatusFilter,
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let session = use_context::<RwSignal<Session>>().expect("session context");
    let config = use_context::<RwSignal<AppConfig>>().expect("config context");

    let on_logout = Callback::new(move |_: ()| {
        sign_out(session);
        navigate.set(AppView::Home);
    });
    // The store rejected the token
    let on_expired = Callback::new(move |_: ()| {
        sign_out(session);
        navigate.set(AppView::Login);
    });

    let store = session.with_untracked(|s| config.with_untracked(|c| session_store(s, c)));
    match store {
        Ok(store) => view! { <DashboardContent store=store on_logout=on_logout on_expired=on_expired /> }.into_any(),
        Err(e) => {
            tracing::error!("Cannot open task store: {}", e);
            view! {
                <div class="alert alert-error">
                    <strong>"Error"</strong>
                    <p>{e.to_string()}</p>
                    <button class="btn-secondary" on:click=move |_| on_expired.run(())>"Sign in again"</button>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn DashboardContent(
    store: Rc<dyn TaskStore>,
    on_logout: Callback<()>,
    on_expired: Callback<()>,
) -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let hook = use_tasks(store, on_expired);

    let filter = RwSignal::new(StatusFilter::All);
    let sort = RwSignal::new(None::<SortKey>);
    let visible = move || hook.tasks.with(|tasks| filter_and_sort(tasks, filter.get(), sort.get()));

    let create_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let edit_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let delete_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let editing = RwSignal::new(None::<Task>);
    let deleting = RwSignal::new(None::<Task>);

    let open_create = move |_| {
        if let Some(dialog) = create_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };
    let on_edit = Callback::new(move |task: Task| editing.set(Some(task)));
    let on_delete = Callback::new(move |task: Task| deleting.set(Some(task)));

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Task Dashboard"</h1>
                <div class="dashboard-actions">
                    <button class="btn-primary" on:click=open_create>"Create Task"</button>
                    <button class="btn-secondary" on:click=move |_| navigate.set(AppView::Kanban)>"Kanban Board"</button>
                    <button class="btn-secondary" on:click=move |_| on_logout.run(())>"Logout"</button>
                </div>
            </header>

            {move || hook.error.get().map(|message| view! {
                <div class="alert alert-error">
                    <strong>"Error"</strong>
                    <p>{message}</p>
                </div>
            })}

            <FilterSortOptions filter=filter sort=sort />

            <Show
                when=move || !hook.loading.get() || !hook.tasks.with(Vec::is_empty)
                fallback=|| view! { <p class="loading">"Loading tasks..."</p> }
            >
                {move || {
                    let tasks = visible();
                    if tasks.is_empty() {
                        view! { <p class="empty-state">"No tasks found."</p> }.into_any()
                    } else {
                        view! {
                            <div class="task-grid">
                                {tasks
                                    .into_iter()
                                    .map(|task| view! {
                                        <DashboardTaskCard task=task on_edit=on_edit on_delete=on_delete />
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </Show>

            <TaskModal on_create=hook.create_task dialog_ref=create_dialog_ref />
            <EditTaskModal editing=editing on_edit=hook.update_task dialog_ref=edit_dialog_ref />
            <ConfirmDeleteDialog target=deleting on_confirm=hook.delete_task dialog_ref=delete_dialog_ref />
        </div>
    }
}
