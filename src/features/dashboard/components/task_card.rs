use leptos::prelude::*;

use crate::core::models::Task;

#[component]
pub fn DashboardTaskCard(
    task: Task,
    on_edit: Callback<Task>,
    on_delete: Callback<Task>,
) -> impl IntoView {
    let status_class = format!(
        "status-badge status-{}",
        task.status.as_str().to_lowercase().replace(' ', "-")
    );
    let edit_task = task.clone();
    let delete_task = task.clone();

    view! {
        <div class="task-card dashboard-card">
            <h3>{task.title.clone()}</h3>
            <p class="task-description">{task.description_or_placeholder().to_string()}</p>
            <div class="task-meta">
                <span class=status_class>{task.status.as_str()}</span>
                <span class="priority-badge">{format!("Priority: {}", task.priority)}</span>
                <span class="task-due">{format!("Due: {}", task.due_label())}</span>
            </div>
            <div class="task-card-actions">
                <button class="btn-secondary" on:click=move |_| on_edit.run(edit_task.clone())>"Edit"</button>
                <button class="btn-danger" on:click=move |_| on_delete.run(delete_task.clone())>"Delete"</button>
            </div>
        </div>
    }
}
