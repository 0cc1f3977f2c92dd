use leptos::prelude::*;

use crate::core::models::{Priority, TaskDraft, TaskStatus};

// Form fields shared by the create and edit modals
#[component]
pub fn TaskFormFields(draft: RwSignal<TaskDraft>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>"TITLE"</label>
            <input
                type="text"
                placeholder="Task title..."
                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                prop:value=move || draft.with(|d| d.title.clone())
                required
            />
        </div>
        <div class="form-group">
            <label>"DESCRIPTION"</label>
            <textarea
                placeholder="Task description..."
                rows="4"
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                prop:value=move || draft.with(|d| d.description.clone())
            ></textarea>
        </div>
        <div class="form-row">
            <div class="form-group">
                <label>"STATUS"</label>
                <select
                    prop:value=move || draft.with(|d| d.status.as_str())
                    on:change=move |ev| {
                        if let Ok(status) = event_target_value(&ev).parse::<TaskStatus>() {
                            draft.update(|d| d.status = status);
                        }
                    }
                >
                    {TaskStatus::all()
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label>"PRIORITY"</label>
                <select
                    prop:value=move || draft.with(|d| d.priority.as_str())
                    on:change=move |ev| {
                        if let Ok(priority) = event_target_value(&ev).parse::<Priority>() {
                            draft.update(|d| d.priority = priority);
                        }
                    }
                >
                    {Priority::all()
                        .into_iter()
                        .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label>"DUE DATE"</label>
                <input
                    type="date"
                    on:input=move |ev| draft.update(|d| d.set_due_date_input(&event_target_value(&ev)))
                    prop:value=move || draft.with(|d| d.due_date_input())
                />
            </div>
        </div>
    }
}
