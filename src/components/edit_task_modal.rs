use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::components::TaskFormFields;
use crate::core::models::{Task, TaskDraft};

/// Opens whenever `editing` holds a task and clears it again on close.
#[component]
pub fn EditTaskModal(
    editing: RwSignal<Option<Task>>,
    on_edit: Callback<(String, TaskDraft)>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let draft = RwSignal::new(TaskDraft::new(""));

    Effect::new(move |_| {
        if let Some(task) = editing.get() {
            draft.set(TaskDraft::from_task(&task));
            if let Some(dialog) = dialog_ref.get() {
                let _ = dialog.show_modal();
            }
        }
    });

    let close = move || {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
        editing.set(None);
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = draft.get_untracked();
        if !submitted.is_submittable() {
            return;
        }
        if let Some(task_id) = editing.with_untracked(|t| t.as_ref().map(|t| t.id.clone())) {
            on_edit.run((task_id, submitted));
        }
        close();
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal" on:close=move |_| editing.set(None)>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"EDIT TASK"</h3>
                    <button type="button" class="modal-close" on:click=move |_| close()>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <TaskFormFields draft=draft />
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| close()>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"SAVE CHANGES"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
