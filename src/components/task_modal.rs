use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::components::TaskFormFields;
use crate::core::models::TaskDraft;

#[component]
pub fn TaskModal(on_create: Callback<TaskDraft>, dialog_ref: NodeRef<Dialog>) -> impl IntoView {
    // Form state lives in one draft; new tasks start in To Do with Medium priority
    let draft = RwSignal::new(TaskDraft::new(""));

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();

        // Read the draft without creating a reactive dependency
        let submitted = draft.get_untracked();
        if !submitted.is_submittable() {
            return;
        }

        // Hand the draft to the parent; it talks to the task store
        on_create.run(submitted);

        // Reset the form for the next task
        draft.set(TaskDraft::new(""));

        // Close the HTML dialog element
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    // Closing without submitting keeps the draft for the next open
    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"CREATE TASK"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <TaskFormFields draft=draft />
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"CREATE"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
