use leptos::html::Dialog;
use leptos::prelude::*;

use crate::core::models::Task;

// Asks before deleting the task held in `target`
#[component]
pub fn ConfirmDeleteDialog(
    target: RwSignal<Option<Task>>,
    on_confirm: Callback<String>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    Effect::new(move |_| {
        if target.with(Option::is_some) {
            if let Some(dialog) = dialog_ref.get() {
                let _ = dialog.show_modal();
            }
        }
    });

    let close = move || {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
        target.set(None);
    };

    let confirm = move |_| {
        if let Some(task_id) = target.with_untracked(|t| t.as_ref().map(|t| t.id.clone())) {
            on_confirm.run(task_id);
        }
        close();
    };

    view! {
        <dialog node_ref=dialog_ref class="modal confirm-modal" on:close=move |_| target.set(None)>
            <div class="modal-content">
                <h3>"Confirm Deletion"</h3>
                <p>
                    {move || target.with(|t| {
                        t.as_ref()
                            .map(|t| format!("Are you sure you want to delete \"{}\"?", t.title))
                            .unwrap_or_default()
                    })}
                </p>
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| close()>"Cancel"</button>
                    <button type="button" class="btn-danger" on:click=confirm>"Delete"</button>
                </div>
            </div>
        </dialog>
    }
}
