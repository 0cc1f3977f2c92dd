use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::core::board::{DragResult, DropSlot};
use crate::core::models::Task;
use crate::features::kanban::hooks::DragSource;

// A draggable card; dropping another card onto it inserts at its slot
#[component]
pub fn TaskCard(
    task: Task,
    position: DropSlot,
    dragging: RwSignal<Option<DragSource>>,
    on_drop: Callback<DragResult>,
) -> impl IntoView {
    let task_id = task.id.clone();

    // Dim the card while it is the one being dragged
    let is_dragged = {
        let task_id = task_id.clone();
        move || dragging.with(|d| d.as_ref().is_some_and(|d| d.task_id == task_id))
    };

    // Remember where the card was picked up; the drop handlers complete the gesture
    let handle_drag_start = move |ev: DragEvent| {
        // Some browsers only start a drag when data is attached
        if let Some(transfer) = ev.data_transfer() {
            let _ = transfer.set_data("text/plain", &task_id);
            transfer.set_effect_allowed("move");
        }
        dragging.set(Some(DragSource {
            task_id: task_id.clone(),
            slot: position,
        }));
    };

    // Dropped onto this card: the dragged task takes this card's position
    let handle_drop = move |ev: DragEvent| {
        ev.prevent_default();
        // Keep the column's own drop handler from appending it as well
        ev.stop_propagation();
        if let Some(source) = dragging.get_untracked() {
            on_drop.run(source.finish(Some(position)));
        }
    };

    // Still dragging after dragend means the card was released outside any column
    let handle_drag_end = move |_: DragEvent| {
        if let Some(source) = dragging.get_untracked() {
            on_drop.run(source.finish(None));
        }
    };

    // Badge colour follows the priority literal
    let priority_class = format!("priority-badge priority-{}", task.priority.as_str().to_lowercase());

    view! {
        <div
            class="task-card"
            class:dragging=is_dragged
            draggable="true"
            on:dragstart=handle_drag_start
            // Accepting dragover is what makes the card a drop target
            on:dragover=move |ev: DragEvent| ev.prevent_default()
            on:drop=handle_drop
            on:dragend=handle_drag_end
        >
            <div class="task-card-header">
                <h4 class="task-title">{task.title.clone()}</h4>
                <span class=priority_class>{task.priority.as_str()}</span>
            </div>
            <p class="task-description">{task.description_or_placeholder().to_string()}</p>
            <span class="task-due">{task.due_label()}</span>
        </div>
    }
}
