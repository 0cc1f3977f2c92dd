use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::core::board::{Board, DragResult, DropSlot};
use crate::core::models::{Task, TaskStatus};
use crate::features::kanban::components::TaskCard;
use crate::features::kanban::hooks::DragSource;

#[component]
pub fn KanbanColumn(
    status: TaskStatus,
    board: RwSignal<Board>,
    dragging: RwSignal<Option<DragSource>>,
    on_drop: Callback<DragResult>,
) -> impl IntoView {
    // Cards in column order, re-read whenever the board signal changes
    let tasks = move || board.with(|b| b.tasks_in(status).cloned().collect::<Vec<Task>>());
    let count = move || board.with(|b| b.column(status).len());

    // Dropping on empty column space appends to the end
    let handle_drop = move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(source) = dragging.get_untracked() {
            let end = board.with_untracked(|b| b.column(status).len());
            on_drop.run(source.finish(Some(DropSlot::new(status, end))));
        }
    };

    view! {
        <div class="kanban-column" data-status=status.as_str()>
            <div class="column-header">
                <h3>{status.as_str()}</h3>
                <span class="task-count">{count}</span>
            </div>
            <div
                class="column-content"
                on:dragover=move |ev: DragEvent| ev.prevent_default()
                on:drop=handle_drop
            >
                // Each card knows its own slot so a drop on it can target that index
                {move || {
                    tasks()
                        .into_iter()
                        .enumerate()
                        .map(|(index, task)| {
                            view! {
                                <TaskCard
                                    task=task
                                    position=DropSlot::new(status, index)
                                    dragging=dragging
                                    on_drop=on_drop
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
