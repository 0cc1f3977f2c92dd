use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::board::{Board, BoardEvent, BoardSynchronizer, DragResult, DropSlot};
use crate::core::config::UpdatePolicy;
use crate::core::error::{ApiError, SyncError};
use crate::core::services::TaskStore;

const BANNER_TIMEOUT_MS: u32 = 5_000;

/// The card currently being dragged and the slot it was picked up from.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSource {
    pub task_id: String,
    pub slot: DropSlot,
}

impl DragSource {
    /// Complete the gesture at `destination`, or cancel it with `None`.
    pub fn finish(&self, destination: Option<DropSlot>) -> DragResult {
        DragResult::new(self.task_id.clone(), self.slot, destination)
    }
}

#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: RwSignal<Board>,
    pub banner: RwSignal<Option<String>>,
    pub pending: RwSignal<usize>,
    pub dragging: RwSignal<Option<DragSource>>,
    pub on_drop: Callback<DragResult>,
    pub refresh: Callback<()>,
    pub dismiss_banner: Callback<()>,
    pub policy: UpdatePolicy,
}

fn is_unauthorized(event: &BoardEvent) -> bool {
    matches!(
        event,
        BoardEvent::FetchFailed(ApiError::Unauthorized)
            | BoardEvent::SyncFailed(SyncError::NotConfirmed {
                source: ApiError::Unauthorized,
                ..
            })
    )
}

pub fn use_board(
    store: Rc<dyn TaskStore>,
    policy: UpdatePolicy,
    on_unauthorized: Callback<()>,
) -> BoardHook {
    let board = RwSignal::new(Board::empty());
    let banner = RwSignal::new(None::<String>);
    let banner_generation = RwSignal::new(0u64);
    let pending = RwSignal::new(0usize);
    let dragging = RwSignal::new(None::<DragSource>);

    let show_banner = move |message: String| {
        let generation = banner_generation.get_untracked() + 1;
        banner_generation.set(generation);
        banner.set(Some(message));
        spawn_local(async move {
            TimeoutFuture::new(BANNER_TIMEOUT_MS).await;
            // Only clear the banner this timer was started for
            if banner_generation.try_get_untracked() == Some(generation) {
                banner.set(None);
            }
        });
    };

    let synchronizer = Rc::new(BoardSynchronizer::new(store, policy));

    // The listener lives inside the synchronizer, so it only holds a weak handle
    let subscription = {
        let weak = Rc::downgrade(&synchronizer);
        synchronizer.subscribe(move |event| {
            if let Some(sync) = weak.upgrade() {
                // Mirror the synchronizer's state into the signals the view reads
                if event.changes_board() {
                    board.set(sync.board());
                }
                if event.changes_pending() {
                    pending.set(sync.pending_syncs());
                }
            }
            if is_unauthorized(event) {
                on_unauthorized.run(());
                return;
            }
            if let Some(message) = event.error_message() {
                show_banner(message);
            }
        })
    };

    let synchronizer = StoredValue::new_local(synchronizer);

    on_cleanup(move || {
        if let Some(sync) = synchronizer.try_get_value() {
            sync.unsubscribe(subscription);
        }
    });

    let refresh = Callback::new(move |_: ()| {
        let Some(sync) = synchronizer.try_get_value() else {
            return;
        };
        spawn_local(async move {
            // Failures are reported through FetchFailed
            let _ = sync.refresh().await;
        });
    });

    // Apply the gesture and carry out whatever store call it needs
    let on_drop = Callback::new(move |gesture: DragResult| {
        // The drag is over whichever way it ended
        dragging.set(None);
        let Some(sync) = synchronizer.try_get_value() else {
            return;
        };
        spawn_local(async move {
            // Rejections and sync failures are reported through events
            if let Ok(outcome) = sync.drop_task(&gesture).await {
                tracing::debug!(task_id = %gesture.task_id, ?outcome, "drop handled");
            }
        });
    });

    let dismiss_banner = Callback::new(move |_: ()| banner.set(None));

    refresh.run(());

    BoardHook {
        board,
        banner,
        pending,
        dragging,
        on_drop,
        refresh,
        dismiss_banner,
        policy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::TaskStatus;

    fn picked_up() -> DragSource {
        DragSource {
            task_id: "t1".to_string(),
            slot: DropSlot::new(TaskStatus::ToDo, 2),
        }
    }

    #[test]
    fn finishing_on_a_card_position_moves_the_task_there() {
        let gesture = picked_up().finish(Some(DropSlot::new(TaskStatus::Completed, 0)));
        let mv = gesture.resolve().expect("a move");
        assert_eq!(mv.task_id, "t1");
        assert_eq!(mv.source, DropSlot::new(TaskStatus::ToDo, 2));
        assert_eq!(mv.destination, DropSlot::new(TaskStatus::Completed, 0));
    }

    #[test]
    fn finishing_outside_any_column_cancels() {
        assert_eq!(picked_up().finish(None).resolve(), None);
    }

    #[test]
    fn only_auth_failures_sign_out() {
        assert!(is_unauthorized(&BoardEvent::FetchFailed(ApiError::Unauthorized)));
        assert!(!is_unauthorized(&BoardEvent::FetchFailed(ApiError::Network(
            "offline".to_string()
        ))));
    }
}
