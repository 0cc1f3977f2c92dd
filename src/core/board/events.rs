use crate::core::board::state::MoveEffect;
use crate::core::error::{ApiError, BoardError, SyncError};
use crate::core::models::TaskStatus;

/// Everything the synchronizer reports to its subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    /// The board was replaced from a full task list
    Rebuilt { task_count: usize },
    /// A local move was applied
    Moved { task_id: String, effect: MoveEffect },
    /// A status change was sent to the store
    SyncStarted { task_id: String, status: TaskStatus },
    /// The store accepted a status change
    SyncConfirmed { task_id: String, status: TaskStatus },
    /// The store did not confirm a status change. Local state is kept.
    SyncFailed(SyncError),
    /// A gesture referenced a task that was not at its source slot
    MoveRejected(BoardError),
    /// A fetched record could not be placed on the board
    TaskDropped { task_id: Option<String>, reason: String },
    FetchFailed(ApiError),
}

impl BoardEvent {
    /// Whether subscribers should re-read the board.
    pub fn changes_board(&self) -> bool {
        matches!(self, BoardEvent::Rebuilt { .. } | BoardEvent::Moved { .. })
    }

    /// A user-facing message for failure events.
    /// Whether the number of outstanding status syncs may have changed.
    pub fn changes_pending(&self) -> bool {
        matches!(
            self,
            BoardEvent::SyncStarted { .. } | BoardEvent::SyncConfirmed { .. } | BoardEvent::SyncFailed(_)
        )
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            BoardEvent::SyncFailed(err) => Some(err.to_string()),
            BoardEvent::MoveRejected(err) => Some(err.to_string()),
            BoardEvent::FetchFailed(err) => Some(format!("Failed to load tasks: {err}")),
            _ => None,
        }
    }
}
