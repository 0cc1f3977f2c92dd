//! Keeps the board's columns in step with the remote task store.
//!
//! All mutation happens on one thread. Remote calls never hold a borrow of
//! the board, so a move made while a sync is outstanding applies at once.
//! Two syncs for the same task are not ordered against each other: whichever
//! reaches the store last decides the stored status.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::board::events::BoardEvent;
use crate::core::board::gesture::{DragResult, TaskMove};
use crate::core::board::state::{Board, MoveEffect};
use crate::core::config::UpdatePolicy;
use crate::core::error::{ApiError, BoardError, SyncError};
use crate::core::models::{Task, TaskStatus};
use crate::core::services::TaskStore;

pub type SubscriptionId = usize;

type Listener = Rc<dyn Fn(&BoardEvent)>;

/// A status change that still has to reach the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub task_id: String,
    pub status: TaskStatus,
}

/// What `move_task` did with a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No destination; nothing happened
    Cancelled,
    /// Dropped back where it started
    Unchanged,
    /// Reordered inside one column, no remote call needed
    Reordered,
    /// Applied locally; the status change must still be synced
    Applied(StatusChange),
    /// Held back until the store confirms the status change
    AwaitingConfirmation(TaskMove),
}

impl MoveOutcome {
    pub fn pending_sync(&self) -> Option<StatusChange> {
        match self {
            MoveOutcome::Applied(change) => Some(change.clone()),
            MoveOutcome::AwaitingConfirmation(mv) => Some(StatusChange {
                task_id: mv.task_id.clone(),
                status: mv.destination.column,
            }),
            _ => None,
        }
    }
}

pub struct BoardSynchronizer {
    store: Rc<dyn TaskStore>,
    policy: UpdatePolicy,
    board: RefCell<Board>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<SubscriptionId>,
    in_flight: RefCell<HashMap<String, usize>>,
}

impl BoardSynchronizer {
    pub fn new(store: Rc<dyn TaskStore>, policy: UpdatePolicy) -> Self {
        Self {
            store,
            policy,
            board: RefCell::new(Board::empty()),
            listeners: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            in_flight: RefCell::new(HashMap::new()),
        }
    }

    pub fn policy(&self) -> UpdatePolicy {
        self.policy
    }

    /// Snapshot of the current board.
    pub fn board(&self) -> Board {
        self.board.borrow().clone()
    }

    pub fn with_board<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        f(&self.board.borrow())
    }

    pub fn subscribe(&self, listener: impl Fn(&BoardEvent) + 'static) -> SubscriptionId {
        let id = self.next_subscription.get();
        self.next_subscription.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(sub, _)| *sub != id);
    }

    fn emit(&self, event: BoardEvent) {
        // Listeners may call back into the synchronizer
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(&event);
        }
    }

    /// Replace the board from a full task list.
    pub fn rebuild(&self, tasks: Vec<Task>) -> Board {
        let board = Board::rebuild(tasks);
        let task_count = board.len();
        *self.board.borrow_mut() = board.clone();
        self.emit(BoardEvent::Rebuilt { task_count });
        board
    }

    /// Fetch every task from the store and rebuild. On failure the current
    /// board is left as it is.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let fetched = match self.store.fetch_all().await {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::error!("Failed to fetch tasks: {}", e);
                self.emit(BoardEvent::FetchFailed(e.clone()));
                return Err(e);
            }
        };

        for rejected in fetched.rejected {
            tracing::warn!(
                task_id = rejected.task_id.as_deref().unwrap_or("<none>"),
                "dropping task record: {}",
                rejected.reason
            );
            self.emit(BoardEvent::TaskDropped {
                task_id: rejected.task_id,
                reason: rejected.reason,
            });
        }

        self.rebuild(fetched.tasks);
        Ok(())
    }

    fn check_source(&self, mv: &TaskMove) -> Result<(), BoardError> {
        let board = self.board.borrow();
        let at_source = board.column(mv.source.column).task_ids().get(mv.source.index);
        if at_source == Some(&mv.task_id) {
            Ok(())
        } else {
            Err(BoardError::TaskNotAtSource {
                task_id: mv.task_id.clone(),
                column: mv.source.column,
                index: mv.source.index,
            })
        }
    }

    fn apply(&self, mv: &TaskMove) -> Result<MoveEffect, BoardError> {
        let result = self.board.borrow_mut().move_task(mv);
        match &result {
            Ok(MoveEffect::Unchanged) => {}
            Ok(effect) => {
                tracing::debug!(task_id = %mv.task_id, ?effect, "task moved");
                self.emit(BoardEvent::Moved {
                    task_id: mv.task_id.clone(),
                    effect: *effect,
                });
            }
            Err(e) => self.reject(e.clone()),
        }
        result
    }

    fn reject(&self, err: BoardError) {
        tracing::error!("Rejected move: {}", err);
        self.emit(BoardEvent::MoveRejected(err));
    }

    /// Apply a drag gesture to the local board. Never waits on the store:
    /// any remote work left to do is described by the returned outcome.
    pub fn move_task(&self, gesture: &DragResult) -> Result<MoveOutcome, BoardError> {
        let Some(mv) = gesture.resolve() else {
            tracing::debug!(task_id = %gesture.task_id, "drag cancelled");
            return Ok(MoveOutcome::Cancelled);
        };

        if self.policy == UpdatePolicy::ConfirmThenApply && mv.is_cross_column() {
            if let Err(e) = self.check_source(&mv) {
                self.reject(e.clone());
                return Err(e);
            }
            return Ok(MoveOutcome::AwaitingConfirmation(mv));
        }

        Ok(match self.apply(&mv)? {
            MoveEffect::Unchanged => MoveOutcome::Unchanged,
            MoveEffect::Reordered { .. } => MoveOutcome::Reordered,
            MoveEffect::StatusChanged { to, .. } => MoveOutcome::Applied(StatusChange {
                task_id: mv.task_id.clone(),
                status: to,
            }),
        })
    }

    /// Send one status update to the store. No retry.
    pub async fn sync_status(&self, task_id: &str, status: TaskStatus) -> Result<(), SyncError> {
        {
            let mut in_flight = self.in_flight.borrow_mut();
            let count = in_flight.entry(task_id.to_string()).or_insert(0);
            if *count > 0 {
                tracing::warn!(
                    task_id,
                    outstanding = *count,
                    "status sync issued while another for the same task is in flight; last response to land wins"
                );
            }
            *count += 1;
        }
        self.emit(BoardEvent::SyncStarted {
            task_id: task_id.to_string(),
            status,
        });

        let result = self.store.update_status(task_id, status).await;

        {
            let mut in_flight = self.in_flight.borrow_mut();
            if let Some(count) = in_flight.get_mut(task_id) {
                *count -= 1;
                if *count == 0 {
                    in_flight.remove(task_id);
                }
            }
        }

        match result {
            Ok(()) => {
                tracing::info!(task_id, %status, "status synced");
                self.emit(BoardEvent::SyncConfirmed {
                    task_id: task_id.to_string(),
                    status,
                });
                Ok(())
            }
            Err(source) => {
                let err = SyncError::NotConfirmed {
                    task_id: task_id.to_string(),
                    status,
                    source,
                };
                tracing::error!("{}", err);
                self.emit(BoardEvent::SyncFailed(err.clone()));
                Err(err)
            }
        }
    }

    /// Sync a held-back move and apply it once the store confirms. The task
    /// is looked up again because the board may have been rebuilt meanwhile.
    pub async fn confirm_move(&self, mv: TaskMove) -> Result<(), SyncError> {
        self.sync_status(&mv.task_id, mv.destination.column).await?;

        let current = self.board.borrow().locate(&mv.task_id);
        match current {
            Some(source) => {
                let _ = self.apply(&TaskMove { source, ..mv });
            }
            None => {
                tracing::warn!(task_id = %mv.task_id, "confirmed task is no longer on the board");
            }
        }
        Ok(())
    }

    /// Number of status syncs still waiting on the store.
    pub fn pending_syncs(&self) -> usize {
        self.in_flight.borrow().values().sum()
    }

    /// Apply a gesture and carry out whatever remote work it needs.
    /// Sync failures are reported through `BoardEvent::SyncFailed`.
    pub async fn drop_task(&self, gesture: &DragResult) -> Result<MoveOutcome, BoardError> {
        let outcome = self.move_task(gesture)?;
        match &outcome {
            MoveOutcome::Applied(change) => {
                let _ = self.sync_status(&change.task_id, change.status).await;
            }
            MoveOutcome::AwaitingConfirmation(mv) => {
                let _ = self.confirm_move(mv.clone()).await;
            }
            _ => {}
        }
        Ok(outcome)
    }
}
