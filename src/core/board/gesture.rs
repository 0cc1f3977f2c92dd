use crate::core::models::TaskStatus;
use serde::{Deserialize, Serialize};

/// A column plus a position inside it, as reported by a drag-and-drop gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropSlot {
    pub column: TaskStatus,
    pub index: usize,
}

impl DropSlot {
    pub fn new(column: TaskStatus, index: usize) -> Self {
        Self { column, index }
    }
}

/// The end of a drag gesture. `destination` is `None` when the drag was
/// cancelled or released outside every column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    pub task_id: String,
    pub source: DropSlot,
    pub destination: Option<DropSlot>,
}

impl DragResult {
    pub fn new(task_id: impl Into<String>, source: DropSlot, destination: Option<DropSlot>) -> Self {
        Self {
            task_id: task_id.into(),
            source,
            destination,
        }
    }

    pub fn cancelled(task_id: impl Into<String>, source: DropSlot) -> Self {
        Self::new(task_id, source, None)
    }

    /// The move this gesture asks for, if it landed anywhere.
    pub fn resolve(&self) -> Option<TaskMove> {
        self.destination.map(|destination| TaskMove {
            task_id: self.task_id.clone(),
            source: self.source,
            destination,
        })
    }
}

/// A drop that landed on a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMove {
    pub task_id: String,
    pub source: DropSlot,
    pub destination: DropSlot,
}

impl TaskMove {
    pub fn is_cross_column(&self) -> bool {
        self.source.column != self.destination.column
    }
}
