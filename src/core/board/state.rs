//! Partition of tasks into the three status columns.

use std::collections::{HashMap, HashSet};

use crate::core::board::gesture::{DropSlot, TaskMove};
use crate::core::error::BoardError;
use crate::core::models::{Task, TaskStatus};

/// Ordered task identifiers sharing one status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    status: TaskStatus,
    task_ids: Vec<String>,
}

impl Column {
    fn new(status: TaskStatus) -> Self {
        Self {
            status,
            task_ids: Vec::new(),
        }
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn title(&self) -> &'static str {
        self.status.as_str()
    }

    pub fn task_ids(&self) -> &[String] {
        &self.task_ids
    }

    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    pub fn position(&self, task_id: &str) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }
}

/// What a move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEffect {
    /// Dropped back onto its own slot
    Unchanged,
    /// Reordered within one column
    Reordered { column: TaskStatus },
    /// Moved to another column; the task's status now matches it
    StatusChanged { from: TaskStatus, to: TaskStatus },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: [Column; 3],
    tasks: HashMap<String, Task>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            columns: TaskStatus::all().map(Column::new),
            tasks: HashMap::new(),
        }
    }

    /// Build a board from a full task list, preserving input order inside
    /// each column. A repeated identifier keeps its first occurrence.
    pub fn rebuild(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::empty();

        for task in tasks {
            if board.tasks.contains_key(&task.id) {
                tracing::warn!(task_id = %task.id, "duplicate task id in fetch, keeping first occurrence");
                continue;
            }
            board.columns[task.status.ordinal()]
                .task_ids
                .push(task.id.clone());
            board.tasks.insert(task.id.clone(), task);
        }

        tracing::debug!(
            to_do = board.column(TaskStatus::ToDo).len(),
            in_progress = board.column(TaskStatus::InProgress).len(),
            completed = board.column(TaskStatus::Completed).len(),
            "board rebuilt"
        );
        board
    }

    pub fn column(&self, status: TaskStatus) -> &Column {
        &self.columns[status.ordinal()]
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    /// Tasks of one column in display order.
    pub fn tasks_in(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.column(status)
            .task_ids
            .iter()
            .filter_map(|id| self.tasks.get(id))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Where a task currently sits.
    pub fn locate(&self, task_id: &str) -> Option<DropSlot> {
        self.columns.iter().find_map(|column| {
            column
                .position(task_id)
                .map(|index| DropSlot::new(column.status, index))
        })
    }

    /// Every task sits in exactly one column, the one matching its status.
    pub fn is_partitioned(&self) -> bool {
        let mut seen = HashSet::new();
        for column in &self.columns {
            for id in &column.task_ids {
                match self.tasks.get(id) {
                    Some(task) if task.status == column.status && seen.insert(id.as_str()) => {}
                    _ => return false,
                }
            }
        }
        seen.len() == self.tasks.len()
    }

    /// Apply a drop in place. The destination index is clamped to the
    /// destination column after the task has been removed from its source.
    ///
    /// Fails without touching the board when the task is not at the given
    /// source slot.
    pub fn move_task(&mut self, mv: &TaskMove) -> Result<MoveEffect, BoardError> {
        let TaskMove {
            task_id,
            source,
            destination,
        } = mv;

        let source_column = &self.columns[source.column.ordinal()];
        if source_column.task_ids.get(source.index) != Some(task_id) {
            return Err(BoardError::TaskNotAtSource {
                task_id: task_id.clone(),
                column: source.column,
                index: source.index,
            });
        }

        if source.column == destination.column {
            let column = &mut self.columns[source.column.ordinal()];
            let target = destination.index.min(column.len() - 1);
            if target == source.index {
                return Ok(MoveEffect::Unchanged);
            }
            let removed = column.task_ids.remove(source.index);
            column.task_ids.insert(target, removed);
            return Ok(MoveEffect::Reordered {
                column: source.column,
            });
        }

        let removed = self.columns[source.column.ordinal()]
            .task_ids
            .remove(source.index);
        let dest_column = &mut self.columns[destination.column.ordinal()];
        let target = destination.index.min(dest_column.len());
        dest_column.task_ids.insert(target, removed);

        if let Some(task) = self.tasks.get_mut(task_id) {
            task.update_status(destination.column);
        }

        debug_assert!(self.is_partitioned());
        Ok(MoveEffect::StatusChanged {
            from: source.column,
            to: destination.column,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Priority;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {id}"),
            description: None,
            status,
            priority: Priority::Medium,
            due_date: None,
            user_id: "owner".to_string(),
        }
    }

    fn ids(board: &Board, status: TaskStatus) -> Vec<&str> {
        board
            .column(status)
            .task_ids()
            .iter()
            .map(String::as_str)
            .collect()
    }

    fn mv(id: &str, from: (TaskStatus, usize), to: (TaskStatus, usize)) -> TaskMove {
        TaskMove {
            task_id: id.to_string(),
            source: DropSlot::new(from.0, from.1),
            destination: DropSlot::new(to.0, to.1),
        }
    }

    #[test]
    fn empty_input_yields_three_empty_columns() {
        let board = Board::rebuild(Vec::new());
        assert_eq!(board.columns().count(), 3);
        assert!(board.columns().all(Column::is_empty));
        assert!(board.is_partitioned());
    }

    #[test]
    fn rebuild_partitions_by_status_in_input_order() {
        let board = Board::rebuild(vec![
            task("a", TaskStatus::Completed),
            task("b", TaskStatus::ToDo),
            task("c", TaskStatus::Completed),
            task("d", TaskStatus::InProgress),
            task("e", TaskStatus::ToDo),
        ]);

        assert_eq!(ids(&board, TaskStatus::ToDo), ["b", "e"]);
        assert_eq!(ids(&board, TaskStatus::InProgress), ["d"]);
        assert_eq!(ids(&board, TaskStatus::Completed), ["a", "c"]);
        assert_eq!(board.len(), 5);
        assert!(board.is_partitioned());
    }

    #[test]
    fn rebuild_drops_repeated_ids() {
        let board = Board::rebuild(vec![
            task("a", TaskStatus::ToDo),
            task("a", TaskStatus::Completed),
        ]);
        assert_eq!(ids(&board, TaskStatus::ToDo), ["a"]);
        assert!(board.column(TaskStatus::Completed).is_empty());
        assert!(board.is_partitioned());
    }

    #[test]
    fn reorder_within_column_keeps_others_in_order() {
        let mut board = Board::rebuild(vec![
            task("t1", TaskStatus::ToDo),
            task("t2", TaskStatus::ToDo),
            task("t3", TaskStatus::ToDo),
        ]);

        let effect = board
            .move_task(&mv("t2", (TaskStatus::ToDo, 1), (TaskStatus::ToDo, 2)))
            .unwrap();

        assert_eq!(effect, MoveEffect::Reordered { column: TaskStatus::ToDo });
        assert_eq!(ids(&board, TaskStatus::ToDo), ["t1", "t3", "t2"]);
        assert_eq!(board.task("t2").unwrap().status, TaskStatus::ToDo);
    }

    #[test]
    fn dropping_on_own_slot_is_a_no_op() {
        let mut board = Board::rebuild(vec![task("a", TaskStatus::ToDo), task("b", TaskStatus::ToDo)]);
        let before = board.clone();

        let effect = board
            .move_task(&mv("b", (TaskStatus::ToDo, 1), (TaskStatus::ToDo, 1)))
            .unwrap();

        assert_eq!(effect, MoveEffect::Unchanged);
        assert_eq!(board, before);
    }

    #[test]
    fn same_column_index_past_end_clamps_to_last() {
        let mut board = Board::rebuild(vec![
            task("a", TaskStatus::ToDo),
            task("b", TaskStatus::ToDo),
            task("c", TaskStatus::ToDo),
        ]);

        board
            .move_task(&mv("a", (TaskStatus::ToDo, 0), (TaskStatus::ToDo, 99)))
            .unwrap();
        assert_eq!(ids(&board, TaskStatus::ToDo), ["b", "c", "a"]);

        let effect = board
            .move_task(&mv("a", (TaskStatus::ToDo, 2), (TaskStatus::ToDo, 40)))
            .unwrap();
        assert_eq!(effect, MoveEffect::Unchanged);
    }

    #[test]
    fn cross_column_move_updates_status() {
        let mut board = Board::rebuild(vec![
            task("x", TaskStatus::ToDo),
            task("y", TaskStatus::Completed),
        ]);

        let effect = board
            .move_task(&mv("x", (TaskStatus::ToDo, 0), (TaskStatus::Completed, 0)))
            .unwrap();

        assert_eq!(
            effect,
            MoveEffect::StatusChanged {
                from: TaskStatus::ToDo,
                to: TaskStatus::Completed
            }
        );
        assert_eq!(board.task("x").unwrap().status, TaskStatus::Completed);
        assert!(board.column(TaskStatus::ToDo).is_empty());
        assert_eq!(ids(&board, TaskStatus::Completed), ["x", "y"]);
        assert!(board.is_partitioned());
    }

    #[test]
    fn cross_column_index_is_clamped_to_destination_length() {
        let mut board = Board::rebuild(vec![
            task("a", TaskStatus::ToDo),
            task("b", TaskStatus::InProgress),
        ]);

        board
            .move_task(&mv("a", (TaskStatus::ToDo, 0), (TaskStatus::InProgress, 7)))
            .unwrap();

        assert_eq!(ids(&board, TaskStatus::InProgress), ["b", "a"]);
        assert_eq!(board.locate("a"), Some(DropSlot::new(TaskStatus::InProgress, 1)));
    }

    #[test]
    fn move_to_untouched_column_leaves_third_column_alone() {
        let mut board = Board::rebuild(vec![
            task("a", TaskStatus::ToDo),
            task("c1", TaskStatus::Completed),
            task("c2", TaskStatus::Completed),
        ]);

        board
            .move_task(&mv("a", (TaskStatus::ToDo, 0), (TaskStatus::InProgress, 0)))
            .unwrap();

        assert_eq!(ids(&board, TaskStatus::Completed), ["c1", "c2"]);
    }

    #[test]
    fn wrong_source_is_rejected_without_mutation() {
        let mut board = Board::rebuild(vec![task("a", TaskStatus::ToDo), task("b", TaskStatus::ToDo)]);
        let before = board.clone();

        let wrong_index = board.move_task(&mv("a", (TaskStatus::ToDo, 1), (TaskStatus::Completed, 0)));
        let wrong_column = board.move_task(&mv("a", (TaskStatus::InProgress, 0), (TaskStatus::Completed, 0)));
        let unknown = board.move_task(&mv("zz", (TaskStatus::ToDo, 5), (TaskStatus::ToDo, 0)));

        assert!(matches!(wrong_index, Err(BoardError::TaskNotAtSource { index: 1, .. })));
        assert!(matches!(
            wrong_column,
            Err(BoardError::TaskNotAtSource { column: TaskStatus::InProgress, .. })
        ));
        assert!(unknown.is_err());
        assert_eq!(board, before);
    }
}
