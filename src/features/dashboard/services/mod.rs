pub mod filter_sort;
pub mod task_operations;

pub use filter_sort::{filter_and_sort, SortKey, StatusFilter};
pub use task_operations::{create_task, delete_task, load_tasks, update_task, TaskListState};
