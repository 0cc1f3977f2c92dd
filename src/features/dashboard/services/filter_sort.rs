use std::cmp::Ordering;

use crate::core::models::{Task, TaskStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => task.status == *status,
        }
    }

    /// Parse a select value: `"all"` or a status literal.
    pub fn from_value(value: &str) -> Self {
        value
            .parse::<TaskStatus>()
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Latest due date first, undated tasks last
    DueDate,
    /// High before Medium before Low
    Priority,
    /// Board order: To Do, In Progress, Completed
    Status,
}

impl SortKey {
    pub fn all() -> [SortKey; 3] {
        [SortKey::DueDate, SortKey::Priority, SortKey::Status]
    }

    pub fn value(&self) -> &'static str {
        match self {
            SortKey::DueDate => "dueDate",
            SortKey::Priority => "priority",
            SortKey::Status => "status",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::DueDate => "Due Date",
            SortKey::Priority => "Priority",
            SortKey::Status => "Status",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        SortKey::all().into_iter().find(|key| key.value() == value)
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortKey::DueDate => match (a.due_date, b.due_date) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortKey::Priority => b.priority.rank().cmp(&a.priority.rank()),
            SortKey::Status => a.status.ordinal().cmp(&b.status.ordinal()),
        }
    }
}

/// The dashboard's visible task list. Sorting is stable, so ties keep
/// fetch order.
pub fn filter_and_sort(tasks: &[Task], filter: StatusFilter, sort: Option<SortKey>) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks.iter().filter(|t| filter.matches(t)).cloned().collect();
    if let Some(key) = sort {
        visible.sort_by(|a, b| key.compare(a, b));
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Priority;
    use chrono::{TimeZone, Utc};

    fn task(id: &str, status: TaskStatus, priority: Priority, due_day: Option<u32>) -> Task {
        Task {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            status,
            priority,
            due_date: due_day.map(|d| Utc.with_ymd_and_hms(2024, 5, d, 0, 0, 0).unwrap()),
            user_id: String::new(),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn sample() -> Vec<Task> {
        vec![
            task("a", TaskStatus::Completed, Priority::Low, Some(3)),
            task("b", TaskStatus::ToDo, Priority::High, None),
            task("c", TaskStatus::InProgress, Priority::Medium, Some(10)),
            task("d", TaskStatus::ToDo, Priority::Medium, Some(1)),
        ]
    }

    #[test]
    fn no_filter_no_sort_keeps_fetch_order() {
        assert_eq!(ids(&filter_and_sort(&sample(), StatusFilter::All, None)), ["a", "b", "c", "d"]);
    }

    #[test]
    fn filter_by_status() {
        let visible = filter_and_sort(&sample(), StatusFilter::Only(TaskStatus::ToDo), None);
        assert_eq!(ids(&visible), ["b", "d"]);
    }

    #[test]
    fn due_date_sort_is_latest_first_with_undated_last() {
        let visible = filter_and_sort(&sample(), StatusFilter::All, Some(SortKey::DueDate));
        assert_eq!(ids(&visible), ["c", "a", "d", "b"]);
    }

    #[test]
    fn priority_sort_is_high_first_and_stable() {
        let visible = filter_and_sort(&sample(), StatusFilter::All, Some(SortKey::Priority));
        assert_eq!(ids(&visible), ["b", "c", "d", "a"]);
    }

    #[test]
    fn status_sort_follows_board_order() {
        let visible = filter_and_sort(&sample(), StatusFilter::All, Some(SortKey::Status));
        assert_eq!(ids(&visible), ["b", "d", "c", "a"]);
    }

    #[test]
    fn select_values_parse() {
        assert_eq!(StatusFilter::from_value("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_value("In Progress"),
            StatusFilter::Only(TaskStatus::InProgress)
        );
        assert_eq!(SortKey::from_value("priority"), Some(SortKey::Priority));
        assert_eq!(SortKey::from_value(""), None);
    }
}
