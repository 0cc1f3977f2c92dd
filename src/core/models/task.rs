use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn all() -> [TaskStatus; 3] {
        [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Completed]
    }

    /// Position of the status in board order, used as the column slot.
    pub fn ordinal(&self) -> usize {
        match self {
            TaskStatus::ToDo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::all()
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown task status: {s:?}"))
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn all() -> [Priority; 3] {
        [Priority::Low, Priority::Medium, Priority::High]
    }

    /// Sort weight, higher is more urgent.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::all()
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| format!("unknown priority: {s:?}"))
    }
}

/// A task record as stored by the remote task store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Priority,
    #[serde(
        default,
        deserialize_with = "lenient_due_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user_id: String,
}

// Priority and due date drift must not hide a task, so bad values fall back
fn lenient_priority<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Priority, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw {
        Some(literal) => literal.parse().unwrap_or_else(|e| {
            tracing::warn!("{}, using default", e);
            Priority::default()
        }),
        None => Priority::default(),
    })
}

fn lenient_due_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_due_date))
}

/// RFC 3339 timestamps or bare `YYYY-MM-DD` dates; anything else is no date.
fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|due| due.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        });
    if parsed.is_none() {
        tracing::warn!(due_date = raw, "unreadable due date, treating as none");
    }
    parsed
}

impl Task {
    pub fn update_status(&mut self, new_status: TaskStatus) {
        self.status = new_status;
    }

    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => "No description available.",
        }
    }

    pub fn due_label(&self) -> String {
        self.due_date
            .map(|due| due.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| "No due date".to_string())
    }
}

/// Body of a create or full update request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: TaskStatus::ToDo,
            priority: Priority::Medium,
            due_date: None,
        }
    }

    /// Prefill a draft from an existing task for editing.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date,
        }
    }

    /// Parse the `YYYY-MM-DD` value of a date input; empty clears the date.
    pub fn set_due_date_input(&mut self, value: &str) {
        self.due_date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc());
    }

    pub fn due_date_input(&self) -> String {
        self.due_date
            .map(|due| due.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_remote_record() {
        let task: Task = serde_json::from_value(json!({
            "_id": "66f1",
            "title": "Write report",
            "description": "quarterly",
            "status": "In Progress",
            "priority": "High",
            "dueDate": "2024-10-01T00:00:00.000Z",
            "userId": "u1"
        }))
        .unwrap();

        assert_eq!(task.id, "66f1");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_label(), "Oct 1, 2024");
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let task: Task = serde_json::from_value(json!({
            "_id": "1",
            "title": "t",
            "status": "To Do"
        }))
        .unwrap();

        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.description, None);
        assert_eq!(task.due_label(), "No due date");
        assert_eq!(task.description_or_placeholder(), "No description available.");
    }

    #[test]
    fn unknown_status_literal_is_rejected() {
        let result = serde_json::from_value::<Task>(json!({
            "_id": "1",
            "title": "t",
            "status": "Blocked"
        }));
        assert!(result.is_err());
        assert!("Blocked".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn priority_and_date_drift_keep_the_task() {
        let task: Task = serde_json::from_value(json!({
            "_id": "1",
            "title": "t",
            "status": "Completed",
            "priority": "Urgent",
            "dueDate": "next tuesday"
        }))
        .unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, None);

        let task: Task = serde_json::from_value(json!({
            "_id": "2",
            "title": "t",
            "status": "To Do",
            "priority": null,
            "dueDate": "2024-03-05"
        }))
        .unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_label(), "Mar 5, 2024");
    }

    #[test]
    fn status_literals_round_trip_through_display() {
        for status in TaskStatus::all() {
            assert_eq!(status.to_string().parse::<TaskStatus>(), Ok(status));
        }
    }

    #[test]
    fn draft_serializes_camel_case_and_skips_empty_due_date() {
        let mut draft = TaskDraft::new("Ship");
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({"title": "Ship", "description": "", "status": "To Do", "priority": "Medium"})
        );

        draft.set_due_date_input("2025-02-14");
        assert_eq!(draft.due_date_input(), "2025-02-14");
        assert_eq!(
            serde_json::to_value(&draft).unwrap()["dueDate"],
            json!("2025-02-14T00:00:00Z")
        );

        draft.set_due_date_input("");
        assert_eq!(draft.due_date, None);
    }

    #[test]
    fn blank_title_is_not_submittable() {
        assert!(!TaskDraft::new("   ").is_submittable());
        assert!(TaskDraft::new("a").is_submittable());
    }
}
