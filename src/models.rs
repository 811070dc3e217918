//! Frontend Models
//!
//! Data structures matching server entities, plus the small pure
//! vocabularies (sort keys, status filters, status labels) the panels
//! share.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Board data structure (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub name: String,
}

/// Task data structure (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Option<String>,
    pub completed: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub board_id: Option<u32>,
}

impl Task {
    /// One-line summary shown in the task list.
    pub fn summary(&self) -> String {
        let priority = self.priority.as_deref().unwrap_or("None");
        let due = self
            .due_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "No Due Date".to_string());
        format!("{} - Priority: {} - {}", self.title, priority, due)
    }
}

/// Sort key for the task list, forwarded to the server as `sort_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Server's creation order, no `sort_by` parameter sent
    #[default]
    Created,
    DueDate,
    Priority,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Created => "",
            SortKey::DueDate => "due_date",
            SortKey::Priority => "priority",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "due_date" => SortKey::DueDate,
            "priority" => SortKey::Priority,
            _ => SortKey::Created,
        }
    }
}

/// Status filter for the task list, forwarded to the server as `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No filter, list everything
    #[default]
    All,
    Pending,
    Done,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "",
            StatusFilter::Pending => "pending",
            StatusFilter::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "pending" => StatusFilter::Pending,
            "done" => StatusFilter::Done,
            _ => StatusFilter::All,
        }
    }
}

/// Status labels a task can be set to directly from the list
pub const TASK_STATUSES: &[&str] = &["in-progress", "done", "blocked"];

/// Human-readable status label derived from the completed flag.
///
/// The server keeps a free-form status string next to the boolean; the
/// client only ever writes one of these two values when toggling.
pub fn status_label(completed: bool) -> &'static str {
    if completed {
        "done"
    } else {
        "in-progress"
    }
}

/// Blank or whitespace-only input is a no-op, not an error.
pub fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            due_date: None,
            priority: None,
            completed,
            status: None,
            board_id: Some(1),
        }
    }

    #[test]
    fn test_task_decodes_server_payload() {
        let json = r#"[{"id":1,"title":"A","completed":false,"priority":"high","due_date":"2024-01-01"}]"#;
        let tasks: Vec<Task> = serde_json::from_str(json).unwrap();

        assert_eq!(tasks.len(), 1);
        let task = &tasks[0];
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "A");
        assert!(!task.completed);
        assert_eq!(task.priority.as_deref(), Some("high"));
        assert_eq!(task.due_date.unwrap().to_string(), "2024-01-01");
        assert_eq!(task.description, None);
        // List payloads are board-scoped and may omit board_id
        assert_eq!(task.board_id, None);
        assert_eq!(task.summary(), "A - Priority: high - 2024-01-01");
    }

    #[test]
    fn test_summary_fallbacks() {
        let task = make_task(2, "B", true);
        assert_eq!(task.summary(), "B - Priority: None - No Due Date");
    }

    #[test]
    fn test_status_label_mapping() {
        assert_eq!(status_label(true), "done");
        assert_eq!(status_label(false), "in-progress");
    }

    #[test]
    fn test_sort_key_round_trip() {
        assert_eq!(SortKey::from_str("due_date"), SortKey::DueDate);
        assert_eq!(SortKey::from_str("priority"), SortKey::Priority);
        assert_eq!(SortKey::from_str(""), SortKey::Created);
        assert_eq!(SortKey::from_str("garbage"), SortKey::Created);
        assert_eq!(SortKey::Priority.as_str(), "priority");
        assert_eq!(SortKey::Created.as_str(), "");
        assert_eq!(SortKey::default(), SortKey::Created);
    }

    #[test]
    fn test_status_filter_round_trip() {
        assert_eq!(StatusFilter::from_str("pending"), StatusFilter::Pending);
        assert_eq!(StatusFilter::from_str("done"), StatusFilter::Done);
        assert_eq!(StatusFilter::from_str(""), StatusFilter::All);
        assert_eq!(StatusFilter::All.as_str(), "");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank("\t\n"), None);
        assert_eq!(non_blank("Groceries"), Some("Groceries"));
        // Input is forwarded untrimmed
        assert_eq!(non_blank("  padded  "), Some("  padded  "));
    }
}
