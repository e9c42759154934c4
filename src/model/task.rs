//! Core task types and the pure column/count derivations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow status of a task. Determines column membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Progress,
    Done,
}

impl TaskStatus {
    /// Fixed display order of the board's columns.
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::Progress, Self::Done];

    /// Wire/identifier form (also the drop-container id in the UI shell).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Progress => "progress",
            Self::Done => "done",
        }
    }

    /// Human column title.
    pub fn column_title(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::Progress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "progress" => Ok(Self::Progress),
            "done" => Ok(Self::Done),
            other => Err(format!("Unknown task status: {}", other)),
        }
    }
}

/// Display/sort hint only; has no workflow effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// One unit of work on the board.
///
/// `id`, `created_at`, and `updated_at` are assigned by the remote store on
/// creation; `id` and `created_at` are immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Case-insensitive substring match against title or description.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(needle_lower))
    }
}

/// Creation payload supplied by the add-task form. The store assigns
/// identity and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Trim the free-text fields and enforce the non-empty-title rule.
    ///
    /// Returns `None` when the title is empty after trimming; callers must
    /// treat that as a silent no-op and never reach the store. Empty
    /// description/assignee collapse to unset rather than empty string.
    pub fn normalized(mut self) -> Option<TaskDraft> {
        self.title = self.title.trim().to_string();
        if self.title.is_empty() {
            return None;
        }
        self.description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        self.assignee = self
            .assignee
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());
        Some(self)
    }
}

/// A derived grouping of tasks sharing one status. Recomputed on every read,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: &'static str,
    pub title: &'static str,
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

/// Aggregate counts over the unfiltered task sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub total: usize,
    pub todo: usize,
    pub progress: usize,
    pub done: usize,
}

/// Filter tasks by a search query, preserving order.
///
/// An empty or whitespace-only query returns the sequence unchanged.
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tasks.iter().collect();
    }
    tasks.iter().filter(|t| t.matches(&needle)).collect()
}

/// Group filtered tasks into the three fixed columns.
///
/// Columns with no matching tasks are present but empty, never omitted.
pub fn columns_for(filtered: &[&Task]) -> Vec<Column> {
    TaskStatus::ALL
        .iter()
        .map(|&status| Column {
            id: status.as_str(),
            title: status.column_title(),
            status,
            tasks: filtered
                .iter()
                .filter(|t| t.status == status)
                .map(|t| (*t).clone())
                .collect(),
        })
        .collect()
}

/// Count tasks per status over the full sequence.
pub fn count_tasks(tasks: &[Task]) -> TaskCounts {
    let mut counts = TaskCounts {
        total: tasks.len(),
        ..TaskCounts::default()
    };
    for task in tasks {
        match task.status {
            TaskStatus::Todo => counts.todo += 1,
            TaskStatus::Progress => counts.progress += 1,
            TaskStatus::Done => counts.done += 1,
        }
    }
    counts
}
