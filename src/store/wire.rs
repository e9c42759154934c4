//! Wire representation of a task row and its translation rules.
//!
//! The remote table stores a flat record with string-encoded dates and
//! nullable optional fields. Absent/null optional fields map to unset in
//! memory, never to empty strings. Dates travel as ISO-8601 strings and are
//! decoded to UTC timestamps; a malformed date is a [`StoreError`], not a
//! silent default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{StoreError, StoreResult};
use crate::model::{Task, TaskDraft, TaskPriority, TaskStatus};

/// One row of the remote `tasks` table, exactly as it crosses the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: String,
}

/// Insert payload for a new row. Identity and timestamps are omitted so the
/// store assigns them.
#[derive(Debug, Clone, Serialize)]
pub struct NewTaskRow {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub user_id: String,
}

impl NewTaskRow {
    /// Encode a normalized draft for insertion on behalf of `user_id`.
    pub fn from_draft(draft: &TaskDraft, user_id: &str) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            priority: draft.priority,
            assignee: draft.assignee.clone(),
            due_date: draft.due_date.map(encode_timestamp),
            user_id: user_id.to_string(),
        }
    }
}

impl TaskRow {
    /// Decode the row into the in-memory task representation.
    pub fn into_task(self) -> StoreResult<Task> {
        Ok(Task {
            id: self.id,
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            assignee: self.assignee,
            created_at: decode_timestamp(&self.created_at)?,
            updated_at: decode_timestamp(&self.updated_at)?,
            due_date: self.due_date.as_deref().map(decode_timestamp).transpose()?,
        })
    }

    /// Encode a task back to its wire form. `user_id` is not part of the
    /// in-memory task; it is re-attached from the session.
    pub fn from_task(task: &Task, user_id: &str) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            priority: task.priority,
            assignee: task.assignee.clone(),
            due_date: task.due_date.map(encode_timestamp),
            created_at: encode_timestamp(task.created_at),
            updated_at: encode_timestamp(task.updated_at),
            user_id: user_id.to_string(),
        }
    }
}

fn encode_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339()
}

fn decode_timestamp(raw: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| StoreError::MalformedRow(format!("Bad timestamp {:?}: {}", raw, e)))
}
