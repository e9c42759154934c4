//! Task entity model - tasks, drafts, and the derived column views.
//!
//! These are pure data contracts: columns and counts are always recomputed
//! from the single authoritative task sequence, never stored alongside it.

mod task;

pub use task::{
    columns_for, count_tasks, filter_tasks, Column, Task, TaskCounts, TaskDraft, TaskPriority,
    TaskStatus,
};
