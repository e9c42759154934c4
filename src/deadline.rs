//! Deadline-remaining derivations backing the dashboard's calendar widget.
//!
//! Pure functions over the task sequence; the widget itself only renders
//! what these produce.

use chrono::{DateTime, Utc};

use crate::model::{Task, TaskStatus};

/// How many upcoming deadlines the widget shows.
pub const UPCOMING_LIMIT: usize = 5;

/// Remaining time until a due date, bucketed to whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRemaining {
    Overdue { days: i64 },
    DueToday,
    DueTomorrow,
    DaysLeft { days: i64 },
}

/// Visual weight of a deadline badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Overdue or due today.
    Critical,
    /// Due within two days.
    Soon,
    Normal,
}

impl TimeRemaining {
    /// Bucket the distance between `now` and `due` into whole days.
    ///
    /// The day count truncates toward zero, so anything less than a full
    /// day away in either direction is "due today".
    pub fn until(due: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        match (due - now).num_days() {
            d if d < 0 => Self::Overdue { days: -d },
            0 => Self::DueToday,
            1 => Self::DueTomorrow,
            d => Self::DaysLeft { days: d },
        }
    }

    pub fn urgency(&self) -> Urgency {
        match self {
            Self::Overdue { .. } | Self::DueToday => Urgency::Critical,
            Self::DueTomorrow => Urgency::Soon,
            Self::DaysLeft { days } if *days <= 2 => Urgency::Soon,
            Self::DaysLeft { .. } => Urgency::Normal,
        }
    }
}

impl std::fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overdue { days } => write!(f, "{} days overdue", days),
            Self::DueToday => write!(f, "Due today"),
            Self::DueTomorrow => write!(f, "Due tomorrow"),
            Self::DaysLeft { days } => write!(f, "{} days left", days),
        }
    }
}

/// Unfinished tasks with a due date, soonest first, capped at `limit`.
pub fn upcoming(tasks: &[Task], limit: usize) -> Vec<&Task> {
    let mut due: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.due_date.is_some() && t.status != TaskStatus::Done)
        .collect();
    due.sort_by_key(|t| t.due_date);
    due.truncate(limit);
    due
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::model::{TaskPriority, TaskStatus};
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn due_task(id: u128, status: TaskStatus, due_in_days: Option<i64>) -> Task {
        Task {
            id: Uuid::from_u128(id),
            title: format!("task-{}", id),
            description: None,
            status,
            priority: TaskPriority::Medium,
            assignee: None,
            created_at: now(),
            updated_at: now(),
            due_date: due_in_days.map(|d| now() + Duration::days(d)),
        }
    }

    #[test]
    fn test_time_remaining_buckets() {
        let n = now();
        assert_eq!(
            TimeRemaining::until(n - Duration::days(3), n),
            TimeRemaining::Overdue { days: 3 }
        );
        assert_eq!(TimeRemaining::until(n, n), TimeRemaining::DueToday);
        assert_eq!(
            TimeRemaining::until(n + Duration::hours(6), n),
            TimeRemaining::DueToday
        );
        assert_eq!(
            TimeRemaining::until(n + Duration::days(1), n),
            TimeRemaining::DueTomorrow
        );
        assert_eq!(
            TimeRemaining::until(n + Duration::days(7), n),
            TimeRemaining::DaysLeft { days: 7 }
        );
    }

    #[test]
    fn test_time_remaining_display() {
        assert_eq!(
            TimeRemaining::Overdue { days: 2 }.to_string(),
            "2 days overdue"
        );
        assert_eq!(TimeRemaining::DueToday.to_string(), "Due today");
        assert_eq!(TimeRemaining::DueTomorrow.to_string(), "Due tomorrow");
        assert_eq!(
            TimeRemaining::DaysLeft { days: 4 }.to_string(),
            "4 days left"
        );
    }

    #[test]
    fn test_urgency_mapping() {
        assert_eq!(
            TimeRemaining::Overdue { days: 1 }.urgency(),
            Urgency::Critical
        );
        assert_eq!(TimeRemaining::DueToday.urgency(), Urgency::Critical);
        assert_eq!(TimeRemaining::DueTomorrow.urgency(), Urgency::Soon);
        assert_eq!(
            TimeRemaining::DaysLeft { days: 2 }.urgency(),
            Urgency::Soon
        );
        assert_eq!(
            TimeRemaining::DaysLeft { days: 3 }.urgency(),
            Urgency::Normal
        );
    }

    #[test]
    fn test_upcoming_sorts_filters_and_caps() {
        let tasks = vec![
            due_task(1, TaskStatus::Todo, Some(5)),
            due_task(2, TaskStatus::Todo, None),
            due_task(3, TaskStatus::Done, Some(1)),
            due_task(4, TaskStatus::Progress, Some(2)),
            due_task(5, TaskStatus::Todo, Some(9)),
            due_task(6, TaskStatus::Todo, Some(3)),
            due_task(7, TaskStatus::Todo, Some(4)),
            due_task(8, TaskStatus::Todo, Some(8)),
        ];

        let upcoming = upcoming(&tasks, UPCOMING_LIMIT);

        assert_eq!(upcoming.len(), UPCOMING_LIMIT);
        // Done and undated tasks are excluded.
        assert!(upcoming.iter().all(|t| t.id != Uuid::from_u128(2)));
        assert!(upcoming.iter().all(|t| t.id != Uuid::from_u128(3)));
        // Soonest first.
        let ids: Vec<u128> = upcoming.iter().map(|t| t.id.as_u128()).collect();
        assert_eq!(ids, vec![4, 6, 7, 1, 8]);
    }
}
