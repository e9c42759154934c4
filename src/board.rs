//! Board state manager.
//!
//! Owns the authoritative in-memory task sequence for the session and
//! mediates every mutation against the remote store. Columns and counts are
//! derived views over that one sequence; they are recomputed on read and
//! never stored twice.
//!
//! Error policy: store failures never propagate out of a board operation.
//! Each operation resolves to state-updated-or-untouched plus a notification
//! event, and the worst case of any failure is a card snapping back or a
//! dialog staying open.

use std::sync::Arc;

use uuid::Uuid;

use crate::model::{
    columns_for, count_tasks, filter_tasks, Column, Task, TaskCounts, TaskDraft, TaskStatus,
};
use crate::notify::{Notification, Notify};
use crate::session::Session;
use crate::store::TaskStore;

/// In-memory board state plus its injected collaborators.
///
/// All mutation happens through `&mut self` inside one event handler's
/// continuation at a time; the remote calls are the only suspension points.
pub struct Board {
    store: Arc<dyn TaskStore>,
    notifier: Arc<dyn Notify>,
    session: Session,
    tasks: Vec<Task>,
    loading: bool,
    add_dialog_open: bool,
    default_draft_status: TaskStatus,
}

impl Board {
    pub fn new(store: Arc<dyn TaskStore>, notifier: Arc<dyn Notify>, session: Session) -> Self {
        Self {
            store,
            notifier,
            session,
            tasks: Vec::new(),
            loading: true,
            add_dialog_open: false,
            default_draft_status: TaskStatus::Todo,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────────────────

    /// The unfiltered task sequence, newest creation first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks matching the search query, order preserved. An empty or
    /// whitespace-only query returns everything.
    pub fn filtered(&self, query: &str) -> Vec<&Task> {
        filter_tasks(&self.tasks, query)
    }

    /// The three fixed columns for the current search query. Empty columns
    /// are present, never omitted.
    pub fn columns(&self, query: &str) -> Vec<Column> {
        columns_for(&self.filtered(query))
    }

    /// Aggregate counts over the unfiltered sequence; the search query must
    /// not distort them.
    pub fn counts(&self) -> TaskCounts {
        count_tasks(&self.tasks)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ─────────────────────────────────────────────────────────────────────
    // Add-task dialog
    // ─────────────────────────────────────────────────────────────────────

    /// Open the creation dialog, seeding the form with the status of the
    /// column whose add button was pressed.
    pub fn open_add_dialog(&mut self, status: TaskStatus) {
        self.default_draft_status = status;
        self.add_dialog_open = true;
    }

    pub fn close_add_dialog(&mut self) {
        self.add_dialog_open = false;
    }

    pub fn is_add_dialog_open(&self) -> bool {
        self.add_dialog_open
    }

    pub fn default_draft_status(&self) -> TaskStatus {
        self.default_draft_status
    }

    // ─────────────────────────────────────────────────────────────────────
    // Store-mediated operations
    // ─────────────────────────────────────────────────────────────────────

    /// Fetch all tasks and replace the in-memory sequence atomically.
    ///
    /// On failure the prior sequence is left untouched. The loading flag is
    /// cleared on every path. Inert when unauthenticated.
    pub async fn load(&mut self) {
        if !self.session.is_authenticated() {
            tracing::debug!("Skipping task load: no authenticated session");
            return;
        }

        self.loading = true;
        match self.store.fetch_all().await {
            Ok(tasks) => {
                tracing::info!(count = tasks.len(), "Loaded tasks");
                self.tasks = tasks;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch tasks");
                self.notifier.notify(Notification::error("Failed to fetch tasks"));
            }
        }
        self.loading = false;
    }

    /// Create a task from a form draft and prepend it to the sequence.
    ///
    /// The draft is normalized first; a title that is empty after trimming
    /// is a silent no-op at this boundary - no store call, no notification.
    /// On success the dialog closes; on failure it stays open so the user
    /// can retry.
    pub async fn add_task(&mut self, draft: TaskDraft) {
        let Some(user_id) = self.session.user_id().map(str::to_string) else {
            tracing::debug!("Skipping task create: no authenticated session");
            return;
        };
        let Some(draft) = draft.normalized() else {
            return;
        };

        match self.store.create(&draft, &user_id).await {
            Ok(task) => {
                tracing::info!(task_id = %task.id, "Created task");
                // Newest-first ordering: the fresh task goes to the front.
                self.tasks.insert(0, task);
                self.add_dialog_open = false;
                self.notifier
                    .notify(Notification::success("Task created successfully"));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create task");
                self.notifier.notify(Notification::error("Failed to create task"));
            }
        }
    }

    /// Move a task to another column, confirming the remote write before
    /// mutating local state.
    ///
    /// Unknown ids are ignored (stale drop target); moving a task onto its
    /// own column is free of store calls. Because nothing is mutated before
    /// the store confirms, a failure needs no rollback - the card simply
    /// never left its column.
    pub async fn move_task(&mut self, id: Uuid, destination: TaskStatus) {
        let Some(current) = self.tasks.iter().find(|t| t.id == id).map(|t| t.status) else {
            tracing::debug!(task_id = %id, "Ignoring move of unknown task");
            return;
        };
        if current == destination {
            return;
        }

        match self.store.update_status(id, destination).await {
            Ok(()) => {
                tracing::info!(task_id = %id, from = %current, to = %destination, "Moved task");
                for task in &mut self.tasks {
                    if task.id == id {
                        task.status = destination;
                    }
                }
                self.notifier
                    .notify(Notification::success("Task status updated"));
            }
            Err(e) => {
                tracing::warn!(task_id = %id, error = %e, "Failed to update task status");
                self.notifier.notify(Notification::error("Failed to update task"));
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Shared doubles for board-level tests: a call-recording, failure-
    //! injecting store and a notification collector.

    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use crate::model::{Task, TaskDraft, TaskPriority, TaskStatus};
    use crate::notify::{Notification, Notify};
    use crate::store::{StoreError, StoreResult, TaskStore};

    /// A recorded store call, for asserting exactly which round trips ran.
    #[derive(Debug, Clone, PartialEq)]
    pub enum StoreCall {
        FetchAll,
        Create { title: String, user_id: String },
        UpdateStatus { id: Uuid, status: TaskStatus },
    }

    #[derive(Default)]
    pub struct MockStore {
        pub calls: Mutex<Vec<StoreCall>>,
        pub fetch_result: Mutex<Vec<Task>>,
        pub fail: AtomicBool,
    }

    impl MockStore {
        pub fn with_tasks(tasks: Vec<Task>) -> Self {
            Self {
                fetch_result: Mutex::new(tasks),
                ..Self::default()
            }
        }

        pub fn fail_next(&self) {
            self.fail.store(true, Ordering::SeqCst);
        }

        pub fn calls(&self) -> Vec<StoreCall> {
            self.calls.lock().unwrap().clone()
        }

        fn failure(&self) -> Option<StoreError> {
            self.fail.load(Ordering::SeqCst).then(|| StoreError::Api {
                status: 500,
                message: "injected failure".to_string(),
            })
        }
    }

    #[async_trait]
    impl TaskStore for MockStore {
        async fn fetch_all(&self) -> StoreResult<Vec<Task>> {
            self.calls.lock().unwrap().push(StoreCall::FetchAll);
            if let Some(e) = self.failure() {
                return Err(e);
            }
            Ok(self.fetch_result.lock().unwrap().clone())
        }

        async fn create(&self, draft: &TaskDraft, user_id: &str) -> StoreResult<Task> {
            self.calls.lock().unwrap().push(StoreCall::Create {
                title: draft.title.clone(),
                user_id: user_id.to_string(),
            });
            if let Some(e) = self.failure() {
                return Err(e);
            }
            let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
            Ok(Task {
                id: Uuid::new_v4(),
                title: draft.title.clone(),
                description: draft.description.clone(),
                status: draft.status,
                priority: draft.priority,
                assignee: draft.assignee.clone(),
                created_at: now,
                updated_at: now,
                due_date: draft.due_date,
            })
        }

        async fn update_status(&self, id: Uuid, status: TaskStatus) -> StoreResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push(StoreCall::UpdateStatus { id, status });
            if let Some(e) = self.failure() {
                return Err(e);
            }
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub notifications: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        pub fn all(&self) -> Vec<Notification> {
            self.notifications.lock().unwrap().clone()
        }
    }

    impl Notify for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.notifications.lock().unwrap().push(notification);
        }
    }

    pub fn task(id: u128, title: &str, status: TaskStatus) -> Task {
        let now = Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap();
        Task {
            id: Uuid::from_u128(id),
            title: title.to_string(),
            description: None,
            status,
            priority: TaskPriority::Medium,
            assignee: None,
            created_at: now,
            updated_at: now,
            due_date: None,
        }
    }
}
