//! Remote store adapter - the stateless translation/transport boundary
//! between the board and the hosted task database.
//!
//! Every call is a single network round trip. No retries happen here; retry
//! policy belongs to the user (re-drag, re-submit).

mod supabase;
pub mod wire;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{Task, TaskDraft, TaskStatus};

pub use supabase::SupabaseStore;

/// Any failure arising from a remote store interaction. The board never
/// distinguishes transient from permanent failures; all of them surface as a
/// single error notification and manual retry.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Store rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed row from store: {0}")]
    MalformedRow(String),

    #[error("Store returned no representation for inserted row")]
    EmptyRepresentation,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport seam to the remote task table.
///
/// Implementations own no task state and must be safe to share across the
/// board and its tests.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Fetch every task, newest creation first.
    ///
    /// Callers must not treat partial results as usable; a failure means the
    /// whole read failed.
    async fn fetch_all(&self) -> StoreResult<Vec<Task>>;

    /// Insert a draft; the store assigns `id`, `created_at`, `updated_at`
    /// and returns the stored task.
    async fn create(&self, draft: &TaskDraft, user_id: &str) -> StoreResult<Task>;

    /// Update one task's status by id. Idempotent: re-applying the current
    /// status is a no-op success.
    async fn update_status(&self, id: Uuid, status: TaskStatus) -> StoreResult<()>;
}
