//! Supabase client for the PostgREST tasks table.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use uuid::Uuid;

use super::wire::{NewTaskRow, TaskRow};
use super::{StoreError, StoreResult, TaskStore};
use crate::model::{Task, TaskDraft, TaskStatus};

/// Per-request ceiling so a stalled call cannot hold the board busy forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Supabase-backed implementation of [`TaskStore`].
pub struct SupabaseStore {
    client: Client,
    url: String,
    anon_key: String,
}

impl SupabaseStore {
    /// Create a new store client.
    pub fn new(url: &str, anon_key: &str) -> StoreResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Get the PostgREST URL.
    fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
    }
}

#[async_trait]
impl TaskStore for SupabaseStore {
    async fn fetch_all(&self) -> StoreResult<Vec<Task>> {
        let resp = self
            .authed(self.client.get(format!(
                "{}/tasks?select=*&order=created_at.desc",
                self.rest_url()
            )))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let rows: Vec<TaskRow> = serde_json::from_str(&text)
            .map_err(|e| StoreError::MalformedRow(e.to_string()))?;
        rows.into_iter().map(TaskRow::into_task).collect()
    }

    async fn create(&self, draft: &TaskDraft, user_id: &str) -> StoreResult<Task> {
        let body = NewTaskRow::from_draft(draft, user_id);

        let resp = self
            .authed(self.client.post(format!("{}/tasks", self.rest_url())))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let rows: Vec<TaskRow> = serde_json::from_str(&text)
            .map_err(|e| StoreError::MalformedRow(e.to_string()))?;
        rows.into_iter()
            .next()
            .ok_or(StoreError::EmptyRepresentation)?
            .into_task()
    }

    async fn update_status(&self, id: Uuid, status: TaskStatus) -> StoreResult<()> {
        let body = serde_json::json!({ "status": status });

        let resp = self
            .authed(
                self.client
                    .patch(format!("{}/tasks?id=eq.{}", self.rest_url(), id)),
            )
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let text = resp.text().await?;
            return Err(StoreError::Api {
                status,
                message: text,
            });
        }

        Ok(())
    }
}
