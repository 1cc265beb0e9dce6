//! Reqwest-backed implementation of the todo service client.
//!
//! Every call is bounded by the configured request timeout and emits a
//! one-line record of the exchange (method, path, status) at debug level.
//! Responses outside the 2xx range and bodies that fail to deserialize
//! are normalized into [`ApiError::Transport`].

use super::{ApiError, ApiResponse, DeletedCount, HealthStatus, TodoApi};
use crate::libs::config::ServerConfig;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskCreate, TaskUpdate};
use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

const TODOS_PATH: &str = "api/v1/todos";
const HEALTH_PATH: &str = "health";

/// HTTP client for the remote todo service.
///
/// Stateless apart from the connection pool; cheap to construct per
/// command invocation and safe to share across tasks.
#[derive(Debug)]
pub struct TodoClient {
    client: Client,
    config: ServerConfig,
}

impl TodoClient {
    /// Creates a client bound to the configured service root, with the
    /// per-request timeout applied to every call.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout)).build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    /// Sends a prepared request and normalizes every failure mode.
    ///
    /// Logs the exchange before the status check so failed calls leave a
    /// trace too.
    async fn execute(&self, op: &'static str, req: RequestBuilder) -> Result<Response, ApiError> {
        let req = req.build().map_err(|e| ApiError::transport(op, e.to_string()))?;
        let method = req.method().clone();
        let path = req.url().path().to_string();

        let res = self
            .client
            .execute(req)
            .await
            .map_err(|e| ApiError::transport(op, e.to_string()))?;

        let status = res.status();
        tracing::debug!(%method, path, %status, "todo service exchange");

        if !status.is_success() {
            return Err(ApiError::transport(op, format!("unexpected status {}", status)));
        }
        Ok(res)
    }

    /// Deserializes a bare JSON body.
    async fn read_json<T: DeserializeOwned>(op: &'static str, res: Response) -> Result<T, ApiError> {
        res.json::<T>()
            .await
            .map_err(|e| ApiError::transport(op, format!("malformed response body: {}", e)))
    }

    /// Unwraps the `{code, message, data}` envelope. A 2xx response whose
    /// `data` is absent counts as malformed.
    async fn read_data<T: DeserializeOwned>(op: &'static str, res: Response) -> Result<T, ApiError> {
        let envelope: ApiResponse<T> = Self::read_json(op, res).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::transport(op, format!("response carried no data (code {}: {})", envelope.code, envelope.message)))
    }

    /// Queries the service health probe, which lives outside the
    /// versioned API base path.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let req = self.client.get(self.url(HEALTH_PATH));
        let res = self.execute("health", req).await?;
        Self::read_json("health", res).await
    }
}

impl TodoApi for TodoClient {
    async fn list_tasks(&self, completed: Option<bool>) -> Result<Vec<Task>, ApiError> {
        let mut req = self.client.get(self.url(TODOS_PATH));
        if let Some(completed) = completed {
            req = req.query(&[("completed", completed)]);
        }
        let res = self.execute("list_tasks", req).await?;
        Self::read_data("list_tasks", res).await
    }

    async fn get_task(&self, id: i64) -> Result<Task, ApiError> {
        let req = self.client.get(self.url(&format!("{}/{}", TODOS_PATH, id)));
        let res = self.execute("get_task", req).await?;
        Self::read_json("get_task", res).await
    }

    async fn create_task(&self, new_task: &TaskCreate) -> Result<Task, ApiError> {
        if new_task.title.trim().is_empty() {
            return Err(ApiError::Validation(Message::EmptyTaskTitle.to_string()));
        }
        let req = self.client.post(self.url(TODOS_PATH)).json(new_task);
        let res = self.execute("create_task", req).await?;
        Self::read_data("create_task", res).await
    }

    async fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<Task, ApiError> {
        let req = self.client.put(self.url(&format!("{}/{}", TODOS_PATH, id))).json(update);
        let res = self.execute("update_task", req).await?;
        Self::read_data("update_task", res).await
    }

    async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        let req = self.client.delete(self.url(&format!("{}/{}", TODOS_PATH, id)));
        self.execute("delete_task", req).await?;
        Ok(())
    }

    async fn delete_completed(&self) -> Result<u64, ApiError> {
        let req = self.client.delete(self.url(&format!("{}/completed", TODOS_PATH)));
        let res = self.execute("delete_completed", req).await?;
        let count: DeletedCount = Self::read_data("delete_completed", res).await?;
        Ok(count.deleted_count)
    }

    async fn delete_all(&self) -> Result<u64, ApiError> {
        let req = self.client.delete(self.url(&format!("{}/all", TODOS_PATH)));
        let res = self.execute("delete_all", req).await?;
        let count: DeletedCount = Self::read_data("delete_all", res).await?;
        Ok(count.deleted_count)
    }
}
