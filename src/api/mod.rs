//! HTTP client layer for the remote todo service.
//!
//! Translates application-level task operations into JSON requests against
//! the service and back into typed results, shielding the store and the
//! commands from transport details.
//!
//! ## Features
//!
//! - **Typed Operations**: List, create, update, toggle, delete, and bulk
//!   delete, each returning domain types instead of raw responses
//! - **Error Normalization**: Every network failure, non-2xx status, and
//!   malformed body collapses into a single transport error kind carrying
//!   the attempted operation name
//! - **Injectable Seam**: The store is generic over the [`TodoApi`] trait,
//!   so tests substitute an in-memory implementation for the HTTP client
//! - **Observability**: One-line request/response records go to the tracing
//!   sink as a diagnostic side effect
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todoctl::api::{TodoApi, TodoClient};
//! use todoctl::libs::config::ServerConfig;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = TodoClient::new(&ServerConfig::default())?;
//! let tasks = client.list_tasks(None).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::task::{Task, TaskCreate, TaskUpdate};
use serde::Deserialize;
use thiserror::Error;

pub mod todos;

pub use todos::TodoClient;

/// Errors raised by the client layer.
///
/// Exactly two kinds exist. `Validation` is a caller-side precondition
/// failure stopped before any request is dispatched. `Transport` covers
/// network failures, non-2xx statuses, and response bodies that do not
/// match the expected shape; it carries the attempted operation's name.
/// The client never retries; retry policy, if any, belongs to callers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{op} failed: {detail}")]
    Transport { op: &'static str, detail: String },
}

impl ApiError {
    pub(crate) fn transport(op: &'static str, detail: impl Into<String>) -> Self {
        ApiError::Transport { op, detail: detail.into() }
    }

    /// The operation a transport failure was attempting, if any.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            ApiError::Transport { op, .. } => Some(op),
            ApiError::Validation(_) => None,
        }
    }
}

/// Standard `{code, message, data}` envelope wrapping most responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

/// Payload of the bulk-delete responses.
#[derive(Debug, Deserialize)]
pub(crate) struct DeletedCount {
    pub deleted_count: u64,
}

/// Payload of the service health probe.
#[derive(Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Typed asynchronous operations against the remote todo service.
///
/// This is the seam between the store and the transport: the store is
/// generic over this trait, and tests plug in an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    /// Fetches the current snapshot, optionally filtered server-side by
    /// completion state.
    async fn list_tasks(&self, completed: Option<bool>) -> Result<Vec<Task>, ApiError>;

    /// Fetches a single task by id. Unlike the other reads, the service
    /// returns the bare record without the response envelope.
    async fn get_task(&self, id: i64) -> Result<Task, ApiError>;

    /// Creates a task and returns the server-assigned record including
    /// the generated id and timestamps. Fails with a validation error
    /// when the trimmed title is empty, before anything is sent.
    async fn create_task(&self, new_task: &TaskCreate) -> Result<Task, ApiError>;

    /// Applies a partial update and returns the full updated record.
    async fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<Task, ApiError>;

    /// Convenience wrapper flipping only the completion flag.
    async fn toggle_task(&self, id: i64, completed: bool) -> Result<Task, ApiError> {
        self.update_task(id, &TaskUpdate::completion(completed)).await
    }

    /// Deletes one task by id.
    async fn delete_task(&self, id: i64) -> Result<(), ApiError>;

    /// Deletes every completed task; returns the server-reported count.
    async fn delete_completed(&self) -> Result<u64, ApiError>;

    /// Deletes every task; returns the server-reported count.
    async fn delete_all(&self) -> Result<u64, ApiError>;
}
