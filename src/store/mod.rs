//! In-memory task store and derived views.
//!
//! Owns the authoritative client-side snapshot of the task collection and
//! the active view filter, applies server-confirmed mutation results, and
//! derives the filtered and sorted listing the presentation renders.
//!
//! ## Reconciliation policy
//!
//! The server is always trusted in full: a mutation's returned record
//! replaces the stored copy wholesale instead of being merged field by
//! field, so local state can never drift from server state. Failures
//! leave the collection untouched, surface a transient notification on
//! the messages channel, and re-raise so the caller keeps its input.
//!
//! ## Mutual exclusion
//!
//! The store processes one mutation at a time. Each entry point rejects
//! invocations made while another call is still in flight, rather than
//! queuing them; the `busy` flag is cleared on completion whether the
//! call succeeded or failed.

use crate::api::TodoApi;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskCreate, TaskFilter, TaskUpdate};
use crate::{msg_bail_anyhow, msg_error, msg_success};
use anyhow::Result;

/// Client-side mirror of the server's task collection plus view state.
pub struct TodoStore<A> {
    api: A,
    tasks: Vec<Task>,
    filter: TaskFilter,
    busy: bool,
}

impl<A: TodoApi> TodoStore<A> {
    /// Creates an empty store around an injected client.
    pub fn new(api: A) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            filter: TaskFilter::default(),
            busy: false,
        }
    }

    /// Marks the store busy, rejecting overlapping entry-point calls.
    fn begin(&mut self) -> Result<()> {
        if self.busy {
            msg_bail_anyhow!(Message::StoreBusy);
        }
        self.busy = true;
        Ok(())
    }

    /// Replaces the collection wholesale with a fresh server snapshot.
    /// On failure the previous snapshot stays in place.
    pub async fn load(&mut self) -> Result<()> {
        self.begin()?;
        let result = self.api.list_tasks(None).await;
        self.busy = false;

        match result {
            Ok(snapshot) => {
                self.tasks = snapshot;
                Ok(())
            }
            Err(err) => {
                msg_error!(Message::TasksLoadFailed);
                Err(err.into())
            }
        }
    }

    /// Creates a task and prepends the server-assigned record, newest
    /// first. On failure the collection is unchanged and the error is
    /// re-raised so the caller can keep its draft input.
    pub async fn add_task(&mut self, title: &str, description: Option<&str>) -> Result<Task> {
        self.begin()?;
        let result = self.api.create_task(&TaskCreate::new(title, description)).await;
        self.busy = false;

        match result {
            Ok(task) => {
                self.tasks.insert(0, task.clone());
                Ok(task)
            }
            Err(err) => {
                msg_error!(Message::TaskCreateFailed);
                Err(err.into())
            }
        }
    }

    /// Flips a task's completion flag and replaces the stored copy with
    /// the server's returned record.
    pub async fn toggle_task(&mut self, id: i64, completed: bool) -> Result<Task> {
        self.begin()?;
        let result = self.api.toggle_task(id, completed).await;
        self.busy = false;

        match result {
            Ok(task) => {
                self.replace(&task);
                Ok(task)
            }
            Err(err) => {
                msg_error!(Message::TaskUpdateFailed);
                Err(err.into())
            }
        }
    }

    /// Rewrites a task's title and description; same replace-in-place
    /// contract as [`toggle_task`](Self::toggle_task).
    pub async fn edit_task(&mut self, id: i64, title: &str, description: Option<&str>) -> Result<Task> {
        self.begin()?;
        let update = TaskUpdate {
            title: Some(title.trim().to_string()),
            description: description.map(|d| d.trim().to_string()),
            completed: None,
        };
        let result = self.api.update_task(id, &update).await;
        self.busy = false;

        match result {
            Ok(task) => {
                self.replace(&task);
                Ok(task)
            }
            Err(err) => {
                msg_error!(Message::TaskUpdateFailed);
                Err(err.into())
            }
        }
    }

    /// Deletes a task and drops it from the collection once the server
    /// confirms.
    pub async fn remove_task(&mut self, id: i64) -> Result<()> {
        self.begin()?;
        let result = self.api.delete_task(id).await;
        self.busy = false;

        match result {
            Ok(()) => {
                self.tasks.retain(|t| t.id != id);
                Ok(())
            }
            Err(err) => {
                msg_error!(Message::TaskDeleteFailed);
                Err(err.into())
            }
        }
    }

    /// Deletes every completed task. The notification carries the
    /// server's count, not a locally re-derived one.
    pub async fn clear_completed(&mut self) -> Result<u64> {
        self.begin()?;
        let result = self.api.delete_completed().await;
        self.busy = false;

        match result {
            Ok(deleted) => {
                self.tasks.retain(|t| !t.completed);
                if deleted > 0 {
                    msg_success!(Message::CompletedTasksCleared(deleted));
                }
                Ok(deleted)
            }
            Err(err) => {
                msg_error!(Message::ClearCompletedFailed);
                Err(err.into())
            }
        }
    }

    /// Deletes every task and empties the collection.
    pub async fn clear_all(&mut self) -> Result<u64> {
        self.begin()?;
        let result = self.api.delete_all().await;
        self.busy = false;

        match result {
            Ok(deleted) => {
                self.tasks.clear();
                if deleted > 0 {
                    msg_success!(Message::AllTasksCleared(deleted));
                }
                Ok(deleted)
            }
            Err(err) => {
                msg_error!(Message::ClearAllFailed);
                Err(err.into())
            }
        }
    }

    fn replace(&mut self, task: &Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task.clone();
        }
    }

    /// The raw collection in insertion order, as received from the last
    /// load plus reconciled mutations.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The injected client, for callers needing client-only operations.
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The filtered and sorted view the presentation renders: incomplete
    /// tasks before complete ones, newest creation first within each
    /// group. The sort is stable, so equal keys keep their insertion
    /// order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let mut visible: Vec<&Task> = self.tasks.iter().filter(|t| self.filter.matches(t)).collect();
        visible.sort_by(|a, b| a.completed.cmp(&b.completed).then_with(|| b.created_at.cmp(&a.created_at)));
        visible
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn active_count(&self) -> usize {
        self.total_count() - self.completed_count()
    }
}
