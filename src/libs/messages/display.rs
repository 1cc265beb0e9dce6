//! Display implementation for todoctl application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! in the terminal. All user-facing message text lives in this one place so
//! wording stays consistent across commands, the store, and the prompts.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::TaskReopened(id) => format!("Task {} reopened", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("No task found with ID {}", id),
            Message::TasksLoadFailed => "Failed to load tasks, check your network connection".to_string(),
            Message::TaskCreateFailed => "Failed to create task".to_string(),
            Message::TaskUpdateFailed => "Failed to update task".to_string(),
            Message::TaskDeleteFailed => "Failed to delete task".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoCompletedTasks => "There are no completed tasks to clear.".to_string(),
            Message::EmptyTaskTitle => "Task title must not be empty".to_string(),
            Message::NoChangesDetected => "No changes detected, task left as is.".to_string(),
            Message::TaskCounts { total, active, completed } => {
                format!("{} total: {} active, {} completed", total, active, completed)
            }

            // === BULK DELETE MESSAGES ===
            Message::CompletedTasksCleared(count) => format!("Deleted {} completed task(s)", count),
            Message::AllTasksCleared(count) => format!("Deleted all {} task(s)", count),
            Message::ClearCompletedFailed => "Failed to clear completed tasks".to_string(),
            Message::ClearAllFailed => "Failed to clear tasks".to_string(),

            // === STORE MESSAGES ===
            Message::StoreBusy => "Another operation is still in flight".to_string(),

            // === PROMPT MESSAGES ===
            Message::ConfirmDeleteTask(id) => format!("Are you sure you want to delete task {}?", id),
            Message::ConfirmClearCompleted(count) => {
                format!("Are you sure you want to delete {} completed task(s)?", count)
            }
            Message::ConfirmClearAll(count) => {
                format!("Are you sure you want to delete ALL {} task(s)? This cannot be undone!", count)
            }
            Message::PromptTaskTitleEdit => "Task title".to_string(),
            Message::PromptTaskDescriptionEdit => "Task description".to_string(),
            Message::PromptApiUrl => "Todo service URL".to_string(),
            Message::PromptRequestTimeout => "Request timeout in seconds".to_string(),
            Message::OperationCancelled => "Operation cancelled.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),

            // === SERVICE MESSAGES ===
            Message::ServiceHealthy { status, version } => {
                format!("Service is {} (version {})", status, version)
            }
            Message::ServiceUnhealthy(detail) => format!("Service is unreachable: {}", detail),
        };
        write!(f, "{}", text)
    }
}
