#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskCompleted(i64),
    TaskReopened(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TasksLoadFailed,
    TaskCreateFailed,
    TaskUpdateFailed,
    TaskDeleteFailed,
    NoTasksFound,
    NoCompletedTasks,
    EmptyTaskTitle,
    NoChangesDetected,
    TaskCounts { total: usize, active: usize, completed: usize },

    // === BULK DELETE MESSAGES ===
    CompletedTasksCleared(u64),
    AllTasksCleared(u64),
    ClearCompletedFailed,
    ClearAllFailed,

    // === STORE MESSAGES ===
    StoreBusy,

    // === PROMPT MESSAGES ===
    ConfirmDeleteTask(i64),
    ConfirmClearCompleted(usize),
    ConfirmClearAll(usize),
    PromptTaskTitleEdit,
    PromptTaskDescriptionEdit,
    PromptApiUrl,
    PromptRequestTimeout,
    OperationCancelled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigParseError,
    ConfigSaveError,

    // === SERVICE MESSAGES ===
    ServiceHealthy { status: String, version: String },
    ServiceUnhealthy(String),
}
