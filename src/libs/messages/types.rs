#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated,
    TaskCompleted,
    TaskDeleted(String),
    TaskNotFoundWithId(i64),
    TasksNotFound,
    NoTasksToUpdate,
    NoTasksToDelete,
    AllTasksCompleted,
    TaskListHeader(String),
    TaskDetailsHeader,
    EditingTask(String),
    SelectTaskToUpdate,
    SelectTaskToComplete,
    SelectTaskToDelete,
    ConfirmDeleteTask(String),
    OperationCancelled,

    // === PROMPT MESSAGES ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptTaskPriority,

    // === VALIDATION MESSAGES ===
    TitleRequired,
    InvalidDateFormat,
    DueDateInPast,

    // === ANALYTICS MESSAGES ===
    StatsHeader,
    StatsNoData,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptDbFilePath,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    NothingToExport,
}
