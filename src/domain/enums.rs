use serde::{Deserialize, Serialize};

/// Lifecycle state of a task timer, derived from the task's flags.
/// `Finished` is terminal: no transition leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Finished,
}

impl TimerState {
    /// Display label for badges and reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
            Self::Finished => "DONE",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingList,
    RenamingList,
    RenamingBoard,
    AddingTask,
    EditingTask,
    AddingTime,
    ConfirmDelete,
}
