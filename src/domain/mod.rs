pub mod board;
pub mod enums;
pub mod task;

pub use board::{Board, TaskList};
pub use enums::{TimerState, UiMode};
pub use task::Task;
