//! Board-level timer operations.
//!
//! The engine is a wall-clock state machine over the board's tasks: no
//! internal threads, no periodic mutation. `used_secs` changes only at the
//! pause/finish boundaries below; while a task runs, remaining time is
//! derived from its `started_at` stamp on every read.
//!
//! Every operation has an `_at(..., now_ms)` form taking an explicit clock
//! and a wrapper reading the system clock. Invalid transitions are silent
//! no-ops; each operation reports whether it changed anything.

use crate::domain::{Board, Task};
use uuid::Uuid;

/// Current wall-clock time in epoch milliseconds
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// The single running task, if any
pub fn active_task(board: &Board) -> Option<&Task> {
    board.tasks().find(|t| t.is_running && !t.is_completed)
}

/// Id of the single running task, if any
pub fn active_task_id(board: &Board) -> Option<Uuid> {
    active_task(board).map(|t| t.id)
}

/// Start a task's timer. Requires a non-blank title and a positive budget;
/// rejected on completed or already-running tasks. Every other running
/// task is paused (elapsed committed) before the new stamp is set, so the
/// single-active-timer invariant holds and no wall-clock window is
/// double-counted.
pub fn start_at(board: &mut Board, task_id: Uuid, now_ms: i64) -> bool {
    match board.task(task_id) {
        Some(task) if !task.is_running && task.can_start() => {}
        _ => return false,
    }
    pause_others_at(board, task_id, now_ms);
    if let Some(task) = board.task_mut(task_id) {
        task.begin_run(now_ms);
    }
    board.touch();
    true
}

pub fn start(board: &mut Board, task_id: Uuid) -> bool {
    start_at(board, task_id, now_ms())
}

/// Resume a paused task. Only the title precondition applies; the budget
/// may already be spent. Same pause-others-first sequencing as `start`.
pub fn resume_at(board: &mut Board, task_id: Uuid, now_ms: i64) -> bool {
    match board.task(task_id) {
        Some(task)
            if !task.is_running && !task.is_completed && !task.title.trim().is_empty() => {}
        _ => return false,
    }
    pause_others_at(board, task_id, now_ms);
    if let Some(task) = board.task_mut(task_id) {
        task.begin_run(now_ms);
    }
    board.touch();
    true
}

pub fn resume(board: &mut Board, task_id: Uuid) -> bool {
    resume_at(board, task_id, now_ms())
}

/// Pause a running task, committing its elapsed time. No-op on paused,
/// idle, or completed tasks.
pub fn pause_at(board: &mut Board, task_id: Uuid, now_ms: i64) -> bool {
    let changed = match board.task_mut(task_id) {
        Some(task) => task.settle(now_ms),
        None => false,
    };
    if changed {
        board.touch();
    }
    changed
}

pub fn pause(board: &mut Board, task_id: Uuid) -> bool {
    pause_at(board, task_id, now_ms())
}

/// Finish a task from any non-terminal state. A running task has its
/// elapsed time committed first; idle and paused tasks finalize with the
/// time already spent.
pub fn finish_at(board: &mut Board, task_id: Uuid, now_ms: i64) -> bool {
    let changed = match board.task_mut(task_id) {
        Some(task) => task.complete(now_ms),
        None => false,
    };
    if changed {
        board.touch();
    }
    changed
}

pub fn finish(board: &mut Board, task_id: Uuid) -> bool {
    finish_at(board, task_id, now_ms())
}

/// Grow a task's budget, recording the increment for undo. Rejected while
/// the task is completed or running.
pub fn add_time(board: &mut Board, task_id: Uuid, secs: u64) -> bool {
    let changed = match board.task_mut(task_id) {
        Some(task) => task.push_time(secs),
        None => false,
    };
    if changed {
        board.touch();
    }
    changed
}

/// Undo the most recent add-time (budget floored at zero). No-op with an
/// empty history or a completed task.
pub fn undo_last_time(board: &mut Board, task_id: Uuid) -> bool {
    let changed = match board.task_mut(task_id) {
        Some(task) => task.pop_time(),
        None => false,
    };
    if changed {
        board.touch();
    }
    changed
}

/// Live remaining seconds for a task, right now. Pure query.
pub fn live_remaining(task: &Task) -> u64 {
    task.remaining_at(now_ms())
}

/// Pause whichever task is currently running, if any. This is the hook
/// for the drag-start and outside-interaction rules.
pub fn pause_active_at(board: &mut Board, now_ms: i64) -> bool {
    let mut changed = false;
    for task in board.tasks_mut() {
        changed |= task.settle(now_ms);
    }
    if changed {
        board.touch();
    }
    changed
}

pub fn pause_active(board: &mut Board) -> bool {
    pause_active_at(board, now_ms())
}

/// Commit elapsed time for every running task except one, clearing their
/// running flags. Called before activating a new timer.
fn pause_others_at(board: &mut Board, except: Uuid, now_ms: i64) {
    for task in board.tasks_mut() {
        if task.id != except {
            task.settle(now_ms);
        }
    }
}
