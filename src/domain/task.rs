use super::enums::TimerState;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task on the board, carrying a time budget and a countdown timer.
///
/// `used_secs` only changes at pause/finish boundaries; while the task is
/// running, elapsed wall-clock time is derived from `started_at` on every
/// read. The flags are mutually constrained: at most one of
/// `is_running`/`is_paused` is set, and a completed task has neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID, immutable for the task's lifetime
    pub id: Uuid,
    /// Task title; blank means "untitled" and blocks the timer from starting
    pub title: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
    /// Time budget in seconds; grows via add-time, shrinks via undo
    pub allocated_secs: u64,
    /// Seconds spent so far, committed at pause/finish boundaries
    pub used_secs: u64,
    pub is_completed: bool,
    pub is_running: bool,
    pub is_paused: bool,
    /// One entry per add-time call, newest last (LIFO undo)
    #[serde(default)]
    pub time_history: Vec<u64>,
    /// Wall-clock start stamp in epoch milliseconds, present iff running
    #[serde(default)]
    pub started_at: Option<i64>,
    /// When the task was created
    pub created_at: DateTime<Local>,
    /// When the task was completed (set exactly once)
    pub completed_at: Option<DateTime<Local>>,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            notes: String::new(),
            allocated_secs: 0,
            used_secs: 0,
            is_completed: false,
            is_running: false,
            is_paused: false,
            time_history: Vec::new(),
            started_at: None,
            created_at: Local::now(),
            completed_at: None,
        }
    }

    /// Derive the lifecycle state from the flags
    pub fn timer_state(&self) -> TimerState {
        if self.is_completed {
            TimerState::Finished
        } else if self.is_running {
            TimerState::Running
        } else if self.is_paused {
            TimerState::Paused
        } else {
            TimerState::Idle
        }
    }

    /// A timer may start only with a real title and a positive budget
    pub fn can_start(&self) -> bool {
        !self.is_completed && !self.title.trim().is_empty() && self.allocated_secs > 0
    }

    /// Whole seconds elapsed since the start stamp
    fn elapsed_since_start(&self, now_ms: i64) -> u64 {
        match self.started_at {
            Some(started) => (now_ms.saturating_sub(started) / 1000).max(0) as u64,
            None => 0,
        }
    }

    /// Mark running and stamp the start time. Preconditions are the
    /// engine's job; this just flips the flags.
    pub(crate) fn begin_run(&mut self, now_ms: i64) {
        self.is_running = true;
        self.is_paused = false;
        self.started_at = Some(now_ms);
    }

    /// Pause semantics: commit elapsed wall-clock time into `used_secs`
    /// and clear the stamp. No-op unless the task is running.
    pub fn settle(&mut self, now_ms: i64) -> bool {
        if !self.is_running {
            return false;
        }
        self.used_secs += self.elapsed_since_start(now_ms);
        self.started_at = None;
        self.is_running = false;
        self.is_paused = true;
        true
    }

    /// Finalize the task. Folds in elapsed time if running; terminal.
    pub fn complete(&mut self, now_ms: i64) -> bool {
        if self.is_completed {
            return false;
        }
        if self.is_running {
            self.used_secs += self.elapsed_since_start(now_ms);
        }
        self.is_completed = true;
        self.is_running = false;
        self.is_paused = false;
        self.started_at = None;
        self.completed_at = Some(Local::now());
        true
    }

    /// Grow the budget, recording the increment for undo.
    /// Rejected while completed or running.
    pub fn push_time(&mut self, secs: u64) -> bool {
        if self.is_completed || self.is_running {
            return false;
        }
        self.allocated_secs += secs;
        self.time_history.push(secs);
        true
    }

    /// Undo the most recent add-time, flooring the budget at zero.
    /// No-op with an empty history or a completed task.
    pub fn pop_time(&mut self) -> bool {
        if self.is_completed {
            return false;
        }
        match self.time_history.pop() {
            Some(last) => {
                self.allocated_secs = self.allocated_secs.saturating_sub(last);
                true
            }
            None => false,
        }
    }

    /// Remaining budget ignoring any in-flight run (used by the aggregator)
    pub fn static_remaining(&self) -> u64 {
        self.allocated_secs.saturating_sub(self.used_secs)
    }

    /// Live remaining time at `now_ms`. The only way remaining time is
    /// ever computed; never negative.
    pub fn remaining_at(&self, now_ms: i64) -> u64 {
        if self.is_running {
            self.static_remaining()
                .saturating_sub(self.elapsed_since_start(now_ms))
        } else {
            self.static_remaining()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budgeted(title: &str, secs: u64) -> Task {
        let mut task = Task::new(title);
        task.push_time(secs);
        task
    }

    #[test]
    fn test_new_task_is_idle() {
        let task = Task::new("Write docs");
        assert_eq!(task.timer_state(), TimerState::Idle);
        assert_eq!(task.allocated_secs, 0);
        assert_eq!(task.used_secs, 0);
        assert!(task.started_at.is_none());
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_can_start_requires_title_and_budget() {
        let mut task = Task::new("   ");
        assert!(!task.can_start());

        task.title = "Real title".to_string();
        assert!(!task.can_start()); // budget still zero

        task.push_time(600);
        assert!(task.can_start());

        task.complete(0);
        assert!(!task.can_start());
    }

    #[test]
    fn test_settle_commits_elapsed() {
        let mut task = budgeted("Task", 600);
        task.begin_run(1_000_000);
        assert_eq!(task.timer_state(), TimerState::Running);

        assert!(task.settle(1_030_500));
        assert_eq!(task.used_secs, 30); // floor of 30.5s
        assert_eq!(task.timer_state(), TimerState::Paused);
        assert!(task.started_at.is_none());
    }

    #[test]
    fn test_settle_is_noop_when_not_running() {
        let mut task = budgeted("Task", 600);
        assert!(!task.settle(1_000_000));
        assert_eq!(task.timer_state(), TimerState::Idle);
        assert_eq!(task.used_secs, 0);

        task.begin_run(1_000_000);
        task.settle(1_010_000);
        let used = task.used_secs;
        assert!(!task.settle(1_020_000)); // already paused
        assert_eq!(task.used_secs, used);
    }

    #[test]
    fn test_complete_from_running_folds_elapsed() {
        let mut task = budgeted("Task", 600);
        task.begin_run(0);
        assert!(task.complete(40_000));
        assert_eq!(task.used_secs, 40);
        assert_eq!(task.timer_state(), TimerState::Finished);
        assert!(task.completed_at.is_some());
        assert!(task.started_at.is_none());
    }

    #[test]
    fn test_complete_is_terminal() {
        let mut task = budgeted("Task", 600);
        task.complete(0);
        assert!(!task.complete(0));
        assert!(!task.push_time(60));
        assert!(!task.pop_time());
        assert!(!task.settle(0));
    }

    #[test]
    fn test_push_pop_round_trip() {
        let mut task = Task::new("Task");
        task.push_time(300);
        task.push_time(60);
        assert_eq!(task.allocated_secs, 360);
        assert_eq!(task.time_history, vec![300, 60]);

        assert!(task.pop_time());
        assert_eq!(task.allocated_secs, 300);
        assert!(task.pop_time());
        assert_eq!(task.allocated_secs, 0);
        assert!(!task.pop_time()); // history empty
    }

    #[test]
    fn test_pop_time_floors_at_zero() {
        let mut task = Task::new("Task");
        task.push_time(120);
        // Simulate an out-of-band budget shrink
        task.allocated_secs = 60;
        assert!(task.pop_time());
        assert_eq!(task.allocated_secs, 0);
    }

    #[test]
    fn test_push_time_rejected_while_running() {
        let mut task = budgeted("Task", 600);
        task.begin_run(0);
        assert!(!task.push_time(60));
        assert_eq!(task.allocated_secs, 600);
    }

    #[test]
    fn test_remaining_at_live_and_static() {
        let mut task = budgeted("Task", 600);
        task.used_secs = 100;
        assert_eq!(task.remaining_at(0), 500);

        task.begin_run(0);
        assert_eq!(task.remaining_at(0), 500);
        assert_eq!(task.remaining_at(10_000), 490);
        assert_eq!(task.remaining_at(60_000), 440);
        // Never negative, even far past the budget
        assert_eq!(task.remaining_at(3_600_000), 0);
    }

    #[test]
    fn test_remaining_monotone_while_running() {
        let mut task = budgeted("Task", 300);
        task.begin_run(0);
        let mut last = task.remaining_at(0);
        for t in (0..400_000).step_by(7_000) {
            let r = task.remaining_at(t);
            assert!(r <= last);
            last = r;
        }
        assert_eq!(last, 0);
    }
}
