use crate::domain::Board;
use crate::timefmt::performance;

/// Derived board summary, recomputed from scratch after every mutation.
/// Remaining time here is the static `allocated - used` of incomplete
/// tasks; the live countdown of the running task is deliberately not
/// folded in, so the aggregate numbers only move on deliberate recompute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardStats {
    /// Tasks not yet completed
    pub current_tasks: usize,
    pub total_tasks: usize,
    pub total_allocated_secs: u64,
    /// Static remaining over incomplete tasks only
    pub total_remaining_secs: u64,
    /// Seconds saved by tasks finished under budget
    pub points_won: u64,
    /// Seconds overrun by tasks finished over budget
    pub points_lost: u64,
    /// Share of completed tasks finished at-or-under budget, 0..=100.
    /// Zero when nothing is completed.
    pub finish_efficiency: f64,
}

impl BoardStats {
    pub fn zero() -> Self {
        Self {
            current_tasks: 0,
            total_tasks: 0,
            total_allocated_secs: 0,
            total_remaining_secs: 0,
            points_won: 0,
            points_lost: 0,
            finish_efficiency: 0.0,
        }
    }
}

/// Fold every task on the board into a stats snapshot
pub fn board_stats(board: &Board) -> BoardStats {
    let mut stats = BoardStats::zero();
    let mut completed = 0usize;
    let mut under_budget = 0usize;

    for task in board.tasks() {
        stats.total_tasks += 1;
        stats.total_allocated_secs += task.allocated_secs;

        if !task.is_completed {
            stats.current_tasks += 1;
            stats.total_remaining_secs += task.static_remaining();
        } else {
            completed += 1;
            let perf = performance(task.allocated_secs, task.used_secs);
            if perf.is_overtime {
                stats.points_lost += perf.difference;
            } else {
                stats.points_won += perf.difference;
                under_budget += 1;
            }
        }
    }

    if completed > 0 {
        stats.finish_efficiency = under_budget as f64 / completed as f64 * 100.0;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use pretty_assertions::assert_eq;

    fn finished(budget: u64, used: u64) -> Task {
        let mut task = Task::new("done");
        task.push_time(budget);
        task.used_secs = used;
        task.complete(0);
        task
    }

    fn pending(budget: u64, used: u64) -> Task {
        let mut task = Task::new("pending");
        task.push_time(budget);
        task.used_secs = used;
        task
    }

    #[test]
    fn test_empty_board_yields_zeroes() {
        let board = Board::new("Empty");
        let stats = board_stats(&board);
        assert_eq!(stats, BoardStats::zero());
    }

    #[test]
    fn test_counts_and_totals() {
        let mut board = Board::new("Test");
        let list = board.add_list("To do");
        board.add_task(list, pending(600, 100));
        board.add_task(list, pending(300, 0));
        board.add_task(list, finished(100, 80));

        let stats = board_stats(&board);
        assert_eq!(stats.total_tasks, 3);
        assert_eq!(stats.current_tasks, 2);
        assert_eq!(stats.total_allocated_secs, 1000);
        // 500 + 300; the completed task contributes nothing
        assert_eq!(stats.total_remaining_secs, 800);
    }

    #[test]
    fn test_remaining_ignores_overspent_tasks() {
        let mut board = Board::new("Test");
        let list = board.add_list("To do");
        board.add_task(list, pending(100, 250));

        assert_eq!(board_stats(&board).total_remaining_secs, 0);
    }

    #[test]
    fn test_points_bucketed_by_overtime() {
        let mut board = Board::new("Test");
        let list = board.add_list("To do");
        board.add_task(list, finished(100, 80)); // +20
        board.add_task(list, finished(100, 120)); // -20
        board.add_task(list, finished(100, 100)); // exact: +0, under time

        let stats = board_stats(&board);
        assert_eq!(stats.points_won, 20);
        assert_eq!(stats.points_lost, 20);
    }

    #[test]
    fn test_finish_efficiency() {
        let mut board = Board::new("Test");
        let list = board.add_list("To do");

        // Nothing completed: efficiency 0, no division error
        board.add_task(list, pending(100, 0));
        assert_eq!(board_stats(&board).finish_efficiency, 0.0);

        board.add_task(list, finished(100, 80));
        board.add_task(list, finished(100, 90));
        board.add_task(list, finished(100, 120));

        let stats = board_stats(&board);
        // 2 of 3 under budget
        assert!((stats.finish_efficiency - 66.666_666).abs() < 0.001);
        assert_eq!(stats.finish_efficiency.round() as u64, 67);
    }

    #[test]
    fn test_exact_budget_counts_as_under_time() {
        let mut board = Board::new("Test");
        let list = board.add_list("To do");
        board.add_task(list, finished(100, 100));

        let stats = board_stats(&board);
        assert_eq!(stats.finish_efficiency, 100.0);
        assert_eq!(stats.points_won, 0);
        assert_eq!(stats.points_lost, 0);
    }
}
