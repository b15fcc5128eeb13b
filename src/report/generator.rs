use crate::domain::Board;
use crate::persistence::{atomic_write, load_board, report_file};
use crate::report::stats::board_stats;
use crate::timefmt::{format_compact, performance};
use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;

/// Generate a markdown snapshot of the saved board and write it to the
/// data directory (or `output_path`). Returns the path written.
pub fn generate_report(output_path: Option<PathBuf>) -> Result<PathBuf> {
    let board = load_board()?.unwrap_or_else(Board::default_board);

    let path = match output_path {
        Some(path) => path,
        None => report_file(Local::now().date_naive())?,
    };

    let report = render_report(&board);
    atomic_write(&path, &report)?;

    Ok(path)
}

/// Render the board as a markdown report
pub fn render_report(board: &Board) -> String {
    let stats = board_stats(board);
    let mut report = String::new();

    report.push_str(&format!("# {} - {}\n\n", board.title, Local::now().date_naive()));

    // Summary section
    report.push_str("## Summary\n\n");
    report.push_str(&format!(
        "- **Tasks:** {} ({} open, {} done)\n",
        stats.total_tasks,
        stats.current_tasks,
        stats.total_tasks - stats.current_tasks
    ));
    report.push_str(&format!(
        "- **Allocated:** {}\n",
        format_compact(stats.total_allocated_secs)
    ));
    report.push_str(&format!(
        "- **Remaining:** {}\n",
        format_compact(stats.total_remaining_secs)
    ));
    report.push_str(&format!(
        "- **Points:** +{} / -{}\n",
        format_compact(stats.points_won),
        format_compact(stats.points_lost)
    ));
    report.push_str(&format!(
        "- **Finish Efficiency:** {:.0}%\n\n",
        stats.finish_efficiency
    ));

    // One section per list
    for list in &board.lists {
        report.push_str(&format!("## {}\n\n", list.title));

        if list.tasks.is_empty() {
            report.push_str("_(empty)_\n\n");
            continue;
        }

        for task in &list.tasks {
            report.push_str(&format!("- [{}] {}\n", task.timer_state().label(), task.title));
            report.push_str(&format!(
                "  - budget: {} / used: {}\n",
                format_compact(task.allocated_secs),
                format_compact(task.used_secs)
            ));

            if task.is_completed {
                let perf = performance(task.allocated_secs, task.used_secs);
                let sign = if perf.is_overtime { "-" } else { "+" };
                report.push_str(&format!(
                    "  - performance: {}{}\n",
                    sign,
                    format_compact(perf.difference)
                ));
            }

            if !task.notes.trim().is_empty() {
                report.push_str(&format!("  - notes: {}\n", task.notes.trim()));
            }
        }
        report.push('\n');
    }

    report
}
