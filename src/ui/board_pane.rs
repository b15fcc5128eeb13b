use crate::app::AppState;
use crate::domain::{Task, TimerState};
use crate::timefmt::{format_compact, format_digital, performance};
use crate::timer::engine;
use crate::ui::layout::list_columns;
use crate::ui::styles::{
    border_style, default_style, done_style, idle_style, low_time_style, overtime_style,
    paused_style, running_style, selected_border_style, selected_style, title_style,
    under_time_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the board as one column per list
pub fn render_board_pane(f: &mut Frame, app: &AppState, area: Rect) {
    if app.board.lists.is_empty() {
        let empty = List::new(vec![ListItem::new("  Press A to add a list")]).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(format!(" {} ", app.board.title), title_style())),
        );
        f.render_widget(empty, area);
        return;
    }

    let columns = list_columns(area, app.board.lists.len());

    for (list_idx, (list, column)) in app.board.lists.iter().zip(columns.iter()).enumerate() {
        let is_selected_list = list_idx == app.selected_list;

        let items: Vec<ListItem> = list
            .tasks
            .iter()
            .enumerate()
            .map(|(task_idx, task)| {
                let line = task_line(task);
                let style = if is_selected_list && task_idx == app.selected_task {
                    selected_style()
                } else {
                    default_style()
                };
                ListItem::new(line).style(style)
            })
            .collect();

        let border = if is_selected_list {
            selected_border_style()
        } else {
            border_style()
        };

        let title = format!(" {} ({}) ", list.title, list.tasks.len());
        let widget = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(title, title_style())),
        );

        f.render_widget(widget, *column);
    }
}

/// One row per task: a state glyph, the title, and the time readout.
/// The running task shows the live digital countdown; everything else
/// shows static compact times.
fn task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    match task.timer_state() {
        TimerState::Finished => {
            spans.push(Span::styled("✓ ".to_string(), done_style()));
            spans.push(Span::styled(task.title.clone(), done_style()));

            let perf = performance(task.allocated_secs, task.used_secs);
            let (sign, style) = if perf.is_overtime {
                ("-", overtime_style())
            } else {
                ("+", under_time_style())
            };
            spans.push(Span::raw("  ".to_string()));
            spans.push(Span::styled(
                format!("{}{}", sign, format_compact(perf.difference)),
                style,
            ));
        }
        TimerState::Running => {
            let remaining = engine::live_remaining(task);
            let style = if remaining <= 60 {
                low_time_style()
            } else {
                running_style()
            };
            spans.push(Span::styled("▶ ".to_string(), style));
            spans.push(Span::raw(task.title.clone()));
            spans.push(Span::raw("  ".to_string()));
            spans.push(Span::styled(format_digital(remaining), style));
        }
        TimerState::Paused => {
            spans.push(Span::styled("⏸ ".to_string(), paused_style()));
            spans.push(Span::raw(task.title.clone()));
            spans.push(Span::raw("  ".to_string()));
            spans.push(Span::styled(
                format_compact(task.static_remaining()),
                paused_style(),
            ));
        }
        TimerState::Idle => {
            let title = if task.title.trim().is_empty() {
                "(untitled)".to_string()
            } else {
                task.title.clone()
            };
            spans.push(Span::styled("· ".to_string(), idle_style()));
            spans.push(Span::raw(title));
            spans.push(Span::raw("  ".to_string()));
            spans.push(Span::styled(
                format_compact(task.static_remaining()),
                idle_style(),
            ));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_line_idle_shows_budget() {
        let mut task = Task::new("Plan sprint");
        task.push_time(1500);
        let line = format!("{:?}", task_line(&task));
        assert!(line.contains("Plan sprint"));
        assert!(line.contains("25m"));
    }

    #[test]
    fn test_task_line_untitled_placeholder() {
        let task = Task::new("");
        let line = format!("{:?}", task_line(&task));
        assert!(line.contains("(untitled)"));
    }

    #[test]
    fn test_task_line_finished_shows_performance() {
        let mut task = Task::new("Ship it");
        task.push_time(100);
        task.used_secs = 80;
        task.complete(0);
        let line = format!("{:?}", task_line(&task));
        assert!(line.contains("+20s"));
    }

    #[test]
    fn test_task_line_overtime_sign() {
        let mut task = Task::new("Late");
        task.push_time(100);
        task.used_secs = 130;
        task.complete(0);
        let line = format!("{:?}", task_line(&task));
        assert!(line.contains("-30s"));
    }
}
