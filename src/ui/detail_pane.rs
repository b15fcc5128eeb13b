use crate::app::AppState;
use crate::domain::TimerState;
use crate::timefmt::{format_compact, format_digital, performance};
use crate::timer::engine;
use crate::ui::styles::{
    border_style, default_style, overtime_style, running_style, title_style, under_time_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the detail pane for the selected task
pub fn render_detail_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Task ", title_style()));

    let Some(task) = app.selected_task_ref() else {
        let empty = Paragraph::new("No task selected").block(block);
        f.render_widget(empty, area);
        return;
    };

    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Title:  ", title_style()),
        Span::raw(task.title.clone()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("State:  ", title_style()),
        Span::raw(task.timer_state().label()),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Budget: ", title_style()),
        Span::raw(format_compact(task.allocated_secs)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Used:   ", title_style()),
        Span::raw(format_compact(task.used_secs)),
    ]));

    // Live countdown only for the running task; everyone else gets the
    // static remainder.
    match task.timer_state() {
        TimerState::Running => {
            lines.push(Line::from(vec![
                Span::styled("Left:   ", title_style()),
                Span::styled(
                    format_digital(engine::live_remaining(task)),
                    running_style(),
                ),
            ]));
        }
        TimerState::Finished => {
            let perf = performance(task.allocated_secs, task.used_secs);
            let (sign, style) = if perf.is_overtime {
                ("-", overtime_style())
            } else {
                ("+", under_time_style())
            };
            lines.push(Line::from(vec![
                Span::styled("Score:  ", title_style()),
                Span::styled(format!("{}{}", sign, format_compact(perf.difference)), style),
            ]));
        }
        _ => {
            lines.push(Line::from(vec![
                Span::styled("Left:   ", title_style()),
                Span::raw(format_compact(task.static_remaining())),
            ]));
        }
    }

    if !task.time_history.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Added:  ", title_style()),
            Span::raw(format!("{} entries (u undoes the last)", task.time_history.len())),
        ]));
    }
    lines.push(Line::raw(""));

    if !task.notes.trim().is_empty() {
        lines.push(Line::from(Span::styled("Notes:", title_style())));
        for note_line in task.notes.lines() {
            lines.push(Line::raw(format!("  {}", note_line)));
        }
    } else {
        lines.push(Line::from(Span::styled("Notes: (empty)", default_style())));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
