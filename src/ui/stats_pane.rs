use crate::app::AppState;
use crate::timefmt::format_compact;
use crate::ui::styles::{
    border_style, overtime_style, stat_value_style, title_style, under_time_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the board stats strip: counts, totals, points, efficiency.
/// These are the static aggregates; they move on mutations, not on ticks.
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let stats = &app.stats;

    let line = Line::from(vec![
        Span::raw(" Tasks "),
        Span::styled(
            format!("{}/{}", stats.current_tasks, stats.total_tasks),
            stat_value_style(),
        ),
        Span::raw("  ·  Allocated "),
        Span::styled(format_compact(stats.total_allocated_secs), stat_value_style()),
        Span::raw("  ·  Remaining "),
        Span::styled(format_compact(stats.total_remaining_secs), stat_value_style()),
        Span::raw("  ·  Won "),
        Span::styled(
            format!("+{}", format_compact(stats.points_won)),
            under_time_style(),
        ),
        Span::raw("  Lost "),
        Span::styled(
            format!("-{}", format_compact(stats.points_lost)),
            overtime_style(),
        ),
        Span::raw("  ·  Efficiency "),
        Span::styled(
            format!("{:.0}%", stats.finish_efficiency),
            stat_value_style(),
        ),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(
                format!(" {} ", app.board.title),
                title_style(),
            )),
    );

    f.render_widget(widget, area);
}
