use crate::app::{AppState, DeleteTarget};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the delete confirmation modal
pub fn render_confirm_delete(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(target) = app.delete_target else {
        return;
    };

    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let subject = match target {
        DeleteTarget::List(list_id) => app
            .board
            .list(list_id)
            .map(|l| format!("list \"{}\" and its {} task(s)", l.title, l.tasks.len())),
        DeleteTarget::Task(task_id) => app
            .board
            .task(task_id)
            .map(|t| format!("task \"{}\"", t.title)),
    };

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    match subject {
        Some(subject) => lines.push(Line::raw(format!("  Delete {}?", subject))),
        None => lines.push(Line::raw("  Nothing to delete.")),
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [y]", modal_title_style()),
        Span::raw(" Delete  "),
        Span::styled("[n]", modal_title_style()),
        Span::raw(" Cancel  "),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Confirm Delete ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
