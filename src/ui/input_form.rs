use crate::app::AppState;
use crate::domain::UiMode;
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

/// Render the input form for the current form mode
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(form) = &app.input_form else {
        return;
    };

    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let title_text = match app.ui_mode {
        UiMode::AddingList => " Add List ",
        UiMode::RenamingList => " Rename List ",
        UiMode::RenamingBoard => " Rename Board ",
        UiMode::AddingTask => " Add Task ",
        UiMode::EditingTask => " Edit Task ",
        UiMode::AddingTime => " Add Time ",
        _ => " Input ",
    };

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    match app.ui_mode {
        UiMode::AddingTask | UiMode::EditingTask => {
            push_field(&mut lines, "Title:", &form.title, form.editing_field == 0);
            push_field(&mut lines, "Notes:", &form.notes, form.editing_field == 1);
            if app.ui_mode == UiMode::AddingTask {
                push_field(
                    &mut lines,
                    "Budget (minutes):",
                    &form.minutes,
                    form.editing_field == 2,
                );
            }
            lines.push(Line::raw("Tab to switch fields  ·  Enter to submit  ·  Esc to cancel"));
        }
        UiMode::AddingTime => {
            push_field(&mut lines, "Minutes to add:", &form.minutes, true);
            lines.push(Line::raw("Enter to submit  ·  Esc to cancel"));
        }
        _ => {
            push_field(&mut lines, "Title:", &form.title, true);
            lines.push(Line::raw("Enter to submit  ·  Esc to cancel"));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Label, value line with a cursor on the active field, trailing blank
fn push_field(lines: &mut Vec<Line<'static>>, label: &str, value: &str, active: bool) {
    let label_text = if active {
        format!("{} (editing)", label)
    } else {
        label.to_string()
    };
    lines.push(Line::raw(label_text));

    let mut spans = vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
    ];
    if active {
        spans.push(Span::styled("█", modal_title_style())); // Cursor
    }
    lines.push(Line::from(spans));
    lines.push(Line::raw(""));
}
