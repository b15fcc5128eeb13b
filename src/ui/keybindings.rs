use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ←↑↓→ select   "),
        Span::raw("Shift+arrows move   "),
        Span::raw("Space start/pause   "),
        Span::raw("f finish   "),
        Span::raw("+/t add time   "),
        Span::raw("u undo   "),
        Span::raw("a task   "),
        Span::raw("A list   "),
        Span::raw("e edit   "),
        Span::raw("d/D delete   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
