pub mod board_pane;
pub mod detail_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod stats_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use board_pane::render_board_pane;
use detail_pane::render_detail_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_confirm_delete;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use stats_pane::render_stats_pane;
use styles::status_style;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_stats_pane(f, app, layout.stats_area);
    render_board_pane(f, app, layout.board_area);
    render_detail_pane(f, app, layout.detail_area);

    // Status line (degraded persistence and other one-liners)
    if let Some(status) = &app.status {
        let line = Paragraph::new(Span::styled(format!(" {}", status), status_style()));
        f.render_widget(line, layout.status_area);
    }

    // Overlays
    if app.ui_mode == UiMode::ConfirmDelete {
        render_confirm_delete(f, app, size);
    } else if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
