use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub stats_area: Rect,
    pub board_area: Rect,
    pub detail_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Stats strip (3 rows)
/// - Main area: board columns (70%) | selected-task detail (30%)
/// - Bottom: status line (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Stats strip
            Constraint::Min(0),    // Board + detail
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70), // Board columns
            Constraint::Percentage(30), // Detail pane
        ])
        .split(rows[2]);

    MainLayout {
        keybindings_area: rows[0],
        stats_area: rows[1],
        board_area: columns[0],
        detail_area: columns[1],
        status_area: rows[3],
    }
}

/// Evenly split the board area into one column per list
pub fn list_columns(area: Rect, list_count: usize) -> Vec<Rect> {
    if list_count == 0 {
        return Vec::new();
    }
    let share = (100 / list_count.min(100)) as u16;
    let constraints: Vec<Constraint> =
        (0..list_count).map(|_| Constraint::Percentage(share)).collect();

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Create centered modal area (for forms and confirmations)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(14),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 120, 50);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.stats_area.height, 3);
        assert!(layout.board_area.height > 0);
        assert!(layout.detail_area.height > 0);
        assert!(layout.board_area.width > layout.detail_area.width);
        assert_eq!(layout.status_area.height, 1);
    }

    #[test]
    fn test_list_columns() {
        let area = Rect::new(0, 0, 90, 30);

        assert!(list_columns(area, 0).is_empty());
        assert_eq!(list_columns(area, 1).len(), 1);

        let three = list_columns(area, 3);
        assert_eq!(three.len(), 3);
        assert!(three.iter().all(|c| c.width > 0));
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 14);
    }
}
