use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_mode(app, key),
        _ => handle_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Quit
        KeyCode::Char('q') => return Ok(true),

        // Navigation (Shift moves the task instead - the drag gesture)
        KeyCode::Up => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_selected_task_up();
            } else {
                app.select_up();
            }
        }
        KeyCode::Down => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_selected_task_down();
            } else {
                app.select_down();
            }
        }
        KeyCode::Left => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_selected_task_sideways(-1);
            } else {
                app.select_left();
            }
        }
        KeyCode::Right => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_selected_task_sideways(1);
            } else {
                app.select_right();
            }
        }

        // Reorder lists
        KeyCode::Char('<') => app.move_selected_list(-1),
        KeyCode::Char('>') => app.move_selected_list(1),

        // Timer controls
        KeyCode::Char(' ') => app.toggle_selected_timer(),
        KeyCode::Char('f') => app.finish_selected(),

        // Budget controls
        KeyCode::Char('+') => app.add_time_selected(5 * 60),
        KeyCode::Char('t') => app.open_add_time(),
        KeyCode::Char('u') => app.undo_time_selected(),

        // Task CRUD
        KeyCode::Char('a') => app.open_add_task(),
        KeyCode::Char('e') => app.open_edit_task(),
        KeyCode::Char('d') => app.request_delete_task(),

        // List CRUD
        KeyCode::Char('A') => app.open_add_list(),
        KeyCode::Char('r') => app.open_rename_list(),
        KeyCode::Char('D') => app.request_delete_list(),

        // Board title
        KeyCode::Char('R') => app.open_rename_board(),

        _ => {}
    }
    Ok(false)
}

/// Handle keys in the delete confirmation modal
fn handle_confirm_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Esc => app.cancel_modal(),
        _ => {}
    }
    Ok(false)
}

/// Handle keys while an input form is open
fn handle_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Single-field modes don't cycle fields
    let multi_field = app.ui_mode == UiMode::AddingTask || app.ui_mode == UiMode::EditingTask;

    match key.code {
        KeyCode::Esc => app.cancel_modal(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab if multi_field => {
            if let Some(form) = app.input_form.as_mut() {
                form.next_field();
            }
        }
        KeyCode::BackTab if multi_field => {
            if let Some(form) = app.input_form.as_mut() {
                form.prev_field();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.input_form.as_mut() {
                match form.editing_field {
                    0 => {
                        form.title.pop();
                    }
                    1 => {
                        form.notes.pop();
                    }
                    _ => {
                        form.minutes.pop();
                    }
                }
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.input_form.as_mut() {
                match form.editing_field {
                    0 => form.title.push(c),
                    1 => form.notes.push(c),
                    // Budget field only accepts digits
                    _ => {
                        if c.is_ascii_digit() {
                            form.minutes.push(c);
                        }
                    }
                }
            }
        }
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Board, Task};
    use crossterm::event::KeyEvent;

    fn app() -> AppState {
        let mut board = Board::new("Test");
        let todo = board.add_list("To do");
        board.add_list("Doing");
        let mut task = Task::new("Task");
        task.push_time(600);
        board.add_task(todo, task);
        AppState::new(board)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());
        assert!(!handle_key(&mut app, press(KeyCode::Char('x'))).unwrap());
    }

    #[test]
    fn test_space_toggles_timer() {
        let mut app = app();
        let task_id = app.selected_task_id().unwrap();

        handle_key(&mut app, press(KeyCode::Char(' '))).unwrap();
        assert!(app.board.task(task_id).unwrap().is_running);

        handle_key(&mut app, press(KeyCode::Char(' '))).unwrap();
        assert!(app.board.task(task_id).unwrap().is_paused);
    }

    #[test]
    fn test_shift_right_moves_task_across_lists() {
        let mut app = app();
        let task_id = app.selected_task_id().unwrap();

        handle_key(&mut app, shift(KeyCode::Right)).unwrap();
        assert_eq!(app.board.owning_list(task_id), Some(app.board.lists[1].id));
    }

    #[test]
    fn test_form_typing_and_submit() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('A'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingList);

        for c in "Done".chars() {
            handle_key(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.board.lists.len(), 3);
        assert_eq!(app.board.lists[2].title, "Done");
    }

    #[test]
    fn test_budget_field_accepts_digits_only() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTime);

        for c in "2x5".chars() {
            handle_key(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.input_form.as_ref().unwrap().minutes, "25");

        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        let task = app.selected_task_ref().unwrap();
        assert_eq!(task.allocated_secs, 600 + 25 * 60);
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('d'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);

        handle_key(&mut app, press(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.board.lists[0].tasks.len(), 1);

        handle_key(&mut app, press(KeyCode::Char('d'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char('y'))).unwrap();
        assert!(app.board.lists[0].tasks.is_empty());
    }
}
