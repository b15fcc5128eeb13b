use crate::domain::{Board, Task, TimerState, UiMode};
use crate::persistence::save_board;
use crate::report::{board_stats, BoardStats};
use crate::timer::engine;
use anyhow::Result;
use uuid::Uuid;

/// Input form state for list/task/add-time dialogs
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub title: String,
    pub notes: String,
    /// Budget entry in minutes, parsed on submit
    pub minutes: String,
    /// 0 = title, 1 = notes, 2 = minutes
    pub editing_field: usize,
}

impl InputFormState {
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            notes: String::new(),
            minutes: String::new(),
            editing_field: 0,
        }
    }

    pub fn next_field(&mut self) {
        self.editing_field = (self.editing_field + 1) % 3;
    }

    pub fn prev_field(&mut self) {
        self.editing_field = (self.editing_field + 2) % 3;
    }
}

/// What a pending delete confirmation refers to
#[derive(Debug, Clone, Copy)]
pub enum DeleteTarget {
    List(Uuid),
    Task(Uuid),
}

/// Main application state. Every mutation funnels through methods here,
/// which call the timer engine or board operations, recompute the stats
/// snapshot, and mark the board for autosave.
pub struct AppState {
    pub board: Board,
    pub stats: BoardStats,
    /// Selected column
    pub selected_list: usize,
    /// Selected row within the selected column
    pub selected_task: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub delete_target: Option<DeleteTarget>,
    pub needs_save: bool,
    /// One-line message for the status row (e.g. degraded persistence)
    pub status: Option<String>,
}

impl AppState {
    pub fn new(mut board: Board) -> Self {
        // A board saved mid-run accounts the downtime via its wall-clock
        // stamp; commit it and come up paused.
        engine::pause_active(&mut board);

        let stats = board_stats(&board);
        Self {
            board,
            stats,
            selected_list: 0,
            selected_task: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            delete_target: None,
            needs_save: false,
            status: None,
        }
    }

    /// Recompute stats and schedule a save. Call after every mutation.
    fn mutated(&mut self) {
        self.stats = board_stats(&self.board);
        self.needs_save = true;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.board.lists.is_empty() {
            self.selected_list = 0;
            self.selected_task = 0;
            return;
        }
        if self.selected_list >= self.board.lists.len() {
            self.selected_list = self.board.lists.len() - 1;
        }
        let task_count = self.board.lists[self.selected_list].tasks.len();
        if task_count == 0 {
            self.selected_task = 0;
        } else if self.selected_task >= task_count {
            self.selected_task = task_count - 1;
        }
    }

    // ── Selection ────────────────────────────────────────────────────

    pub fn selected_list_id(&self) -> Option<Uuid> {
        self.board.lists.get(self.selected_list).map(|l| l.id)
    }

    pub fn selected_task_ref(&self) -> Option<&Task> {
        self.board
            .lists
            .get(self.selected_list)?
            .tasks
            .get(self.selected_task)
    }

    pub fn selected_task_id(&self) -> Option<Uuid> {
        self.selected_task_ref().map(|t| t.id)
    }

    pub fn select_left(&mut self) {
        if self.selected_list > 0 {
            self.selected_list -= 1;
            self.selected_task = 0;
            self.clamp_selection();
        }
    }

    pub fn select_right(&mut self) {
        if self.selected_list + 1 < self.board.lists.len() {
            self.selected_list += 1;
            self.selected_task = 0;
            self.clamp_selection();
        }
    }

    pub fn select_up(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    pub fn select_down(&mut self) {
        if let Some(list) = self.board.lists.get(self.selected_list) {
            if self.selected_task + 1 < list.tasks.len() {
                self.selected_task += 1;
            }
        }
    }

    // ── Timer operations ─────────────────────────────────────────────

    /// Interacting with any task other than the running one pauses the
    /// running one first (the outside-interaction rule).
    fn pause_active_unless(&mut self, task_id: Uuid) {
        if engine::active_task_id(&self.board).is_some_and(|active| active != task_id)
            && engine::pause_active(&mut self.board)
        {
            self.mutated();
        }
    }

    /// Space on a task: idle starts, running pauses, paused resumes
    pub fn toggle_selected_timer(&mut self) {
        let Some(task_id) = self.selected_task_id() else {
            return;
        };
        let state = self
            .board
            .task(task_id)
            .map(|t| t.timer_state())
            .unwrap_or(TimerState::Idle);

        let changed = match state {
            TimerState::Idle => engine::start(&mut self.board, task_id),
            TimerState::Running => engine::pause(&mut self.board, task_id),
            TimerState::Paused => engine::resume(&mut self.board, task_id),
            TimerState::Finished => false,
        };
        if changed {
            self.mutated();
        }
    }

    pub fn finish_selected(&mut self) {
        let Some(task_id) = self.selected_task_id() else {
            return;
        };
        self.pause_active_unless(task_id);
        if engine::finish(&mut self.board, task_id) {
            self.mutated();
        }
    }

    pub fn add_time_selected(&mut self, secs: u64) {
        let Some(task_id) = self.selected_task_id() else {
            return;
        };
        self.pause_active_unless(task_id);
        if engine::add_time(&mut self.board, task_id, secs) {
            self.mutated();
        }
    }

    pub fn undo_time_selected(&mut self) {
        let Some(task_id) = self.selected_task_id() else {
            return;
        };
        self.pause_active_unless(task_id);
        if engine::undo_last_time(&mut self.board, task_id) {
            self.mutated();
        }
    }

    // ── Moves (the drag gestures) ────────────────────────────────────

    /// Any move pauses the active timer first, like starting a drag
    fn begin_drag(&mut self) {
        if engine::pause_active(&mut self.board) {
            self.mutated();
        }
    }

    pub fn move_selected_task_up(&mut self) {
        let Some(task_id) = self.selected_task_id() else {
            return;
        };
        self.begin_drag();
        if self.board.reorder_task(task_id, -1) {
            self.selected_task -= 1;
            self.mutated();
        }
    }

    pub fn move_selected_task_down(&mut self) {
        let Some(task_id) = self.selected_task_id() else {
            return;
        };
        self.begin_drag();
        if self.board.reorder_task(task_id, 1) {
            self.selected_task += 1;
            self.mutated();
        }
    }

    /// Move the selected task to the neighboring list. `delta` is -1 or +1.
    pub fn move_selected_task_sideways(&mut self, delta: isize) {
        let Some(task_id) = self.selected_task_id() else {
            return;
        };
        let target = self.selected_list as isize + delta;
        if target < 0 || target as usize >= self.board.lists.len() {
            return;
        }
        let target_list = self.board.lists[target as usize].id;

        self.begin_drag();
        if self.board.move_task(task_id, target_list) {
            self.selected_list = target as usize;
            self.selected_task = self.board.lists[self.selected_list].tasks.len() - 1;
            self.mutated();
        }
    }

    pub fn move_selected_list(&mut self, delta: isize) {
        let Some(list_id) = self.selected_list_id() else {
            return;
        };
        self.begin_drag();
        if self.board.reorder_list(list_id, delta) {
            self.selected_list = (self.selected_list as isize + delta) as usize;
            self.mutated();
        }
    }

    // ── Forms and modals ─────────────────────────────────────────────

    pub fn open_add_list(&mut self) {
        self.input_form = Some(InputFormState::empty());
        self.ui_mode = UiMode::AddingList;
    }

    pub fn open_rename_list(&mut self) {
        let Some(list) = self.board.lists.get(self.selected_list) else {
            return;
        };
        let mut form = InputFormState::empty();
        form.title = list.title.clone();
        self.input_form = Some(form);
        self.ui_mode = UiMode::RenamingList;
    }

    pub fn open_rename_board(&mut self) {
        let mut form = InputFormState::empty();
        form.title = self.board.title.clone();
        self.input_form = Some(form);
        self.ui_mode = UiMode::RenamingBoard;
    }

    pub fn open_add_task(&mut self) {
        if self.board.lists.is_empty() {
            self.status = Some("Add a list first".to_string());
            return;
        }
        self.input_form = Some(InputFormState::empty());
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn open_edit_task(&mut self) {
        let Some(task) = self.selected_task_ref() else {
            return;
        };
        if task.is_completed {
            return;
        }
        let mut form = InputFormState::empty();
        form.title = task.title.clone();
        form.notes = task.notes.clone();
        self.input_form = Some(form);
        self.ui_mode = UiMode::EditingTask;
    }

    pub fn open_add_time(&mut self) {
        let Some(task) = self.selected_task_ref() else {
            return;
        };
        if task.is_completed || task.is_running {
            return;
        }
        let mut form = InputFormState::empty();
        form.editing_field = 2;
        self.input_form = Some(form);
        self.ui_mode = UiMode::AddingTime;
    }

    pub fn request_delete_task(&mut self) {
        if let Some(task_id) = self.selected_task_id() {
            self.delete_target = Some(DeleteTarget::Task(task_id));
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    pub fn request_delete_list(&mut self) {
        if let Some(list_id) = self.selected_list_id() {
            self.delete_target = Some(DeleteTarget::List(list_id));
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    pub fn confirm_delete(&mut self) {
        // Pause whatever runs before removal; deleting the running task
        // itself must not leave a dangling active timer.
        let changed = match self.delete_target.take() {
            Some(DeleteTarget::Task(task_id)) => {
                self.begin_drag();
                self.board.remove_task(task_id).is_some()
            }
            Some(DeleteTarget::List(list_id)) => {
                self.begin_drag();
                self.board.remove_list(list_id)
            }
            None => false,
        };
        self.ui_mode = UiMode::Normal;
        if changed {
            self.mutated();
        }
    }

    pub fn cancel_modal(&mut self) {
        self.input_form = None;
        self.delete_target = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Apply the open form. Invalid numeric input is treated as zero.
    pub fn submit_form(&mut self) {
        let Some(form) = self.input_form.take() else {
            self.ui_mode = UiMode::Normal;
            return;
        };
        let title = form.title.trim().to_string();

        let changed = match self.ui_mode {
            UiMode::AddingList => {
                if title.is_empty() {
                    false
                } else {
                    self.board.add_list(title);
                    self.selected_list = self.board.lists.len() - 1;
                    true
                }
            }
            UiMode::RenamingList => match self.selected_list_id() {
                Some(list_id) if !title.is_empty() => self.board.rename_list(list_id, title),
                _ => false,
            },
            UiMode::RenamingBoard => {
                if title.is_empty() {
                    false
                } else {
                    self.board.set_title(title);
                    true
                }
            }
            UiMode::AddingTask => match self.selected_list_id() {
                Some(list_id) => {
                    let mut task = Task::new(title);
                    task.notes = form.notes.trim().to_string();
                    let minutes: u64 = form.minutes.trim().parse().unwrap_or(0);
                    if minutes > 0 {
                        task.push_time(minutes * 60);
                    }
                    let added = self.board.add_task(list_id, task);
                    if added {
                        self.selected_task = self.board.lists[self.selected_list].tasks.len() - 1;
                    }
                    added
                }
                None => false,
            },
            UiMode::EditingTask => match self.selected_task_id() {
                Some(task_id) => {
                    self.pause_active_unless(task_id);
                    match self.board.task_mut(task_id) {
                        Some(task) if !task.is_completed => {
                            task.title = title;
                            task.notes = form.notes.trim().to_string();
                            self.board.touch();
                            true
                        }
                        _ => false,
                    }
                }
                None => false,
            },
            UiMode::AddingTime => match self.selected_task_id() {
                Some(task_id) => {
                    let minutes: u64 = form.minutes.trim().parse().unwrap_or(0);
                    minutes > 0 && engine::add_time(&mut self.board, task_id, minutes * 60)
                }
                None => false,
            },
            _ => false,
        };

        self.ui_mode = UiMode::Normal;
        if changed {
            self.mutated();
        }
    }

    // ── Persistence ──────────────────────────────────────────────────

    /// Flush the board to disk. A failed save degrades to an in-memory
    /// session: the error lands in the status line, never in the UI loop.
    pub fn save(&mut self) -> Result<()> {
        self.needs_save = false;
        if let Err(err) = save_board(&self.board) {
            self.status = Some(format!("Save failed (in-memory only): {err:#}"));
        }
        Ok(())
    }

    /// Pause whatever is running and flush. Called on exit.
    pub fn shutdown(&mut self) {
        engine::pause_active(&mut self.board);
        let _ = self.save();
    }
}
