use super::task::Task;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ordered column of tasks. Order is insertion/move order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskList {
    pub id: Uuid,
    pub title: String,
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Local>,
}

impl TaskList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            tasks: Vec::new(),
            created_at: Local::now(),
        }
    }
}

/// The root aggregate. Every list and task is owned by exactly one board,
/// strictly tree-shaped; `updated_at` bumps on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub title: String,
    pub lists: Vec<TaskList>,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

impl Board {
    pub fn new(title: impl Into<String>) -> Self {
        let now = Local::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            lists: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The board a first run starts with
    pub fn default_board() -> Self {
        Self::new("Task Timer Board")
    }

    /// Bump the modification stamp. Every mutating operation ends here.
    pub fn touch(&mut self) {
        self.updated_at = Local::now();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    // ── Lists ────────────────────────────────────────────────────────

    pub fn add_list(&mut self, title: impl Into<String>) -> Uuid {
        let list = TaskList::new(title);
        let id = list.id;
        self.lists.push(list);
        self.touch();
        id
    }

    pub fn rename_list(&mut self, list_id: Uuid, title: impl Into<String>) -> bool {
        match self.list_mut(list_id) {
            Some(list) => {
                list.title = title.into();
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Remove a list and everything in it
    pub fn remove_list(&mut self, list_id: Uuid) -> bool {
        let before = self.lists.len();
        self.lists.retain(|l| l.id != list_id);
        if self.lists.len() != before {
            self.touch();
            true
        } else {
            false
        }
    }

    /// Swap a list with its neighbor. `delta` is -1 or +1.
    pub fn reorder_list(&mut self, list_id: Uuid, delta: isize) -> bool {
        let Some(idx) = self.lists.iter().position(|l| l.id == list_id) else {
            return false;
        };
        let target = idx as isize + delta;
        if target < 0 || target as usize >= self.lists.len() {
            return false;
        }
        self.lists.swap(idx, target as usize);
        self.touch();
        true
    }

    pub fn list(&self, list_id: Uuid) -> Option<&TaskList> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    pub fn list_mut(&mut self, list_id: Uuid) -> Option<&mut TaskList> {
        self.lists.iter_mut().find(|l| l.id == list_id)
    }

    // ── Tasks ────────────────────────────────────────────────────────

    pub fn add_task(&mut self, list_id: Uuid, task: Task) -> bool {
        match self.list_mut(list_id) {
            Some(list) => {
                list.tasks.push(task);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Detach a task from whichever list owns it
    pub fn remove_task(&mut self, task_id: Uuid) -> Option<Task> {
        let (list_idx, task_idx) = self.locate_task(task_id)?;
        let task = self.lists[list_idx].tasks.remove(task_idx);
        self.touch();
        Some(task)
    }

    /// Move a task to the end of another list. Identity and timer state
    /// travel with it; a move to the owning list re-appends it there.
    pub fn move_task(&mut self, task_id: Uuid, target_list_id: Uuid) -> bool {
        let Some(target_idx) = self.lists.iter().position(|l| l.id == target_list_id) else {
            return false;
        };
        let Some(task) = self.remove_task(task_id) else {
            return false;
        };
        // remove_task already bumped updated_at
        self.lists[target_idx].tasks.push(task);
        true
    }

    /// Swap a task with its neighbor inside its list. `delta` is -1 or +1.
    pub fn reorder_task(&mut self, task_id: Uuid, delta: isize) -> bool {
        let Some((list_idx, task_idx)) = self.locate_task(task_id) else {
            return false;
        };
        let target = task_idx as isize + delta;
        if target < 0 || target as usize >= self.lists[list_idx].tasks.len() {
            return false;
        }
        self.lists[list_idx].tasks.swap(task_idx, target as usize);
        self.touch();
        true
    }

    /// (list index, task index) of a task
    fn locate_task(&self, task_id: Uuid) -> Option<(usize, usize)> {
        self.lists.iter().enumerate().find_map(|(list_idx, list)| {
            list.tasks
                .iter()
                .position(|t| t.id == task_id)
                .map(|task_idx| (list_idx, task_idx))
        })
    }

    pub fn task(&self, task_id: Uuid) -> Option<&Task> {
        self.tasks().find(|t| t.id == task_id)
    }

    pub fn task_mut(&mut self, task_id: Uuid) -> Option<&mut Task> {
        self.tasks_mut().find(|t| t.id == task_id)
    }

    /// The list currently owning a task
    pub fn owning_list(&self, task_id: Uuid) -> Option<Uuid> {
        self.lists
            .iter()
            .find(|l| l.tasks.iter().any(|t| t.id == task_id))
            .map(|l| l.id)
    }

    /// Every task on the board, in list order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.lists.iter().flat_map(|l| l.tasks.iter())
    }

    pub fn tasks_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.lists.iter_mut().flat_map(|l| l.tasks.iter_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_two_lists() -> (Board, Uuid, Uuid) {
        let mut board = Board::new("Test board");
        let todo = board.add_list("To do");
        let doing = board.add_list("Doing");
        (board, todo, doing)
    }

    #[test]
    fn test_default_board() {
        let board = Board::default_board();
        assert_eq!(board.title, "Task Timer Board");
        assert!(board.lists.is_empty());
    }

    #[test]
    fn test_list_crud() {
        let (mut board, todo, _) = board_with_two_lists();
        assert_eq!(board.lists.len(), 2);

        assert!(board.rename_list(todo, "Backlog"));
        assert_eq!(board.list(todo).unwrap().title, "Backlog");

        assert!(board.remove_list(todo));
        assert_eq!(board.lists.len(), 1);
        assert!(!board.remove_list(todo)); // already gone
    }

    #[test]
    fn test_add_and_find_task() {
        let (mut board, todo, _) = board_with_two_lists();
        let task = Task::new("Write report");
        let task_id = task.id;

        assert!(board.add_task(todo, task));
        assert_eq!(board.task(task_id).unwrap().title, "Write report");
        assert_eq!(board.owning_list(task_id), Some(todo));
    }

    #[test]
    fn test_move_task_preserves_identity_and_timer_state() {
        let (mut board, todo, doing) = board_with_two_lists();
        let mut task = Task::new("Carry me");
        task.push_time(600);
        task.used_secs = 42;
        task.is_paused = true;
        let task_id = task.id;
        board.add_task(todo, task);

        assert!(board.move_task(task_id, doing));
        assert_eq!(board.owning_list(task_id), Some(doing));

        let moved = board.task(task_id).unwrap();
        assert_eq!(moved.used_secs, 42);
        assert!(moved.is_paused);
        assert_eq!(moved.allocated_secs, 600);
        // Appended at the end of the target list
        assert_eq!(board.list(doing).unwrap().tasks.last().unwrap().id, task_id);
    }

    #[test]
    fn test_move_task_to_unknown_list_is_noop() {
        let (mut board, todo, _) = board_with_two_lists();
        let task = Task::new("Stay");
        let task_id = task.id;
        board.add_task(todo, task);

        assert!(!board.move_task(task_id, Uuid::new_v4()));
        assert_eq!(board.owning_list(task_id), Some(todo));
    }

    #[test]
    fn test_reorder_task_within_list() {
        let (mut board, todo, _) = board_with_two_lists();
        let first = Task::new("First");
        let second = Task::new("Second");
        let (first_id, second_id) = (first.id, second.id);
        board.add_task(todo, first);
        board.add_task(todo, second);

        assert!(board.reorder_task(second_id, -1));
        let titles: Vec<_> = board.list(todo).unwrap().tasks.iter().map(|t| t.id).collect();
        assert_eq!(titles, vec![second_id, first_id]);

        // Out of bounds is a no-op
        assert!(!board.reorder_task(second_id, -1));
    }

    #[test]
    fn test_reorder_lists() {
        let (mut board, todo, doing) = board_with_two_lists();
        assert!(board.reorder_list(doing, -1));
        assert_eq!(board.lists[0].id, doing);
        assert_eq!(board.lists[1].id, todo);
        assert!(!board.reorder_list(doing, -1));
    }

    #[test]
    fn test_mutations_bump_updated_at() {
        let (mut board, todo, _) = board_with_two_lists();
        let before = board.updated_at;
        board.add_task(todo, Task::new("Bump"));
        assert!(board.updated_at >= before);
    }

    #[test]
    fn test_tasks_iterates_in_list_order() {
        let (mut board, todo, doing) = board_with_two_lists();
        board.add_task(todo, Task::new("A"));
        board.add_task(doing, Task::new("B"));
        board.add_task(todo, Task::new("C"));

        let titles: Vec<_> = board.tasks().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C", "B"]);
    }
}
