//! Dashboard task list state

use crate::error::ApiError;
use crate::models::{Task, TaskId};
use crate::tasks::{validate_task_text, TaskCommand, TaskList, TaskOutcome};

use super::{BusyGuard, Notice};

/// State of the task list view: the held tasks, the add input, the inline
/// editor, and the messages shown above the list.
///
/// Mutations follow a begin/complete cycle. `begin_*` returns the command to
/// run (or `None` when the input is invalid or another mutation is in
/// flight); the caller runs it and passes the result to [`Self::complete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    tasks: TaskList,
    pub new_task: String,
    editing: Option<TaskId>,
    pub edit_text: String,
    error: Option<String>,
    notice: Notice,
    busy: BusyGuard,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub const fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn notice(&self) -> &Notice {
        &self.notice
    }

    /// Clears the success message if it is still the one shown at `generation`.
    pub fn expire_notice(&mut self, generation: u64) -> bool {
        self.notice.expire(generation)
    }

    pub const fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Command for the initial fetch. Fetching does not take the busy slot.
    pub const fn begin_refresh(&self) -> TaskCommand {
        TaskCommand::List
    }

    pub fn begin_create(&mut self) -> Option<TaskCommand> {
        if self.busy.is_busy() {
            return None;
        }
        if let Err(error) = validate_task_text(&self.new_task) {
            self.error = Some(error.user_message());
            return None;
        }
        self.busy.try_acquire();
        Some(TaskCommand::Create {
            text: self.new_task.clone(),
        })
    }

    /// Opens the inline editor for a task. Refused while busy.
    pub fn begin_edit(&mut self, task: &Task) -> bool {
        if self.busy.is_busy() {
            return false;
        }
        self.editing = Some(task.id);
        self.edit_text.clone_from(&task.task);
        self.error = None;
        self.notice.clear();
        true
    }

    pub fn cancel_edit(&mut self) -> bool {
        if self.busy.is_busy() {
            return false;
        }
        self.editing = None;
        self.edit_text.clear();
        true
    }

    /// Saves the open editor.
    pub fn begin_update(&mut self) -> Option<TaskCommand> {
        if self.busy.is_busy() {
            return None;
        }
        let id = self.editing?;
        if let Err(error) = validate_task_text(&self.edit_text) {
            self.error = Some(error.user_message());
            return None;
        }
        self.busy.try_acquire();
        Some(TaskCommand::Update {
            id,
            text: self.edit_text.clone(),
        })
    }

    pub fn begin_delete(&mut self, id: TaskId) -> Option<TaskCommand> {
        if !self.busy.try_acquire() {
            return None;
        }
        Some(TaskCommand::Delete { id })
    }

    /// Applies the result of a mutation begun with `begin_create`,
    /// `begin_update` or `begin_delete`, and frees the busy slot.
    ///
    /// Failures set the error text and are handed back so the caller can route
    /// them (see [`crate::router::SessionRouter::handle_failure`]).
    pub fn complete(&mut self, result: Result<TaskOutcome, ApiError>) -> Result<(), ApiError> {
        self.busy.release();
        self.apply(result)
    }

    /// Applies the result of the fetch from [`Self::begin_refresh`].
    ///
    /// The fetch never took the busy slot, so a mutation still in flight
    /// keeps it.
    pub fn complete_refresh(
        &mut self,
        result: Result<TaskOutcome, ApiError>,
    ) -> Result<(), ApiError> {
        self.apply(result)
    }

    fn apply(&mut self, result: Result<TaskOutcome, ApiError>) -> Result<(), ApiError> {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!("Task request failed: {}", error);
                self.error = Some(error.user_message());
                return Err(error);
            }
        };

        self.error = None;
        match outcome {
            TaskOutcome::Listed(tasks) => {
                self.tasks.replace_sorted(tasks);
            }
            TaskOutcome::Created(created) => {
                self.tasks.prepend(created.task);
                self.new_task.clear();
                let message = match created.email_status.as_deref().map(str::trim) {
                    Some(status) if !status.is_empty() => {
                        format!("Task added successfully! {status}")
                    }
                    _ => "Task added successfully!".to_string(),
                };
                self.notice.show(message);
            }
            TaskOutcome::Updated(task) => {
                if !self.tasks.replace_in_place(task) {
                    tracing::warn!("Updated task is not in the held list");
                }
                self.editing = None;
                self.edit_text.clear();
                self.notice.show("Task updated successfully!");
            }
            TaskOutcome::Deleted(id) => {
                self.tasks.remove(id);
                self.notice.show("Task deleted successfully!");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::CreatedTask;

    fn board_with(tasks: Vec<Task>) -> TaskBoard {
        let mut board = TaskBoard::new();
        board.complete_refresh(Ok(TaskOutcome::Listed(tasks))).unwrap();
        board
    }

    fn ids(board: &TaskBoard) -> Vec<i64> {
        board.tasks().as_slice().iter().map(|task| task.id.0).collect()
    }

    #[test]
    fn fetched_list_is_sorted_descending() {
        let board = board_with(vec![Task::new(1, "a"), Task::new(3, "c"), Task::new(2, "b")]);
        assert_eq!(ids(&board), vec![3, 2, 1]);
    }

    #[test]
    fn blank_input_yields_no_command_and_keeps_list() {
        let mut board = board_with(vec![Task::new(1, "a")]);
        board.new_task = "   ".to_string();
        assert_eq!(board.begin_create(), None);
        assert_eq!(board.error(), Some("Task cannot be empty"));
        assert_eq!(ids(&board), vec![1]);
        assert!(!board.is_busy());
    }

    #[test]
    fn create_prepends_and_shows_status() {
        let mut board = board_with(vec![Task::new(3, "walk"), Task::new(4, "read")]);
        board.new_task = "buy milk".to_string();
        let command = board.begin_create().unwrap();
        assert_eq!(
            command,
            TaskCommand::Create {
                text: "buy milk".to_string()
            }
        );

        board
            .complete(Ok(TaskOutcome::Created(CreatedTask {
                task: Task::new(5, "buy milk"),
                email_status: Some("Email notification sent successfully!".to_string()),
            })))
            .unwrap();

        assert_eq!(ids(&board), vec![5, 4, 3]);
        assert!(board.new_task.is_empty());
        assert_eq!(
            board.notice().text(),
            Some("Task added successfully! Email notification sent successfully!")
        );
    }

    #[test]
    fn mutations_are_refused_while_busy() {
        let mut board = board_with(vec![Task::new(1, "a"), Task::new(2, "b")]);
        board.new_task = "c".to_string();
        assert!(board.begin_create().is_some());

        assert_eq!(board.begin_delete(TaskId(1)), None);
        assert!(!board.begin_edit(&Task::new(2, "b")));
        assert_eq!(board.begin_create(), None);

        board
            .complete(Err(ApiError::Server {
                status: 500,
                message: "Failed to add task (Status: 500)".to_string(),
            }))
            .unwrap_err();
        assert!(!board.is_busy());
        assert!(board.begin_delete(TaskId(1)).is_some());
    }

    #[test]
    fn refresh_finishing_mid_mutation_keeps_the_slot() {
        let mut board = TaskBoard::new();
        let refresh = board.begin_refresh();
        assert!(!refresh.is_mutation());

        board.new_task = "buy milk".to_string();
        board.begin_create().unwrap();
        board
            .complete_refresh(Ok(TaskOutcome::Listed(vec![Task::new(1, "walk")])))
            .unwrap();

        assert!(board.is_busy());
        assert_eq!(board.begin_delete(TaskId(1)), None);
        assert_eq!(ids(&board), vec![1]);

        board
            .complete(Ok(TaskOutcome::Created(CreatedTask {
                task: Task::new(2, "buy milk"),
                email_status: None,
            })))
            .unwrap();
        assert!(!board.is_busy());
        assert_eq!(ids(&board), vec![2, 1]);
    }

    #[test]
    fn failed_refresh_mid_mutation_keeps_the_slot() {
        let mut board = board_with(vec![Task::new(1, "walk")]);
        board.begin_delete(TaskId(1)).unwrap();
        board
            .complete_refresh(Err(ApiError::Network("refused".to_string())))
            .unwrap_err();
        assert!(board.is_busy());
    }

    #[test]
    fn update_replaces_in_place() {
        let mut board = board_with(vec![Task::new(5, "buy milk"), Task::new(3, "walk")]);
        board.new_task = "newest".to_string();
        board.begin_create().unwrap();
        board
            .complete(Ok(TaskOutcome::Created(CreatedTask {
                task: Task::new(1, "newest"),
                email_status: None,
            })))
            .unwrap();
        assert_eq!(board.notice().text(), Some("Task added successfully!"));

        assert!(board.begin_edit(&Task::new(5, "buy milk")));
        assert_eq!(board.edit_text, "buy milk");
        board.edit_text = "buy oat milk".to_string();
        let command = board.begin_update().unwrap();
        assert_eq!(
            command,
            TaskCommand::Update {
                id: TaskId(5),
                text: "buy oat milk".to_string()
            }
        );
        board
            .complete(Ok(TaskOutcome::Updated(Task::new(5, "buy oat milk"))))
            .unwrap();

        assert_eq!(ids(&board), vec![1, 5, 3]);
        assert_eq!(board.tasks().get(TaskId(5)).unwrap().task, "buy oat milk");
        assert_eq!(board.editing(), None);
    }

    #[test]
    fn update_with_blank_text_is_rejected() {
        let mut board = board_with(vec![Task::new(5, "buy milk")]);
        board.begin_edit(&Task::new(5, "buy milk"));
        board.edit_text = String::new();
        assert_eq!(board.begin_update(), None);
        assert_eq!(board.error(), Some("Task cannot be empty"));
        assert_eq!(board.editing(), Some(TaskId(5)));
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut board = board_with(vec![Task::new(1, "a"), Task::new(2, "b"), Task::new(3, "c")]);
        let command = board.begin_delete(TaskId(2)).unwrap();
        assert_eq!(command, TaskCommand::Delete { id: TaskId(2) });
        board.complete(Ok(TaskOutcome::Deleted(TaskId(2)))).unwrap();

        assert_eq!(ids(&board), vec![3, 1]);
        assert_eq!(board.notice().text(), Some("Task deleted successfully!"));
    }

    #[test]
    fn unauthorized_failure_is_returned_and_list_untouched() {
        let mut board = board_with(vec![Task::new(1, "a")]);
        let command = board.begin_delete(TaskId(1)).unwrap();
        assert!(command.is_mutation());
        let error = board
            .complete(Err(ApiError::Unauthorized {
                status: 401,
                message: "Token has expired".to_string(),
            }))
            .unwrap_err();

        assert!(error.revokes_credential());
        assert_eq!(
            board.error(),
            Some("Invalid or missing token. Please log in again.")
        );
        assert_eq!(ids(&board), vec![1]);
    }
}
