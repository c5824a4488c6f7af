//! The client's held task list

use crate::models::{Task, TaskId};

/// Ordered tasks, most recently created first.
///
/// Only a full fetch re-sorts. Local inserts rely on the server handing out
/// the highest id to the newest task; updates keep positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents with a fetched list, sorted by id descending.
    pub fn replace_sorted(&mut self, mut tasks: Vec<Task>) {
        tasks.sort_by(|a, b| b.id.cmp(&a.id));
        self.tasks = tasks;
    }

    /// Inserts a freshly created task at the front.
    pub fn prepend(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Swaps in the updated task at the position of its id.
    pub fn replace_in_place(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|existing| existing.id == task.id) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        let mut list = Self::new();
        list.replace_sorted(tasks);
        list
    }
}
