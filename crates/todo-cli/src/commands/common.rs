use serde::Serialize;
use todo_core::router::{SessionRouter, StartupCheck};
use todo_core::tasks::{TaskClient, TaskCommand, TaskOutcome};
use todo_core::{ClientConfig, Task, TaskId};

use crate::auth::KeyringSessionStore;
use crate::error::CliError;

pub type CliRouter = SessionRouter<KeyringSessionStore>;

/// Loads the stored session for the configured API.
pub fn open_router(config: &ClientConfig) -> Result<(CliRouter, StartupCheck), CliError> {
    Ok(SessionRouter::mount(
        KeyringSessionStore::for_config(config),
        "",
    )?)
}

/// Runs one task command with the stored credential.
///
/// Without a stored credential no request is made. Authorization failures
/// clear the stored credential before the error is returned.
pub async fn run_task_command(
    config: &ClientConfig,
    command: TaskCommand,
) -> Result<TaskOutcome, CliError> {
    let (mut router, _) = open_router(config)?;
    let Some(credential) = router.credential().cloned() else {
        return Err(CliError::NotSignedIn);
    };

    let client = TaskClient::new(config)?;
    match client.execute(&credential, command).await {
        Ok(outcome) => Ok(outcome),
        Err(error) => {
            if router.handle_failure(&error)?.is_some() && error.revokes_credential() {
                eprintln!("Stored session was rejected and has been cleared.");
            }
            Err(error.into())
        }
    }
}

pub fn resolve_task_text(parts: &[String]) -> Result<String, CliError> {
    let text = parts.join(" ");
    let text = text.trim();
    if text.is_empty() {
        return Err(CliError::EmptyTaskText);
    }
    Ok(text.to_string())
}

pub fn parse_task_id(raw: &str) -> Result<TaskId, CliError> {
    raw.parse::<TaskId>()
        .map_err(|_| CliError::InvalidTaskId(raw.trim().to_string()))
}

pub fn format_task_lines(tasks: &[Task]) -> Vec<String> {
    let width = tasks
        .iter()
        .map(|task| task.id.to_string().len())
        .max()
        .unwrap_or(1);
    tasks
        .iter()
        .map(|task| format!("{:>width$}  {}", task.id, task.task))
        .collect()
}

/// Turns a callback URL, a query string, or a bare token into a query the
/// router can consume.
pub fn redirect_query(value: &str) -> String {
    let value = value.trim();
    if value.contains("token=") {
        return value.to_string();
    }
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair(todo_core::auth::REDIRECT_TOKEN_PARAM, value)
        .finish()
}

#[derive(Debug, Serialize)]
pub struct TaskListItem<'a> {
    pub id: i64,
    pub task: &'a str,
}

pub fn task_to_list_item(task: &Task) -> TaskListItem<'_> {
    TaskListItem {
        id: task.id.0,
        task: &task.task,
    }
}
