//! Task client: CRUD against the remote task collection.
//!
//! Every call takes the caller's [`Credential`] and attaches it verbatim as a
//! bearer header, so a request cannot be built without one.

mod list;

pub use list::TaskList;

use crate::api::{self, ApiTransport};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::models::{CreatedTask, Credential, Task, TaskId};

const EMPTY_TASK_MESSAGE: &str = "Task cannot be empty";

/// One task API call, as issued by the task board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    List,
    Create { text: String },
    Update { id: TaskId, text: String },
    Delete { id: TaskId },
}

impl TaskCommand {
    /// Whether the call changes server state (and takes the busy guard).
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::List)
    }
}

/// Successful result of a [`TaskCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Listed(Vec<Task>),
    Created(CreatedTask),
    Updated(Task),
    Deleted(TaskId),
}

#[derive(Clone)]
pub struct TaskClient {
    transport: ApiTransport,
}

impl TaskClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: ApiTransport::new(config)?,
        })
    }

    /// Fetches every task of the signed-in user, in server order.
    pub async fn list(&self, credential: &Credential) -> Result<Vec<Task>> {
        tracing::debug!("GET /todos");
        let response = api::send(
            self.transport
                .client()
                .get(self.transport.endpoint("/todos"))
                .bearer_auth(credential.as_str()),
            "Failed to fetch todos",
        )
        .await
        .map_err(ApiError::into_session_error)?;
        let tasks = api::read_json::<Vec<Task>>(response).await?;
        tracing::debug!("Fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Creates a task. Empty or whitespace-only text is rejected locally.
    pub async fn create(&self, credential: &Credential, text: &str) -> Result<CreatedTask> {
        validate_task_text(text)?;
        tracing::debug!("POST /todos");
        let response = api::send(
            self.transport
                .client()
                .post(self.transport.endpoint("/todos"))
                .bearer_auth(credential.as_str())
                .json(&serde_json::json!({ "task": text })),
            "Failed to add task",
        )
        .await
        .map_err(ApiError::into_session_error)?;
        let created = api::read_json::<CreatedTask>(response).await?;
        tracing::info!("Created task {}", created.task.id);
        Ok(created)
    }

    /// Replaces the text of a task.
    pub async fn update(&self, credential: &Credential, id: TaskId, text: &str) -> Result<Task> {
        validate_task_text(text)?;
        tracing::debug!("PUT /todos/{id}");
        let response = api::send(
            self.transport
                .client()
                .put(self.transport.endpoint(&format!("/todos/{id}")))
                .bearer_auth(credential.as_str())
                .json(&serde_json::json!({ "task": text })),
            "Failed to update task",
        )
        .await
        .map_err(ApiError::into_session_error)?;
        let task = api::read_json::<Task>(response).await?;
        tracing::info!("Updated task {}", task.id);
        Ok(task)
    }

    /// Deletes a task. The response body is ignored.
    pub async fn delete(&self, credential: &Credential, id: TaskId) -> Result<()> {
        tracing::debug!("DELETE /todos/{id}");
        api::send(
            self.transport
                .client()
                .delete(self.transport.endpoint(&format!("/todos/{id}")))
                .bearer_auth(credential.as_str()),
            "Failed to delete task",
        )
        .await
        .map_err(ApiError::into_session_error)?;
        tracing::info!("Deleted task {id}");
        Ok(())
    }

    /// Runs a single command and wraps its result.
    pub async fn execute(
        &self,
        credential: &Credential,
        command: TaskCommand,
    ) -> Result<TaskOutcome> {
        match command {
            TaskCommand::List => self.list(credential).await.map(TaskOutcome::Listed),
            TaskCommand::Create { text } => self
                .create(credential, &text)
                .await
                .map(TaskOutcome::Created),
            TaskCommand::Update { id, text } => self
                .update(credential, id, &text)
                .await
                .map(TaskOutcome::Updated),
            TaskCommand::Delete { id } => self
                .delete(credential, id)
                .await
                .map(|()| TaskOutcome::Deleted(id)),
        }
    }
}

/// Rejects empty or whitespace-only task text.
pub fn validate_task_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(ApiError::Validation(EMPTY_TASK_MESSAGE.to_string()));
    }
    Ok(())
}
