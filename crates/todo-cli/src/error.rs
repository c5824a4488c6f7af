use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", .0.user_message())]
    Api(#[from] todo_core::ApiError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No task text provided")]
    EmptyTaskText,
    #[error("Invalid task id: {0}")]
    InvalidTaskId(String),
    #[error("Not signed in. Run `todo auth login` or `todo auth google` first.")]
    NotSignedIn,
    #[error("No token found in {0}")]
    MissingRedirectToken(String),
}
