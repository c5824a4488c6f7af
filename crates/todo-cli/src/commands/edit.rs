use todo_core::tasks::{TaskCommand, TaskOutcome};
use todo_core::ClientConfig;

use crate::commands::common::{parse_task_id, resolve_task_text, run_task_command};
use crate::error::CliError;

pub async fn run_edit(
    id: &str,
    text_parts: &[String],
    config: &ClientConfig,
) -> Result<(), CliError> {
    let id = parse_task_id(id)?;
    let text = resolve_task_text(text_parts)?;

    if let TaskOutcome::Updated(task) =
        run_task_command(config, TaskCommand::Update { id, text }).await?
    {
        println!("{}", task.id);
    }
    Ok(())
}
