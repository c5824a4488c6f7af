use todo_core::tasks::{TaskCommand, TaskOutcome};
use todo_core::ClientConfig;

use crate::commands::common::{resolve_task_text, run_task_command};
use crate::error::CliError;

pub async fn run_add(text_parts: &[String], config: &ClientConfig) -> Result<(), CliError> {
    let text = resolve_task_text(text_parts)?;

    if let TaskOutcome::Created(created) =
        run_task_command(config, TaskCommand::Create { text }).await?
    {
        println!("{}", created.task.id);
        if let Some(status) = created.email_status {
            eprintln!("{status}");
        }
    }
    Ok(())
}
