use todo_core::tasks::TaskCommand;
use todo_core::ClientConfig;

use crate::commands::common::{parse_task_id, run_task_command};
use crate::error::CliError;

pub async fn run_delete(id: &str, config: &ClientConfig) -> Result<(), CliError> {
    let id = parse_task_id(id)?;
    run_task_command(config, TaskCommand::Delete { id }).await?;
    println!("{id}");
    Ok(())
}
