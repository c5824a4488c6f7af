use todo_core::tasks::{TaskCommand, TaskList, TaskOutcome};
use todo_core::ClientConfig;

use crate::commands::common::{format_task_lines, run_task_command, task_to_list_item, TaskListItem};
use crate::error::CliError;

pub async fn run_list(as_json: bool, config: &ClientConfig) -> Result<(), CliError> {
    let TaskOutcome::Listed(tasks) = run_task_command(config, TaskCommand::List).await? else {
        return Ok(());
    };
    let tasks = TaskList::from(tasks);

    if as_json {
        let json_items = tasks
            .as_slice()
            .iter()
            .map(task_to_list_item)
            .collect::<Vec<TaskListItem<'_>>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if tasks.is_empty() {
        println!("No tasks yet. Add one with `todo add <text>`.");
    } else {
        for line in format_task_lines(tasks.as_slice()) {
            println!("{line}");
        }
    }

    Ok(())
}
