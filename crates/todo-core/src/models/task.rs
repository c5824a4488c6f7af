//! Task model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier, increasing with creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A single todo item owned by the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Task text
    pub task: String,
}

impl Task {
    #[must_use]
    pub fn new(id: i64, task: impl Into<String>) -> Self {
        Self {
            id: TaskId(id),
            task: task.into(),
        }
    }
}

/// Response of a create call: the stored task plus the notification status
/// the server reports alongside it.
///
/// The status is display-only text and is never kept in the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTask {
    #[serde(flatten)]
    pub task: Task,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn created_task_reads_optional_status() {
        let created: CreatedTask = serde_json::from_str(
            r#"{"id":5,"task":"buy milk","email_status":"Email notification sent successfully!"}"#,
        )
        .unwrap();
        assert_eq!(created.task, Task::new(5, "buy milk"));
        assert_eq!(
            created.email_status.as_deref(),
            Some("Email notification sent successfully!")
        );

        let plain: CreatedTask = serde_json::from_str(r#"{"id":6,"task":"walk"}"#).unwrap();
        assert_eq!(plain.email_status, None);
    }

    #[test]
    fn task_id_parses_from_cli_input() {
        assert_eq!(" 42 ".parse::<TaskId>().unwrap(), TaskId(42));
        assert!("abc".parse::<TaskId>().is_err());
    }

    #[test]
    fn task_id_display_honours_width() {
        assert_eq!(format!("{:>3}", TaskId(7)), "  7");
        assert_eq!(format!("{:<3}|", TaskId(7)), "7  |");
        assert_eq!(TaskId(-12).to_string(), "-12");
    }
}
