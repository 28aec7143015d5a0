use std::fmt;

use crate::config::{LAZY_BACKUP_FILE, LOG_BACKUP_FILE, USER_BACKUP_FILE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskGroup {
    Application,
    User,
    Log,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RestoreMode {
    pub force: bool,
    pub dry_run: bool,
}

impl TaskGroup {
    pub const ALL: [TaskGroup; 3] = [TaskGroup::User, TaskGroup::Application, TaskGroup::Log];

    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "app" | "application" | "lazy" => Ok(TaskGroup::Application),
            "user" => Ok(TaskGroup::User),
            "log" | "logs" => Ok(TaskGroup::Log),
            _ => Err(format!(
                "invalid task group {}; expected app, user, or log",
                value
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskGroup::Application => "app",
            TaskGroup::User => "user",
            TaskGroup::Log => "log",
        }
    }

    pub fn task_file(&self) -> &'static str {
        match self {
            TaskGroup::Application => LAZY_BACKUP_FILE,
            TaskGroup::User => USER_BACKUP_FILE,
            TaskGroup::Log => LOG_BACKUP_FILE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskGroup::Application => "application config",
            TaskGroup::User => "user config",
            TaskGroup::Log => "log",
        }
    }
}

impl fmt::Display for TaskGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskGroup::parse(s)
    }
}
