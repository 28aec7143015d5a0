use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::model::{BackupTask, TaskFile};
use crate::error::{ConfigError, Result, VaultError};
use crate::types::TaskGroup;

/// Reads a task file, falling back to an empty task list when the file is
/// missing, empty, malformed or unreadable.
pub fn load_task_file(path: &Path) -> TaskFile {
    match read_task_file(path) {
        Ok(file) => {
            debug!(path = %path.display(), tasks = file.tasks.len(), "task file loaded");
            file
        }
        Err(VaultError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("task file {} not found", path.display());
            TaskFile::default()
        }
        Err(err) => {
            warn!("task file {} unusable: {}", path.display(), err);
            TaskFile::default()
        }
    }
}

pub fn read_task_file(path: &Path) -> Result<TaskFile> {
    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Err(ConfigError::Parse(format!("{} is empty", path.display())).into());
    }
    let mut file: TaskFile = if is_yaml(path) {
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
    } else {
        serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
    };
    let mut index = 0;
    file.tasks.retain(|task| {
        let valid = match validate_task(index, task) {
            Ok(()) => true,
            Err(err) => {
                warn!("{}: dropping {}", path.display(), err);
                false
            }
        };
        index += 1;
        valid
    });
    Ok(file)
}

pub fn load_group(base_dir: &Path, group: TaskGroup) -> TaskFile {
    load_task_file(&base_dir.join(group.task_file()))
}

pub fn default_task_file(group: TaskGroup) -> TaskFile {
    let tasks = match group {
        TaskGroup::Application => vec![BackupTask::new(
            "LazyFileHandler",
            &["global_config.json", "api_list.json", "rollcall_site.json"],
            "lazy_backup.zip",
        )],
        TaskGroup::User => vec![BackupTask::new(
            "LazyUserFileHandler",
            &["user_config.json", "all_api_data"],
            "user_backup.zip",
        )],
        TaskGroup::Log => vec![BackupTask::new("logFileHandler", &[".lazy"], "lazy_logs.zip")],
    };
    TaskFile { tasks }
}

pub(crate) fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn validate_task(index: usize, task: &BackupTask) -> std::result::Result<(), ConfigError> {
    if task.kind.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("task {}: type is required", index)));
    }
    let name = task.params.output_name.trim();
    if name.is_empty() {
        return Err(ConfigError::Invalid(format!("task {}: output_name is empty", index)));
    }
    if Path::new(name).is_absolute() || name.split(['/', '\\']).any(|c| c == "..") {
        return Err(ConfigError::Invalid(format!(
            "task {}: output_name {} must stay inside the output directory",
            index, name
        )));
    }
    Ok(())
}
