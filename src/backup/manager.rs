use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::backup::{BackupContext, HandlerRegistry};
use crate::config::load::load_group;
use crate::config::model::BackupTask;
use crate::error::{Result, VaultError};
use crate::types::TaskGroup;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupReport {
    pub written: Vec<PathBuf>,
    pub unknown: Vec<String>,
}

pub struct BackupManager {
    ctx: BackupContext,
    registry: HandlerRegistry,
    output_dir: PathBuf,
}

impl BackupManager {
    pub fn new(ctx: BackupContext, registry: HandlerRegistry, output_dir: PathBuf) -> Self {
        Self {
            ctx,
            registry,
            output_dir,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Loads the task file for `group` from the base directory and runs it.
    pub fn run(&self, group: TaskGroup) -> Result<GroupReport> {
        let file = load_group(&self.ctx.base_dir, group);
        info!("{} backup: {} task(s)", group.label(), file.tasks.len());
        self.run_group(&file.tasks).map_err(|err| {
            error!("{} backup failed: {}", group.label(), err);
            err
        })
    }

    /// Runs `tasks` in order and stops at the first failing one. Tasks naming
    /// an unregistered handler are skipped.
    pub fn run_group(&self, tasks: &[BackupTask]) -> Result<GroupReport> {
        let mut report = GroupReport::default();
        for (index, task) in tasks.iter().enumerate() {
            let handler = match self.registry.create(&task.kind, &self.ctx) {
                Ok(handler) => handler,
                Err(VaultError::UnknownHandler(name)) => {
                    warn!("no handler for task type {}; skipping", name);
                    report.unknown.push(name);
                    continue;
                }
                Err(err) => return Err(err),
            };
            let destination = self.output_dir.join(&task.params.output_name);
            if let Err(err) = handler.backup(&task.params.sources_list, &destination) {
                error!("backup error in task {} ({}): {}", index, task.kind, err);
                return Err(VaultError::TaskFailed {
                    index,
                    kind: task.kind.clone(),
                    source: Box::new(err),
                });
            }
            report.written.push(destination);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::BackupHandler;
    use crate::config::model::TaskFile;
    use crate::config::save::save_task_file;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::tempdir;

    struct Scripted {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl BackupHandler for Scripted {
        fn label(&self) -> &str {
            "scripted"
        }

        fn backup(&self, sources: &[String], _destination: &Path) -> Result<()> {
            let name = sources.first().cloned().unwrap_or_default();
            self.calls.borrow_mut().push(name.clone());
            if name.starts_with("fail") {
                return Err(VaultError::message(format!("{} refused", name)));
            }
            Ok(())
        }
    }

    fn scripted_manager(calls: &Rc<RefCell<Vec<String>>>, output: &Path) -> BackupManager {
        let mut registry = HandlerRegistry::empty();
        let calls = Rc::clone(calls);
        registry.register("scripted", move |_| {
            Box::new(Scripted {
                calls: Rc::clone(&calls),
            })
        });
        let ctx = BackupContext {
            base_dir: output.to_path_buf(),
            home_dir: output.to_path_buf(),
        };
        BackupManager::new(ctx, registry, output.to_path_buf())
    }

    #[test]
    fn group_stops_at_first_failure() {
        let out = tempdir().expect("tempdir");
        let calls = Rc::new(RefCell::new(Vec::new()));
        let manager = scripted_manager(&calls, out.path());
        let tasks = vec![
            BackupTask::new("scripted", &["a"], "a.zip"),
            BackupTask::new("scripted", &["fail-b"], "b.zip"),
            BackupTask::new("scripted", &["c"], "c.zip"),
        ];

        let err = manager.run_group(&tasks).expect_err("group fails");

        assert_eq!(*calls.borrow(), vec!["a".to_string(), "fail-b".to_string()]);
        assert!(matches!(err, VaultError::TaskFailed { index: 1, .. }));
    }

    #[test]
    fn unknown_task_type_is_skipped() {
        let out = tempdir().expect("tempdir");
        let calls = Rc::new(RefCell::new(Vec::new()));
        let manager = scripted_manager(&calls, out.path());
        let tasks = vec![
            BackupTask::new("Missing", &["x"], "x.zip"),
            BackupTask::new("scripted", &["a"], "a.zip"),
        ];

        let report = manager.run_group(&tasks).expect("group succeeds");

        assert_eq!(report.unknown, vec!["Missing".to_string()]);
        assert_eq!(report.written, vec![out.path().join("a.zip")]);
        assert_eq!(*calls.borrow(), vec!["a".to_string()]);
    }

    #[test]
    fn run_reads_group_task_file() {
        let base = tempdir().expect("tempdir");
        let out = tempdir().expect("tempdir");
        fs::write(base.path().join("global_config.json"), b"{}").expect("write");
        let file = TaskFile {
            tasks: vec![BackupTask::new(
                "LazyFileHandler",
                &["global_config.json"],
                "lazy.zip",
            )],
        };
        save_task_file(&base.path().join("lazy_backup.json"), &file).expect("save");
        let ctx = BackupContext {
            base_dir: base.path().to_path_buf(),
            home_dir: base.path().to_path_buf(),
        };
        let manager = BackupManager::new(
            ctx,
            HandlerRegistry::with_defaults(),
            out.path().to_path_buf(),
        );

        let report = manager.run(TaskGroup::Application).expect("backup");

        assert_eq!(report.written, vec![out.path().join("lazy.zip")]);
        assert!(out.path().join("lazy.zip").exists());
        assert!(manager.run(TaskGroup::User).expect("no tasks").written.is_empty());
    }
}
