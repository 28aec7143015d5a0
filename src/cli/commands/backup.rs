use chrono::Local;

use crate::backup::{BackupContext, BackupManager, HandlerRegistry};
use crate::cli::args::BackupArgs;
use crate::error::{Result, VaultError};
use crate::types::TaskGroup;

pub fn run_backup_command(ctx: &BackupContext, args: &BackupArgs) -> Result<()> {
    println!("{}", Local::now().format("%d-%m-%Y %H:%M"));

    let groups = if args.groups.is_empty() {
        TaskGroup::ALL.to_vec()
    } else {
        args.groups.clone()
    };
    let output_dir = args.output.clone().unwrap_or_else(|| ctx.home_dir.clone());
    let manager = BackupManager::new(ctx.clone(), HandlerRegistry::with_defaults(), output_dir);

    let mut failures = Vec::new();
    for group in groups {
        let report = match manager.run(group) {
            Ok(report) => report,
            Err(err) => {
                println!("{}: backup failed: {}", group, err);
                failures.push((group.to_string(), err));
                continue;
            }
        };
        for path in &report.written {
            println!("{}: wrote {}", group, path.display());
        }
        for name in &report.unknown {
            println!("{}: skipped unknown task type {}", group, name);
        }
        if report.written.is_empty() && report.unknown.is_empty() {
            println!(
                "{}: no tasks in {}",
                group,
                ctx.base_dir.join(group.task_file()).display()
            );
        }
    }

    println!("{}", Local::now().format("%d-%m-%Y %H:%M"));
    if failures.is_empty() {
        Ok(())
    } else {
        Err(VaultError::GroupsFailed(failures))
    }
}
