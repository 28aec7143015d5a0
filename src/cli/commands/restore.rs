use crate::backup::BackupContext;
use crate::cli::args::RestoreArgs;
use crate::error::Result;
use crate::restore::RestoreManager;
use crate::types::RestoreMode;

pub fn run_restore_command(ctx: &BackupContext, args: &RestoreArgs) -> Result<()> {
    let mode = RestoreMode {
        force: args.force,
        dry_run: args.dry_run,
    };
    let manager = RestoreManager::new(ctx.base_dir.clone(), mode);
    let summary = manager.load(&args.archives)?;
    for report in &summary.archives {
        println!(
            "{}: {} restored, {} skipped",
            report.archive.display(),
            report.restored.len(),
            report.skipped.len()
        );
        for skipped in &report.skipped {
            println!("  skipped {} (use --force to restore)", skipped);
        }
    }
    if mode.dry_run {
        println!(
            "dry-run: {} file(s) would be restored into {}",
            summary.restored(),
            manager.base_dir().display()
        );
    }
    Ok(())
}
