use std::path::PathBuf;

use crate::backup::BackupContext;
use crate::cli::args::InitArgs;
use crate::config::load::default_task_file;
use crate::config::save::save_task_file;
use crate::error::Result;
use crate::types::TaskGroup;

pub fn run_init_command(ctx: &BackupContext, args: &InitArgs) -> Result<()> {
    for path in init_task_files(ctx, args.force)? {
        println!("wrote {}", path.display());
    }
    Ok(())
}

/// Writes the default task file of every group that has none yet, or of every
/// group when `force` is set.
pub fn init_task_files(ctx: &BackupContext, force: bool) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for group in TaskGroup::ALL {
        let path = ctx.base_dir.join(group.task_file());
        if path.exists() && !force {
            println!("keep existing {}", path.display());
            continue;
        }
        save_task_file(&path, &default_task_file(group))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn init_keeps_existing_files_unless_forced() {
        let base = tempdir().expect("tempdir");
        let ctx = BackupContext {
            base_dir: base.path().to_path_buf(),
            home_dir: base.path().to_path_buf(),
        };
        fs::write(base.path().join("user_backup.json"), b"custom").expect("write");

        let written = init_task_files(&ctx, false).expect("init");
        assert_eq!(written.len(), 2);
        assert_eq!(
            fs::read(base.path().join("user_backup.json")).expect("read"),
            b"custom"
        );

        let written = init_task_files(&ctx, true).expect("init");
        assert_eq!(written.len(), 3);
        assert_ne!(
            fs::read(base.path().join("user_backup.json")).expect("read"),
            b"custom"
        );
    }
}
