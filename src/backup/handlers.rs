use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::archive::{write_plain, write_with_manifest};
use crate::backup::{BackupContext, BackupHandler};
use crate::error::{Result, VaultError};

pub const LOG_PATTERN: &str = "lazy_cli.log*";

/// Collects rotated CLI logs from directories under the home directory.
pub struct LogHandler {
    home_dir: PathBuf,
}

/// Backs up files under the base directory together with a manifest.
/// Application and user config groups differ only in their label.
pub struct ConfigHandler {
    base_dir: PathBuf,
    label: String,
}

impl LogHandler {
    pub fn new(ctx: &BackupContext) -> Self {
        Self {
            home_dir: ctx.home_dir.clone(),
        }
    }

    pub fn collect(&self, sources: &[String]) -> Result<Vec<PathBuf>> {
        let mut logs = Vec::new();
        for source in sources {
            let dir = self.home_dir.join(source);
            let pattern = format!(
                "{}/{}",
                glob::Pattern::escape(&dir.to_string_lossy()),
                LOG_PATTERN
            );
            let matches = glob::glob(&pattern)
                .map_err(|e| VaultError::message(format!("pattern {}: {}", pattern, e)))?;
            let mut found = Vec::new();
            for entry in matches {
                let path = entry
                    .map_err(|e| VaultError::message(format!("scan {}: {}", dir.display(), e)))?;
                if path.is_file() {
                    found.push(path);
                }
            }
            found.sort();
            debug!("{} log file(s) in {}", found.len(), dir.display());
            logs.extend(found);
        }
        Ok(logs)
    }
}

impl BackupHandler for LogHandler {
    fn label(&self) -> &str {
        "log"
    }

    fn backup(&self, sources: &[String], destination: &Path) -> Result<()> {
        let logs = self.collect(sources)?;
        let count = write_plain(&logs, &self.home_dir, destination)?;
        info!(
            "log backup complete ({} file(s)), saved to {}",
            count,
            destination.display()
        );
        Ok(())
    }
}

impl ConfigHandler {
    pub fn new(ctx: &BackupContext, label: &str) -> Self {
        Self {
            base_dir: ctx.base_dir.clone(),
            label: label.to_string(),
        }
    }

    /// Resolves sources against the base directory; directories expand to the
    /// regular files beneath them in path order.
    pub fn resolve(&self, sources: &[String]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for source in sources {
            let path = self.base_dir.join(source);
            if !path.is_dir() {
                files.push(path);
                continue;
            }
            let mut found = Vec::new();
            for entry in WalkDir::new(&path).follow_links(false).sort_by_file_name() {
                let entry = entry
                    .map_err(|e| VaultError::message(format!("scan {}: {}", path.display(), e)))?;
                if entry.file_type().is_file() {
                    found.push(entry.into_path());
                }
            }
            files.extend(found);
        }
        Ok(files)
    }
}

impl BackupHandler for ConfigHandler {
    fn label(&self) -> &str {
        &self.label
    }

    fn backup(&self, sources: &[String], destination: &Path) -> Result<()> {
        let files = self.resolve(sources)?;
        let manifest = write_with_manifest(&files, &self.base_dir, destination)?;
        info!(
            "{} backup complete ({} file(s)), saved to {}",
            self.label,
            manifest.files.len(),
            destination.display()
        );
        Ok(())
    }
}
