use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::archive::{extract, ExtractReport};
use crate::error::{Result, VaultError};
use crate::types::RestoreMode;

#[derive(Debug, Clone, Default)]
pub struct RestoreSummary {
    pub archives: Vec<ExtractReport>,
}

impl RestoreSummary {
    pub fn restored(&self) -> usize {
        self.archives.iter().map(|a| a.restored.len()).sum()
    }

    pub fn skipped(&self) -> usize {
        self.archives.iter().map(|a| a.skipped.len()).sum()
    }
}

pub struct RestoreManager {
    base_dir: PathBuf,
    mode: RestoreMode,
}

impl RestoreManager {
    pub fn new(base_dir: PathBuf, mode: RestoreMode) -> Self {
        Self { base_dir, mode }
    }

    /// Extracts each archive in turn. A failing archive does not stop the
    /// others, and files already written are kept; the call fails if any
    /// archive failed.
    pub fn load(&self, archives: &[PathBuf]) -> Result<RestoreSummary> {
        let mut summary = RestoreSummary::default();
        let mut failures = Vec::new();
        for archive in archives {
            info!("loading {}", archive.display());
            match extract(archive, &self.base_dir, self.mode) {
                Ok(report) => summary.archives.push(report),
                Err(err) => {
                    error!("{} failed to load: {}", archive.display(), err);
                    failures.push((archive.clone(), err));
                }
            }
        }
        if failures.is_empty() {
            Ok(summary)
        } else {
            Err(VaultError::RestoreFailed(failures))
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
