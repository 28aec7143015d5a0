use std::path::{Path, PathBuf};

use crate::error::Result;

pub mod handlers;
pub mod manager;
pub mod registry;

pub use handlers::{ConfigHandler, LogHandler};
pub use manager::{BackupManager, GroupReport};
pub use registry::HandlerRegistry;

/// Directories that task sources are resolved against.
#[derive(Debug, Clone)]
pub struct BackupContext {
    pub base_dir: PathBuf,
    pub home_dir: PathBuf,
}

pub trait BackupHandler {
    fn label(&self) -> &str;

    /// Archives `sources` into `destination`. Nothing is left at
    /// `destination` when this fails.
    fn backup(&self, sources: &[String], destination: &Path) -> Result<()>;
}
