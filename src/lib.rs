pub mod archive;
pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod restore;
pub mod types;
pub mod util;

pub use archive::{extract, read_manifest, write_plain, write_with_manifest, ExtractReport};
pub use backup::{BackupContext, BackupHandler, BackupManager, GroupReport, HandlerRegistry};
pub use error::{Result, VaultError};
pub use manifest::{Manifest, ManifestEntry, MANIFEST_NAME};
pub use restore::{RestoreManager, RestoreSummary};
pub use types::{RestoreMode, TaskGroup};
