//! The JSON manifest embedded in every config archive.
//!
//! It records, for each stored file, its archive name (the basename) and the
//! path relative to the base directory that restore writes it back to.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};

pub const MANIFEST_NAME: &str = "manifest.json";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub archive_path: String,
    pub original_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub backup_time: String,
    pub files: Vec<ManifestEntry>,
}

impl Manifest {
    /// A manifest dated today, entries kept in the order supplied.
    pub fn new(files: Vec<ManifestEntry>) -> Self {
        Self {
            backup_time: Local::now().format(DATE_FORMAT).to_string(),
            files,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| VaultError::Parse(format!("encode manifest: {}", e)))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| VaultError::Parse(format!("manifest: {}", e)))
    }
}
