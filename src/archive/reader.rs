use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{info, warn};
use zip::result::ZipError;
use zip::ZipArchive;

use crate::config::is_protected;
use crate::error::{Result, VaultError};
use crate::manifest::{Manifest, MANIFEST_NAME};
use crate::types::RestoreMode;
use crate::util::paths::contained_join;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub archive: PathBuf,
    pub restored: Vec<PathBuf>,
    pub skipped: Vec<String>,
}

pub fn read_manifest(archive_path: &Path) -> Result<Manifest> {
    let mut zip = open(archive_path)?;
    manifest_of(&mut zip, archive_path)
}

/// Restores every manifest entry of `archive_path` under `base_dir`.
///
/// Protected task files are skipped unless `mode.force` is set. Entries are
/// looked up by their original (base-relative) path, which is the name the
/// writer stored them under.
pub fn extract(archive_path: &Path, base_dir: &Path, mode: RestoreMode) -> Result<ExtractReport> {
    let mut zip = open(archive_path)?;
    let manifest = manifest_of(&mut zip, archive_path)?;
    let mut report = ExtractReport {
        archive: archive_path.to_path_buf(),
        ..ExtractReport::default()
    };

    for entry in &manifest.files {
        if !mode.force && is_protected(&entry.archive_path) {
            warn!("{} ignored (protected task file)", entry.archive_path);
            report.skipped.push(entry.original_path.clone());
            continue;
        }
        let target = contained_join(base_dir, &entry.original_path)?;
        let mut stored = match zip.by_name(&entry.original_path) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => {
                return Err(VaultError::archive(format!(
                    "{}: entry {} listed in manifest is missing",
                    archive_path.display(),
                    entry.original_path
                )))
            }
            Err(e) => {
                return Err(VaultError::archive(format!(
                    "{}: read {}: {}",
                    archive_path.display(),
                    entry.original_path,
                    e
                )))
            }
        };
        if mode.dry_run {
            info!("dry-run: would restore {}", target.display());
            report.restored.push(target);
            continue;
        }
        // The entry is read and checksummed in full before the target is touched.
        let mut content = Vec::new();
        stored.read_to_end(&mut content).map_err(|e| {
            VaultError::archive(format!(
                "{}: read {}: {}",
                archive_path.display(),
                entry.original_path,
                e
            ))
        })?;
        replace_file(&target, &content)?;
        info!("{} restored", entry.original_path);
        report.restored.push(target);
    }

    Ok(report)
}

fn replace_file(target: &Path, content: &[u8]) -> Result<()> {
    let dir = target
        .parent()
        .ok_or_else(|| VaultError::message(format!("{} has no parent", target.display())))?;
    fs::create_dir_all(dir)
        .map_err(|e| VaultError::message(format!("create {}: {}", dir.display(), e)))?;
    let mut staging = NamedTempFile::new_in(dir)
        .map_err(|e| VaultError::message(format!("create temp file in {}: {}", dir.display(), e)))?;
    staging
        .write_all(content)
        .map_err(|e| VaultError::message(format!("write {}: {}", target.display(), e)))?;
    staging
        .persist(target)
        .map_err(|e| VaultError::message(format!("write {}: {}", target.display(), e.error)))?;
    Ok(())
}

fn open(archive_path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(archive_path)
        .map_err(|e| VaultError::archive(format!("open {}: {}", archive_path.display(), e)))?;
    ZipArchive::new(file)
        .map_err(|e| VaultError::archive(format!("open {}: {}", archive_path.display(), e)))
}

fn manifest_of(zip: &mut ZipArchive<File>, archive_path: &Path) -> Result<Manifest> {
    let mut file = zip.by_name(MANIFEST_NAME).map_err(|_| {
        VaultError::archive(format!(
            "{} has no {}",
            archive_path.display(),
            MANIFEST_NAME
        ))
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| VaultError::archive(format!("read {}: {}", MANIFEST_NAME, e)))?;
    Manifest::decode(&bytes)
}
