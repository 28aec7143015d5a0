use std::collections::HashSet;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Result, VaultError};
use crate::manifest::{Manifest, ManifestEntry, MANIFEST_NAME};
use crate::util::paths::{archive_name, file_name};

struct PlannedFile {
    source: PathBuf,
    entry_name: String,
}

/// Packs `sources` under their paths relative to `base_dir` and appends a
/// `manifest.json` describing them. Returns the manifest that was embedded.
pub fn write_with_manifest(
    sources: &[PathBuf],
    base_dir: &Path,
    destination: &Path,
) -> Result<Manifest> {
    let plan = plan(sources, base_dir)?;
    let mut entries = Vec::with_capacity(plan.len());
    for file in &plan {
        entries.push(ManifestEntry {
            archive_path: file_name(&file.source)?,
            original_path: file.entry_name.clone(),
        });
    }
    let manifest = Manifest::new(entries);
    let encoded = manifest.encode()?;
    write_archive(&plan, Some(encoded.as_slice()), destination)?;
    Ok(manifest)
}

/// Packs `sources` under their paths relative to `base_dir` without a manifest.
pub fn write_plain(sources: &[PathBuf], base_dir: &Path, destination: &Path) -> Result<usize> {
    let plan = plan(sources, base_dir)?;
    write_archive(&plan, None, destination)?;
    Ok(plan.len())
}

fn plan(sources: &[PathBuf], base_dir: &Path) -> Result<Vec<PlannedFile>> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(sources.len());
    for source in sources {
        let entry_name = archive_name(base_dir, source)?;
        if entry_name == MANIFEST_NAME {
            return Err(VaultError::archive(format!(
                "{} would shadow the archive manifest",
                source.display()
            )));
        }
        if !seen.insert(entry_name.clone()) {
            debug!("skip duplicate source {}", source.display());
            continue;
        }
        out.push(PlannedFile {
            source: source.clone(),
            entry_name,
        });
    }
    Ok(out)
}

// The archive is assembled in a temp file beside the destination and only
// renamed into place once every entry has been written.
fn write_archive(plan: &[PlannedFile], manifest: Option<&[u8]>, destination: &Path) -> Result<()> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)
        .map_err(|e| VaultError::message(format!("create {}: {}", dir.display(), e)))?;
    let mut staging = NamedTempFile::new_in(&dir)
        .map_err(|e| VaultError::message(format!("create temp file in {}: {}", dir.display(), e)))?;

    {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(staging.as_file_mut());
        for file in plan {
            info!("backing up {}", file.source.display());
            let mut reader = File::open(&file.source)
                .map_err(|e| VaultError::message(format!("open {}: {}", file.source.display(), e)))?;
            zip.start_file(file.entry_name.as_str(), options)
                .map_err(|e| VaultError::archive(format!("add {}: {}", file.entry_name, e)))?;
            io::copy(&mut reader, &mut zip)
                .map_err(|e| VaultError::message(format!("read {}: {}", file.source.display(), e)))?;
        }
        if let Some(bytes) = manifest {
            zip.start_file(MANIFEST_NAME, options)
                .map_err(|e| VaultError::archive(format!("add {}: {}", MANIFEST_NAME, e)))?;
            io::Write::write_all(&mut zip, bytes)?;
        }
        zip.finish()
            .map_err(|e| VaultError::archive(format!("finish {}: {}", destination.display(), e)))?;
    }

    staging
        .persist(destination)
        .map_err(|e| VaultError::message(format!("write {}: {}", destination.display(), e.error)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathError;
    use std::io::Read;
    use tempfile::tempdir;
    use zip::ZipArchive;

    fn entry_names(archive: &Path) -> Vec<String> {
        let mut zip = ZipArchive::new(File::open(archive).expect("open")).expect("zip");
        (0..zip.len())
            .map(|i| zip.by_index(i).expect("entry").name().to_string())
            .collect()
    }

    #[test]
    fn writes_relative_entries_and_manifest_last() {
        let base = tempdir().expect("tempdir");
        let out = tempdir().expect("tempdir");
        fs::create_dir_all(base.path().join("app")).expect("mkdir");
        let settings = base.path().join("app").join("settings.json");
        fs::write(&settings, b"{\"theme\":\"dark\"}").expect("write");
        let dest = out.path().join("out.zip");

        let manifest = write_with_manifest(&[settings], base.path(), &dest).expect("write");

        assert_eq!(entry_names(&dest), vec!["app/settings.json", "manifest.json"]);
        assert_eq!(manifest.files.len(), 1);
        assert_eq!(manifest.files[0].archive_path, "settings.json");
        assert_eq!(manifest.files[0].original_path, "app/settings.json");

        let mut zip = ZipArchive::new(File::open(&dest).expect("open")).expect("zip");
        let mut text = String::new();
        zip.by_name(MANIFEST_NAME)
            .expect("manifest")
            .read_to_string(&mut text)
            .expect("read");
        assert!(text.contains(
            r#""files":[{"archive_path":"settings.json","original_path":"app/settings.json"}]"#
        ));
    }

    #[test]
    fn source_outside_base_leaves_no_archive() {
        let base = tempdir().expect("tempdir");
        let elsewhere = tempdir().expect("tempdir");
        let inside = base.path().join("a.json");
        let outside = elsewhere.path().join("b.json");
        fs::write(&inside, b"a").expect("write");
        fs::write(&outside, b"b").expect("write");
        let dest = base.path().join("out").join("backup.zip");

        let err = write_with_manifest(&[inside, outside], base.path(), &dest).expect_err("outside");

        assert!(matches!(err, VaultError::Path(PathError::OutsideBase { .. })));
        assert!(!dest.exists());
    }

    #[test]
    fn missing_source_keeps_previous_archive_and_no_temp_files() {
        let base = tempdir().expect("tempdir");
        let out = tempdir().expect("tempdir");
        let present = base.path().join("a.json");
        fs::write(&present, b"a").expect("write");
        let dest = out.path().join("backup.zip");
        fs::write(&dest, b"previous").expect("write");

        let result = write_with_manifest(
            &[present, base.path().join("missing.json")],
            base.path(),
            &dest,
        );

        assert!(result.is_err());
        assert_eq!(fs::read(&dest).expect("read"), b"previous");
        let leftovers = fs::read_dir(out.path()).expect("read dir").count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn plain_archive_has_no_manifest() {
        let base = tempdir().expect("tempdir");
        fs::create_dir_all(base.path().join("logs")).expect("mkdir");
        let log = base.path().join("logs").join("lazy_cli.log");
        fs::write(&log, b"line").expect("write");
        let dest = base.path().join("logs.zip");

        let count = write_plain(&[log.clone(), log], base.path(), &dest).expect("write");

        assert_eq!(count, 1);
        assert_eq!(entry_names(&dest), vec!["logs/lazy_cli.log"]);
    }
}
