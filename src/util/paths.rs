use std::path::{Component, Path, PathBuf};

use crate::error::{PathError, Result};

/// Expresses `path` relative to `base` as a `/`-separated archive name.
pub fn archive_name(base: &Path, path: &Path) -> Result<String> {
    let rel = path.strip_prefix(base).map_err(|_| PathError::OutsideBase {
        path: path.to_path_buf(),
        base: base.to_path_buf(),
    })?;
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => {
                return Err(PathError::OutsideBase {
                    path: path.to_path_buf(),
                    base: base.to_path_buf(),
                }
                .into())
            }
        }
    }
    if parts.is_empty() {
        return Err(PathError::NoFileName(path.to_path_buf()).into());
    }
    Ok(parts.join("/"))
}

pub fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| PathError::NoFileName(path.to_path_buf()).into())
}

/// Joins a manifest-supplied relative path onto `base`, refusing anything that
/// could land outside it.
pub fn contained_join(base: &Path, relative: &str) -> Result<PathBuf> {
    let rel = Path::new(relative);
    if relative.is_empty() || rel.has_root() {
        return Err(PathError::Unsafe(relative.to_string()).into());
    }
    let mut out = base.to_path_buf();
    for component in rel.components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            _ => return Err(PathError::Unsafe(relative.to_string()).into()),
        }
    }
    if out == base {
        return Err(PathError::Unsafe(relative.to_string()).into());
    }
    Ok(out)
}
