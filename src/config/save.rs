use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::load::is_yaml;
use crate::config::model::TaskFile;
use crate::error::{Result, VaultError};

pub fn save_task_file(path: &Path, file: &TaskFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| VaultError::message(format!("create {}: {}", parent.display(), e)))?;
    }
    let data = if is_yaml(path) {
        serde_yaml::to_string(file)
            .map_err(|e| VaultError::message(format!("encode task file: {}", e)))?
    } else {
        to_indented_json(file)?
    };
    fs::write(path, data.as_bytes())
        .map_err(|e| VaultError::message(format!("write task file {}: {}", path.display(), e)))?;
    info!("task file {} saved", path.display());
    Ok(())
}

fn to_indented_json(file: &TaskFile) -> Result<String> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    serde::Serialize::serialize(file, &mut ser)
        .map_err(|e| VaultError::message(format!("encode task file: {}", e)))?;
    String::from_utf8(out).map_err(|e| VaultError::message(format!("encode task file: {}", e)))
}
