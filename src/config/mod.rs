pub mod load;
pub mod model;
pub mod save;

pub const LAZY_BACKUP_FILE: &str = "lazy_backup.json";
pub const USER_BACKUP_FILE: &str = "user_backup.json";
pub const LOG_BACKUP_FILE: &str = "log_backup.json";
pub const API_LIST_FILE: &str = "api_list.json";

/// Files that define the backup tasks themselves. Restoring them would replace
/// the local task definitions, so they are skipped unless the restore is forced.
pub const PROTECTED_FILES: [&str; 4] = [
    LAZY_BACKUP_FILE,
    USER_BACKUP_FILE,
    LOG_BACKUP_FILE,
    API_LIST_FILE,
];

pub fn is_protected(name: &str) -> bool {
    let file_name = std::path::Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name);
    PROTECTED_FILES.contains(&file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_matches_basename_only() {
        assert!(is_protected("user_backup.json"));
        assert!(is_protected("nested/dir/api_list.json"));
        assert!(!is_protected("user_config.json"));
        assert!(!is_protected("api_list.json.bak"));
    }
}
