pub mod backup;
pub mod init;
pub mod inspect;
pub mod restore;

use crate::error::VaultError;

pub const EXIT_FAILED: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

pub fn exit_code(err: &VaultError) -> i32 {
    match err {
        VaultError::TaskFailed { .. }
        | VaultError::RestoreFailed(_)
        | VaultError::GroupsFailed(_)
        | VaultError::Archive(_)
        | VaultError::Parse(_)
        | VaultError::Path(_) => EXIT_FAILED,
        _ => EXIT_USAGE,
    }
}

pub fn exit_for_error(err: &VaultError) -> ! {
    println!("{}", err);
    std::process::exit(exit_code(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathError;
    use std::path::PathBuf;

    #[test]
    fn failures_and_usage_errors_exit_differently() {
        let failed = VaultError::RestoreFailed(vec![(
            PathBuf::from("x.zip"),
            VaultError::archive("x.zip has no manifest.json"),
        )]);
        assert_eq!(exit_code(&failed), EXIT_FAILED);
        assert_eq!(exit_code(&VaultError::message("bad flag")), EXIT_USAGE);
    }

    #[test]
    fn archive_content_errors_exit_as_failures() {
        assert_eq!(
            exit_code(&VaultError::Parse("manifest: expected value".to_string())),
            EXIT_FAILED
        );
        let unsafe_path = VaultError::Path(PathError::Unsafe("../x".to_string()));
        assert_eq!(exit_code(&unsafe_path), EXIT_FAILED);
        assert_eq!(exit_code(&VaultError::archive("x.zip has no manifest.json")), EXIT_FAILED);
    }
}
