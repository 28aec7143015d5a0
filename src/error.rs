use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("{0}")]
    Message(String),
    #[error("{0}")]
    Path(PathError),
    #[error("parse {0}")]
    Parse(String),
    #[error("archive {0}")]
    Archive(String),
    #[error("no handler registered for task type {0}")]
    UnknownHandler(String),
    #[error("{0}")]
    Config(ConfigError),
    #[error("task {index} ({kind}) failed: {source}")]
    TaskFailed {
        index: usize,
        kind: String,
        #[source]
        source: Box<VaultError>,
    },
    #[error("restore failed for {} archive(s): {}", .0.len(), join_failures(.0))]
    RestoreFailed(Vec<(PathBuf, VaultError)>),
    #[error("backup failed for {} group(s): {}", .0.len(), join_group_failures(.0))]
    GroupsFailed(Vec<(String, VaultError)>),
    #[error("{0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum PathError {
    #[error("{} is not under {}", .path.display(), .base.display())]
    OutsideBase { path: PathBuf, base: PathBuf },
    #[error("unsafe path {0} in manifest")]
    Unsafe(String),
    #[error("{} has no file name", .0.display())]
    NoFileName(PathBuf),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse task file: {0}")]
    Parse(String),
    #[error("{0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, VaultError>;

impl VaultError {
    pub fn message(msg: impl Into<String>) -> Self {
        VaultError::Message(msg.into())
    }

    pub fn archive(msg: impl Into<String>) -> Self {
        VaultError::Archive(msg.into())
    }
}

impl From<PathError> for VaultError {
    fn from(err: PathError) -> Self {
        VaultError::Path(err)
    }
}

impl From<ConfigError> for VaultError {
    fn from(err: ConfigError) -> Self {
        VaultError::Config(err)
    }
}

impl From<zip::result::ZipError> for VaultError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => VaultError::Io(e),
            other => VaultError::Archive(other.to_string()),
        }
    }
}

fn join_failures(failures: &[(PathBuf, VaultError)]) -> String {
    failures
        .iter()
        .map(|(path, err)| format!("{}: {}", path.display(), err))
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_group_failures(failures: &[(String, VaultError)]) -> String {
    failures
        .iter()
        .map(|(group, err)| format!("{}: {}", group, err))
        .collect::<Vec<_>>()
        .join("; ")
}
