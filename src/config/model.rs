use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct TaskFile {
    #[serde(default)]
    pub tasks: Vec<BackupTask>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BackupTask {
    #[serde(rename = "type")]
    pub kind: String,
    pub params: TaskParams,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TaskParams {
    #[serde(default)]
    pub sources_list: Vec<String>,
    pub output_name: String,
}

impl BackupTask {
    pub fn new(kind: &str, sources: &[&str], output_name: &str) -> Self {
        Self {
            kind: kind.to_string(),
            params: TaskParams {
                sources_list: sources.iter().map(|s| s.to_string()).collect(),
                output_name: output_name.to_string(),
            },
        }
    }
}
