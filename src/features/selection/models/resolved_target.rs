use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTarget {
    pub path: PathBuf,
    pub is_directory: bool,
    pub project_root: Option<PathBuf>,
    pub resolved_at: DateTime<Utc>,
}

impl ResolvedTarget {
    pub fn new(path: impl Into<PathBuf>, is_directory: bool) -> Self {
        Self {
            path: path.into(),
            is_directory,
            project_root: None,
            resolved_at: Utc::now(),
        }
    }

    pub fn with_project_root(mut self, project_root: Option<PathBuf>) -> Self {
        self.project_root = project_root;
        self
    }
}
