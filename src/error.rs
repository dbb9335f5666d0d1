use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PathToolsError>;

#[derive(Debug, Error)]
pub enum PathToolsError {
    #[error("{} no longer exists", .path.display())]
    StaleTarget {
        path: PathBuf,
        resolved_at: Option<DateTime<Utc>>,
    },
    #[error("failed to launch `{command}`: {source}")]
    LaunchFailure {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid explore command template: {template}")]
    InvalidTemplate { template: String },
    #[error("failed to read settings from {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no settings file location is known; pass --settings to choose one")]
    NoSettingsPath,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
