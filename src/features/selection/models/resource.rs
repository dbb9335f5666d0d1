use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    File,
    Folder,
    Project,
}

impl ResourceKind {
    pub fn is_directory(self) -> bool {
        !matches!(self, ResourceKind::File)
    }
}

/// A workspace resource as the host describes it.
///
/// `location` is `None` for resources with no local backing (remote or
/// virtual filesystems). `project_root` is the location of the owning project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub kind: ResourceKind,
    pub location: Option<PathBuf>,
    pub project_root: Option<PathBuf>,
}

impl Resource {
    pub fn file(location: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            kind: ResourceKind::File,
            location: Some(location.into()),
            project_root: Some(project_root.into()),
        }
    }

    pub fn folder(location: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            kind: ResourceKind::Folder,
            location: Some(location.into()),
            project_root: Some(project_root.into()),
        }
    }

    pub fn project(location: impl Into<PathBuf>) -> Self {
        let location = location.into();
        Self {
            kind: ResourceKind::Project,
            project_root: Some(location.clone()),
            location: Some(location),
        }
    }
}
