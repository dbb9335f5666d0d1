use crate::features::launcher::explorer::{default_file_command, default_folder_command};
use serde::{Deserialize, Serialize};

/// The pair of command-line templates used to reveal a path.
///
/// Keys missing from a settings file fall back to the platform default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchTemplate {
    #[serde(rename = "folder-explore-command", default = "default_folder_command")]
    pub directory_command: String,
    #[serde(rename = "file-explore-command", default = "default_file_command")]
    pub file_command: String,
}

impl LaunchTemplate {
    pub fn new(directory_command: impl Into<String>, file_command: impl Into<String>) -> Self {
        Self {
            directory_command: directory_command.into(),
            file_command: file_command.into(),
        }
    }

    pub fn for_kind(&self, is_directory: bool) -> &str {
        if is_directory {
            &self.directory_command
        } else {
            &self.file_command
        }
    }
}

impl Default for LaunchTemplate {
    fn default() -> Self {
        Self {
            directory_command: default_folder_command(),
            file_command: default_file_command(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_platform_defaults() {
        let template: LaunchTemplate =
            serde_json::from_str(r#"{ "file-explore-command": "show {path}" }"#).unwrap();
        assert_eq!(template.file_command, "show {path}");
        assert_eq!(template.directory_command, default_folder_command());
    }

    #[test]
    fn picks_template_by_kind() {
        let template = LaunchTemplate::new("dir {path}", "file {path}");
        assert_eq!(template.for_kind(true), "dir {path}");
        assert_eq!(template.for_kind(false), "file {path}");
    }
}
