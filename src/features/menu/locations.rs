use std::path::PathBuf;

const APP_DIR: &str = "pathtools";

/// Directories that do not depend on the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WellKnownLocations {
    pub workspace_root: Option<PathBuf>,
    pub configuration: Option<PathBuf>,
    pub user_data: Option<PathBuf>,
    pub install: Option<PathBuf>,
    pub home: Option<PathBuf>,
    pub current_dir: Option<PathBuf>,
    pub temp_dir: Option<PathBuf>,
}

impl WellKnownLocations {
    pub fn detect(workspace_root: Option<PathBuf>) -> Self {
        Self {
            workspace_root,
            configuration: dirs::config_dir().map(|dir| dir.join(APP_DIR)),
            user_data: dirs::data_dir().map(|dir| dir.join(APP_DIR)),
            install: std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf())),
            home: dirs::home_dir(),
            current_dir: std::env::current_dir().ok(),
            temp_dir: Some(std::env::temp_dir()),
        }
    }
}
