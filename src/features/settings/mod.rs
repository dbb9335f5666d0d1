mod launch_template;

pub use launch_template::LaunchTemplate;

use crate::error::{PathToolsError, Result};
use anyhow::Context;
use log::{debug, warn};
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};

pub const FOLDER_EXPLORE_COMMAND_KEY: &str = "folder-explore-command";
pub const FILE_EXPLORE_COMMAND_KEY: &str = "file-explore-command";

pub const FOLDER_EXPLORE_COMMAND_ENV: &str = "PATHTOOLS_FOLDER_EXPLORE_COMMAND";
pub const FILE_EXPLORE_COMMAND_ENV: &str = "PATHTOOLS_FILE_EXPLORE_COMMAND";

const APP_DIR: &str = "pathtools";
const SETTINGS_FILE: &str = "settings.json";

/// Values that take precedence over the settings file without being saved to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub directory_command: Option<String>,
    pub file_command: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            directory_command: std::env::var(FOLDER_EXPLORE_COMMAND_ENV).ok(),
            file_command: std::env::var(FILE_EXPLORE_COMMAND_ENV).ok(),
        }
    }

    fn apply(&self, template: &mut LaunchTemplate) {
        if let Some(command) = &self.directory_command {
            template.directory_command = command.clone();
        }
        if let Some(command) = &self.file_command {
            template.file_command = command.clone();
        }
    }
}

/// Shared holder of the explore command templates.
///
/// Readers call [`SettingsStore::snapshot`] once per launch and work from the
/// returned copy, so an edit made mid-launch is never half-observed.
#[derive(Debug)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    overrides: EnvOverrides,
    template: RwLock<LaunchTemplate>,
}

impl SettingsStore {
    pub fn in_memory(template: LaunchTemplate) -> Self {
        Self {
            path: None,
            overrides: EnvOverrides::default(),
            template: RwLock::new(template),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Loads `path` and layers the process environment on top.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(path, EnvOverrides::from_env())
    }

    pub fn open(path: impl Into<PathBuf>, overrides: EnvOverrides) -> Result<Self> {
        let path = path.into();
        let template = read_template(&path)?;
        debug!("settings loaded path={}", path.display());
        Ok(Self {
            path: Some(path),
            overrides,
            template: RwLock::new(template),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The effective templates, environment overrides included.
    pub fn snapshot(&self) -> LaunchTemplate {
        let mut template = self.template.read().clone();
        self.overrides.apply(&mut template);
        template
    }

    /// The stored templates, without environment overrides.
    pub fn stored(&self) -> LaunchTemplate {
        self.template.read().clone()
    }

    pub fn update(&self, edit: impl FnOnce(&mut LaunchTemplate)) {
        let mut template = self.template.write();
        edit(&mut template);
    }

    pub fn reload(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        match read_template(path) {
            Ok(template) => {
                *self.template.write() = template;
                debug!("settings reloaded path={}", path.display());
                Ok(())
            }
            Err(err) => {
                warn!("settings reload failed path={} err={}", path.display(), err);
                Err(err)
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            warn!("settings save skipped, no settings path");
            return Err(PathToolsError::NoSettingsPath);
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(&self.stored())
            .context("failed to serialize settings")?;
        fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!("settings saved path={}", path.display());
        Ok(())
    }
}

fn read_template(path: &Path) -> Result<LaunchTemplate> {
    if !path.exists() {
        return Ok(LaunchTemplate::default());
    }
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| PathToolsError::Settings {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_stored_values() {
        let store = SettingsStore {
            path: None,
            overrides: EnvOverrides {
                directory_command: Some("dir-override {path}".into()),
                file_command: None,
            },
            template: RwLock::new(LaunchTemplate::new("dir {path}", "file {path}")),
        };
        let snapshot = store.snapshot();
        assert_eq!(snapshot.directory_command, "dir-override {path}");
        assert_eq!(snapshot.file_command, "file {path}");
        assert_eq!(store.stored().directory_command, "dir {path}");
    }

    #[test]
    fn saving_without_a_path_is_an_error() {
        let store = SettingsStore::in_memory(LaunchTemplate::default());
        store.update(|template| template.directory_command = "browse {path}".into());
        let err = store.save().unwrap_err();
        assert!(matches!(err, PathToolsError::NoSettingsPath));
    }

    #[test]
    fn snapshot_is_detached_from_later_updates() {
        let store = SettingsStore::in_memory(LaunchTemplate::new("a {path}", "b {path}"));
        let before = store.snapshot();
        store.update(|template| template.file_command.clear());
        assert_eq!(before.file_command, "b {path}");
        assert!(store.snapshot().file_command.is_empty());
    }
}
