use crate::error::{PathToolsError, Result};
use crate::features::selection::ResolvedTarget;
use crate::features::settings::SettingsStore;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub(crate) mod explorer;
mod spawner;
mod template;

pub use spawner::{ProcessSpawner, SystemSpawner};
pub use template::{
    render, render_with, CommandLine, TemplateSyntax, NAME_PLACEHOLDER, PARENT_PATH_PLACEHOLDER,
    PATH_PLACEHOLDER, PATH_SLASHES_PLACEHOLDER,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Spawned(CommandLine),
    /// The template for this kind of path is empty; nothing was started.
    Unconfigured,
}

/// Reveals paths using the command templates held by a [`SettingsStore`].
#[derive(Clone)]
pub struct Launcher {
    settings: Arc<SettingsStore>,
    spawner: Arc<dyn ProcessSpawner>,
}

impl Launcher {
    pub fn new(settings: Arc<SettingsStore>) -> Self {
        Self::with_spawner(settings, Arc::new(SystemSpawner))
    }

    pub fn with_spawner(settings: Arc<SettingsStore>, spawner: Arc<dyn ProcessSpawner>) -> Self {
        Self { settings, spawner }
    }

    pub fn settings(&self) -> &Arc<SettingsStore> {
        &self.settings
    }

    pub fn launch(&self, path: &Path) -> Result<LaunchOutcome> {
        self.launch_at(path, None)
    }

    pub fn launch_target(&self, target: &ResolvedTarget) -> Result<LaunchOutcome> {
        self.launch_at(&target.path, Some(target.resolved_at))
    }

    fn launch_at(&self, path: &Path, resolved_at: Option<DateTime<Utc>>) -> Result<LaunchOutcome> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!("launch stale target path={} err={}", path.display(), err);
                return Err(PathToolsError::StaleTarget {
                    path: path.to_path_buf(),
                    resolved_at,
                });
            }
        };
        let is_directory = metadata.is_dir();
        let templates = self.settings.snapshot();
        let template = templates.for_kind(is_directory);
        if template.trim().is_empty() {
            debug!(
                "launch unconfigured path={} is_directory={}",
                path.display(),
                is_directory
            );
            return Ok(LaunchOutcome::Unconfigured);
        }
        let command = render(template, path)?;
        info!("launch path={} command={}", path.display(), command);
        self.spawner
            .spawn(&command)
            .map_err(|source| PathToolsError::LaunchFailure {
                command: command.rendered.clone(),
                source,
            })?;
        Ok(LaunchOutcome::Spawned(command))
    }
}
