use crate::error::Result;
use crate::features::launcher::{LaunchOutcome, Launcher};
use crate::features::menu::{self, Clipboard, DirectoryPicker, MenuEntry, WellKnownLocations};
use crate::features::selection::{self, ResolvedTarget, SelectionContext};
use log::{debug, info};
use parking_lot::RwLock;
use std::sync::Arc;

/// Tracks the current target across selection changes and runs the explore
/// action and its menu against it.
#[derive(Clone)]
pub struct ExploreSession {
    inner: Arc<ExploreSessionInner>,
}

struct ExploreSessionInner {
    launcher: Launcher,
    locations: WellKnownLocations,
    target: RwLock<Option<ResolvedTarget>>,
}

impl ExploreSession {
    pub fn new(launcher: Launcher, locations: WellKnownLocations) -> Self {
        Self {
            inner: Arc::new(ExploreSessionInner {
                launcher,
                locations,
                target: RwLock::new(None),
            }),
        }
    }

    pub fn launcher(&self) -> &Launcher {
        &self.inner.launcher
    }

    pub fn locations(&self) -> &WellKnownLocations {
        &self.inner.locations
    }

    /// Replaces the current target with whatever `context` resolves to.
    pub fn selection_changed(&self, context: &SelectionContext) -> Option<ResolvedTarget> {
        let resolved = selection::resolve(context);
        *self.inner.target.write() = resolved.clone();
        resolved
    }

    pub fn target(&self) -> Option<ResolvedTarget> {
        self.inner.target.read().clone()
    }

    /// Reveals the current target, or the workspace root when nothing resolved.
    pub fn run(&self) -> Result<Option<LaunchOutcome>> {
        if let Some(target) = self.target() {
            return self.inner.launcher.launch_target(&target).map(Some);
        }
        match &self.inner.locations.workspace_root {
            Some(workspace) => {
                info!("run without target, using workspace root={}", workspace.display());
                self.inner.launcher.launch(workspace).map(Some)
            }
            None => {
                debug!("run without target or workspace root");
                Ok(None)
            }
        }
    }

    pub fn menu_entries(&self, clipboard: &dyn Clipboard) -> Vec<MenuEntry> {
        let target = self.target();
        menu::build_entries(target.as_ref(), &self.inner.locations, clipboard)
    }

    pub fn activate(
        &self,
        entry: &MenuEntry,
        picker: &dyn DirectoryPicker,
    ) -> Result<Option<LaunchOutcome>> {
        menu::activate(entry, &self.inner.launcher, picker)
    }
}
