mod entry;
mod locations;

pub use entry::{MenuEntry, MenuEntryKind, MenuSection};
pub use locations::WellKnownLocations;

use crate::error::Result;
use crate::features::launcher::{LaunchOutcome, Launcher};
use crate::features::selection::ResolvedTarget;
use log::debug;
use std::path::{Path, PathBuf};

pub trait Clipboard {
    fn text(&self) -> Option<String>;
}

/// A clipboard that never holds text.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn text(&self) -> Option<String> {
        None
    }
}

impl Clipboard for Option<String> {
    fn text(&self) -> Option<String> {
        self.clone()
    }
}

/// Lets the user choose a folder, starting from `initial`. `None` means cancelled.
pub trait DirectoryPicker {
    fn pick(&self, initial: &Path) -> Option<PathBuf>;
}

/// Builds the navigation entries for the current target, in display order.
pub fn build_entries(
    target: Option<&ResolvedTarget>,
    locations: &WellKnownLocations,
    clipboard: &dyn Clipboard,
) -> Vec<MenuEntry> {
    let mut entries = Vec::new();

    if let Some(target) = target {
        entries.extend(
            target
                .path
                .ancestors()
                .filter(|ancestor| !ancestor.as_os_str().is_empty())
                .map(|ancestor| {
                    MenuEntry::go_to(
                        MenuSection::Ancestors,
                        format!("Go to {}", ancestor.display()),
                        ancestor.to_path_buf(),
                    )
                }),
        );
    }

    if let Some(seed) = browse_seed(clipboard, locations.home.as_deref()) {
        entries.push(MenuEntry {
            label: "Go to...".to_string(),
            target_path: seed,
            kind: MenuEntryKind::Browse,
            section: MenuSection::Browse,
        });
    }

    if let Some(project_root) = target.and_then(|target| target.project_root.clone()) {
        entries.push(MenuEntry::go_to(
            MenuSection::Project,
            "Go to Project Folder".to_string(),
            project_root,
        ));
    }

    if let Some(workspace) = &locations.workspace_root {
        entries.push(labelled(MenuSection::Workspace, "Workspace Folder", workspace));
    }
    for (name, location) in [
        ("Configuration Folder", &locations.configuration),
        ("User Data Folder", &locations.user_data),
        ("Install Folder", &locations.install),
    ] {
        if let Some(location) = location.as_deref().filter(|location| location.exists()) {
            entries.push(labelled(MenuSection::Workspace, name, location));
        }
    }

    for (name, location) in [
        ("Home Folder", &locations.home),
        ("Working Directory", &locations.current_dir),
        ("Temp Folder", &locations.temp_dir),
    ] {
        if let Some(location) = location {
            entries.push(labelled(MenuSection::Environment, name, location));
        }
    }

    entries
}

/// Reveals the entry's path, asking `picker` first for browse entries.
///
/// Returns `Ok(None)` when the user cancelled the picker or picked a folder
/// that does not exist.
pub fn activate(
    entry: &MenuEntry,
    launcher: &Launcher,
    picker: &dyn DirectoryPicker,
) -> Result<Option<LaunchOutcome>> {
    match entry.kind {
        MenuEntryKind::GoTo => launcher.launch(&entry.target_path).map(Some),
        MenuEntryKind::Browse => {
            let Some(chosen) = picker.pick(&entry.target_path) else {
                debug!("browse cancelled initial={}", entry.target_path.display());
                return Ok(None);
            };
            if !chosen.exists() {
                debug!("browse picked missing path={}", chosen.display());
                return Ok(None);
            }
            launcher.launch(&chosen).map(Some)
        }
    }
}

fn labelled(section: MenuSection, name: &str, location: &Path) -> MenuEntry {
    MenuEntry::go_to(
        section,
        format!("Go to {name}: {}", location.display()),
        location.to_path_buf(),
    )
}

fn browse_seed(clipboard: &dyn Clipboard, home: Option<&Path>) -> Option<PathBuf> {
    clipboard
        .text()
        .map(|text| PathBuf::from(text.trim()))
        .filter(|candidate| !candidate.as_os_str().is_empty() && candidate.exists())
        .or_else(|| home.map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(entries: &[MenuEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.label.as_str()).collect()
    }

    #[cfg(unix)]
    #[test]
    fn ancestors_run_from_target_to_root() {
        let target = ResolvedTarget::new("/a/b/c", true);
        let entries = build_entries(Some(&target), &WellKnownLocations::default(), &NoClipboard);
        let ancestors: Vec<PathBuf> = entries
            .iter()
            .filter(|entry| entry.section == MenuSection::Ancestors)
            .map(|entry| entry.target_path.clone())
            .collect();
        assert_eq!(
            ancestors,
            vec![
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
                PathBuf::from("/a"),
                PathBuf::from("/"),
            ]
        );
    }

    #[test]
    fn without_anything_known_the_menu_is_empty() {
        let entries = build_entries(None, &WellKnownLocations::default(), &NoClipboard);
        assert!(entries.is_empty());
    }

    #[test]
    fn project_entry_only_when_recorded() {
        let locations = WellKnownLocations::default();
        let with_project = ResolvedTarget::new("/proj/src/X", false)
            .with_project_root(Some(PathBuf::from("/proj")));
        let entries = build_entries(Some(&with_project), &locations, &NoClipboard);
        assert!(labels(&entries).contains(&"Go to Project Folder"));

        let project = ResolvedTarget::new("/proj", true);
        let entries = build_entries(Some(&project), &locations, &NoClipboard);
        assert!(!labels(&entries).contains(&"Go to Project Folder"));
    }

    #[test]
    fn missing_platform_locations_are_omitted() {
        let locations = WellKnownLocations {
            configuration: Some(PathBuf::from("/definitely/not/here/config")),
            install: Some(std::env::temp_dir()),
            ..WellKnownLocations::default()
        };
        let entries = build_entries(None, &locations, &NoClipboard);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].label.starts_with("Go to Install Folder: "));
    }

    #[test]
    fn browse_prefers_existing_clipboard_path() {
        let temp = std::env::temp_dir();
        let locations = WellKnownLocations {
            home: Some(PathBuf::from("/home/someone")),
            ..WellKnownLocations::default()
        };
        let clipboard = Some(format!("  {}\n", temp.display()));
        let entries = build_entries(None, &locations, &clipboard);
        assert_eq!(entries[0].kind, MenuEntryKind::Browse);
        assert_eq!(entries[0].target_path, temp);

        let junk = Some("not a path at all".to_string());
        let entries = build_entries(None, &locations, &junk);
        assert_eq!(entries[0].target_path, PathBuf::from("/home/someone"));
    }
}
