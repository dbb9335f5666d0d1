use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuEntryKind {
    /// Reveal `target_path` directly.
    GoTo,
    /// Ask the user for a folder, starting at `target_path`.
    Browse,
}

/// Entries in the same section are drawn together; renderers separate sections.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuSection {
    Ancestors,
    Browse,
    Project,
    Workspace,
    Environment,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub label: String,
    pub target_path: PathBuf,
    pub kind: MenuEntryKind,
    pub section: MenuSection,
}

impl MenuEntry {
    pub(super) fn go_to(section: MenuSection, label: String, target_path: PathBuf) -> Self {
        Self {
            label,
            target_path,
            kind: MenuEntryKind::GoTo,
            section,
        }
    }
}
