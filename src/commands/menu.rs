use super::{absolute, CommandResult};
use crate::features::launcher::LaunchOutcome;
use crate::features::menu::{DirectoryPicker, MenuEntry};
use crate::features::selection::{Resource, ResourceKind, SelectionContext};
use crate::session::ExploreSession;
use anyhow::bail;
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct Request {
    /// Selected path; without it only the fixed locations are listed.
    pub path: Option<PathBuf>,
    /// Root of the project the path belongs to.
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,
    /// Clipboard text used to seed the browse entry.
    #[arg(long, value_name = "TEXT")]
    pub clipboard: Option<String>,
    /// Activate the entry with this number.
    #[arg(long, value_name = "N")]
    pub choose: Option<usize>,
    /// Print the entries as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug)]
pub struct Response {
    pub entries: Vec<MenuEntry>,
    pub outcome: Option<LaunchOutcome>,
    pub json: bool,
}

/// Asks for a folder on stdin; an empty answer keeps the suggestion.
struct StdinPicker;

impl DirectoryPicker for StdinPicker {
    fn pick(&self, initial: &Path) -> Option<PathBuf> {
        eprint!("Folder [{}]: ", initial.display());
        io::stderr().flush().ok()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).ok()? == 0 {
            return None;
        }
        let answer = line.trim();
        if answer.is_empty() {
            Some(initial.to_path_buf())
        } else {
            Some(PathBuf::from(answer))
        }
    }
}

pub fn menu(session: &ExploreSession, req: Request) -> CommandResult<Response> {
    let context = match &req.path {
        Some(path) => selection_for(&absolute(path)?, req.project_root.as_deref())?,
        None => SelectionContext::default(),
    };
    session.selection_changed(&context);
    let entries = session.menu_entries(&req.clipboard);

    let outcome = match req.choose {
        None => None,
        Some(number) => {
            let Some(entry) = number.checked_sub(1).and_then(|index| entries.get(index)) else {
                bail!("no menu entry numbered {number} (1-{})", entries.len());
            };
            session.activate(entry, &StdinPicker)?
        }
    };

    Ok(Response {
        entries,
        outcome,
        json: req.json,
    })
}

fn selection_for(path: &Path, project_root: Option<&Path>) -> CommandResult<SelectionContext> {
    let project_root = project_root.map(absolute).transpose()?;
    let kind = if project_root.as_deref() == Some(path) {
        ResourceKind::Project
    } else if path.is_dir() {
        ResourceKind::Folder
    } else {
        ResourceKind::File
    };
    Ok(SelectionContext::single(Resource {
        kind,
        location: Some(path.to_path_buf()),
        project_root,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::session;
    use crate::features::menu::{MenuEntryKind, WellKnownLocations};
    use crate::features::selection::resolve;
    use std::fs;
    use tempfile::tempdir;

    fn request(
        path: Option<PathBuf>,
        project_root: Option<PathBuf>,
        choose: Option<usize>,
    ) -> Request {
        Request {
            path,
            project_root,
            clipboard: None,
            choose,
            json: false,
        }
    }

    #[test]
    fn kind_is_inferred_from_the_filesystem_and_project_root() {
        let dir = tempdir().expect("temp dir");
        let src = dir.path().join("src");
        let file = src.join("lib.rs");
        fs::create_dir(&src).expect("create src");
        fs::write(&file, b"").expect("write file");

        let project = resolve(&selection_for(dir.path(), Some(dir.path())).expect("project"))
            .expect("project target");
        assert!(project.is_directory);
        assert_eq!(project.project_root, None);

        let folder = resolve(&selection_for(&src, Some(dir.path())).expect("folder"))
            .expect("folder target");
        assert!(folder.is_directory);
        assert_eq!(folder.project_root.as_deref(), Some(dir.path()));

        let file_target =
            resolve(&selection_for(&file, None).expect("file")).expect("file target");
        assert!(!file_target.is_directory);
        assert_eq!(file_target.path, file);
    }

    #[test]
    fn choosing_entry_zero_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let (session, spawner) = session(WellKnownLocations::default());
        let err = menu(&session, request(Some(dir.path().to_path_buf()), None, Some(0)))
            .expect_err("entry zero");
        assert!(err.to_string().starts_with("no menu entry numbered 0"));
        assert!(spawner.spawned.lock().is_empty());
    }

    #[test]
    fn choosing_past_the_end_is_rejected() {
        let (session, _) = session(WellKnownLocations::default());
        let err = menu(&session, request(None, None, Some(1))).expect_err("empty menu");
        assert!(err.to_string().contains("(1-0)"));
    }

    #[test]
    fn choosing_the_first_entry_reveals_the_path() {
        let dir = tempdir().expect("temp dir");
        let (session, spawner) = session(WellKnownLocations::default());
        let response = menu(&session, request(Some(dir.path().to_path_buf()), None, Some(1)))
            .expect("menu");

        assert_eq!(response.entries[0].kind, MenuEntryKind::GoTo);
        assert_eq!(response.entries[0].target_path, dir.path());
        assert!(matches!(response.outcome, Some(LaunchOutcome::Spawned(_))));
        let spawned = spawner.spawned.lock();
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].program, "open-folder");
        assert_eq!(spawned[0].args, vec![dir.path().to_string_lossy().to_string()]);
    }
}
