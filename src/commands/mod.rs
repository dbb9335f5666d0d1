pub mod config;
pub mod menu;
pub mod reveal;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Component, Path, PathBuf};

pub type CommandResult<T> = anyhow::Result<T>;

#[derive(Debug, Parser)]
#[command(name = "pathtools", version, about = "Reveal paths in the native file browser")]
pub struct Cli {
    /// Settings file to use instead of the per-user default.
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Workspace root offered by the menu and used when nothing is selected.
    #[arg(long, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reveal a file or folder.
    Reveal(reveal::Request),
    /// List the navigation entries for a path, optionally activating one.
    Menu(menu::Request),
    /// Show or change the explore command templates.
    Config(config::Request),
}

/// Makes `path` absolute against the working directory without touching the filesystem.
pub(crate) fn absolute(path: &Path) -> CommandResult<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    Ok(absolute_from(&cwd, path))
}

fn absolute_from(base: &Path, path: &Path) -> PathBuf {
    normalize(&base.join(path))
}

/// Collapses `.` and `..` lexically; `..` at the root stays at the root.
///
/// Symlinks are kept as written and Windows paths keep their plain drive
/// prefix, which `canonicalize` would turn into a verbatim `\\?\` path.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    normalized.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
