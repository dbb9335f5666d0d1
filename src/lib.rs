pub mod commands;
pub mod error;
pub mod features;
pub mod session;

pub use error::{PathToolsError, Result};
pub use features::launcher::{LaunchOutcome, Launcher};
pub use features::menu::{build_entries, MenuEntry, WellKnownLocations};
pub use features::selection::{resolve, ResolvedTarget, SelectionContext};
pub use features::settings::{LaunchTemplate, SettingsStore};
pub use session::ExploreSession;

use anyhow::Context;
use clap::Parser;
use commands::{Cli, Command};
use features::menu::{MenuEntryKind, MenuSection};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

/// Log targets are module paths, so the filter names the library crate.
const DEFAULT_LOG_FILTER: &str = "pathtools_lib=info";

fn open_settings(path: Option<PathBuf>) -> anyhow::Result<SettingsStore> {
    match path.or_else(SettingsStore::default_path) {
        Some(path) => SettingsStore::load(&path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Ok(SettingsStore::in_memory(LaunchTemplate::default())),
    }
}

fn print_outcome(outcome: &LaunchOutcome) {
    match outcome {
        LaunchOutcome::Spawned(command) => println!("launched: {command}"),
        LaunchOutcome::Unconfigured => println!("no explore command configured for this kind of path"),
    }
}

fn print_entries(entries: &[MenuEntry]) {
    let mut section: Option<MenuSection> = None;
    for (index, entry) in entries.iter().enumerate() {
        if section.is_some_and(|previous| previous != entry.section) {
            println!("---");
        }
        section = Some(entry.section);
        match entry.kind {
            MenuEntryKind::GoTo => println!("{:>3}. {}", index + 1, entry.label),
            MenuEntryKind::Browse => println!(
                "{:>3}. {} [{}]",
                index + 1,
                entry.label,
                entry.target_path.display()
            ),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .format_timestamp_millis()
    .try_init();

    let cli = Cli::parse();
    info!("starting pathtools command={:?}", cli.command);

    let settings = Arc::new(open_settings(cli.settings)?);
    let workspace = cli.workspace.map(|dir| commands::absolute(&dir)).transpose()?;
    let session = ExploreSession::new(
        Launcher::new(settings.clone()),
        WellKnownLocations::detect(workspace),
    );

    match cli.command {
        Command::Reveal(req) => {
            let outcome = commands::reveal::reveal(&session, req)?;
            print_outcome(&outcome);
        }
        Command::Menu(req) => {
            let response = commands::menu::menu(&session, req)?;
            if response.json {
                println!("{}", serde_json::to_string_pretty(&response.entries)?);
            } else {
                print_entries(&response.entries);
            }
            if let Some(outcome) = &response.outcome {
                print_outcome(outcome);
            }
        }
        Command::Config(req) => {
            let response = commands::config::config(&settings, req)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }
    Ok(())
}
