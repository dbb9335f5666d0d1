use super::CommandResult;
use crate::features::settings::{LaunchTemplate, SettingsStore};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct Request {
    /// New command template for folders.
    #[arg(long, value_name = "CMD")]
    pub folder: Option<String>,
    /// New command template for files.
    #[arg(long, value_name = "CMD")]
    pub file: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub path: Option<PathBuf>,
    pub stored: LaunchTemplate,
    pub effective: LaunchTemplate,
}

pub fn config(settings: &SettingsStore, req: Request) -> CommandResult<Response> {
    if req.folder.is_some() || req.file.is_some() {
        settings.update(|template| {
            if let Some(folder) = req.folder {
                template.directory_command = folder;
            }
            if let Some(file) = req.file {
                template.file_command = file;
            }
        });
        settings.save()?;
    }
    Ok(Response {
        path: settings.path().map(|path| path.to_path_buf()),
        stored: settings.stored(),
        effective: settings.snapshot(),
    })
}
