use super::{absolute, CommandResult};
use crate::features::launcher::LaunchOutcome;
use crate::session::ExploreSession;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct Request {
    /// Path to reveal; defaults to the workspace root, then the working directory.
    pub path: Option<PathBuf>,
}

pub type Response = LaunchOutcome;

pub fn reveal(session: &ExploreSession, req: Request) -> CommandResult<Response> {
    if let Some(path) = req.path {
        return Ok(session.launcher().launch(&absolute(&path)?)?);
    }
    match session.run()? {
        Some(outcome) => Ok(outcome),
        None => {
            let cwd = std::env::current_dir().context("failed to read the working directory")?;
            Ok(session.launcher().launch(&cwd)?)
        }
    }
}
