use super::template::CommandLine;
use std::process::{Command, Stdio};

/// Starts a rendered command without waiting for it.
pub trait ProcessSpawner: Send + Sync {
    fn spawn(&self, command: &CommandLine) -> std::io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, command: &CommandLine) -> std::io::Result<()> {
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        // Reap in the background so long-lived hosts don't collect zombies.
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}
