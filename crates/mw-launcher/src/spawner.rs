//! Process spawning
//!
//! `Spawner` is the seam between the dispatch decision and the operating
//! system, so the decision can be exercised without starting real processes.

use crate::command::LaunchCommand;
use crate::error::LaunchError;
use std::process::{Child, Command, Stdio};

/// Starts a handler command without waiting for it
pub trait Spawner {
    fn spawn(&self, command: &LaunchCommand) -> Result<(), LaunchError>;
}

/// Spawns real child processes detached from the caller
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn(&self, command: &LaunchCommand) -> Result<(), LaunchError> {
        let child = build(command)
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: command.program,
                source,
            })?;
        log::debug!("Started {} (pid {})", command.program, child.id());
        reap(child);
        Ok(())
    }
}

fn build(command: &LaunchCommand) -> Command {
    let mut cmd = Command::new(command.program);
    cmd.args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }
    cmd
}

/// Collect the child's exit in the background so it never lingers as a zombie
fn reap(mut child: Child) {
    std::thread::spawn(move || {
        let _ = child.wait();
    });
}
