//! Fire-and-forget dispatch
//!
//! Selects the handler for a platform and starts it. Whatever happens to the
//! handler afterwards is not the caller's concern: spawn failures are logged
//! and dropped.

use crate::command::{select_command, LaunchCommand};
use crate::platform::host_os;
use crate::spawner::Spawner;
use crate::PROJECT_URL;

pub struct Launcher<S> {
    spawner: S,
    url: String,
}

impl<S: Spawner> Launcher<S> {
    /// Launcher for the project page
    pub fn new(spawner: S) -> Self {
        Self::with_url(spawner, PROJECT_URL)
    }

    pub fn with_url(spawner: S, url: impl Into<String>) -> Self {
        Self {
            spawner,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Open the URL as if running on `os`
    ///
    /// Returns the command that was dispatched, or `None` when `os` has no
    /// known handler and nothing was spawned.
    pub fn open_for(&self, os: &str) -> Option<LaunchCommand> {
        let Some(command) = select_command(os, &self.url) else {
            log::debug!("No URL handler known for platform {:?}", os);
            return None;
        };

        log::debug!("Opening {} with `{}`", self.url, command);
        if let Err(e) = self.spawner.spawn(&command) {
            log::debug!("Ignoring handler failure: {}", e);
        }
        Some(command)
    }

    /// Open the URL on the host platform
    pub fn open(&self) -> Option<LaunchCommand> {
        self.open_for(host_os())
    }
}
