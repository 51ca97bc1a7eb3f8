//! Opens the mw project page in the system's default browser
//!
//! This crate provides:
//! - Platform detection (`Platform`)
//! - Handler command selection per platform (`select_command`)
//! - A fire-and-forget launcher that never blocks or fails (`Launcher`, `init`)

pub mod command;
pub mod error;
pub mod launcher;
pub mod platform;
pub mod spawner;

pub use command::{select_command, LaunchCommand};
pub use error::LaunchError;
pub use launcher::Launcher;
pub use platform::{host_os, Platform};
pub use spawner::{ProcessSpawner, Spawner};

/// Page opened on start-up
pub const PROJECT_URL: &str = "https://github.com/orenngi/mw";

/// Open the project page on the host platform
///
/// Returns immediately. Nothing happens on platforms without a known handler,
/// and a handler that fails to start is ignored.
pub fn init() {
    Launcher::new(ProcessSpawner).open();
}
