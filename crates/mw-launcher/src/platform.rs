//! Platform detection
//!
//! Maps a platform identifier onto one of the families that have a known
//! default URL handler.

use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// Platform families with a known default URL handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    Windows,
    /// Apple desktop. The standard library reports this host as `macos`.
    #[strum(to_string = "darwin", serialize = "macos")]
    Darwin,
    Linux,
}

impl Platform {
    /// Resolve a platform identifier, `None` for anything unrecognised
    pub fn from_os(os: &str) -> Option<Self> {
        Self::from_str(os).ok()
    }

    /// The family of the host this binary was built for
    pub fn current() -> Option<Self> {
        Self::from_os(host_os())
    }
}

/// Raw identifier of the host operating system
pub fn host_os() -> &'static str {
    std::env::consts::OS
}
