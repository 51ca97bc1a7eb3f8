//! Handler command selection
//!
//! Each platform family opens URLs through a different system utility:
//! - Windows: `rundll32 url.dll,FileProtocolHandler`
//! - macOS: `open`
//! - Linux: `xdg-open`

use crate::platform::Platform;
use std::fmt;

const WINDOWS_PROGRAM: &str = "rundll32";
const WINDOWS_HANDLER: &str = "url.dll,FileProtocolHandler";
const DARWIN_PROGRAM: &str = "open";
const LINUX_PROGRAM: &str = "xdg-open";

/// A program and the arguments it is started with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl LaunchCommand {
    /// Build the handler invocation that opens `url` on `platform`
    pub fn for_platform(platform: Platform, url: &str) -> Self {
        match platform {
            Platform::Windows => Self {
                program: WINDOWS_PROGRAM,
                args: vec![WINDOWS_HANDLER.to_string(), url.to_string()],
            },
            Platform::Darwin => Self {
                program: DARWIN_PROGRAM,
                args: vec![url.to_string()],
            },
            Platform::Linux => Self {
                program: LINUX_PROGRAM,
                args: vec![url.to_string()],
            },
        }
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Pick the handler command for a platform identifier
///
/// Returns `None` when the identifier is not one of the supported families.
pub fn select_command(os: &str, url: &str) -> Option<LaunchCommand> {
    Platform::from_os(os).map(|platform| LaunchCommand::for_platform(platform, url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const URL: &str = "https://example.com/page";

    #[test]
    fn test_windows_uses_protocol_handler() {
        let cmd = select_command("windows", URL).unwrap();
        assert_eq!(cmd.program, "rundll32");
        assert_eq!(cmd.args, vec!["url.dll,FileProtocolHandler", URL]);
    }

    #[test]
    fn test_darwin_uses_open() {
        let cmd = select_command("darwin", URL).unwrap();
        assert_eq!(cmd.program, "open");
        assert_eq!(cmd.args, vec![URL]);

        assert_eq!(select_command("macos", URL), Some(cmd));
    }

    #[test]
    fn test_linux_uses_xdg_open() {
        let cmd = select_command("linux", URL).unwrap();
        assert_eq!(cmd.program, "xdg-open");
        assert_eq!(cmd.args, vec![URL]);
    }

    #[test]
    fn test_other_platforms_select_nothing() {
        assert_eq!(select_command("freebsd", URL), None);
        assert_eq!(select_command("openbsd", URL), None);
        assert_eq!(select_command("", URL), None);
    }

    #[test]
    fn test_url_passed_through_untouched() {
        let odd = "not a url & neither is this";
        let cmd = select_command("linux", odd).unwrap();
        assert_eq!(cmd.args, vec![odd]);
    }

    #[test]
    fn test_display() {
        let cmd = LaunchCommand::for_platform(Platform::Windows, URL);
        assert_eq!(
            cmd.to_string(),
            "rundll32 url.dll,FileProtocolHandler https://example.com/page"
        );
    }
}
