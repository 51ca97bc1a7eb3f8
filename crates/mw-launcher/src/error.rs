//! Launch errors

use thiserror::Error;

/// Errors raised at the process spawn seam
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The handler binary could not be started.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
}
