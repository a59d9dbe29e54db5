use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can stop a launch
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Usage: fieldlogic-launcher fieldlogic://open?file=<name>&t=<seconds>")]
    Usage,
    #[error("No filename provided")]
    MissingFilename,
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to start player {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LauncherError {
    /// Process exit code for this error. Success is 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::Usage => 1,
            LauncherError::MissingFilename => 2,
            LauncherError::Config(_) => 3,
            LauncherError::Spawn { .. } => 4,
        }
    }
}
