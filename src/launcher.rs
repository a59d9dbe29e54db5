use std::io::Write;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::LauncherError;
use crate::launch::{LaunchCommand, ProcessSpawner};
use crate::request::parse_request;

/// Turns a fieldlogic:// URI into a running player.
///
/// Straight-line: parse the URI, resolve the file against the media root,
/// print the command, spawn it. The launch line is always written and flushed
/// before the spawn attempt.
pub struct Launcher<S: ProcessSpawner> {
    config: Config,
    spawner: S,
    dry_run: bool,
}

impl<S: ProcessSpawner> Launcher<S> {
    pub fn new(config: Config, spawner: S) -> Self {
        Launcher {
            config,
            spawner,
            dry_run: false,
        }
    }

    /// Print the launch line but never spawn
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Build the command for `uri` without any side effects
    pub fn resolve(&self, uri: &str) -> Result<LaunchCommand, LauncherError> {
        let request = parse_request(uri)?;
        debug!(
            "Parsed request: file '{}', start '{}'",
            request.filename(),
            request.start_offset()
        );
        Ok(LaunchCommand::from_request(&request, &self.config))
    }

    /// Resolve `uri`, write the launch line to `out`, then start the player
    pub fn launch<W: Write>(&self, uri: &str, out: &mut W) -> Result<LaunchCommand, LauncherError> {
        let command = self.resolve(uri)?;

        // Diagnostic output only; a closed stdout must not block the launch.
        let _ = writeln!(out, "Launching: {}", command);
        let _ = out.flush();

        if self.dry_run {
            info!("Dry run, not starting {}", command.executable_path.display());
            return Ok(command);
        }

        self.spawner.spawn(&command)?;
        Ok(command)
    }

    /// Entry point for the binary. A missing URI is a usage error.
    pub fn run<W: Write>(&self, uri: Option<&str>, out: &mut W) -> Result<LaunchCommand, LauncherError> {
        let uri = uri.ok_or(LauncherError::Usage)?;
        self.launch(uri, out)
    }
}
