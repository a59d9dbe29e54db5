use std::ffi::OsString;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::LauncherError;
use crate::request::Request;

/// Prefix of the player flag carrying the start offset
pub const START_TIME_FLAG: &str = "--start-time=";

/// A fully resolved player invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchCommand {
    pub executable_path: PathBuf,
    pub target_file_path: PathBuf,
    pub start_offset_flag: String,
}

impl LaunchCommand {
    /// Resolve a request against the configured player and media root.
    ///
    /// The filename is joined onto the media root as-is. `..` segments and
    /// absolute names are not rejected, only logged.
    pub fn from_request(request: &Request, config: &Config) -> Self {
        let filename = Path::new(request.filename());
        if escapes_root(filename) {
            warn!(
                "Filename '{}' is not contained in media root {}",
                request.filename(),
                config.media_root.display()
            );
        }

        if request.start_seconds().is_none() {
            warn!(
                "Start offset '{}' is not a non-negative number, passing it through",
                request.start_offset()
            );
        }

        LaunchCommand {
            executable_path: config.player_path.clone(),
            target_file_path: config.media_root.join(filename),
            start_offset_flag: format!("{}{}", START_TIME_FLAG, request.start_offset()),
        }
    }

    /// Full argument vector, program first
    pub fn argv(&self) -> Vec<OsString> {
        vec![
            self.executable_path.clone().into_os_string(),
            self.target_file_path.clone().into_os_string(),
            OsString::from(&self.start_offset_flag),
        ]
    }

    /// Arguments handed to the player (argv without the program)
    pub fn player_args(&self) -> Vec<OsString> {
        self.argv().into_iter().skip(1).collect()
    }
}

/// Space-joined argv, for humans only
impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.executable_path.display(),
            self.target_file_path.display(),
            self.start_offset_flag
        )
    }
}

/// Starts a player process. Implementations must not wait for it.
pub trait ProcessSpawner {
    /// Start `command` and return the child's process id
    fn spawn(&self, command: &LaunchCommand) -> Result<u32, LauncherError>;
}

impl<T: ProcessSpawner + ?Sized> ProcessSpawner for &T {
    fn spawn(&self, command: &LaunchCommand) -> Result<u32, LauncherError> {
        (**self).spawn(command)
    }
}

/// Spawns the player as a real OS process, detached from the launcher
#[derive(Clone, Debug, Default)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, command: &LaunchCommand) -> Result<u32, LauncherError> {
        let mut process = Command::new(&command.executable_path);
        process
            .args(command.player_args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const DETACHED_PROCESS: u32 = 0x0000_0008;
            const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
            process.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
        }

        debug!("Spawning {:?}", process);

        // The Child handle is dropped without waiting; the player outlives us.
        let child = process.spawn().map_err(|source| LauncherError::Spawn {
            program: command.executable_path.clone(),
            source,
        })?;

        let pid = child.id();
        info!("Started player with pid {}", pid);
        Ok(pid)
    }
}

fn escapes_root(filename: &Path) -> bool {
    filename.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}
