//! Shared fixtures for unit tests

use std::cell::RefCell;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::LauncherError;
use crate::launch::{LaunchCommand, ProcessSpawner};

/// Config matching the survey workstation layout
pub fn survey_config() -> Config {
    Config {
        player_path: PathBuf::from("/usr/bin/vlc"),
        media_root: PathBuf::from("/data/surveys"),
    }
}

/// Spawner that records commands instead of starting processes
#[derive(Default)]
pub struct RecordingSpawner {
    pub spawned: RefCell<Vec<LaunchCommand>>,
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn(&self, command: &LaunchCommand) -> Result<u32, LauncherError> {
        self.spawned.borrow_mut().push(command.clone());
        Ok(4242)
    }
}
