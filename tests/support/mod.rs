#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;

use fieldlogic_launcher::{Config, LaunchCommand, LauncherError, ProcessSpawner};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Config matching the production survey workstation layout
pub fn survey_config() -> Config {
    Config {
        player_path: PathBuf::from("/usr/bin/vlc"),
        media_root: PathBuf::from("/data/surveys"),
    }
}

/// Spawner that records commands instead of starting processes
#[derive(Default)]
pub struct RecordingSpawner {
    spawned: RefCell<Vec<LaunchCommand>>,
}

impl RecordingSpawner {
    pub fn spawned(&self) -> Vec<LaunchCommand> {
        self.spawned.borrow().clone()
    }
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn(&self, command: &LaunchCommand) -> Result<u32, LauncherError> {
        self.spawned.borrow_mut().push(command.clone());
        Ok(1)
    }
}
