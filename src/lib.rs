// Library exports for the launcher binary and integration tests

pub mod config;
pub mod error;
pub mod launch;
pub mod launcher;
pub mod link;
pub mod request;

#[cfg(test)]
mod test_support;

pub use config::{Config, ConfigOverrides};
pub use error::LauncherError;
pub use launch::{LaunchCommand, ProcessSpawner, SystemSpawner};
pub use launcher::Launcher;
pub use request::{parse_request, Request};
