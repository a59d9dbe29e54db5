use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_VAR: &str = "FIELDLOGIC_CONFIG";
/// Environment variable overriding the player executable
pub const PLAYER_PATH_VAR: &str = "FIELDLOGIC_PLAYER_PATH";
/// Environment variable overriding the media root directory
pub const MEDIA_ROOT_VAR: &str = "FIELDLOGIC_MEDIA_ROOT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Launcher configuration: where the player lives and where recordings live.
///
/// Layered from lowest to highest precedence:
/// platform defaults, `~/.fieldlogic/config.json` (or `$FIELDLOGIC_CONFIG`),
/// environment variables, command-line overrides.
/// In debug builds a `.env` file is loaded into the environment first.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Absolute path of the media player executable
    pub player_path: PathBuf,
    /// Directory that `file` query values are resolved against
    pub media_root: PathBuf,
}

/// Values given on the command line; they win over every other layer
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub player_path: Option<PathBuf>,
    pub media_root: Option<PathBuf>,
}

/// On-disk shape of config.json. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    player_path: Option<PathBuf>,
    media_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            player_path: default_player_path(),
            media_root: default_media_root(),
        }
    }
}

impl Config {
    /// Load configuration from the real process environment
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                debug!("Config: Dev mode activated - loaded .env file");
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok(), overrides)
    }

    /// Load configuration using `lookup` in place of environment variables
    pub fn from_lookup<F>(lookup: F, overrides: ConfigOverrides) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut config = Config::default();

        let file_path = var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .or_else(default_config_path);

        if let Some(path) = file_path {
            if let Some(file) = FileConfig::read(&path)? {
                info!("Config: Loaded {}", path.display());
                if let Some(player_path) = file.player_path {
                    config.player_path = player_path;
                }
                if let Some(media_root) = file.media_root {
                    config.media_root = media_root;
                }
            }
        }

        if let Some(player_path) = var(PLAYER_PATH_VAR) {
            config.player_path = PathBuf::from(player_path);
        }
        if let Some(media_root) = var(MEDIA_ROOT_VAR) {
            config.media_root = PathBuf::from(media_root);
        }

        if let Some(player_path) = overrides.player_path {
            config.player_path = player_path;
        }
        if let Some(media_root) = overrides.media_root {
            config.media_root = media_root;
        }

        debug!(
            "Config: player {}, media root {}",
            config.player_path.display(),
            config.media_root.display()
        );

        Ok(config)
    }
}

impl FileConfig {
    /// Read a config file. A missing file yields `Ok(None)`.
    fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Config: No config file at {}", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// ~/.fieldlogic/config.json
fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".fieldlogic").join("config.json"))
}

fn default_player_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Program Files\VideoLAN\VLC\vlc.exe")
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/Applications/VLC.app/Contents/MacOS/VLC")
    } else {
        PathBuf::from("/usr/bin/vlc")
    }
}

fn default_media_root() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Data\surveys")
    } else {
        dirs::home_dir()
            .map(|home| home.join("surveys"))
            .unwrap_or_else(|| PathBuf::from("surveys"))
    }
}
