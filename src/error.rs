use std::path::PathBuf;
use thiserror::Error;

/// Problems reading or writing a persisted record (settings or catalog).
/// Always recovered by falling back to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find the user's data directory")]
    NoDataDir,
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("could not serialize record: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisplayModeError {
    #[error("invalid resolution '{0}', expected WIDTHxHEIGHT")]
    Parse(String),
    #[error("resolution must be larger than zero, got {width}x{height}")]
    ZeroSize { width: u32, height: u32 },
    #[error("display mode switch failed: {0}")]
    ModeSwitch(String),
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("executable not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to start {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
#[error("could not load asset '{name}': {reason}")]
pub struct AssetLoadError {
    pub name: String,
    pub reason: String,
}
