use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::error::ConfigError;

/// Overrides the data directory (settings.toml, catalog.toml).
pub const DATA_DIR_ENV: &str = "MINIGAMES_DATA_DIR";

const SETTINGS_FILE: &str = "settings.toml";

/// Returns the path to the user's data directory for the minigames front-end.
pub fn get_user_data_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::data_dir().map(|path| path.join("minigames"))
}

/// Gets the full path to the settings.toml file.
pub fn get_settings_path() -> Result<PathBuf, ConfigError> {
    get_user_data_dir()
        .map(|dir| dir.join(SETTINGS_FILE))
        .ok_or(ConfigError::NoDataDir)
}

/// Every option the menu exposes. `#[serde(default)]` makes a persisted record
/// overlay the defaults key by key: missing keys keep their default and
/// unknown keys are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub resolution: String,
    pub fullscreen: bool,
    pub vsync: bool,
    pub master_volume: u8,
    pub sfx_volume: u8,
    pub music_volume: u8,
    pub pause_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: "800x600".to_string(),
            fullscreen: false,
            vsync: true,
            master_volume: 70,
            sfx_volume: 80,
            music_volume: 60,
            pause_key: "ESCAPE".to_string(),
        }
    }
}

impl Settings {
    pub const MAX_VOLUME: u8 = 100;

    /// Clamps values that parse fine but are out of range.
    fn normalize(mut self) -> Self {
        self.master_volume = self.master_volume.min(Self::MAX_VOLUME);
        self.sfx_volume = self.sfx_volume.min(Self::MAX_VOLUME);
        self.music_volume = self.music_volume.min(Self::MAX_VOLUME);
        self
    }
}

/// Owns the live settings and knows where they are persisted.
#[derive(Debug)]
pub struct SettingsStore {
    pub settings: Settings,
    path: PathBuf,
}

impl SettingsStore {
    /// Opens the store at the default location. Falls back to a file in the
    /// working directory when no data directory can be determined.
    pub fn open_default() -> Self {
        match get_settings_path() {
            Ok(path) => Self::open(path),
            Err(e) => {
                warn!("{e}; keeping settings in the working directory");
                Self::open(SETTINGS_FILE)
            }
        }
    }

    /// Loads the record at `path`. Never fails: an absent record is created
    /// from defaults, a malformed one is discarded. A session always starts
    /// windowed, so a persisted `fullscreen = true` is reset and re-saved.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            settings: Settings::default(),
            path: path.into(),
        };

        match read_settings(&store.path) {
            Ok(Some(settings)) => {
                info!("Loaded settings from {}", store.path.display());
                store.settings = settings;
            }
            Ok(None) => {
                info!("No settings at {}, writing defaults", store.path.display());
                store.save();
            }
            Err(e) => {
                warn!("{e}; resetting settings to defaults");
            }
        }

        if store.settings.fullscreen {
            info!("Last session ended in fullscreen, starting windowed");
            store.settings.fullscreen = false;
            store.save();
        }

        store
    }

    /// Writes the full option set. Failures are logged and otherwise ignored.
    pub fn save(&self) {
        match self.write() {
            Ok(()) => debug!("Saved settings to {}", self.path.display()),
            Err(e) => log::error!("Could not save settings: {e}"),
        }
    }

    fn write(&self) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(&self.settings)?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, toml_string).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Reads the persisted settings without touching the file. Used before the
/// window exists to pick its initial size and swap interval.
pub fn peek_settings() -> Settings {
    get_settings_path()
        .ok()
        .and_then(|path| read_settings(&path).ok().flatten())
        .unwrap_or_default()
}

/// `Ok(None)` when there is no record yet.
fn read_settings(path: &Path) -> Result<Option<Settings>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    toml::from_str::<Settings>(&content)
        .map(|settings| Some(settings.normalize()))
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}
