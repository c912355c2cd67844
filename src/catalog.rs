use log::{info, warn};
use macroquad::color::Color;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::error::{ConfigError, LaunchError};
use crate::utils::rgb;

const CATALOG_FILE: &str = "catalog.toml";

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    #[default]
    Available,
    InDevelopment,
    ComingSoon,
}

impl EntryStatus {
    pub fn label(self) -> &'static str {
        match self {
            EntryStatus::Available => "Available",
            EntryStatus::InDevelopment => "In development",
            EntryStatus::ComingSoon => "Coming soon",
        }
    }

    pub fn color(self) -> Color {
        match self {
            EntryStatus::Available => rgb(100, 255, 100),
            EntryStatus::InDevelopment => rgb(255, 200, 100),
            EntryStatus::ComingSoon => rgb(255, 100, 100),
        }
    }
}

/// One game card.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub title: String,
    pub description: String,
    pub category: String,
    pub executable: PathBuf,
    #[serde(default)]
    pub args: Vec<String>,
    pub accent: [u8; 3],
    #[serde(default)]
    pub status: EntryStatus,
}

impl CatalogEntry {
    /// Only available games get a Play button.
    pub fn is_launchable(&self) -> bool {
        self.status == EntryStatus::Available
    }

    pub fn accent_color(&self) -> Color {
        let [r, g, b] = self.accent;
        rgb(r, g, b)
    }
}

fn builtin_entry(
    title: &str,
    description: &str,
    category: &str,
    stem: &str,
    accent: [u8; 3],
) -> CatalogEntry {
    CatalogEntry {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        executable: PathBuf::from(format!("{stem}{}", std::env::consts::EXE_SUFFIX)),
        args: Vec::new(),
        accent,
        status: EntryStatus::Available,
    }
}

/// Title, description, category, executable stem, accent colour.
const BUILTIN_GAMES: [(&str, &str, &str, &str, [u8; 3]); 12] = [
    ("Flappy bird", "Fly through the gaps in the pipes", "arcade", "flappy", [100, 200, 100]),
    ("Pong", "The classic table tennis game", "arcade", "pong", [200, 100, 100]),
    ("4 lineas", "Race to line up four pieces in a row", "strategy", "4_lineas", [100, 100, 200]),
    ("Fall_out", "Dodge the blocks falling from above", "arcade", "Fall_out", [200, 200, 100]),
    ("Memotest", "Remember where each card is hiding", "puzzle", "memotest", [200, 100, 200]),
    ("Snake", "Steer the snake and eat the food", "arcade", "snake", [100, 200, 200]),
    ("Grid fútbol", "Test your football knowledge on a grid", "trivia", "grid", [100, 200, 200]),
    ("Crash run", "Dodge the cars, go as far as you can", "arcade", "crash_run", [100, 200, 200]),
    ("Fruit ninja", "Slice the fruit, avoid the bombs", "arcade", "fruit_cutter", [100, 200, 200]),
    ("Sky hopper", "Jump between platforms, do not fall", "arcade", "sky_hopper", [100, 200, 200]),
    ("Fast fingers", "Hammer the keys to run faster", "arcade", "fast_finger", [100, 200, 200]),
    ("F11 Clubes", "Build a line-up from different clubs", "trivia", "f11clubes", [100, 200, 200]),
];

static BUILTIN_CATALOG: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    BUILTIN_GAMES
        .iter()
        .map(|&(title, description, category, stem, accent)| {
            builtin_entry(title, description, category, stem, accent)
        })
        .collect()
});

#[derive(Deserialize, Debug)]
struct CatalogFile {
    games_dir: Option<PathBuf>,
    #[serde(rename = "game", default)]
    games: Vec<CatalogEntry>,
}

/// The games shown by the launcher and where their executables live.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
    pub games_dir: PathBuf,
}

impl Catalog {
    pub fn builtin(games_dir: impl Into<PathBuf>) -> Self {
        Self {
            entries: BUILTIN_CATALOG.clone(),
            games_dir: games_dir.into(),
        }
    }

    /// Reads a catalog file. `Ok(None)` when it does not exist.
    pub fn load(path: &Path, default_games_dir: &Path) -> Result<Option<Self>, ConfigError> {
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
        let file: CatalogFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(Self {
            entries: file.games,
            games_dir: file.games_dir.unwrap_or_else(|| default_games_dir.to_path_buf()),
        }))
    }

    /// `catalog.toml` from `data_dir` if present and valid, the built-in list
    /// otherwise.
    pub fn load_or_builtin(data_dir: Option<&Path>, default_games_dir: &Path) -> Self {
        let Some(path) = data_dir.map(|dir| dir.join(CATALOG_FILE)) else {
            return Self::builtin(default_games_dir);
        };
        match Self::load(&path, default_games_dir) {
            Ok(Some(catalog)) => {
                info!("Loaded {} games from {}", catalog.entries.len(), path.display());
                catalog
            }
            Ok(None) => Self::builtin(default_games_dir),
            Err(e) => {
                warn!("{e}; using the built-in catalog");
                Self::builtin(default_games_dir)
            }
        }
    }

    /// Absolute paths are used as they are, so a catalog can name an
    /// interpreter and pass the game in `args`. Relative ones must exist in
    /// the games directory; there is no PATH lookup.
    pub fn resolve_executable(&self, entry: &CatalogEntry) -> Result<PathBuf, LaunchError> {
        if entry.executable.is_absolute() {
            return Ok(entry.executable.clone());
        }
        let candidate = self.games_dir.join(&entry.executable);
        if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(LaunchError::NotFound(candidate))
        }
    }
}
