//! Content factory for loading everything a session needs from a data directory.

use std::path::{Path, PathBuf};

use game_core::GameConfig;

use crate::loaders::{ConfigLoader, LoadResult, RoomSettingsLoader, RoomSettingsTable};

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── rooms.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const ROOMS_FILE: &'static str = "rooms.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load room settings from `rooms.toml`.
    pub fn load_room_settings(&self) -> LoadResult<RoomSettingsTable> {
        RoomSettingsLoader::load(&self.data_dir.join(Self::ROOMS_FILE))
    }

    /// Loads both files, substituting defaults for anything unusable.
    pub fn load_or_default(&self) -> (GameConfig, RoomSettingsTable) {
        tracing::debug!("Loading content from {}", self.data_dir.display());
        let config = ConfigLoader::load_or_default(&self.data_dir.join(Self::CONFIG_FILE));
        let rooms = RoomSettingsLoader::load_or_default(&self.data_dir.join(Self::ROOMS_FILE));
        (config, rooms)
    }
}
