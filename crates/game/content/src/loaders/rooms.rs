//! Room settings loader.
//!
//! `rooms.toml` holds one table per room type, keyed by the room type name:
//!
//! ```toml
//! [boss]
//! color = "#800000"
//! divisor = 50
//! max_count = 1
//! ```
//!
//! Parsing is forgiving below the file level: an unknown section is skipped,
//! and a malformed or missing field takes the built-in default for that room
//! type. Each substitution is logged at `warn`.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use game_core::{Color, DefaultRoomSettings, QuotaRule, RoomSettings, RoomSettingsOracle, RoomType};
use toml::{Table, Value};

use crate::loaders::{LoadResult, read_file};

/// Room settings keyed by type, answering with defaults for absent types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomSettingsTable {
    entries: HashMap<RoomType, RoomSettings>,
}

impl RoomSettingsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, room_type: RoomType, settings: RoomSettings) {
        self.entries.insert(room_type, settings);
    }

    /// Whether `room_type` was configured explicitly.
    pub fn is_configured(&self, room_type: RoomType) -> bool {
        self.entries.contains_key(&room_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RoomSettingsOracle for RoomSettingsTable {
    fn settings(&self, room_type: RoomType) -> RoomSettings {
        self.entries
            .get(&room_type)
            .copied()
            .unwrap_or_else(|| DefaultRoomSettings::get(room_type))
    }
}

/// Loader for room settings from TOML files.
pub struct RoomSettingsLoader;

impl RoomSettingsLoader {
    /// Load room settings from a TOML file.
    ///
    /// Fails only when the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> LoadResult<RoomSettingsTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RoomSettingsTable> {
        let raw: Table = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse room settings TOML: {}", e))?;

        let mut table = RoomSettingsTable::new();
        for (key, value) in &raw {
            let Ok(room_type) = RoomType::from_str(key) else {
                tracing::warn!("Ignoring settings for unknown room type '{}'", key);
                continue;
            };
            let settings = match value {
                Value::Table(fields) => parse_entry(room_type, fields),
                _ => {
                    tracing::warn!("Settings for '{}' are not a table; using defaults", key);
                    DefaultRoomSettings::get(room_type)
                }
            };
            table.insert(room_type, settings);
        }

        Ok(table)
    }

    /// Like [`Self::load`], but an unreadable or unparsable file yields an
    /// empty table, i.e. built-in defaults for every room type.
    pub fn load_or_default(path: &Path) -> RoomSettingsTable {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Using default room settings: {:#}", e);
            RoomSettingsTable::new()
        })
    }
}

fn parse_entry(room_type: RoomType, fields: &Table) -> RoomSettings {
    let defaults = DefaultRoomSettings::get(room_type);

    let color = match fields.get("color") {
        None => defaults.color,
        Some(Value::String(text)) => Color::from_hex(text).unwrap_or_else(|| {
            tracing::warn!("Invalid color '{}' for {}; using {}", text, room_type, defaults.color);
            defaults.color
        }),
        Some(other) => {
            tracing::warn!("Color for {} must be a string, got {}", room_type, other.type_str());
            defaults.color
        }
    };

    let divisor = read_count(room_type, fields, "divisor");
    let max_count = read_count(room_type, fields, "max_count");
    let quota = match (divisor, max_count, defaults.quota) {
        (None, None, fallback) => fallback,
        (Some(divisor), Some(max_count), _) => Some(QuotaRule::new(divisor, max_count)),
        (Some(divisor), None, Some(fallback)) => Some(QuotaRule::new(divisor, fallback.max_count)),
        (None, Some(max_count), Some(fallback)) => Some(QuotaRule::new(fallback.divisor, max_count)),
        (_, _, None) => {
            tracing::warn!(
                "Incomplete quota for {}; both divisor and max_count are required",
                room_type
            );
            None
        }
    };

    let quota = match quota {
        Some(_) if !RoomType::QUOTA_PRIORITY.contains(&room_type) => {
            tracing::warn!("Ignoring quota for {}; it is not a quota room type", room_type);
            None
        }
        quota => quota,
    };

    RoomSettings { color, quota }
}

fn read_count(room_type: RoomType, fields: &Table, key: &str) -> Option<u32> {
    let value = fields.get(key)?;
    match value.as_integer().map(u32::try_from) {
        Some(Ok(count)) => Some(count),
        _ => {
            tracing::warn!("Invalid {} for {}: {}; using default", key, room_type, value);
            None
        }
    }
}
