//! Per-room-type settings supplied by a configuration collaborator.

use std::fmt;

use crate::board::RoomType;
use crate::generation::QuotaRule;

/// 24-bit display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(text: &str) -> Option<Self> {
        let hex = text.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Display and quota settings for one room type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSettings {
    pub color: Color,
    /// Present only for quota-bearing types.
    pub quota: Option<QuotaRule>,
}

/// Source of room settings. Implementations must always answer, falling back
/// to [`DefaultRoomSettings`] for anything they could not load.
pub trait RoomSettingsOracle {
    fn settings(&self, room_type: RoomType) -> RoomSettings;

    fn color(&self, room_type: RoomType) -> Color {
        self.settings(room_type).color
    }

    fn quota_rule(&self, room_type: RoomType) -> Option<QuotaRule> {
        self.settings(room_type).quota
    }
}

/// Hardcoded settings used when configuration is missing or malformed.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultRoomSettings;

impl DefaultRoomSettings {
    pub const fn get(room_type: RoomType) -> RoomSettings {
        let (color, quota) = match room_type {
            RoomType::EmptySpace => (Color::rgb(0x10, 0x10, 0x10), None),
            RoomType::Corridor => (Color::rgb(0x80, 0x80, 0x80), None),
            RoomType::Start => (Color::rgb(0x22, 0x8b, 0x22), None),
            RoomType::Enemy => (Color::rgb(0xdc, 0x14, 0x3c), None),
            RoomType::DifficultEnemy => (
                Color::rgb(0x8b, 0x00, 0x8b),
                Some(QuotaRule::new(8, 5)),
            ),
            RoomType::Shop => (Color::rgb(0xff, 0xd7, 0x00), Some(QuotaRule::new(20, 2))),
            RoomType::Smithy => (Color::rgb(0xa0, 0x52, 0x2d), Some(QuotaRule::new(30, 1))),
            RoomType::Treasure => (Color::rgb(0xda, 0xa5, 0x20), Some(QuotaRule::new(10, 4))),
            RoomType::Plain => (Color::rgb(0xd3, 0xd3, 0xd3), None),
            RoomType::Shrine => (Color::rgb(0x41, 0x69, 0xe1), Some(QuotaRule::new(25, 2))),
            RoomType::Boss => (Color::rgb(0x80, 0x00, 0x00), Some(QuotaRule::new(50, 1))),
            RoomType::Unknown => (Color::rgb(0x40, 0x40, 0x40), None),
        };
        RoomSettings { color, quota }
    }
}

impl RoomSettingsOracle for DefaultRoomSettings {
    fn settings(&self, room_type: RoomType) -> RoomSettings {
        Self::get(room_type)
    }
}
