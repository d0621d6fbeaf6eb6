//! Cell classification for the dungeon grid.

/// Gameplay category of a single board cell.
///
/// The string form (`snake_case`, parsed case-insensitively) is the key used by
/// room settings files. Use [`RoomType::label`] for player-facing text.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RoomType {
    /// Solid rock; never walkable.
    #[default]
    EmptySpace,
    /// Generated walkable cell that has not been classified yet.
    Corridor,
    /// The unique spawn cell at the board center.
    Start,
    Enemy,
    DifficultEnemy,
    Shop,
    Smithy,
    Treasure,
    /// Walkable cell with no event.
    Plain,
    Shrine,
    Boss,
    /// Placeholder for cells whose content is not known.
    Unknown,
}

impl RoomType {
    pub const ALL: [RoomType; 12] = [
        RoomType::EmptySpace,
        RoomType::Corridor,
        RoomType::Start,
        RoomType::Enemy,
        RoomType::DifficultEnemy,
        RoomType::Shop,
        RoomType::Smithy,
        RoomType::Treasure,
        RoomType::Plain,
        RoomType::Shrine,
        RoomType::Boss,
        RoomType::Unknown,
    ];

    /// Special categories handed out under quotas, highest priority first.
    pub const QUOTA_PRIORITY: [RoomType; 6] = [
        RoomType::Boss,
        RoomType::Shop,
        RoomType::Shrine,
        RoomType::Treasure,
        RoomType::Smithy,
        RoomType::DifficultEnemy,
    ];

    pub const fn is_traversable(self) -> bool {
        !matches!(self, RoomType::EmptySpace | RoomType::Unknown)
    }

    pub const fn label(self) -> &'static str {
        match self {
            RoomType::EmptySpace => "Empty Space",
            RoomType::Corridor => "Corridor",
            RoomType::Start => "Start",
            RoomType::Enemy => "Enemy",
            RoomType::DifficultEnemy => "Difficult Enemy",
            RoomType::Shop => "Shop",
            RoomType::Smithy => "Smithy",
            RoomType::Treasure => "Treasure",
            RoomType::Plain => "Plain",
            RoomType::Shrine => "Shrine",
            RoomType::Boss => "Boss",
            RoomType::Unknown => "Unknown",
        }
    }
}

/// Opaque handle to an item lying in a room. Item semantics live elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

/// One grid cell.
///
/// The `visited`/`explored` pair here is a board-level record and is false on
/// every generated board; per-participant fog of war lives in
/// [`crate::ExplorationState`]. `visited` always implies `explored`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub room_type: RoomType,
    visited: bool,
    explored: bool,
    items: Vec<ItemId>,
}

impl Room {
    pub fn new(room_type: RoomType) -> Self {
        Self {
            room_type,
            ..Self::default()
        }
    }

    pub fn is_traversable(&self) -> bool {
        self.room_type.is_traversable()
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn explored(&self) -> bool {
        self.explored
    }

    pub fn mark_visited(&mut self) {
        self.visited = true;
        self.explored = true;
    }

    pub fn mark_explored(&mut self) {
        self.explored = true;
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn add_item(&mut self, item: ItemId) {
        self.items.push(item);
    }

    pub fn take_items(&mut self) -> Vec<ItemId> {
        std::mem::take(&mut self.items)
    }
}
