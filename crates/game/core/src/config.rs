/// Tunable parameters for generating a dungeon and running a session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Board width in cells. Odd values give a unique center cell.
    pub board_width: u32,
    /// Board height in cells. Odd values give a unique center cell.
    pub board_height: u32,
    /// Number of corridor cells the generator tries to grow.
    pub target_room_count: u32,
    /// Energy deducted per successful move.
    pub movement_cost: u32,
    /// Energy each participant starts with (also its maximum).
    pub starting_energy: u32,
    /// Chance, in percent, that an unclassified corridor becomes an enemy room.
    pub enemy_percent: u32,
}

impl GameConfig {
    pub const DEFAULT_BOARD_SIZE: u32 = 21;
    pub const DEFAULT_TARGET_ROOM_COUNT: u32 = 50;
    pub const DEFAULT_MOVEMENT_COST: u32 = 1;
    pub const DEFAULT_STARTING_ENERGY: u32 = 100;
    pub const DEFAULT_ENEMY_PERCENT: u32 = 60;

    pub fn new() -> Self {
        Self {
            board_width: Self::DEFAULT_BOARD_SIZE,
            board_height: Self::DEFAULT_BOARD_SIZE,
            target_room_count: Self::DEFAULT_TARGET_ROOM_COUNT,
            movement_cost: Self::DEFAULT_MOVEMENT_COST,
            starting_energy: Self::DEFAULT_STARTING_ENERGY,
            enemy_percent: Self::DEFAULT_ENEMY_PERCENT,
        }
    }

    pub fn with_board_size(mut self, width: u32, height: u32) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn with_target_room_count(mut self, target_room_count: u32) -> Self {
        self.target_room_count = target_room_count;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
