//! Deterministic dungeon model shared across clients.
//!
//! `game-core` grows a corridor-shaped dungeon on a fixed grid
//! ([`DungeonBuilder`]), classifies its rooms under quotas
//! ([`EventAssigner`]), and tracks fog of war per participant
//! ([`ExplorationState`], [`ExplorationTracker`]) as participants turn and
//! move ([`MovementValidator`]).
//!
//! The crate performs no I/O and no logging. Configuration reaches it through
//! [`RoomSettingsOracle`] and [`GameConfig`]; randomness is always injected.
pub mod board;
pub mod config;
pub mod env;
pub mod error;
pub mod exploration;
pub mod generation;
pub mod movement;
pub mod stats;

pub use board::{Board, ItemId, Position, Room, RoomType};
pub use config::GameConfig;
pub use env::{Color, DefaultRoomSettings, GameRng, RoomSettings, RoomSettingsOracle};
pub use error::{ErrorSeverity, GameError};
pub use exploration::{ExplorationState, ExplorationTracker};
pub use generation::{
    AssignmentSummary, BuildOutcome, BuildReport, DungeonBuilder, EventAssigner, GrowthStep, Quota,
    QuotaRule, quotas_from_settings,
};
pub use movement::{CardinalDirection, MoveError, MovementValidator, Turn};
pub use stats::ResourceMeter;
