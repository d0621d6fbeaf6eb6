//! Read-only collaborators consumed by generation and play.
//!
//! Room settings arrive through [`RoomSettingsOracle`] so the core never
//! parses configuration text; randomness arrives through a seeded
//! [`GameRng`] so every board can be replayed.
mod rng;
mod settings;

pub use rng::GameRng;
pub use settings::{Color, DefaultRoomSettings, RoomSettings, RoomSettingsOracle};
