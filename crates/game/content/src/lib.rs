//! Data-driven content definitions and loaders.
//!
//! This crate reads the TOML files that tune a dungeon:
//! - Game configuration (`config.toml`): board size, room target, energy
//! - Room settings (`rooms.toml`): display color and quota rule per room type
//!
//! Content is consumed by the runtime through game-core types
//! ([`game_core::GameConfig`], [`game_core::RoomSettingsOracle`]) and never
//! reaches the core as text. Loading is failure tolerant: every `*_or_default`
//! entry point substitutes built-in defaults and logs what it skipped.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RoomSettingsLoader, RoomSettingsTable};
