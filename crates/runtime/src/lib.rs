//! Session orchestration for the dungeon model.
//!
//! This crate replaces process-wide state with an explicit [`Session`]: it
//! generates and classifies the board once, then owns every participant's
//! fog-of-war state and energy while input handlers drive turns and moves.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session object and its builder
//! - [`participant`] holds per-participant state
//! - [`config`] reads environment-driven runtime settings
//! - [`error`] exposes the error type surfaced by the session API
pub mod config;
pub mod error;
pub mod participant;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use participant::{Participant, ParticipantId};
pub use session::{Session, SessionBuilder};
