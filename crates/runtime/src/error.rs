//! Error type surfaced by the session API.
//!
//! Refused moves are not errors; they are reported as `false`. These variants
//! cover misuse of the API that the core model cannot express.
use thiserror::Error;

use crate::participant::ParticipantId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("participant {0} is not part of this session")]
    UnknownParticipant(ParticipantId),

    #[error("invalid session configuration: {reason}")]
    InvalidConfig { reason: &'static str },
}
