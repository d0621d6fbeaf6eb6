use std::fmt;

use game_core::{CardinalDirection, ExplorationState, Position, ResourceMeter};

/// Session-local identifier handed out by [`crate::Session::add_participant`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub u32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One player exploring the shared board.
///
/// Exploration and energy are owned here and never shared with another
/// participant.
#[derive(Clone, Debug)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    pub(crate) exploration: ExplorationState,
    pub(crate) energy: ResourceMeter,
}

impl Participant {
    pub(crate) fn new(
        id: ParticipantId,
        name: String,
        exploration: ExplorationState,
        energy: ResourceMeter,
    ) -> Self {
        Self {
            id,
            name,
            exploration,
            energy,
        }
    }

    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.exploration.position
    }

    pub fn facing(&self) -> CardinalDirection {
        self.exploration.facing
    }

    pub fn energy(&self) -> ResourceMeter {
        self.energy
    }

    pub fn exploration(&self) -> &ExplorationState {
        &self.exploration
    }
}
