//! Facing and position state machine for a single participant.
//!
//! Turning always succeeds. Moving succeeds only onto an in-bounds,
//! traversable cell; a refused move leaves the participant untouched and is a
//! normal outcome rather than a fault.
use crate::board::{Board, Position};
use crate::error::{ErrorSeverity, GameError};
use crate::exploration::{ExplorationState, ExplorationTracker};
use crate::stats::ResourceMeter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("participant has not been placed on the board")]
    NotPlaced,

    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is blocked")]
    Blocked { destination: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::NotPlaced => ErrorSeverity::Validation,
            MoveError::OutOfBounds { .. } | MoveError::Blocked { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::NotPlaced => "MOVE_NOT_PLACED",
            MoveError::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            MoveError::Blocked { .. } => "MOVE_BLOCKED",
        }
    }
}

/// Compass direction, numbered clockwise from north (N=0, E=1, S=2, W=3).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    #[default]
    North,
    East,
    South,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];

    pub const fn index(self) -> u8 {
        match self {
            CardinalDirection::North => 0,
            CardinalDirection::East => 1,
            CardinalDirection::South => 2,
            CardinalDirection::West => 3,
        }
    }

    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => CardinalDirection::North,
            1 => CardinalDirection::East,
            2 => CardinalDirection::South,
            _ => CardinalDirection::West,
        }
    }

    /// `(row, col)` step; north decreases the row.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (-1, 0),
            CardinalDirection::East => (0, 1),
            CardinalDirection::South => (1, 0),
            CardinalDirection::West => (0, -1),
        }
    }

    pub const fn turned(self, turn: Turn) -> Self {
        match turn {
            Turn::Left => Self::from_index(self.index() + 3),
            Turn::Right => Self::from_index(self.index() + 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Left,
    Right,
}

/// Validates and applies turns and moves against a shared board.
#[derive(Clone, Copy, Debug)]
pub struct MovementValidator<'a> {
    board: &'a Board,
    move_cost: u32,
}

impl<'a> MovementValidator<'a> {
    pub const DEFAULT_MOVE_COST: u32 = 1;

    pub fn new(board: &'a Board, move_cost: u32) -> Self {
        Self { board, move_cost }
    }

    pub fn move_cost(&self) -> u32 {
        self.move_cost
    }

    /// Rotates the participant a quarter turn. Always succeeds and costs nothing.
    pub fn turn(&self, state: &mut ExplorationState, turn: Turn) -> CardinalDirection {
        state.facing = state.facing.turned(turn);
        state.facing
    }

    /// Destination of a one-cell step, if the board allows it.
    pub fn validate(
        &self,
        state: &ExplorationState,
        direction: CardinalDirection,
    ) -> Result<Position, MoveError> {
        if !state.is_placed() {
            return Err(MoveError::NotPlaced);
        }

        let destination = state.position.offset(direction);
        if !self.board.contains(destination) {
            return Err(MoveError::OutOfBounds { destination });
        }
        if !self.board.is_traversable(destination) {
            return Err(MoveError::Blocked { destination });
        }

        Ok(destination)
    }

    /// Steps one cell along `direction`, updating exploration and energy.
    ///
    /// On failure nothing changes: position, exploration and energy are left
    /// as they were.
    pub fn try_move(
        &self,
        state: &mut ExplorationState,
        energy: &mut ResourceMeter,
        direction: CardinalDirection,
    ) -> Result<Position, MoveError> {
        let destination = self.validate(state, direction)?;

        state.position = destination;
        let mut tracker = ExplorationTracker::new(self.board, state);
        tracker.mark_visited(destination);
        tracker.reveal_around(destination);
        energy.spend(self.move_cost);

        Ok(destination)
    }

    /// Boolean form of [`Self::try_move`] for input handlers.
    pub fn step(
        &self,
        state: &mut ExplorationState,
        energy: &mut ResourceMeter,
        direction: CardinalDirection,
    ) -> bool {
        self.try_move(state, energy, direction).is_ok()
    }

    /// Steps one cell in the direction the participant is facing.
    pub fn move_forward(&self, state: &mut ExplorationState, energy: &mut ResourceMeter) -> bool {
        let facing = state.facing;
        self.step(state, energy, facing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::RoomType;

    fn corridor_board() -> Board {
        // 21x21 board with a short north-south corridor through the center.
        let mut board = Board::new(21, 21);
        for row in 8..=12 {
            board.set_room_type(Position::new(row, 10), RoomType::Corridor);
        }
        board.set_room_type(board.start(), RoomType::Start);
        board
    }

    fn placed(board: &Board) -> ExplorationState {
        let mut state = ExplorationState::for_board(board);
        ExplorationTracker::new(board, &mut state).place_at_start();
        state
    }

    #[test]
    fn turning_cycles_through_the_compass() {
        let board = corridor_board();
        let validator = MovementValidator::new(&board, 1);
        let mut state = placed(&board);

        assert_eq!(validator.turn(&mut state, Turn::Right), CardinalDirection::East);
        assert_eq!(validator.turn(&mut state, Turn::Right), CardinalDirection::South);
        assert_eq!(validator.turn(&mut state, Turn::Left), CardinalDirection::East);
        assert_eq!(validator.turn(&mut state, Turn::Left), CardinalDirection::North);
        assert_eq!(validator.turn(&mut state, Turn::Left), CardinalDirection::West);
        assert_eq!(state.position, board.start());
    }

    #[test]
    fn moving_north_from_start_visits_and_reveals() {
        let board = corridor_board();
        let validator = MovementValidator::new(&board, 1);
        let mut state = placed(&board);
        let mut energy = ResourceMeter::new(10, 10);

        assert!(validator.step(&mut state, &mut energy, CardinalDirection::North));

        let target = Position::new(9, 10);
        assert_eq!(state.position, target);
        assert!(state.visited(target));
        for dr in -1..=1 {
            for dc in -1..=1 {
                let cell = Position::new(target.row + dr, target.col + dc);
                assert_eq!(state.explored(cell), board.is_traversable(cell), "{cell}");
            }
        }
        assert_eq!(energy.current, 9);
    }

    #[test]
    fn blocked_moves_change_nothing() {
        let board = corridor_board();
        let validator = MovementValidator::new(&board, 1);
        let mut state = placed(&board);
        let mut energy = ResourceMeter::new(10, 10);
        let before = state.clone();

        for _ in 0..5 {
            let result = validator.try_move(&mut state, &mut energy, CardinalDirection::East);
            assert_eq!(
                result,
                Err(MoveError::Blocked {
                    destination: Position::new(10, 11)
                })
            );
        }
        assert_eq!(state, before);
        assert_eq!(energy.current, 10);
    }

    #[test]
    fn board_edge_is_out_of_bounds() {
        let mut board = Board::new(3, 3);
        board.set_room_type(board.start(), RoomType::Start);
        board.set_room_type(Position::new(0, 1), RoomType::Plain);
        let validator = MovementValidator::new(&board, 1);
        let mut state = placed(&board);
        let mut energy = ResourceMeter::new(5, 5);

        assert!(validator.step(&mut state, &mut energy, CardinalDirection::North));
        let err = validator
            .try_move(&mut state, &mut energy, CardinalDirection::North)
            .unwrap_err();
        assert_eq!(
            err,
            MoveError::OutOfBounds {
                destination: Position::new(-1, 1)
            }
        );
        assert!(err.severity().is_recoverable());
        assert_eq!(state.position, Position::new(0, 1));
    }

    #[test]
    fn unplaced_participant_cannot_move() {
        let board = corridor_board();
        let validator = MovementValidator::new(&board, 1);
        let mut state = ExplorationState::for_board(&board);
        let mut energy = ResourceMeter::new(5, 5);

        let err = validator
            .try_move(&mut state, &mut energy, CardinalDirection::North)
            .unwrap_err();
        assert_eq!(err, MoveError::NotPlaced);
        assert_eq!(err.error_code(), "MOVE_NOT_PLACED");
        assert_eq!(state.position, Position::INVALID);
    }

    #[test]
    fn forward_follows_facing() {
        let board = corridor_board();
        let validator = MovementValidator::new(&board, 2);
        let mut state = placed(&board);
        let mut energy = ResourceMeter::new(3, 3);

        validator.turn(&mut state, Turn::Right);
        validator.turn(&mut state, Turn::Right);
        assert!(validator.move_forward(&mut state, &mut energy));
        assert_eq!(state.position, Position::new(11, 10));
        assert!(validator.move_forward(&mut state, &mut energy));
        // Energy saturates instead of refusing the move.
        assert_eq!(energy.current, 0);
    }
}
