use std::fmt;

use crate::movement::CardinalDirection;

/// Discrete grid position expressed as `(row, col)` cell coordinates.
///
/// Coordinates are signed so that a step off the edge of the board is still a
/// representable value; bounds are checked by [`crate::Board::contains`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Placeholder for a participant that has not been placed on a board yet.
    pub const INVALID: Self = Self { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn is_invalid(self) -> bool {
        self.row == Self::INVALID.row && self.col == Self::INVALID.col
    }

    /// Position one cell away along `direction`.
    pub fn offset(self, direction: CardinalDirection) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// The four orthogonal neighbours, in North, East, South, West order.
    pub fn neighbors(self) -> [Position; 4] {
        CardinalDirection::ALL.map(|direction| self.offset(direction))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
