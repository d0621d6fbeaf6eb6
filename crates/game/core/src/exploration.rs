//! Per-participant fog of war.
//!
//! Each participant owns one [`ExplorationState`]. The shared [`Board`] is
//! only ever read; an [`ExplorationTracker`] pairs the two for the duration
//! of an update.
use crate::board::{Board, Position};
use crate::movement::CardinalDirection;

/// Visited/explored overlay plus the pose of one participant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplorationState {
    width: u32,
    height: u32,
    visited: Vec<bool>,
    explored: Vec<bool>,
    pub position: Position,
    pub facing: CardinalDirection,
}

impl ExplorationState {
    /// Fresh state sized for `board`: nothing seen, not placed, facing north.
    pub fn for_board(board: &Board) -> Self {
        Self::new(board.width(), board.height())
    }

    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            visited: vec![false; len],
            explored: vec![false; len],
            position: Position::INVALID,
            facing: CardinalDirection::North,
        }
    }

    pub fn is_placed(&self) -> bool {
        !self.position.is_invalid()
    }

    fn index(&self, position: Position) -> Option<usize> {
        if position.row < 0
            || position.col < 0
            || position.row >= self.height as i32
            || position.col >= self.width as i32
        {
            return None;
        }
        Some(position.row as usize * self.width as usize + position.col as usize)
    }

    pub fn visited(&self, position: Position) -> bool {
        self.index(position).is_some_and(|i| self.visited[i])
    }

    pub fn explored(&self, position: Position) -> bool {
        self.index(position).is_some_and(|i| self.explored[i])
    }

    /// Whether a renderer may draw `position`: explored, or the debug override.
    pub fn is_visible(&self, position: Position, show_full_map: bool) -> bool {
        show_full_map || self.explored(position)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    pub fn explored_count(&self) -> usize {
        self.explored.iter().filter(|&&e| e).count()
    }
}

/// Borrowing view that applies exploration updates for one participant.
pub struct ExplorationTracker<'a> {
    board: &'a Board,
    state: &'a mut ExplorationState,
}

impl<'a> ExplorationTracker<'a> {
    pub fn new(board: &'a Board, state: &'a mut ExplorationState) -> Self {
        debug_assert_eq!(
            (board.width(), board.height()),
            (state.width, state.height),
            "exploration state sized for a different board"
        );
        Self { board, state }
    }

    /// Puts the participant on the start cell and reveals its surroundings.
    pub fn place_at_start(&mut self) -> Position {
        let start = self.board.start();
        self.state.position = start;
        self.mark_visited(start);
        self.reveal_around(start);
        start
    }

    /// Marks every traversable cell of the 3×3 block around `position` explored.
    ///
    /// Never clears a flag.
    pub fn reveal_around(&mut self, position: Position) {
        for dr in -1..=1 {
            for dc in -1..=1 {
                let cell = Position::new(position.row + dr, position.col + dc);
                if !self.board.is_traversable(cell) {
                    continue;
                }
                if let Some(index) = self.state.index(cell) {
                    self.state.explored[index] = true;
                }
            }
        }
    }

    /// Marks exactly `position` as visited, which also makes it explored.
    pub fn mark_visited(&mut self, position: Position) {
        if let Some(index) = self.state.index(position) {
            self.state.visited[index] = true;
            self.state.explored[index] = true;
        }
    }

    /// Whether a renderer may draw `position` for this participant.
    pub fn is_visible(&self, position: Position, show_full_map: bool) -> bool {
        self.state.is_visible(position, show_full_map)
    }

    pub fn state(&self) -> &ExplorationState {
        &*self.state
    }
}
