//! The shared dungeon grid.
//!
//! A [`Board`] is written only while a dungeon is being generated and
//! classified. Afterwards it is handed out by shared reference to every
//! participant's tracker.
mod position;
mod room;

pub use position::Position;
pub use room::{ItemId, Room, RoomType};

/// Fixed-size rectangular grid of [`Room`]s stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    width: u32,
    height: u32,
    rooms: Vec<Room>,
}

impl Board {
    /// Creates a board filled with [`RoomType::EmptySpace`].
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            rooms: vec![Room::default(); len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Center cell `(height / 2, width / 2)`, where the start room lives.
    pub fn start(&self) -> Position {
        Position::new((self.height / 2) as i32, (self.width / 2) as i32)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && position.row < self.height as i32
            && position.col < self.width as i32
    }

    pub(crate) fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.row as usize * self.width as usize + position.col as usize)
    }

    pub fn room(&self, position: Position) -> Option<&Room> {
        self.index(position).map(|index| &self.rooms[index])
    }

    pub fn room_mut(&mut self, position: Position) -> Option<&mut Room> {
        self.index(position).map(move |index| &mut self.rooms[index])
    }

    /// Room type at `position`; out-of-bounds cells read as empty space.
    pub fn room_type(&self, position: Position) -> RoomType {
        self.room(position)
            .map(|room| room.room_type)
            .unwrap_or(RoomType::EmptySpace)
    }

    pub fn is_traversable(&self, position: Position) -> bool {
        self.room_type(position).is_traversable()
    }

    /// Relabels an in-bounds cell. Returns false for positions off the board.
    pub fn set_room_type(&mut self, position: Position, room_type: RoomType) -> bool {
        match self.room_mut(position) {
            Some(room) => {
                room.room_type = room_type;
                true
            }
            None => false,
        }
    }

    /// Every cell position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    pub fn rooms(&self) -> impl Iterator<Item = (Position, &Room)> + '_ {
        self.positions().zip(self.rooms.iter())
    }

    pub fn count(&self, room_type: RoomType) -> usize {
        self.rooms
            .iter()
            .filter(|room| room.room_type == room_type)
            .count()
    }

    pub fn traversable_count(&self) -> usize {
        self.rooms.iter().filter(|room| room.is_traversable()).count()
    }

    /// Returns true if making `position` traversable would fill a 2×2 block.
    ///
    /// Checks the four 2×2 windows that contain `position`; a window completes
    /// only when its other three cells are already traversable.
    pub fn completes_square(&self, position: Position) -> bool {
        const WINDOWS: [(i32, i32); 4] = [(-1, -1), (-1, 0), (0, -1), (0, 0)];

        WINDOWS.iter().any(|&(dr, dc)| {
            let corner = Position::new(position.row + dr, position.col + dc);
            let cells = [
                corner,
                Position::new(corner.row, corner.col + 1),
                Position::new(corner.row + 1, corner.col),
                Position::new(corner.row + 1, corner.col + 1),
            ];
            cells
                .iter()
                .filter(|&&cell| cell != position)
                .all(|&cell| self.is_traversable(cell))
        })
    }

    /// Returns true if any 2×2 block of the board is fully traversable.
    pub fn has_open_square(&self) -> bool {
        if self.width < 2 || self.height < 2 {
            return false;
        }
        self.positions()
            .filter(|p| p.row + 1 < self.height as i32 && p.col + 1 < self.width as i32)
            .any(|p| {
                self.is_traversable(p)
                    && self.is_traversable(Position::new(p.row, p.col + 1))
                    && self.is_traversable(Position::new(p.row + 1, p.col))
                    && self.is_traversable(Position::new(p.row + 1, p.col + 1))
            })
    }

    /// Returns true if every traversable cell is reachable from the start cell
    /// through orthogonal steps over traversable cells.
    pub fn is_connected(&self) -> bool {
        let start = self.start();
        if !self.is_traversable(start) {
            return self.traversable_count() == 0;
        }

        let mut seen = vec![false; self.rooms.len()];
        let mut stack = vec![start];
        let mut reached = 0usize;
        while let Some(position) = stack.pop() {
            let Some(index) = self.index(position) else {
                continue;
            };
            if seen[index] || !self.rooms[index].is_traversable() {
                continue;
            }
            seen[index] = true;
            reached += 1;
            stack.extend(position.neighbors());
        }

        reached == self.traversable_count()
    }
}
