//! Frontier-growth dungeon generator.
//!
//! Growth starts from the start cell at the board center and adds one
//! corridor cell at a time next to a random frontier cell. A cell is never
//! placed if it would fill a 2×2 block, which keeps the layout corridor-like.
//! The invariant holds after every [`DungeonBuilder::step`].
use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::{Board, Position, RoomType};

/// Outcome of a single growth step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthStep {
    /// A new corridor cell was placed.
    Placed(Position),
    /// The inspected frontier cell had no valid neighbour and was dropped.
    DeadEnd(Position),
    /// Target reached, safety cap reached, or frontier exhausted.
    Finished,
}

/// Counters describing how a build ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildReport {
    pub target: u32,
    pub placed: u32,
    /// `width * height / 2`; growth never exceeds it.
    pub cap: u32,
}

impl BuildReport {
    /// True when growth stopped before reaching the requested room count.
    pub fn is_under_target(&self) -> bool {
        self.placed < self.target
    }

    /// True when the frontier emptied before the target or cap was reached.
    pub fn starved(&self) -> bool {
        self.placed < self.target && self.placed < self.cap
    }
}

#[derive(Clone, Debug)]
pub struct BuildOutcome {
    pub board: Board,
    pub report: BuildReport,
}

/// Incremental generator. Use [`DungeonBuilder::build`] for the one-shot form.
#[derive(Clone, Debug)]
pub struct DungeonBuilder {
    board: Board,
    frontier: Vec<Position>,
    target: u32,
    placed: u32,
    cap: u32,
}

impl DungeonBuilder {
    /// Prepares an empty board with the start cell seeded.
    ///
    /// Zero dimensions are clamped to one cell.
    pub fn new(width: u32, height: u32, target_room_count: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut board = Board::new(width, height);
        let start = board.start();
        board.set_room_type(start, RoomType::Start);

        let cap = ((width as u64 * height as u64) / 2).min(u32::MAX as u64) as u32;

        Self {
            board,
            frontier: vec![start],
            target: target_room_count,
            placed: 0,
            cap,
        }
    }

    /// Generates a complete board in one call.
    pub fn build<R>(width: u32, height: u32, target_room_count: u32, rng: &mut R) -> Board
    where
        R: Rng + ?Sized,
    {
        Self::new(width, height, target_room_count).run(rng).board
    }

    /// Runs growth to completion and reports how it ended.
    pub fn run<R>(mut self, rng: &mut R) -> BuildOutcome
    where
        R: Rng + ?Sized,
    {
        while self.step(rng) != GrowthStep::Finished {}
        self.finish()
    }

    pub fn is_finished(&self) -> bool {
        self.placed >= self.target || self.placed >= self.cap || self.frontier.is_empty()
    }

    /// Performs one iteration of the growth loop.
    pub fn step<R>(&mut self, rng: &mut R) -> GrowthStep
    where
        R: Rng + ?Sized,
    {
        if self.is_finished() {
            return GrowthStep::Finished;
        }

        self.frontier.shuffle(rng);
        let current = self.frontier[0];

        let candidates: Vec<Position> = current
            .neighbors()
            .into_iter()
            .filter(|&next| self.can_place(next))
            .collect();

        match candidates.choose(rng) {
            Some(&next) => {
                self.board.set_room_type(next, RoomType::Corridor);
                self.frontier.push(next);
                self.placed += 1;
                GrowthStep::Placed(next)
            }
            None => {
                self.frontier.swap_remove(0);
                GrowthStep::DeadEnd(current)
            }
        }
    }

    fn can_place(&self, position: Position) -> bool {
        self.board.contains(position)
            && self.board.room_type(position) == RoomType::EmptySpace
            && !self.board.completes_square(position)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn frontier(&self) -> &[Position] {
        &self.frontier
    }

    pub fn report(&self) -> BuildReport {
        BuildReport {
            target: self.target,
            placed: self.placed,
            cap: self.cap,
        }
    }

    pub fn finish(self) -> BuildOutcome {
        let report = self.report();
        BuildOutcome {
            board: self.board,
            report,
        }
    }
}
