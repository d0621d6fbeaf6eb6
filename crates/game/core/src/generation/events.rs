//! Classification of generated corridors into gameplay rooms.
use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;

use super::Quota;
use crate::board::{Board, Position, RoomType};

/// Relabels corridor cells into special rooms under quotas.
///
/// Quotas are served in the order given from a pool shuffled once. Whatever
/// is still a corridor afterwards becomes an enemy room with probability
/// `enemy_percent` and a plain room otherwise. The start cell is never part
/// of the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventAssigner {
    enemy_percent: u32,
}

impl EventAssigner {
    pub const DEFAULT_ENEMY_PERCENT: u32 = 60;

    /// `enemy_percent` is clamped to 100.
    pub fn new(enemy_percent: u32) -> Self {
        Self {
            enemy_percent: enemy_percent.min(100),
        }
    }

    pub fn enemy_percent(&self) -> u32 {
        self.enemy_percent
    }

    /// Number of cells eligible for classification on `board`.
    pub fn available(board: &Board) -> usize {
        Self::pool(board).len()
    }

    fn pool(board: &Board) -> Vec<Position> {
        let start = board.start();
        board
            .rooms()
            .filter(|(position, room)| *position != start && room.room_type == RoomType::Corridor)
            .map(|(position, _)| position)
            .collect()
    }

    /// Classifies every corridor of `board` in place.
    pub fn assign<R>(&self, board: &mut Board, rng: &mut R, quotas: &[Quota]) -> AssignmentSummary
    where
        R: Rng + ?Sized,
    {
        let mut pool = Self::pool(board);
        pool.shuffle(rng);

        let mut summary = AssignmentSummary::default();
        for quota in quotas {
            let mut granted = 0;
            while granted < quota.count {
                let Some(position) = pool.pop() else {
                    break;
                };
                if board.room_type(position) != RoomType::Corridor {
                    continue;
                }
                board.set_room_type(position, quota.room_type);
                granted += 1;
            }
            summary.record(quota.room_type, granted);
        }

        // Fallback pass over whatever is still a corridor, in board order.
        let start = board.start();
        let remaining: Vec<Position> = board
            .rooms()
            .filter(|(position, room)| *position != start && room.room_type == RoomType::Corridor)
            .map(|(position, _)| position)
            .collect();
        for position in remaining {
            let room_type = if rng.gen_range(0..100) < self.enemy_percent {
                RoomType::Enemy
            } else {
                RoomType::Plain
            };
            board.set_room_type(position, room_type);
            summary.record(room_type, 1);
        }

        board.set_room_type(start, RoomType::Start);
        summary
    }
}

impl Default for EventAssigner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ENEMY_PERCENT)
    }
}

/// Per-type counts produced by one [`EventAssigner::assign`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssignmentSummary {
    counts: BTreeMap<RoomType, usize>,
}

impl AssignmentSummary {
    fn record(&mut self, room_type: RoomType, count: usize) {
        *self.counts.entry(room_type).or_default() += count;
    }

    pub fn count(&self, room_type: RoomType) -> usize {
        self.counts.get(&room_type).copied().unwrap_or(0)
    }

    /// Rooms handed out under quotas (everything except enemy/plain fill).
    pub fn special_total(&self) -> usize {
        self.counts
            .iter()
            .filter(|(room_type, _)| !matches!(room_type, RoomType::Enemy | RoomType::Plain))
            .map(|(_, count)| count)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomType, usize)> + '_ {
        self.counts.iter().map(|(room_type, count)| (*room_type, *count))
    }
}
