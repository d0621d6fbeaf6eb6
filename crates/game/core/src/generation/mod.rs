//! Dungeon generation pipeline: grow a layout, then classify its rooms.
mod builder;
mod events;
mod quota;

pub use builder::{BuildOutcome, BuildReport, DungeonBuilder, GrowthStep};
pub use events::{AssignmentSummary, EventAssigner};
pub use quota::{Quota, QuotaRule, quotas_from_settings};
