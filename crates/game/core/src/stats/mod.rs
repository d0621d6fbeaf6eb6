//! Participant resource pools.
mod resources;

pub use resources::ResourceMeter;
