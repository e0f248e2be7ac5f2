//! Plain data row types written by output backends.

use flock_agent::{Boid, FlockStats};
use flock_core::Tick;

/// One boid's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidSnapshotRow {
    pub agent_id:        u32,
    pub tick:            u64,
    pub position:        [f32; 3],
    pub velocity:        [f32; 3],
    pub animation_frame: f32,
}

impl BoidSnapshotRow {
    pub fn new(agent_id: u32, tick: Tick, boid: &Boid) -> Self {
        Self {
            agent_id,
            tick:            tick.0,
            position:        boid.position.to_array(),
            velocity:        boid.velocity.to_array(),
            animation_frame: boid.animation_frame,
        }
    }
}

/// Flock-level summary at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:      u64,
    /// Simulation seconds the tick was computed at.
    pub time:      f32,
    pub agents:    u64,
    pub centroid:  [f32; 3],
    pub spread:    f32,
    /// Length of the mean velocity; 1.0 means perfectly aligned unit
    /// headings.
    pub alignment: f32,
}

impl TickSummaryRow {
    pub fn new(tick: Tick, time: f32, stats: &FlockStats) -> Self {
        Self {
            tick:      tick.0,
            time,
            agents:    stats.count as u64,
            centroid:  stats.centroid.to_array(),
            spread:    stats.spread,
            alignment: stats.mean_velocity.length(),
        }
    }
}
