//! Force accumulation for one agent.
//!
//! [`steer`] runs the brute-force neighbor scan plus the terrain and
//! containment terms and returns every force separately in a [`Steering`].
//! Only the avoidance term is weighted at accumulation; [`Steering::blend`]
//! applies all weights, so avoidance ends up scaled by `avoidance_weight²`.

use flock_agent::Boid;
use flock_core::{AgentId, Containment, FlockParams};
use flock_terrain::{HeightSource, ground_height};
use glam::Vec3;

use crate::MIN_DISTANCE;

/// Unweighted forces acting on one agent this tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Steering {
    /// Sum of inverse-distance repulsions from neighbors.
    pub separation: Vec3,
    /// Mean neighbor heading, self counted in the divisor only.
    pub alignment:  Vec3,
    /// Unit vector toward the local centroid.
    pub cohesion:   Vec3,
    /// Upward push near the ground: the `[0, 1]` ramp already scaled by
    /// `avoidance_weight`.  [`Steering::blend`] weights it a second time.
    pub avoidance:  Vec3,
    /// Unit vector toward the anchor when outside containment, else zero.
    pub correction: Vec3,
    /// Neighbors found plus one for self.
    pub neighbor_count: u32,
}

impl Steering {
    /// Weighted sum of all forces: the target heading.
    pub fn blend(&self, params: &FlockParams) -> Vec3 {
        let mut target = self.alignment * params.alignment_weight
            + self.separation * params.separation_weight
            + self.cohesion * params.cohesion_weight
            + self.avoidance * params.avoidance_weight;
        if let Some(c) = &params.containment {
            target += self.correction * c.weight;
        }
        target
    }
}

/// Compute all forces acting on `agent` given the previous tick's snapshot.
///
/// # Panics
/// Panics if `agent` is out of range for `snapshot`.
pub fn steer<S: HeightSource + ?Sized>(
    agent:    AgentId,
    snapshot: &[Boid],
    params:   &FlockParams,
    terrain:  &S,
) -> Steering {
    let me = snapshot[agent.index()];
    let position = me.position;

    // ── Neighbor scan ─────────────────────────────────────────────────────
    let inv_radius = 1.0 / params.neighbor_radius;
    let mut separation = Vec3::ZERO;
    let mut alignment = Vec3::ZERO;
    let mut neighbor_positions = Vec3::ZERO;
    let mut neighbor_count: u32 = 1;

    for (j, other) in snapshot.iter().enumerate() {
        if j == agent.index() {
            continue;
        }
        let offset = position - other.position;
        let dist = offset.length().max(MIN_DISTANCE);
        if dist < params.neighbor_radius {
            separation += offset * (1.0 / dist - inv_radius);
            alignment += other.velocity;
            neighbor_positions += other.position;
            neighbor_count += 1;
        }
    }

    let inv_count = 1.0 / neighbor_count as f32;
    alignment *= inv_count;

    // Base: centroid seeded with the anchor.  Extended: true center of mass
    // including self.
    let centroid = if params.is_extended() {
        (position + neighbor_positions) * inv_count
    } else {
        (params.anchor + neighbor_positions) * inv_count
    };
    let cohesion = (centroid - position).normalize_or_zero();

    // ── Terrain ───────────────────────────────────────────────────────────
    let ground = ground_height(terrain, &params.terrain, position);
    let avoidance =
        ground_avoidance(position, ground, params.avoidance_distance) * params.avoidance_weight;

    // ── Containment ───────────────────────────────────────────────────────
    let correction = match &params.containment {
        Some(c) => containment_correction(position, c, params.anchor),
        None => Vec3::ZERO,
    };

    Steering {
        separation,
        alignment,
        cohesion,
        avoidance,
        correction,
        neighbor_count,
    }
}

/// Upward force for an agent flying below `avoidance_distance` above ground.
///
/// Linear ramp: 0 at `ground + avoidance_distance`, 1 at ground level.
#[inline]
pub fn ground_avoidance(position: Vec3, ground: f32, avoidance_distance: f32) -> Vec3 {
    let ground_dist = position.y - ground;
    if ground_dist < avoidance_distance {
        Vec3::Y * ((avoidance_distance - ground_dist) / avoidance_distance)
    } else {
        Vec3::ZERO
    }
}

/// Unit vector toward `anchor` if `position` is outside the sphere, else zero.
#[inline]
pub fn containment_correction(position: Vec3, containment: &Containment, anchor: Vec3) -> Vec3 {
    if containment.contains(position) {
        Vec3::ZERO
    } else {
        (anchor - position).normalize_or_zero()
    }
}
