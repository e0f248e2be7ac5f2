//! Aggregate flock statistics for logging and output summaries.

use glam::Vec3;

use crate::Boid;

/// Summary of a flock snapshot.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockStats {
    pub count:           usize,
    /// Mean position.
    pub centroid:        Vec3,
    /// Mean heading (not normalized).
    pub mean_velocity:   Vec3,
    /// Root-mean-square distance from the centroid.
    pub spread:          f32,
    /// Root-mean-square deviation of velocities from `mean_velocity`.
    pub velocity_spread: f32,
}

impl FlockStats {
    /// Compute statistics over `boids`.  An empty slice yields `Default`.
    pub fn from_boids(boids: &[Boid]) -> Self {
        if boids.is_empty() {
            return Self::default();
        }
        let inv_n = 1.0 / boids.len() as f32;

        let (pos_sum, vel_sum) = boids
            .iter()
            .fold((Vec3::ZERO, Vec3::ZERO), |(p, v), b| (p + b.position, v + b.velocity));
        let centroid = pos_sum * inv_n;
        let mean_velocity = vel_sum * inv_n;

        let (pos_var, vel_var) = boids.iter().fold((0.0_f32, 0.0_f32), |(pv, vv), b| {
            (
                pv + b.position.distance_squared(centroid),
                vv + b.velocity.distance_squared(mean_velocity),
            )
        });

        Self {
            count: boids.len(),
            centroid,
            mean_velocity,
            spread: (pos_var * inv_n).sqrt(),
            velocity_spread: (vel_var * inv_n).sqrt(),
        }
    }
}
