//! Fluent builder for spawning a flock.
//!
//! # Usage
//!
//! ```rust
//! use flock_agent::FlockBuilder;
//! use glam::Vec3;
//!
//! let buffer = FlockBuilder::new(1_024, /*seed=*/ 42)
//!     .center(Vec3::new(0.0, 20.0, 0.0))
//!     .spawn_radius(10.0)
//!     .frame_count(16.0)
//!     .build();
//!
//! assert_eq!(buffer.len(), 1_024);
//! ```

use flock_core::SimRng;
use glam::Vec3;

use crate::{Boid, BoidBuffer};

/// Upper bound (exclusive) of the spawn-time jitter seed.
const NOISE_OFFSET_RANGE: f32 = 1_000.0;

/// Fluent builder for an initial [`BoidBuffer`].
///
/// Positions are uniform inside a sphere, headings uniform on the unit
/// sphere, `noise_offset` uniform in `[0, 1000)`, `animation_frame` uniform
/// in `[0, frame_count)`.  The same `(count, seed)` always yields the same
/// flock.
pub struct FlockBuilder {
    count:        usize,
    seed:         u64,
    center:       Vec3,
    spawn_radius: f32,
    frame_count:  f32,
}

impl FlockBuilder {
    /// Create a builder for `count` agents using `seed` for all randomness.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            center:       Vec3::ZERO,
            spawn_radius: 1.0,
            frame_count:  1.0,
        }
    }

    /// Center of the spawn sphere.  Default: origin.
    pub fn center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    /// Radius of the spawn sphere.  Default: 1.0.
    pub fn spawn_radius(mut self, radius: f32) -> Self {
        self.spawn_radius = radius.max(0.0);
        self
    }

    /// Animation cycle length used to randomize the initial phase.
    /// Default: 1.0.
    pub fn frame_count(mut self, frame_count: f32) -> Self {
        self.frame_count = frame_count.max(0.0);
        self
    }

    /// Spawn the agents.
    pub fn build(self) -> BoidBuffer {
        BoidBuffer::new(self.spawn())
    }

    /// Spawn the agents as a plain `Vec`, e.g. for uploading elsewhere.
    pub fn spawn(&self) -> Vec<Boid> {
        let mut rng = SimRng::new(self.seed);
        (0..self.count)
            .map(|_| {
                let position = self.center + rng.in_unit_sphere() * self.spawn_radius;
                let velocity = rng.unit_vector();
                let noise_offset = rng.gen_range(0.0..NOISE_OFFSET_RANGE);
                let animation_frame = if self.frame_count > 0.0 {
                    rng.gen_range(0.0..self.frame_count)
                } else {
                    0.0
                };
                Boid::new(position, velocity, noise_offset, animation_frame)
            })
            .collect()
    }
}
