//! Deterministic simulation-level RNG.
//!
//! The update kernel itself is fully deterministic; randomness is only used
//! when a flock is spawned (positions, headings, jitter seeds, animation
//! phase).  `SimRng` wraps a `SmallRng` seeded from `SimConfig::seed` so the
//! same seed always yields the same initial flock.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for spawn-time randomness.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform point inside the unit sphere (rejection sampling).
    pub fn in_unit_sphere(&mut self) -> glam::Vec3 {
        loop {
            let p = glam::Vec3::new(
                self.0.gen_range(-1.0..=1.0),
                self.0.gen_range(-1.0..=1.0),
                self.0.gen_range(-1.0..=1.0),
            );
            if p.length_squared() <= 1.0 {
                return p;
            }
        }
    }

    /// Uniform direction on the unit sphere.
    pub fn unit_vector(&mut self) -> glam::Vec3 {
        loop {
            let p = self.in_unit_sphere();
            let len_sq = p.length_squared();
            if len_sq > 1.0e-6 {
                return p / len_sq.sqrt();
            }
        }
    }
}
